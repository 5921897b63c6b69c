//! ProPhoto RGB (ROMM) transfer curve.
//!
//! Same two-segment structure as sRGB but with ProPhoto's constants: a
//! linear toe of slope 16 below 1/512, and a power segment of exponent
//! 1.8 above.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ISO 22028-2 (ROMM RGB)

/// Linear-side segment threshold for [`encode`] (1/512).
pub const LINEAR_THRESHOLD: f32 = 1.0 / 512.0;

/// Encoded-side segment threshold for [`decode`] (1/32).
pub const ENCODED_THRESHOLD: f32 = 1.0 / 32.0;

/// Encodes linear light to ProPhoto RGB.
///
/// # Formula
///
/// ```text
/// if L < 1/512:
///     V = L * 16
/// else:
///     V = L^(1/1.8)
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l < LINEAR_THRESHOLD {
        l * 16.0
    } else {
        l.powf(1.0 / 1.8)
    }
}

/// Decodes ProPhoto RGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V < 1/32:
///     L = V / 16
/// else:
///     L = V^1.8
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    if v < ENCODED_THRESHOLD {
        v / 16.0
    } else {
        v.powf(1.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = encode(decode(v));
            assert!((v - back).abs() < 1e-5, "v={v}, back={back}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(decode(0.0), 0.0);
        assert!((decode(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(encode(0.0), 0.0);
        assert!((encode(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_boundary_continuity() {
        // 16 * (1/512) == (1/512)^(1/1.8) == 1/32, exactly at the knee
        let below = encode(LINEAR_THRESHOLD - 1e-7);
        let above = encode(LINEAR_THRESHOLD + 1e-7);
        assert!((below - above).abs() < 1e-4, "{below} vs {above}");
    }

    #[test]
    fn test_toe_is_linear() {
        assert!((decode(0.016) - 0.001).abs() < 1e-6);
        assert!((encode(0.001) - 0.016).abs() < 1e-6);
    }
}
