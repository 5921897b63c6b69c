//! sRGB transfer curve.
//!
//! The sRGB standard combines a linear segment near black with a power
//! curve of exponent 2.4 for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear-side segment threshold for [`encode`].
pub const LINEAR_THRESHOLD: f32 = 0.0031308;

/// Encoded-side segment threshold for [`decode`].
pub const ENCODED_THRESHOLD: f32 = 0.04045;

/// Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L < 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::encode;
///
/// let v = encode(0.214);
/// assert!((v - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l < LINEAR_THRESHOLD {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V < 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    if v < ENCODED_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
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
        // The two segments meet at the thresholds
        let below = encode(LINEAR_THRESHOLD - 1e-6);
        let above = encode(LINEAR_THRESHOLD + 1e-6);
        assert!((below - above).abs() < 1e-4, "{below} vs {above}");

        let below = decode(ENCODED_THRESHOLD - 1e-6);
        let above = decode(ENCODED_THRESHOLD + 1e-6);
        assert!((below - above).abs() < 1e-4, "{below} vs {above}");
    }

    #[test]
    fn test_midpoint() {
        // sRGB 0.5 should be approximately 0.214 linear
        let linear = decode(0.5);
        assert!((linear - 0.214).abs() < 0.01);
    }
}
