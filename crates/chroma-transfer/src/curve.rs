//! Curve-tag dispatch.
//!
//! Maps a [`GammaCurve`] tag plus an exponent onto the concrete transfer
//! functions in this crate. The exponent is only meaningful for
//! [`GammaCurve::Standard`]; the piecewise curves carry their exponents
//! in the standard.

use chroma_core::GammaCurve;

use crate::{gamma, prophoto, srgb};

/// Encodes a linear value through the given curve.
///
/// # Example
///
/// ```rust
/// use chroma_core::GammaCurve;
/// use chroma_transfer::curve::encode;
///
/// let v = encode(GammaCurve::Srgb, 2.4, 0.214);
/// assert!((v - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(curve: GammaCurve, gamma: f32, c: f32) -> f32 {
    match curve {
        GammaCurve::Standard => gamma::encode(c, gamma),
        GammaCurve::Srgb => srgb::encode(c),
        GammaCurve::ProPhoto => prophoto::encode(c),
    }
}

/// Decodes an encoded value through the given curve.
#[inline]
pub fn decode(curve: GammaCurve, gamma: f32, c: f32) -> f32 {
    match curve {
        GammaCurve::Standard => gamma::decode(c, gamma),
        GammaCurve::Srgb => srgb::decode(c),
        GammaCurve::ProPhoto => prophoto::decode(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_modules() {
        let c = 0.37;
        assert_eq!(encode(GammaCurve::Standard, 2.2, c), gamma::encode(c, 2.2));
        assert_eq!(encode(GammaCurve::Srgb, 2.4, c), srgb::encode(c));
        assert_eq!(encode(GammaCurve::ProPhoto, 1.8, c), prophoto::encode(c));
        assert_eq!(decode(GammaCurve::Standard, 2.2, c), gamma::decode(c, 2.2));
        assert_eq!(decode(GammaCurve::Srgb, 2.4, c), srgb::decode(c));
        assert_eq!(decode(GammaCurve::ProPhoto, 1.8, c), prophoto::decode(c));
    }

    #[test]
    fn test_roundtrip_all_curves() {
        for curve in [GammaCurve::Standard, GammaCurve::Srgb, GammaCurve::ProPhoto] {
            for i in 0..=50 {
                let c = i as f32 / 50.0;
                let back = decode(curve, 2.2, encode(curve, 2.2, c));
                assert!((c - back).abs() < 1e-5, "{curve:?}: c={c}, back={back}");
            }
        }
    }
}
