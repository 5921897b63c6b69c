//! Standard profile and gamma curve identifiers.
//!
//! These tags name the industry profiles the engine can recognize and the
//! transfer curve shapes it can apply. They are deliberately lightweight:
//! the chromaticity constants behind each profile live in
//! `chroma-primaries`, and the curve math lives in `chroma-transfer`.
//!
//! # Recognition
//!
//! A [`StandardProfile`] is never an authoritative stored label. The engine
//! re-derives it from chromaticities by tolerance matching, and the tag
//! may be downgraded to [`Custom`](StandardProfile::Custom) when the gamma
//! curve does not match the profile's canonical curve.

/// Canonical sRGB gamma exponent.
pub const GAMMA_EXPONENT_SRGB: f32 = 2.4;

/// Canonical Adobe RGB gamma exponent (563/256, per the Adobe RGB spec).
pub const GAMMA_EXPONENT_ADOBE: f32 = 2.199_218_75;

/// Canonical ProPhoto RGB gamma exponent.
pub const GAMMA_EXPONENT_PRO_PHOTO: f32 = 1.8;

/// Tags for the standard color profiles the engine recognizes.
///
/// The first two variants are recognition outcomes rather than profiles:
/// [`Invalid`](Self::Invalid) means at least one chromaticity coordinate
/// was zero (uninitialized), and [`Custom`](Self::Custom) means the
/// chromaticities are usable but match no known profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardProfile {
    /// One of the chromaticities was not initialized (zero coordinate).
    #[default]
    Invalid,
    /// Valid chromaticities with no recognizable standard profile.
    Custom,
    /// sRGB chromaticities with linear gamma.
    Linear,
    /// sRGB with D65 illuminant.
    Srgb,
    /// Adobe RGB (1998) with D50 illuminant.
    AdobeRgbD50,
    /// Adobe RGB (1998) with D65 illuminant.
    AdobeRgbD65,
    /// ProPhoto RGB with D50 illuminant.
    ProPhoto,
    /// Radiance HDR format with E illuminant.
    Radiance,
}

impl StandardProfile {
    /// Human-readable profile name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Custom => "Custom",
            Self::Linear => "Linear sRGB",
            Self::Srgb => "sRGB",
            Self::AdobeRgbD50 => "Adobe RGB (D50)",
            Self::AdobeRgbD65 => "Adobe RGB (D65)",
            Self::ProPhoto => "ProPhoto RGB",
            Self::Radiance => "Radiance",
        }
    }

    /// The canonical gamma curve and exponent for a named profile.
    ///
    /// Returns `None` for [`Invalid`](Self::Invalid) and
    /// [`Custom`](Self::Custom), which carry no canonical gamma.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::{GammaCurve, StandardProfile};
    ///
    /// let (curve, gamma) = StandardProfile::Srgb.canonical_gamma().unwrap();
    /// assert_eq!(curve, GammaCurve::Srgb);
    /// assert_eq!(gamma, 2.4);
    /// ```
    pub const fn canonical_gamma(self) -> Option<(GammaCurve, f32)> {
        match self {
            Self::Linear => Some((GammaCurve::Standard, 1.0)),
            Self::Srgb => Some((GammaCurve::Srgb, GAMMA_EXPONENT_SRGB)),
            Self::AdobeRgbD50 | Self::AdobeRgbD65 => {
                Some((GammaCurve::Standard, GAMMA_EXPONENT_ADOBE))
            }
            Self::ProPhoto => Some((GammaCurve::ProPhoto, GAMMA_EXPONENT_PRO_PHOTO)),
            Self::Radiance => Some((GammaCurve::Standard, 1.0)),
            Self::Invalid | Self::Custom => None,
        }
    }

    /// Returns `true` for the tags that name an actual standard profile.
    #[inline]
    pub const fn is_named(self) -> bool {
        !matches!(self, Self::Invalid | Self::Custom)
    }
}

/// The supported gamma curve shapes.
///
/// Each shape pairs an encode (linear to encoded) and a decode (encoded to
/// linear) function; the implementations live in `chroma-transfer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GammaCurve {
    /// Plain power law using a single exponent, no linear toe.
    ///
    /// An exponent of 1.0 makes this curve a no-op.
    #[default]
    Standard,
    /// sRGB curve: linear toe below 0.0031308, power segment above.
    Srgb,
    /// ProPhoto curve: linear toe below 1/512, power segment above.
    ProPhoto,
}

impl GammaCurve {
    /// Human-readable curve name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Srgb => "sRGB",
            Self::ProPhoto => "ProPhoto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!(StandardProfile::Srgb.name(), "sRGB");
        assert_eq!(StandardProfile::Radiance.name(), "Radiance");
        assert_eq!(GammaCurve::ProPhoto.name(), "ProPhoto");
    }

    #[test]
    fn test_canonical_gamma() {
        assert_eq!(
            StandardProfile::Srgb.canonical_gamma(),
            Some((GammaCurve::Srgb, 2.4))
        );
        assert_eq!(
            StandardProfile::AdobeRgbD65.canonical_gamma(),
            Some((GammaCurve::Standard, GAMMA_EXPONENT_ADOBE))
        );
        assert_eq!(
            StandardProfile::Radiance.canonical_gamma(),
            Some((GammaCurve::Standard, 1.0))
        );
        assert_eq!(StandardProfile::Custom.canonical_gamma(), None);
        assert_eq!(StandardProfile::Invalid.canonical_gamma(), None);
    }

    #[test]
    fn test_is_named() {
        assert!(StandardProfile::Srgb.is_named());
        assert!(StandardProfile::Linear.is_named());
        assert!(!StandardProfile::Custom.is_named());
        assert!(!StandardProfile::Invalid.is_named());
    }

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(StandardProfile::default(), StandardProfile::Invalid);
        assert_eq!(GammaCurve::default(), GammaCurve::Standard);
    }
}
