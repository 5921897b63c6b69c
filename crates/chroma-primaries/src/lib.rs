//! # chroma-primaries
//!
//! Chromaticities, white points, standard-profile recognition, and
//! RGB-XYZ matrix generation.
//!
//! This crate is the mathematical foundation of the profile engine: it
//! defines color spaces by the CIE xy coordinates of their primaries and
//! white point, recognizes the standard profiles within tolerance, and
//! derives the matrices that convert between RGB and CIE XYZ.
//!
//! # What are Chromaticities?
//!
//! A chromaticity set defines the gamut of a color space. Each of the R,
//! G, B primaries and the white point is an (x, y) point on the CIE
//! chromaticity diagram; together the four points pin down the RGB-XYZ
//! transform completely.
//!
//! # Recognized Profiles
//!
//! | Profile | White | Typical Use |
//! |---------|-------|-------------|
//! | sRGB | D65 | Web, consumer displays |
//! | Adobe RGB | D65 or D50 | Print workflows |
//! | ProPhoto RGB | D50 | Photographic editing |
//! | Radiance | E | HDR `.hdr` files |
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::StandardProfile;
//! use chroma_math::Vec4;
//! use chroma_primaries::{SRGB, rgb_to_xyz_matrix};
//!
//! // Tolerance-matched recognition
//! assert_eq!(SRGB.recognize(), StandardProfile::Srgb);
//!
//! // RGB to XYZ matrix for sRGB
//! let m = rgb_to_xyz_matrix(&SRGB).unwrap();
//! let white = m * Vec4::new(1.0, 1.0, 1.0, 1.0);
//! assert!((white.y - 1.0).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Profile tags and errors
//! - [`chroma-math`] - Matrix operations
//!
//! # Used By
//!
//! - `chroma-profile` - Facade and converters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_core::{Error, Result, StandardProfile};
use chroma_math::{Mat4, Vec3};

/// Per-coordinate tolerance for standard-profile recognition.
pub const RECOGNITION_EPSILON: f32 = 1e-3;

/// RGB color space chromaticities.
///
/// Defines a color space by its three primaries and white point, all as
/// CIE xy chromaticity coordinates. A set is valid only when all eight
/// scalars are non-zero; the all-zero default represents an
/// uninitialized profile and recognizes as
/// [`StandardProfile::Invalid`].
///
/// # Example
///
/// ```rust
/// use chroma_primaries::Chromaticities;
///
/// let wide = Chromaticities {
///     r: (0.7080, 0.2920),
///     g: (0.1700, 0.7970),
///     b: (0.1310, 0.0460),
///     w: (0.3127, 0.3290),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticities {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
}

impl Chromaticities {
    /// White point as XYZ (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xyy_to_xyz(Vec3::new(self.w.0, self.w.1, 1.0))
    }

    /// Returns `true` when all eight coordinates are non-zero.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.r.0 != 0.0
            && self.r.1 != 0.0
            && self.g.0 != 0.0
            && self.g.1 != 0.0
            && self.b.0 != 0.0
            && self.b.1 != 0.0
            && self.w.0 != 0.0
            && self.w.1 != 0.0
    }

    /// Matches these chromaticities against the standard profiles.
    ///
    /// Each candidate is tried in a fixed order (sRGB, Adobe D65, Adobe
    /// D50, ProPhoto, Radiance); a candidate matches when all eight
    /// coordinates agree within [`RECOGNITION_EPSILON`]. When nothing
    /// matches the result is [`Custom`](StandardProfile::Custom) for an
    /// initialized set and [`Invalid`](StandardProfile::Invalid)
    /// otherwise.
    ///
    /// Recognition looks at chromaticities only. Whether the profile's
    /// gamma also matches the standard is the caller's concern (the
    /// facade checks it and may downgrade to `Custom`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::StandardProfile;
    /// use chroma_primaries::{Chromaticities, PRO_PHOTO};
    ///
    /// assert_eq!(PRO_PHOTO.recognize(), StandardProfile::ProPhoto);
    /// assert_eq!(Chromaticities::default().recognize(), StandardProfile::Invalid);
    /// ```
    pub fn recognize(&self) -> StandardProfile {
        if self.matches(&SRGB) {
            StandardProfile::Srgb
        } else if self.matches(&ADOBE_RGB_D65) {
            StandardProfile::AdobeRgbD65
        } else if self.matches(&ADOBE_RGB_D50) {
            StandardProfile::AdobeRgbD50
        } else if self.matches(&PRO_PHOTO) {
            StandardProfile::ProPhoto
        } else if self.matches(&RADIANCE) {
            StandardProfile::Radiance
        } else if self.is_initialized() {
            StandardProfile::Custom
        } else {
            StandardProfile::Invalid
        }
    }

    /// The canonical chromaticities for a named standard profile.
    ///
    /// Returns `None` for [`Invalid`](StandardProfile::Invalid) and
    /// [`Custom`](StandardProfile::Custom), which carry no constants.
    /// [`Linear`](StandardProfile::Linear) shares the sRGB gamut.
    pub const fn from_profile(profile: StandardProfile) -> Option<Self> {
        match profile {
            StandardProfile::Linear | StandardProfile::Srgb => Some(SRGB),
            StandardProfile::AdobeRgbD65 => Some(ADOBE_RGB_D65),
            StandardProfile::AdobeRgbD50 => Some(ADOBE_RGB_D50),
            StandardProfile::ProPhoto => Some(PRO_PHOTO),
            StandardProfile::Radiance => Some(RADIANCE),
            StandardProfile::Invalid | StandardProfile::Custom => None,
        }
    }

    fn matches(&self, other: &Self) -> bool {
        fn close(a: (f32, f32), b: (f32, f32)) -> bool {
            (a.0 - b.0).abs() < RECOGNITION_EPSILON && (a.1 - b.1).abs() < RECOGNITION_EPSILON
        }
        close(self.r, other.r)
            && close(self.g, other.g)
            && close(self.b, other.b)
            && close(self.w, other.w)
    }
}

// ============================================================================
// Standard Illuminants
// ============================================================================

/// Illuminant A chromaticity (incandescent, ~2856K).
pub const ILLUMINANT_A: (f32, f32) = (0.44757, 0.40745);

/// Illuminant D50 chromaticity (~5000K).
pub const ILLUMINANT_D50: (f32, f32) = (0.34567, 0.35850);

/// Illuminant D55 chromaticity (~5500K).
pub const ILLUMINANT_D55: (f32, f32) = (0.33242, 0.34743);

/// Illuminant D65 chromaticity (daylight, ~6500K).
pub const ILLUMINANT_D65: (f32, f32) = (0.3127, 0.3290);

/// Illuminant E chromaticity (equal energy).
pub const ILLUMINANT_E: (f32, f32) = (1.0 / 3.0, 1.0 / 3.0);

// ============================================================================
// Standard Profile Chromaticities
// ============================================================================

/// sRGB chromaticities (D65 white point).
///
/// The most common color space for web and consumer displays. Also the
/// gamut of the linear profile.
pub const SRGB: Chromaticities = Chromaticities {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: ILLUMINANT_D65,
};

/// Adobe RGB (1998) chromaticities with a D65 white point.
pub const ADOBE_RGB_D65: Chromaticities = Chromaticities {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: ILLUMINANT_D65,
};

/// Adobe RGB (1998) chromaticities with a D50 white point.
pub const ADOBE_RGB_D50: Chromaticities = Chromaticities {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: ILLUMINANT_D50,
};

/// ProPhoto RGB chromaticities (D50 white point).
pub const PRO_PHOTO: Chromaticities = Chromaticities {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: ILLUMINANT_D50,
};

/// Radiance HDR chromaticities (equal-energy white point).
pub const RADIANCE: Chromaticities = Chromaticities {
    r: (0.6400, 0.3300),
    g: (0.2900, 0.6000),
    b: (0.1500, 0.0600),
    w: ILLUMINANT_E,
};

// ============================================================================
// xyY Helpers
// ============================================================================

/// Converts CIE XYZ to xyY.
///
/// Near-black colors (X+Y+Z below 1e-8) get zero chromaticity rather
/// than a division blowup; the luminance component is kept as-is.
#[inline]
pub fn xyz_to_xyy(xyz: Vec3) -> Vec3 {
    let sum = xyz.x + xyz.y + xyz.z;
    let inv = if sum.abs() > 1e-8 { 1.0 / sum } else { 0.0 };
    Vec3::new(xyz.x * inv, xyz.y * inv, xyz.y)
}

/// Converts CIE xyY to XYZ.
///
/// A `y` at or below 1e-8 yields X = Z = 0 (Y is carried through), so a
/// degenerate chromaticity cannot divide by zero.
#[inline]
pub fn xyy_to_xyz(xyy: Vec3) -> Vec3 {
    let y_ratio = if xyy.y > 1e-8 { xyy.z / xyy.y } else { 0.0 };
    Vec3::new(
        xyy.x * y_ratio,
        xyy.z,
        (1.0 - xyy.x - xyy.y) * y_ratio,
    )
}

// ============================================================================
// Matrix Generation
// ============================================================================

/// XYZ direction of an xy primary: (x, y, 1-x-y).
#[inline]
fn primary_direction(p: (f32, f32)) -> Vec3 {
    Vec3::new(p.0, p.1, 1.0 - p.0 - p.1)
}

/// Computes the RGB to XYZ matrix for a chromaticity set.
///
/// # Algorithm
///
/// 1. Take each primary's XYZ direction (x, y, 1-x-y) as a column.
/// 2. Convert the white point to XYZ with Y = 1.
/// 3. Solve `M * S = white` for the per-primary scale factors S.
/// 4. Scale each column by its factor.
///
/// # Errors
///
/// [`Error::DegenerateProfile`] when the primaries are collinear and the
/// basis matrix cannot be inverted.
///
/// # Example
///
/// ```rust
/// use chroma_math::Vec4;
/// use chroma_primaries::{SRGB, rgb_to_xyz_matrix};
///
/// let m = rgb_to_xyz_matrix(&SRGB).unwrap();
/// let white = m * Vec4::new(1.0, 1.0, 1.0, 1.0);
/// assert!((white.y - 1.0).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz_matrix(chroma: &Chromaticities) -> Result<Mat4> {
    let r = primary_direction(chroma.r);
    let g = primary_direction(chroma.g);
    let b = primary_direction(chroma.b);
    let white = chroma.white_xyz();

    let basis = Mat4::from_mat3_cols(r, g, b);
    let inv = basis.inverse().ok_or(Error::DegenerateProfile)?;
    let s = inv.transform_vec3(white);

    Ok(Mat4::from_mat3_cols(r * s.x, g * s.y, b * s.z))
}

/// Computes the XYZ to RGB matrix for a chromaticity set.
///
/// The inverse of [`rgb_to_xyz_matrix`], with the same degenerate-gamut
/// error policy.
pub fn xyz_to_rgb_matrix(chroma: &Chromaticities) -> Result<Mat4> {
    rgb_to_xyz_matrix(chroma)?
        .inverse()
        .ok_or(Error::DegenerateProfile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_math::Vec4;

    #[test]
    fn test_recognize_standards() {
        assert_eq!(SRGB.recognize(), StandardProfile::Srgb);
        assert_eq!(ADOBE_RGB_D65.recognize(), StandardProfile::AdobeRgbD65);
        assert_eq!(ADOBE_RGB_D50.recognize(), StandardProfile::AdobeRgbD50);
        assert_eq!(PRO_PHOTO.recognize(), StandardProfile::ProPhoto);
        assert_eq!(RADIANCE.recognize(), StandardProfile::Radiance);
    }

    #[test]
    fn test_recognize_within_tolerance() {
        let mut nudged = SRGB;
        nudged.g.0 += 5e-4;
        nudged.w.1 -= 5e-4;
        assert_eq!(nudged.recognize(), StandardProfile::Srgb);
    }

    #[test]
    fn test_recognize_custom() {
        let rec2020 = Chromaticities {
            r: (0.7080, 0.2920),
            g: (0.1700, 0.7970),
            b: (0.1310, 0.0460),
            w: ILLUMINANT_D65,
        };
        assert_eq!(rec2020.recognize(), StandardProfile::Custom);

        // Just past the tolerance on one coordinate
        let mut nudged = SRGB;
        nudged.r.0 += 2e-3;
        assert_eq!(nudged.recognize(), StandardProfile::Custom);
    }

    #[test]
    fn test_recognize_invalid() {
        assert_eq!(Chromaticities::default().recognize(), StandardProfile::Invalid);

        let mut partial = SRGB;
        partial.b = (0.0, 0.0);
        assert_eq!(partial.recognize(), StandardProfile::Invalid);
    }

    #[test]
    fn test_from_profile_roundtrip() {
        for profile in [
            StandardProfile::Srgb,
            StandardProfile::AdobeRgbD65,
            StandardProfile::AdobeRgbD50,
            StandardProfile::ProPhoto,
            StandardProfile::Radiance,
        ] {
            let chroma = Chromaticities::from_profile(profile).unwrap();
            assert_eq!(chroma.recognize(), profile);
        }

        // Linear shares the sRGB gamut, so it re-recognizes as sRGB
        let linear = Chromaticities::from_profile(StandardProfile::Linear).unwrap();
        assert_eq!(linear.recognize(), StandardProfile::Srgb);

        assert!(Chromaticities::from_profile(StandardProfile::Custom).is_none());
        assert!(Chromaticities::from_profile(StandardProfile::Invalid).is_none());
    }

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();

        // Known sRGB/D65 values
        assert!((m.m[0][0] - 0.4123908).abs() < 1e-4);
        assert!((m.m[1][0] - 0.2126390).abs() < 1e-4);
        assert!((m.m[2][2] - 0.9505322).abs() < 1e-4);
    }

    #[test]
    fn test_white_point() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        let white = m * Vec4::new(1.0, 1.0, 1.0, 1.0);

        assert!((white.x - 0.950456).abs() < 1e-4);
        assert!((white.y - 1.0).abs() < 1e-4);
        assert!((white.z - 1.089058).abs() < 1e-4);
        assert_eq!(white.w, 1.0);
    }

    #[test]
    fn test_radiance_white_is_equal_energy() {
        let m = rgb_to_xyz_matrix(&RADIANCE).unwrap();
        let white = m * Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((white.x - 1.0).abs() < 1e-4);
        assert!((white.y - 1.0).abs() < 1e-4);
        assert!((white.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_roundtrip() {
        for chroma in [SRGB, ADOBE_RGB_D65, ADOBE_RGB_D50, PRO_PHOTO, RADIANCE] {
            let to_xyz = rgb_to_xyz_matrix(&chroma).unwrap();
            let to_rgb = xyz_to_rgb_matrix(&chroma).unwrap();

            let rgb = Vec4::new(0.5, 0.3, 0.8, 1.0);
            let back = to_rgb * (to_xyz * rgb);
            assert!((rgb.x - back.x).abs() < 1e-4);
            assert!((rgb.y - back.y).abs() < 1e-4);
            assert!((rgb.z - back.z).abs() < 1e-4);
            assert_eq!(back.w, 1.0);
        }
    }

    #[test]
    fn test_degenerate_primaries() {
        // Collinear primaries: all three on the same xy line
        let degenerate = Chromaticities {
            r: (0.1, 0.1),
            g: (0.2, 0.2),
            b: (0.3, 0.3),
            w: ILLUMINANT_D65,
        };
        assert_eq!(
            rgb_to_xyz_matrix(&degenerate),
            Err(Error::DegenerateProfile)
        );
        assert_eq!(
            xyz_to_rgb_matrix(&degenerate),
            Err(Error::DegenerateProfile)
        );
    }

    #[test]
    fn test_xyy_helpers() {
        let xyz = Vec3::new(0.4124, 0.2126, 0.0193);
        let xyy = xyz_to_xyy(xyz);
        assert!((xyy.x - 0.64).abs() < 1e-3);
        assert!((xyy.y - 0.33).abs() < 1e-3);
        assert!((xyy.z - 0.2126).abs() < 1e-6);

        let back = xyy_to_xyz(xyy);
        assert!((back.x - xyz.x).abs() < 1e-5);
        assert!((back.y - xyz.y).abs() < 1e-5);
        assert!((back.z - xyz.z).abs() < 1e-5);
    }

    #[test]
    fn test_xyy_degenerate_guards() {
        assert_eq!(xyz_to_xyy(Vec3::ZERO), Vec3::ZERO);

        let flat = xyy_to_xyz(Vec3::new(0.3127, 0.0, 1.0));
        assert_eq!(flat.x, 0.0);
        assert_eq!(flat.z, 0.0);
    }

    #[test]
    fn test_white_xyz() {
        let w = SRGB.white_xyz();
        assert!((w.x - 0.950456).abs() < 1e-4);
        assert_eq!(w.y, 1.0);
        assert!((w.z - 1.089058).abs() < 1e-4);
    }
}
