//! The `ColorProfile` facade.
//!
//! A [`ColorProfile`] owns everything a conversion needs: the
//! chromaticities, the gamma descriptor, both RGB/XYZ matrices, and the
//! [`Converter`] selected for the recognized profile. Conversion calls
//! take `&self`; gamma mutations take `&mut self` and rebuild the whole
//! aggregate, including converter re-selection.

use chroma_core::{Error, GammaCurve, Result, StandardProfile};
use chroma_math::{Mat4, Vec4};
use chroma_primaries::{self as primaries, Chromaticities};

use crate::converter::{Converter, GAMMA_EPSILON};

/// A color profile: chromaticities, gamma, matrices, and the converter
/// dispatched for them.
///
/// # Lifecycle
///
/// Built from a [`StandardProfile`] tag, from explicit chromaticities,
/// or via [`Default`] (identity matrices, uninitialized chromaticities,
/// pass-through converter). The recognized profile is re-derived from
/// the chromaticities on every build; it is never a stored label.
///
/// # Example
///
/// ```rust
/// use chroma_core::StandardProfile;
/// use chroma_math::Vec4;
/// use chroma_profile::ColorProfile;
///
/// let profile = ColorProfile::new(StandardProfile::Srgb).unwrap();
/// let xyz = profile.rgb_to_xyz(Vec4::new(1.0, 1.0, 1.0, 1.0));
/// assert!((xyz.y - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProfile {
    profile_found_in_file: bool,
    chromas: Chromaticities,
    recognized: StandardProfile,
    gamma_curve: GammaCurve,
    gamma: f32,
    exposure_bias: f32,
    rgb_to_xyz: Mat4,
    xyz_to_rgb: Mat4,
    converter: Converter,
}

impl ColorProfile {
    /// Builds a profile from a standard-profile tag.
    ///
    /// The tag seeds the canonical chromaticities and gamma; both
    /// matrices and the converter are then derived.
    /// [`Linear`](StandardProfile::Linear) seeds the sRGB gamut with a
    /// linear standard curve, so it re-recognizes as `Custom` and
    /// converts with a bare matrix multiply.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedProfile`] for the `Invalid` and `Custom`
    /// tags, which carry no constants to build from.
    pub fn new(profile: StandardProfile) -> Result<Self> {
        let chromas = Chromaticities::from_profile(profile)
            .ok_or(Error::UnsupportedProfile { profile })?;
        let (curve, gamma) = profile
            .canonical_gamma()
            .ok_or(Error::UnsupportedProfile { profile })?;
        Self::from_chromaticities(chromas, curve, gamma)
    }

    /// Builds a profile from explicit chromaticities and gamma.
    ///
    /// Recognition runs with the gamma check enabled: chromaticities
    /// that match a standard profile but carry a non-canonical gamma
    /// downgrade to `Custom` and get a generic converter.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateProfile`] when the primaries are collinear.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::{GammaCurve, StandardProfile};
    /// use chroma_profile::{primaries::SRGB, ColorProfile};
    ///
    /// // sRGB gamut with the canonical sRGB curve recognizes as sRGB
    /// let p = ColorProfile::from_chromaticities(SRGB, GammaCurve::Srgb, 2.4).unwrap();
    /// assert_eq!(p.recognized_profile(), StandardProfile::Srgb);
    ///
    /// // Same gamut with a 2.2 power curve is merely Custom
    /// let p = ColorProfile::from_chromaticities(SRGB, GammaCurve::Standard, 2.2).unwrap();
    /// assert_eq!(p.recognized_profile(), StandardProfile::Custom);
    /// ```
    pub fn from_chromaticities(
        chromas: Chromaticities,
        curve: GammaCurve,
        gamma: f32,
    ) -> Result<Self> {
        let mut profile = Self {
            profile_found_in_file: false,
            chromas,
            recognized: StandardProfile::Invalid,
            gamma_curve: curve,
            gamma,
            exposure_bias: 0.0,
            rgb_to_xyz: Mat4::IDENTITY,
            xyz_to_rgb: Mat4::IDENTITY,
            converter: Converter::NoGamma {
                to_xyz: Mat4::IDENTITY,
                to_rgb: Mat4::IDENTITY,
            },
        };
        profile.rebuild(true)?;
        Ok(profile)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The chromaticities this profile was built from.
    #[inline]
    pub fn chromas(&self) -> Chromaticities {
        self.chromas
    }

    /// The standard profile recognized from the chromaticities (and
    /// gamma) at the last build.
    #[inline]
    pub fn recognized_profile(&self) -> StandardProfile {
        self.recognized
    }

    /// The RGB to XYZ matrix.
    #[inline]
    pub fn rgb_to_xyz_matrix(&self) -> Mat4 {
        self.rgb_to_xyz
    }

    /// The XYZ to RGB matrix.
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> Mat4 {
        self.xyz_to_rgb
    }

    /// The gamma curve shape.
    #[inline]
    pub fn gamma_curve(&self) -> GammaCurve {
        self.gamma_curve
    }

    /// The gamma exponent.
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// The stored HDR exposure bias, in f-stops.
    ///
    /// Carried as metadata for HDR formats; the engine never applies it
    /// during conversion.
    #[inline]
    pub fn exposure_bias(&self) -> f32 {
        self.exposure_bias
    }

    /// Whether the profile came from an embedded description in a file.
    #[inline]
    pub fn profile_found_in_file(&self) -> bool {
        self.profile_found_in_file
    }

    /// The converter currently selected for this profile.
    #[inline]
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Sets the gamma curve shape and rebuilds the profile.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateProfile`] if the chromaticities no longer
    /// invert; the profile is left with the new curve but stale
    /// matrices, matching the all-or-nothing build in the constructors.
    pub fn set_gamma_curve(&mut self, curve: GammaCurve) -> Result<()> {
        self.gamma_curve = curve;
        self.rebuild(true)
    }

    /// Sets the gamma exponent and rebuilds the profile.
    ///
    /// # Errors
    ///
    /// Same as [`set_gamma_curve`](Self::set_gamma_curve).
    pub fn set_gamma(&mut self, gamma: f32) -> Result<()> {
        self.gamma = gamma;
        self.rebuild(true)
    }

    /// Sets the HDR exposure bias. Metadata only; no rebuild.
    #[inline]
    pub fn set_exposure_bias(&mut self, bias: f32) {
        self.exposure_bias = bias;
    }

    /// Marks whether the profile came from a file. No rebuild.
    #[inline]
    pub fn set_profile_found_in_file(&mut self, found: bool) {
        self.profile_found_in_file = found;
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Converts one XYZ color to this profile's encoded RGB.
    #[inline]
    pub fn xyz_to_rgb(&self, xyz: Vec4) -> Vec4 {
        self.converter.xyz_to_rgb(xyz)
    }

    /// Converts one encoded RGB color to XYZ.
    #[inline]
    pub fn rgb_to_xyz(&self, rgb: Vec4) -> Vec4 {
        self.converter.rgb_to_xyz(rgb)
    }

    /// Converts a buffer of XYZ colors to encoded RGB, in order.
    ///
    /// Processes `min(src.len(), dst.len())` colors. The slices must
    /// not overlap.
    #[inline]
    pub fn xyz_to_rgb_slice(&self, src: &[Vec4], dst: &mut [Vec4]) {
        self.converter.xyz_to_rgb_slice(src, dst);
    }

    /// Converts a buffer of encoded RGB colors to XYZ, in order.
    #[inline]
    pub fn rgb_to_xyz_slice(&self, src: &[Vec4], dst: &mut [Vec4]) {
        self.converter.rgb_to_xyz_slice(src, dst);
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Recomputes matrices, recognition, gamma pinning, and converter
    /// selection from the current chromaticities and gamma.
    ///
    /// With `check_gamma_override` set, a chromaticity match against a
    /// named profile only holds if the gamma also matches the canonical
    /// curve tag and exponent (within [`GAMMA_EPSILON`]); otherwise the
    /// recognition downgrades to `Custom`. A confirmed named profile
    /// pins the stored gamma to its canonical values.
    fn rebuild(&mut self, check_gamma_override: bool) -> Result<()> {
        self.rgb_to_xyz = primaries::rgb_to_xyz_matrix(&self.chromas)?;
        self.xyz_to_rgb = self
            .rgb_to_xyz
            .inverse()
            .ok_or(Error::DegenerateProfile)?;

        let mut recognized = self.chromas.recognize();
        if check_gamma_override {
            if let Some((curve, gamma)) = recognized.canonical_gamma() {
                if curve != self.gamma_curve || (gamma - self.gamma).abs() >= GAMMA_EPSILON {
                    recognized = StandardProfile::Custom;
                }
            }
        }

        if let Some((curve, gamma)) = recognized.canonical_gamma() {
            self.gamma_curve = curve;
            self.gamma = gamma;
        }

        self.recognized = recognized;
        self.converter = Converter::select(
            recognized,
            self.gamma_curve,
            self.gamma,
            self.rgb_to_xyz,
            self.xyz_to_rgb,
        );
        Ok(())
    }
}

impl Default for ColorProfile {
    /// An inert profile: identity matrices, uninitialized (all-zero)
    /// chromaticities, pass-through converter. Conversions are no-ops
    /// until the profile is rebuilt from real data.
    fn default() -> Self {
        Self {
            profile_found_in_file: false,
            chromas: Chromaticities::default(),
            recognized: StandardProfile::Invalid,
            gamma_curve: GammaCurve::Standard,
            gamma: 1.0,
            exposure_bias: 0.0,
            rgb_to_xyz: Mat4::IDENTITY,
            xyz_to_rgb: Mat4::IDENTITY,
            converter: Converter::NoGamma {
                to_xyz: Mat4::IDENTITY,
                to_rgb: Mat4::IDENTITY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_primaries::{ILLUMINANT_D65, PRO_PHOTO, SRGB};

    #[test]
    fn test_new_standard_profiles() {
        for tag in [
            StandardProfile::Srgb,
            StandardProfile::AdobeRgbD50,
            StandardProfile::AdobeRgbD65,
            StandardProfile::ProPhoto,
            StandardProfile::Radiance,
        ] {
            let p = ColorProfile::new(tag).unwrap();
            assert_eq!(p.recognized_profile(), tag);
            let (curve, gamma) = tag.canonical_gamma().unwrap();
            assert_eq!(p.gamma_curve(), curve);
            assert_eq!(p.gamma(), gamma);
        }
    }

    #[test]
    fn test_new_rejects_unconstructible_tags() {
        for tag in [StandardProfile::Invalid, StandardProfile::Custom] {
            let err = ColorProfile::new(tag).unwrap_err();
            assert!(err.is_unsupported_profile());
        }
    }

    #[test]
    fn test_linear_downgrades_to_custom_no_gamma() {
        let p = ColorProfile::new(StandardProfile::Linear).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Custom);
        assert!(matches!(p.converter(), Converter::NoGamma { .. }));

        // Conversion is the bare sRGB-gamut matrix multiply
        let rgb = Vec4::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(p.rgb_to_xyz(rgb), p.rgb_to_xyz_matrix() * rgb);
    }

    #[test]
    fn test_gamma_mismatch_downgrades() {
        let p = ColorProfile::from_chromaticities(SRGB, GammaCurve::Standard, 2.2).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Custom);
        assert!(matches!(p.converter(), Converter::StandardGamma { .. }));
    }

    #[test]
    fn test_named_profile_pins_canonical_gamma() {
        // Within tolerance of the canonical exponent: recognition holds
        // and the stored gamma snaps to the exact canonical value
        let p = ColorProfile::from_chromaticities(SRGB, GammaCurve::Srgb, 2.4005).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Srgb);
        assert_eq!(p.gamma(), 2.4);
    }

    #[test]
    fn test_set_gamma_rebuilds_converter() {
        let mut p = ColorProfile::new(StandardProfile::Srgb).unwrap();
        assert_eq!(*p.converter(), Converter::Srgb);

        p.set_gamma_curve(GammaCurve::Standard).unwrap();
        p.set_gamma(2.2).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Custom);
        assert!(matches!(p.converter(), Converter::StandardGamma { .. }));

        // Restoring the canonical curve re-recognizes as sRGB
        p.set_gamma_curve(GammaCurve::Srgb).unwrap();
        p.set_gamma(2.4).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Srgb);
        assert_eq!(*p.converter(), Converter::Srgb);
    }

    #[test]
    fn test_exposure_bias_is_inert() {
        let mut p = ColorProfile::new(StandardProfile::Radiance).unwrap();
        let rgb = Vec4::new(0.3, 0.6, 0.9, 1.0);
        let before = p.rgb_to_xyz(rgb);

        p.set_exposure_bias(2.0);
        assert_eq!(p.exposure_bias(), 2.0);
        assert_eq!(p.rgb_to_xyz(rgb), before);
        assert_eq!(p.recognized_profile(), StandardProfile::Radiance);
    }

    #[test]
    fn test_profile_found_in_file_flag() {
        let mut p = ColorProfile::new(StandardProfile::Srgb).unwrap();
        assert!(!p.profile_found_in_file());
        p.set_profile_found_in_file(true);
        assert!(p.profile_found_in_file());
        assert_eq!(*p.converter(), Converter::Srgb);
    }

    #[test]
    fn test_default_is_passthrough() {
        let p = ColorProfile::default();
        assert_eq!(p.recognized_profile(), StandardProfile::Invalid);
        let c = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(p.xyz_to_rgb(c), c);
        assert_eq!(p.rgb_to_xyz(c), c);
    }

    #[test]
    fn test_degenerate_chromaticities_error() {
        let degenerate = Chromaticities {
            r: (0.1, 0.1),
            g: (0.2, 0.2),
            b: (0.3, 0.3),
            w: ILLUMINANT_D65,
        };
        let err =
            ColorProfile::from_chromaticities(degenerate, GammaCurve::Standard, 1.0).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_custom_profile_roundtrip() {
        let rec2020 = Chromaticities {
            r: (0.7080, 0.2920),
            g: (0.1700, 0.7970),
            b: (0.1310, 0.0460),
            w: ILLUMINANT_D65,
        };
        let p = ColorProfile::from_chromaticities(rec2020, GammaCurve::Standard, 2.2).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Custom);

        let rgb = Vec4::new(0.25, 0.5, 0.75, 1.0);
        let back = p.xyz_to_rgb(p.rgb_to_xyz(rgb));
        for i in 0..4 {
            approx::assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_prophoto_curve_selected_for_custom_gamut() {
        let mut nudged = PRO_PHOTO;
        nudged.r.0 += 0.01;
        let p = ColorProfile::from_chromaticities(nudged, GammaCurve::ProPhoto, 1.8).unwrap();
        assert_eq!(p.recognized_profile(), StandardProfile::Custom);
        assert!(matches!(p.converter(), Converter::ProPhotoGamma { .. }));
    }

    #[test]
    fn test_matrices_are_inverses() {
        let p = ColorProfile::new(StandardProfile::AdobeRgbD50).unwrap();
        let prod = p.rgb_to_xyz_matrix() * p.xyz_to_rgb_matrix();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod.m[i][j] - expected).abs() < 1e-4);
            }
        }
    }
}
