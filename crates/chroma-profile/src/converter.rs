//! Converter strategies.
//!
//! A [`Converter`] pairs a matrix transform with a gamma curve and runs
//! both directions of a conversion: XYZ to encoded RGB (matrix, then
//! per-channel encode) and encoded RGB to XYZ (per-channel decode, then
//! matrix). The fourth color component rides through untouched.
//!
//! The five named variants are stateless and use the pre-computed
//! constant matrices below; the generic variants carry the profile's own
//! matrices and are selected when recognition yields `Custom` or
//! `Invalid`.

use chroma_core::{GammaCurve, StandardProfile, GAMMA_EXPONENT_ADOBE};
use chroma_math::{Mat4, Vec4};
use chroma_transfer::{gamma, prophoto, srgb};

/// Tolerance under which a standard-curve exponent counts as 1.0 and the
/// gamma step is skipped entirely.
pub const GAMMA_EPSILON: f32 = 1e-3;

// ============================================================================
// Pre-computed Standard Matrices
// ============================================================================
//
// All matrices below are derived by the exact construction
// `chroma_primaries::rgb_to_xyz_matrix` uses at runtime (primary
// directions scaled to hit the white point, no chromatic adaptation), so
// the named converters and a generic converter built from the same
// chromaticities agree to float rounding.

/// sRGB to XYZ (D65).
pub const SRGB_TO_XYZ: Mat4 = Mat4::from_mat3_rows([
    [0.4123908, 0.3575843, 0.1804808],
    [0.2126390, 0.7151687, 0.0721923],
    [0.0193308, 0.1191948, 0.9505322],
]);

/// XYZ (D65) to sRGB.
pub const XYZ_TO_SRGB: Mat4 = Mat4::from_mat3_rows([
    [3.2409699, -1.5373832, -0.4986108],
    [-0.9692436, 1.8759675, 0.0415551],
    [0.0556301, -0.2039770, 1.0569715],
]);

/// Adobe RGB (1998) to XYZ (D65).
pub const ADOBE_D65_TO_XYZ: Mat4 = Mat4::from_mat3_rows([
    [0.5766690, 0.1855582, 0.1882286],
    [0.2973450, 0.6273636, 0.0752915],
    [0.0270314, 0.0706889, 0.9913375],
]);

/// XYZ (D65) to Adobe RGB (1998).
pub const XYZ_TO_ADOBE_D65: Mat4 = Mat4::from_mat3_rows([
    [2.0415879, -0.5650070, -0.3447314],
    [-0.9692436, 1.8759675, 0.0415551],
    [0.0134443, -0.1183624, 1.0151750],
]);

/// Adobe RGB (1998) to XYZ (D50).
pub const ADOBE_D50_TO_XYZ: Mat4 = Mat4::from_mat3_rows([
    [0.6453205, 0.1810495, 0.1378420],
    [0.3327434, 0.6121198, 0.0551368],
    [0.0302494, 0.0689712, 0.7259676],
]);

/// XYZ (D50) to Adobe RGB (1998).
pub const XYZ_TO_ADOBE_D50: Mat4 = Mat4::from_mat3_rows([
    [1.8243966, -0.5048995, -0.3080576],
    [-0.9933809, 1.9226851, 0.0425899],
    [0.0183587, -0.1616285, 1.3862616],
]);

/// ProPhoto RGB to XYZ (D50).
pub const PRO_PHOTO_TO_XYZ: Mat4 = Mat4::from_mat3_rows([
    [0.7976672, 0.1351922, 0.0313525],
    [0.2880375, 0.7118769, 0.0000857],
    [0.0, 0.0, 0.8251883],
]);

/// XYZ (D50) to ProPhoto RGB.
pub const XYZ_TO_PRO_PHOTO: Mat4 = Mat4::from_mat3_rows([
    [1.3459563, -0.2556100, -0.0511123],
    [-0.5445967, 1.5081614, 0.0205351],
    [0.0, 0.0, 1.2118446],
]);

/// Radiance RGB to XYZ (equal-energy white).
pub const RADIANCE_TO_XYZ: Mat4 = Mat4::from_mat3_rows([
    [0.5141446, 0.3238845, 0.1619709],
    [0.2651058, 0.6701058, 0.0647884],
    [0.0241005, 0.1228527, 0.8530467],
]);

/// XYZ (equal-energy) to Radiance RGB.
pub const XYZ_TO_RADIANCE: Mat4 = Mat4::from_mat3_rows([
    [2.5653128, -1.1668496, -0.3984632],
    [-1.0221082, 1.9782866, 0.0438216],
    [0.0747244, -0.2519396, 1.1772152],
]);

// ============================================================================
// Converter
// ============================================================================

/// A conversion strategy between CIE XYZ and encoded RGB.
///
/// Selected once per profile build by [`Converter::select`] and owned by
/// the profile; conversion calls take `&self` and are safe to share
/// across threads.
///
/// # Example
///
/// ```rust
/// use chroma_math::Vec4;
/// use chroma_profile::Converter;
///
/// let conv = Converter::Srgb;
/// let rgb = conv.xyz_to_rgb(Vec4::new(0.950456, 1.0, 1.089058, 1.0));
/// assert!((rgb.x - 1.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converter {
    /// sRGB: constant D65 matrices, sRGB piecewise curve.
    Srgb,
    /// Adobe RGB (1998), D50 white: constant matrices, power 2.19921875.
    AdobeRgbD50,
    /// Adobe RGB (1998), D65 white: constant matrices, power 2.19921875.
    AdobeRgbD65,
    /// ProPhoto RGB: constant D50 matrices, ProPhoto piecewise curve.
    ProPhoto,
    /// Radiance: constant equal-energy matrices, linear.
    Radiance,
    /// Custom gamut, linear: matrix multiply only.
    NoGamma {
        /// RGB to XYZ matrix.
        to_xyz: Mat4,
        /// XYZ to RGB matrix.
        to_rgb: Mat4,
    },
    /// Custom gamut with a pure power-law curve.
    StandardGamma {
        /// RGB to XYZ matrix.
        to_xyz: Mat4,
        /// XYZ to RGB matrix.
        to_rgb: Mat4,
        /// Curve exponent (decode side).
        gamma: f32,
        /// Reciprocal of the exponent, precomputed at selection.
        inv_gamma: f32,
    },
    /// Custom gamut with the sRGB piecewise curve.
    SrgbGamma {
        /// RGB to XYZ matrix.
        to_xyz: Mat4,
        /// XYZ to RGB matrix.
        to_rgb: Mat4,
    },
    /// Custom gamut with the ProPhoto piecewise curve.
    ProPhotoGamma {
        /// RGB to XYZ matrix.
        to_xyz: Mat4,
        /// XYZ to RGB matrix.
        to_rgb: Mat4,
    },
}

impl Converter {
    /// Picks the strategy for a recognized profile.
    ///
    /// The five named profiles get their stateless constant-matrix
    /// variant. `Custom` and `Invalid` get a generic variant keyed by
    /// the curve tag, with `Standard` collapsing to
    /// [`NoGamma`](Self::NoGamma) when the exponent is within
    /// [`GAMMA_EPSILON`] of 1.0. `Linear` never reaches here:
    /// recognition only produces it indirectly as `Custom` after the
    /// gamma check.
    pub fn select(
        recognized: StandardProfile,
        curve: GammaCurve,
        gamma: f32,
        to_xyz: Mat4,
        to_rgb: Mat4,
    ) -> Self {
        match recognized {
            StandardProfile::Srgb => Self::Srgb,
            StandardProfile::AdobeRgbD50 => Self::AdobeRgbD50,
            StandardProfile::AdobeRgbD65 => Self::AdobeRgbD65,
            StandardProfile::ProPhoto => Self::ProPhoto,
            StandardProfile::Radiance => Self::Radiance,
            StandardProfile::Linear
            | StandardProfile::Custom
            | StandardProfile::Invalid => match curve {
                GammaCurve::Srgb => Self::SrgbGamma { to_xyz, to_rgb },
                GammaCurve::ProPhoto => Self::ProPhotoGamma { to_xyz, to_rgb },
                GammaCurve::Standard => {
                    if (gamma - 1.0).abs() < GAMMA_EPSILON {
                        Self::NoGamma { to_xyz, to_rgb }
                    } else {
                        Self::StandardGamma {
                            to_xyz,
                            to_rgb,
                            gamma,
                            inv_gamma: 1.0 / gamma,
                        }
                    }
                }
            },
        }
    }

    /// Converts one XYZ color to encoded RGB: matrix, then encode.
    ///
    /// The `w` component passes through the homogeneous transform and is
    /// never gamma-corrected. Non-finite inputs produce non-finite
    /// outputs rather than panicking.
    pub fn xyz_to_rgb(&self, xyz: Vec4) -> Vec4 {
        match self {
            Self::Srgb => (XYZ_TO_SRGB * xyz).map_rgb(srgb::encode),
            Self::AdobeRgbD50 => {
                (XYZ_TO_ADOBE_D50 * xyz).map_rgb(|c| gamma::encode(c, GAMMA_EXPONENT_ADOBE))
            }
            Self::AdobeRgbD65 => {
                (XYZ_TO_ADOBE_D65 * xyz).map_rgb(|c| gamma::encode(c, GAMMA_EXPONENT_ADOBE))
            }
            Self::ProPhoto => (XYZ_TO_PRO_PHOTO * xyz).map_rgb(prophoto::encode),
            Self::Radiance => XYZ_TO_RADIANCE * xyz,
            Self::NoGamma { to_rgb, .. } => *to_rgb * xyz,
            Self::StandardGamma {
                to_rgb, inv_gamma, ..
            } => (*to_rgb * xyz).map_rgb(|c| if c <= 0.0 { 0.0 } else { c.powf(*inv_gamma) }),
            Self::SrgbGamma { to_rgb, .. } => (*to_rgb * xyz).map_rgb(srgb::encode),
            Self::ProPhotoGamma { to_rgb, .. } => (*to_rgb * xyz).map_rgb(prophoto::encode),
        }
    }

    /// Converts one encoded RGB color to XYZ: decode, then matrix.
    pub fn rgb_to_xyz(&self, rgb: Vec4) -> Vec4 {
        match self {
            Self::Srgb => SRGB_TO_XYZ * rgb.map_rgb(srgb::decode),
            Self::AdobeRgbD50 => {
                ADOBE_D50_TO_XYZ * rgb.map_rgb(|c| gamma::decode(c, GAMMA_EXPONENT_ADOBE))
            }
            Self::AdobeRgbD65 => {
                ADOBE_D65_TO_XYZ * rgb.map_rgb(|c| gamma::decode(c, GAMMA_EXPONENT_ADOBE))
            }
            Self::ProPhoto => PRO_PHOTO_TO_XYZ * rgb.map_rgb(prophoto::decode),
            Self::Radiance => RADIANCE_TO_XYZ * rgb,
            Self::NoGamma { to_xyz, .. } => *to_xyz * rgb,
            Self::StandardGamma { to_xyz, gamma, .. } => {
                *to_xyz * rgb.map_rgb(|c| if c <= 0.0 { 0.0 } else { c.powf(*gamma) })
            }
            Self::SrgbGamma { to_xyz, .. } => *to_xyz * rgb.map_rgb(srgb::decode),
            Self::ProPhotoGamma { to_xyz, .. } => *to_xyz * rgb.map_rgb(prophoto::decode),
        }
    }

    /// Converts a buffer of XYZ colors to encoded RGB, in order.
    ///
    /// Processes `min(src.len(), dst.len())` colors with no early exit;
    /// NaN or infinite components flow through per color.
    pub fn xyz_to_rgb_slice(&self, src: &[Vec4], dst: &mut [Vec4]) {
        let n = src.len().min(dst.len());
        for i in 0..n {
            dst[i] = self.xyz_to_rgb(src[i]);
        }
    }

    /// Converts a buffer of encoded RGB colors to XYZ, in order.
    ///
    /// Same length and NaN policy as
    /// [`xyz_to_rgb_slice`](Self::xyz_to_rgb_slice).
    pub fn rgb_to_xyz_slice(&self, src: &[Vec4], dst: &mut [Vec4]) {
        let n = src.len().min(dst.len());
        for i in 0..n {
            dst[i] = self.rgb_to_xyz(src[i]);
        }
    }
}
