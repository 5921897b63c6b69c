//! # chroma-profile
//!
//! Unified color-profile API: recognition-driven conversion between
//! encoded RGB and CIE XYZ.
//!
//! This crate combines the engine's pieces into a single facade:
//!
//! - **Profiles** - [`ColorProfile`] aggregate built from a tag or from
//!   explicit chromaticities
//! - **Converters** - [`Converter`] strategies, constant matrices for the
//!   recognized standard profiles
//! - **Transfer curves** - re-exported from `chroma-transfer`
//! - **Chromaticities** - re-exported from `chroma-primaries`
//!
//! # Architecture
//!
//! ```text
//!              chroma-profile
//!                    |
//!         +----------+----------+
//!         |                     |
//!  chroma-transfer      chroma-primaries
//!         |                     |
//!         +----------+----------+
//!                    |
//!               chroma-math
//!                    |
//!               chroma-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::StandardProfile;
//! use chroma_math::Vec4;
//! use chroma_profile::ColorProfile;
//!
//! // Build a profile from a standard tag
//! let profile = ColorProfile::new(StandardProfile::Srgb)?;
//!
//! // Single color: encoded sRGB white to XYZ
//! let xyz = profile.rgb_to_xyz(Vec4::new(1.0, 1.0, 1.0, 1.0));
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//!
//! // Buffers convert in order, alpha untouched
//! let src = vec![Vec4::new(0.5, 0.5, 0.5, 1.0); 16];
//! let mut dst = vec![Vec4::ZERO; 16];
//! profile.rgb_to_xyz_slice(&src, &mut dst);
//! # Ok::<(), chroma_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Profile tags, gamma tags, errors
//! - [`chroma-math`] - `Vec4` colors and `Mat4` transforms
//! - [`chroma-transfer`] - Gamma curve implementations
//! - [`chroma-primaries`] - Chromaticities, recognition, matrix builder

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod converter;
mod profile;

pub use converter::{Converter, GAMMA_EPSILON};
pub use profile::ColorProfile;

// Re-export the core identifiers and error types at the facade level
pub use chroma_core::{Error, GammaCurve, Result, StandardProfile};

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorProfile, Converter};

    pub use chroma_core::{Error, GammaCurve, Result, StandardProfile};

    // Re-export chromaticities and matrix generation
    pub use chroma_primaries::{
        Chromaticities, ADOBE_RGB_D50, ADOBE_RGB_D65, PRO_PHOTO, RADIANCE, SRGB,
        rgb_to_xyz_matrix, xyz_to_rgb_matrix, xyy_to_xyz, xyz_to_xyy,
    };

    // Re-export single-channel curve helpers
    pub use chroma_transfer::{gamma_correct, gamma_uncorrect, linear_to_srgb, srgb_to_linear};

    // Re-export math
    pub use chroma_math::{Mat4, Vec3, Vec4};
}
