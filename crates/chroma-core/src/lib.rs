//! # chroma-core
//!
//! Core types for the chroma-rs color profile engine.
//!
//! This crate provides the foundational identifiers used throughout the
//! chroma-rs workspace:
//!
//! - [`StandardProfile`] - Tags for the recognized industry color profiles
//! - [`GammaCurve`] - The supported transfer curve shapes
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Design
//!
//! A color profile's identity is always *derived*: the engine reconstructs
//! the [`StandardProfile`] tag from chromaticity coordinates (and, when
//! requested, the gamma curve) rather than trusting a stored label. The
//! enums in this crate are therefore plain tags; the chromaticity constants
//! they correspond to live in `chroma-primaries`, and the transfer curves
//! in `chroma-transfer`.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of chroma-rs and has no internal
//! dependencies. All other chroma-rs crates depend on `chroma-core`:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-math (vectors, matrices)
//!    +-- chroma-transfer (gamma curves)
//!    +-- chroma-primaries (chromaticities, RGB/XYZ matrices)
//!    +-- chroma-profile (the ColorProfile facade)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod profile;

pub use error::{Error, Result};
pub use profile::{
    GammaCurve, StandardProfile, GAMMA_EXPONENT_ADOBE, GAMMA_EXPONENT_PRO_PHOTO,
    GAMMA_EXPONENT_SRGB,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use chroma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::profile::{GammaCurve, StandardProfile};
}
