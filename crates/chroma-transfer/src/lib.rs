//! # chroma-transfer
//!
//! Gamma transfer curves for the chroma-rs color profile engine.
//!
//! Transfer curves convert between linear light and the nonlinear encoded
//! values pixels are stored in.
//!
//! # Terminology
//!
//! - **encode**: linear -> encoded (gamma correction, e.g. before saving)
//! - **decode**: encoded -> linear (gamma expansion, e.g. after loading)
//!
//! # Supported Curves
//!
//! | Curve | Shape | Exponent |
//! |-------|-------|----------|
//! | [`gamma`] | Pure power law | arbitrary |
//! | [`srgb`] | Linear toe below 0.0031308 | 2.4 |
//! | [`prophoto`] | Linear toe below 1/512 | 1.8 |
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::{srgb, gamma};
//!
//! // Decode an sRGB pixel to linear
//! let linear = srgb::decode(0.5);
//!
//! // Encode linear back to sRGB
//! let encoded = srgb::encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//!
//! // Arbitrary power law (e.g. legacy JPEG 2.2)
//! let corrected = gamma::encode(0.18, 2.2);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Curve tags for dispatch
//!
//! # Used By
//!
//! - `chroma-profile` - Converter strategies

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod gamma;
pub mod prophoto;
pub mod srgb;

// Re-export common functions
pub use curve::{decode as curve_decode, encode as curve_encode};
pub use gamma::{gamma_correct, gamma_uncorrect};
pub use srgb::{decode as srgb_to_linear, encode as linear_to_srgb};
