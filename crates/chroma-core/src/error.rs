//! Error types for chroma-rs operations.
//!
//! The color profile engine is pure computation, so the failure surface is
//! small and entirely structural: either the caller asked for a profile
//! that cannot be constructed, or the supplied chromaticities do not span a
//! usable gamut. Recognition returning `Custom` or `Invalid` is a normal
//! outcome, not an error.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result, StandardProfile};
//!
//! fn check_constructible(profile: StandardProfile) -> Result<()> {
//!     match profile {
//!         StandardProfile::Invalid | StandardProfile::Custom => {
//!             Err(Error::UnsupportedProfile { profile })
//!         }
//!         _ => Ok(()),
//!     }
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::profile::StandardProfile;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a color profile.
///
/// All operations in the engine are deterministic, so a failed operation
/// fails identically on retry; these errors are fatal to the construction
/// or rebuild that raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A profile was requested from a tag that carries no constants.
    ///
    /// Only the named standard profiles (`Linear`, `Srgb`, `AdobeRgbD50`,
    /// `AdobeRgbD65`, `ProPhoto`, `Radiance`) can seed a profile;
    /// `Invalid` and `Custom` are recognition outcomes, not constructors.
    #[error("cannot construct a profile from the {profile:?} tag")]
    UnsupportedProfile {
        /// The tag that was rejected.
        profile: StandardProfile,
    },

    /// The chromaticities describe a degenerate gamut.
    ///
    /// Raised when the three primaries are collinear in xy space, which
    /// makes the primary basis matrix singular. The engine refuses to
    /// propagate NaN through a silent inversion failure.
    #[error("degenerate profile: primaries are collinear, basis matrix is singular")]
    DegenerateProfile,
}

impl Error {
    /// Returns `true` if this error came from an unconstructible tag.
    #[inline]
    pub fn is_unsupported_profile(&self) -> bool {
        matches!(self, Self::UnsupportedProfile { .. })
    }

    /// Returns `true` if this error came from a singular primary basis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateProfile)
    }
}
