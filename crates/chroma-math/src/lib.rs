//! # chroma-math
//!
//! Math primitives for the chroma-rs color profile engine.
//!
//! This crate provides the types the transform builder and converters work
//! in:
//!
//! - [`Mat4`] - 4x4 homogeneous matrices for RGB/XYZ transforms
//! - [`Vec4`] - 4-component colors (RGB+alpha or XYZ+w)
//! - [`Vec3`] - 3-component values (xyY triplets, XYZ directions)
//!
//! # Design
//!
//! Color transforms here are 3x3 at heart but carried in homogeneous 4x4
//! form so a 4-component color passes through in a single multiply with its
//! fourth component untouched. All matrix operations assume **row-major**
//! storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat4, Vec4};
//!
//! // sRGB to XYZ (D65), homogeneous
//! let rgb_to_xyz = Mat4::from_mat3_rows([
//!     [0.4123908, 0.3575843, 0.1804808],
//!     [0.2126390, 0.7151687, 0.0721923],
//!     [0.0193308, 0.1191948, 0.9505322],
//! ]);
//!
//! let rgb = Vec4::new(1.0, 1.0, 1.0, 1.0);
//! let xyz = rgb_to_xyz * rgb;
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//! assert_eq!(xyz.w, 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Fast SIMD-accelerated math (backs inversion and determinant)
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix generation
//! - `chroma-profile` - Converter strategies

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod vec3;
mod vec4;

pub use mat4::*;
pub use vec3::*;
pub use vec4::*;
