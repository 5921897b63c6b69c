//! 4-component color vector.
//!
//! [`Vec4`] is the color carrier of the engine: RGBA colors and XYZ+w
//! values both travel as four floats. The fourth component rides through
//! homogeneous matrix transforms unchanged and is never gamma-corrected.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::Vec4;
//!
//! let rgba = Vec4::new(1.0, 0.5, 0.25, 1.0);
//! assert_eq!(rgba.w, 1.0);
//! ```

use crate::Vec3;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 4-component color vector (RGBA or XYZ+w).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, `.w` or index `[0]`..`[3]`.
/// For RGBA: x=R, y=G, z=B, w=A. For XYZ: x=X, y=Y, z=Z, w carried.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component (R for RGB, X for XYZ).
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ).
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ).
    pub z: f32,
    /// W component (alpha; carried through transforms untouched).
    pub w: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector from a [`Vec3`] and a fourth component.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The first three components as a [`Vec3`].
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Applies `f` to the first three components, leaving `w` untouched.
    ///
    /// This is how per-channel gamma curves are applied to a color: the
    /// alpha/w component never participates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::Vec4;
    ///
    /// let c = Vec4::new(4.0, 9.0, 16.0, 0.5);
    /// let r = c.map_rgb(f32::sqrt);
    /// assert_eq!(r, Vec4::new(2.0, 3.0, 4.0, 0.5));
    /// ```
    #[inline]
    pub fn map_rgb(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), self.w)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_basics() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::from_vec3(v.xyz(), 9.0).w, 9.0);
    }

    #[test]
    fn test_map_rgb_preserves_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 0.25);
        let doubled = v.map_rgb(|c| c * 2.0);
        assert_eq!(doubled, Vec4::new(2.0, 4.0, 6.0, 0.25));
    }

    #[test]
    fn test_vec4_glam_roundtrip() {
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Vec4::from_glam(v.to_glam()), v);
    }
}
