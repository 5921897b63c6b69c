//! 4x4 homogeneous matrix type for color transformations.
//!
//! [`Mat4`] carries the RGB-to-XYZ transforms of the engine. The color
//! math is 3x3, embedded in homogeneous form with an identity fourth row
//! and column so a 4-component color converts in one multiply with its
//! fourth component passed through.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |
//! | m10 m11 m12 m13 | * | y |
//! | m20 m21 m22 m23 |   | z |
//! | m30 m31 m32 m33 |   | w |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat4, Vec4};
//!
//! let m = Mat4::IDENTITY;
//! let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
//! assert_eq!(m * v, v);
//! ```

use crate::{Vec3, Vec4};
use std::ops::{Index, Mul};

/// A 4x4 homogeneous matrix for color transformations.
///
/// Stored in row-major order. Use [`Mat4::from_rows`] or
/// [`Mat4::from_mat3_rows`] to construct from component arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a homogeneous matrix from a 3x3 block given as rows.
    ///
    /// The fourth row and column are identity, so the `w` component of a
    /// transformed [`Vec4`] passes through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::{Mat4, Vec4};
    ///
    /// let scale = Mat4::from_mat3_rows([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 2.0],
    /// ]);
    /// let v = scale * Vec4::new(1.0, 1.0, 1.0, 0.5);
    /// assert_eq!(v, Vec4::new(2.0, 2.0, 2.0, 0.5));
    /// ```
    #[inline]
    pub const fn from_mat3_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::from_rows([
            [rows[0][0], rows[0][1], rows[0][2], 0.0],
            [rows[1][0], rows[1][1], rows[1][2], 0.0],
            [rows[2][0], rows[2][1], rows[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a homogeneous matrix from three [`Vec3`] columns.
    ///
    /// Used by the transform builder: the columns are the XYZ directions
    /// of the R, G and B primaries.
    #[inline]
    pub fn from_mat3_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_mat3_rows([
            [c0.x, c1.x, c2.x],
            [c0.y, c1.y, c2.y],
            [c0.z, c1.z, c2.z],
        ])
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut t = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                t.m[i][j] = self.m[j][i];
            }
        }
        t
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    /// This is the guard the transform builder relies on to reject
    /// degenerate (collinear-primary) profiles instead of propagating NaN.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::Mat4;
    ///
    /// let m = Mat4::from_mat3_rows([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0],
    ///     [0.0, 0.0, 8.0],
    /// ]);
    /// let inv = m.inverse().unwrap();
    /// assert!((inv.m[2][2] - 0.125).abs() < 1e-6);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        let det = g.determinant();
        if det.abs() < 1e-10 {
            return None;
        }
        Some(Self::from_glam(g.inverse()))
    }

    /// Transforms a Vec4 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z + self.m[0][3] * v.w,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z + self.m[1][3] * v.w,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z + self.m[2][3] * v.w,
            self.m[3][0] * v.x + self.m[3][1] * v.y + self.m[3][2] * v.z + self.m[3][3] * v.w,
        )
    }

    /// Transforms only the first three components, passing `w` through.
    ///
    /// For the homogeneous matrices this engine builds (identity fourth
    /// row/column) this equals [`transform`](Self::transform) but skips
    /// the fourth row.
    #[inline]
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam uses column-major, so we transpose
        glam::Mat4::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
            [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
        ])
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(g: glam::Mat4) -> Self {
        let c = g.to_cols_array_2d();
        Self::from_rows([
            [c[0][0], c[1][0], c[2][0], c[3][0]],
            [c[0][1], c[1][1], c[2][1], c[3][1]],
            [c[0][2], c[1][2], c[2][2], c[3][2]],
            [c[0][3], c[1][3], c[2][3], c[3][3]],
        ])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
    }

    #[test]
    fn test_mat4_from_mat3_passes_w() {
        let m = Mat4::from_mat3_rows([
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let v = m * Vec4::new(1.0, 2.0, 3.0, 0.5);
        assert_eq!(v, Vec4::new(2.0, 1.0, 3.0, 0.5));
    }

    #[test]
    fn test_mat4_transpose() {
        let m = Mat4::from_mat3_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        let t = m.transpose();
        assert_eq!(t.m[0][1], 4.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(t.m[3][3], 1.0);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = Mat4::from_mat3_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let inv = m.inverse().unwrap();
        let result = m * inv;

        // Should be close to identity
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                approx::assert_abs_diff_eq!(result.m[i][j], expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_mat4_singular() {
        let m = Mat4::from_mat3_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat4_mul_mat() {
        let a = Mat4::from_mat3_rows([
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let b = a * a;
        assert_eq!(b.m[0][0], 4.0);
        assert_eq!(b.m[3][3], 1.0);
    }

    #[test]
    fn test_transform_vec3_matches_vec4() {
        let m = Mat4::from_mat3_rows([
            [0.4, 0.3, 0.2],
            [0.2, 0.7, 0.1],
            [0.0, 0.1, 0.9],
        ]);
        let v3 = m.transform_vec3(Vec3::new(0.5, 0.25, 0.125));
        let v4 = m.transform(Vec4::new(0.5, 0.25, 0.125, 1.0));
        assert_eq!(v3, v4.xyz());
        assert_eq!(v4.w, 1.0);
    }
}
