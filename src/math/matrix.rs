use nalgebra as na;
use approx::{AbsDiffEq, RelativeEq};
use crate::math::{Vector3, Vector4};
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

// Matrices are stored column-major: `data[c][r]` is column `c`, row `r`.
// With `repr(C)` the struct is byte-compatible with a GPU uniform expecting a
// column-major float matrix, so `value_ptr` can be uploaded directly.

/// A 3x3 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Matrix3 {
    pub data: [[f32; 3]; 3],
}

/// A 4x4 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Matrix4 {
    pub data: [[f32; 4]; 4],
}

// === Matrix3 Implementation ===

impl Matrix3 {
    /// Creates a new 3x3 matrix from its columns
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    /// Creates a new 3x3 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Column `c` as a vector
    #[inline]
    pub fn column(&self, c: usize) -> Vector3 {
        Vector3::from(self.data[c])
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        Self {
            data: [
                [a, d, g],
                [b, e, h],
                [c, f, i],
            ],
        }
    }

    /// The nine floats in column-major order
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_flattened()
    }

    /// Raw pointer to nine contiguous column-major floats
    #[inline]
    pub fn value_ptr(&self) -> *const f32 {
        self.data.as_ptr().cast()
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        na::Matrix3::from_column_slice(self.as_slice())
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        let mut result = Self::identity();
        for (c, column) in m.column_iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                result.data[c][r] = *value;
            }
        }
        result
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Upper-left 3x3 block
impl From<Matrix4> for Matrix3 {
    fn from(m: Matrix4) -> Self {
        let d = &m.data;
        Self {
            data: [
                [d[0][0], d[0][1], d[0][2]],
                [d[1][0], d[1][1], d[1][2]],
                [d[2][0], d[2][1], d[2][2]],
            ],
        }
    }
}

impl Index<usize> for Matrix3 {
    type Output = [f32; 3];
    #[inline]
    fn index(&self, column: usize) -> &[f32; 3] {
        &self.data[column]
    }
}

impl IndexMut<usize> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, column: usize) -> &mut [f32; 3] {
        &mut self.data[column]
    }
}

/// Linear combination of the columns weighted by the vector's components
impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = &self.data;
        writeln!(f, "[ {}, {}, {} ]", d[0][0], d[1][0], d[2][0])?;
        writeln!(f, "[ {}, {}, {} ]", d[0][1], d[1][1], d[2][1])?;
        write!(f, "[ {}, {}, {} ]", d[0][2], d[1][2], d[2][2])
    }
}

// === Matrix4 Implementation ===

impl Matrix4 {
    /// Creates a new 4x4 matrix from its columns
    #[inline]
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    /// Creates a new 4x4 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a new 4x4 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self { data: [[0.0; 4]; 4] }
    }

    /// Builds a matrix from four column vectors
    #[inline]
    pub fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self {
            data: [c0.into(), c1.into(), c2.into(), c3.into()],
        }
    }

    /// Creates a new 4x4 translation matrix
    #[inline]
    pub fn from_translation(translation: Vector3) -> Self {
        let mut result = Self::identity();
        result.data[3] = [translation.x, translation.y, translation.z, 1.0];
        result
    }

    /// Creates a new 4x4 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        Self {
            data: [
                [scale.x, 0.0, 0.0, 0.0],
                [0.0, scale.y, 0.0, 0.0],
                [0.0, 0.0, scale.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Column `c` as a vector
    #[inline]
    pub fn column(&self, c: usize) -> Vector4 {
        Vector4::from(self.data[c])
    }

    #[inline]
    pub fn set_column(&mut self, c: usize, column: Vector4) {
        self.data[c] = column.into();
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();

        for c in 0..4 {
            for r in 0..4 {
                result.data[c][r] = self.data[r][c];
            }
        }

        result
    }

    /// Transforms a point (w = 1) without perspective divide
    #[inline]
    pub fn multiply_point(&self, p: Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(p, 1.0)).xyz()
    }

    /// Transforms a direction (w = 0)
    #[inline]
    pub fn multiply_direction(&self, v: Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(v, 0.0)).xyz()
    }

    /// Extract the translation column
    #[inline]
    pub fn translation(&self) -> Vector3 {
        self.column(3).xyz()
    }

    /// The sixteen floats in column-major order
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_flattened()
    }

    /// Copy of the sixteen floats in column-major order
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.as_slice());
        out
    }

    /// Raw pointer to sixteen contiguous column-major floats, suitable for a
    /// uniform upload of a `mat4`.
    #[inline]
    pub fn value_ptr(&self) -> *const f32 {
        self.data.as_ptr().cast()
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix4<f32> {
        na::Matrix4::from_column_slice(self.as_slice())
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix4<f32>) -> Self {
        let mut result = Self::zero();
        for (c, column) in m.column_iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                result.data[c][r] = *value;
            }
        }
        result
    }
}

/// Standalone transpose, swapping `m[c][r]` with `m[r][c]`
#[inline]
pub fn transpose(m: &Matrix4) -> Matrix4 {
    m.transpose()
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix4 {
    type Output = [f32; 4];
    #[inline]
    fn index(&self, column: usize) -> &[f32; 4] {
        &self.data[column]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, column: usize) -> &mut [f32; 4] {
        &mut self.data[column]
    }
}

/// Linear combination of the columns weighted by the vector's components
impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z + self.column(3) * v.w
    }
}

/// `a * b` applies `a` to every column of `b`
impl Mul for Matrix4 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::from_columns(
            self * rhs.column(0),
            self * rhs.column(1),
            self * rhs.column(2),
            self * rhs.column(3),
        )
    }
}

impl AbsDiffEq for Matrix4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = &self.data;
        for r in 0..4 {
            write!(f, "[ {}, {}, {}, {} ]", d[0][r], d[1][r], d[2][r], d[3][r])?;
            if r < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
