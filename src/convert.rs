//! Conversions from the flat numeric lists found in glTF documents to math types.
//!
//! Each conversion accepts only the exact number of components its target needs; nothing is
//! padded or truncated.

use nalgebra::{Matrix4, Quaternion, Vector2, Vector3, Vector4};
use num_traits::AsPrimitive;

use crate::Error;

/// A linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Alpha value of a fully opaque color
    pub const OPAQUE: f32 = 1.0;

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, Self::OPAQUE)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Color> for Vector4<f32> {
    #[inline]
    fn from(c: Color) -> Self {
        nalgebra::vector![c.r, c.g, c.b, c.a]
    }
}

#[inline]
fn arity(expected: &'static str, actual: usize) -> Error {
    Error::InvalidArity { expected, actual }
}

/// Construct a [Color] from `[r, g, b]` or `[r, g, b, a]`. Three-component colors are opaque.
///
/// # Errors
///
/// * `values.len()` ∉ {3, 4}
pub fn to_color<T: AsPrimitive<f32>>(values: &[T]) -> Result<Color, Error> {
    match *values {
        [r, g, b, a] => Ok(Color::new(r.as_(), g.as_(), b.as_(), a.as_())),
        [r, g, b] => Ok(Color::rgb(r.as_(), g.as_(), b.as_())),
        _ => Err(arity("3 or 4", values.len())),
    }
}

/// Construct a 4x4 matrix from 16 values in column-major order, such that `m[(r, c)] ==
/// values[c * 4 + r]`.
///
/// # Errors
///
/// * `values.len() != 16`
pub fn to_matrix4(values: &[f32]) -> Result<Matrix4<f32>, Error> {
    if values.len() != 16 {
        return Err(arity("16", values.len()));
    }
    Ok(Matrix4::from_column_slice(values))
}

/// # Errors
///
/// * `values.len() != 2`
pub fn to_vector2(values: &[f32]) -> Result<Vector2<f32>, Error> {
    <[f32; 2]>::try_from(values)
        .map(Vector2::from)
        .map_err(|_| arity("2", values.len()))
}

/// # Errors
///
/// * `values.len() != 3`
pub fn to_vector3(values: &[f32]) -> Result<Vector3<f32>, Error> {
    <[f32; 3]>::try_from(values)
        .map(Vector3::from)
        .map_err(|_| arity("3", values.len()))
}

/// # Errors
///
/// * `values.len() != 4`
pub fn to_vector4(values: &[f32]) -> Result<Vector4<f32>, Error> {
    <[f32; 4]>::try_from(values)
        .map(Vector4::from)
        .map_err(|_| arity("4", values.len()))
}

/// Construct a quaternion from `[x, y, z, w]`. The result is not normalized.
///
/// # Errors
///
/// * `values.len() != 4`
pub fn to_quaternion(values: &[f32]) -> Result<Quaternion<f32>, Error> {
    match *values {
        [x, y, z, w] => Ok(Quaternion::new(w, x, y, z)),
        _ => Err(arity("4", values.len())),
    }
}
