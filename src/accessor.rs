//! Typed reads from glTF buffers, as described by accessors.
//!
//! # Notes
//!
//! * An accessor's first element starts at `bufferView.byteOffset + accessor.byteOffset`.
//! * `byteStride` is the distance between the *starts* of consecutive elements; `0` means the
//!   elements are tightly packed. Anything between the end of one element and the start of the
//!   next (ex. the other attributes of an interleaved vertex) is skipped.
//! * All multi-byte components are little-endian.
//! * Every component is widened to `f64` before being narrowed into the requested element type,
//!   so ex. an index stored as `f32` is truncated toward zero.

mod element;

use nalgebra::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
use scenery_schema::{consts, Accessor, Document, Id};

pub use element::*;

use crate::{Error, Invalid, Unsupported};

/// The type of each component of an accessor's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    I8,
    U8,
    I16,
    U16,
    U32,
    F32,
}

impl ComponentType {
    /// Interpret a glTF `componentType` value.
    pub fn from_gl(value: u32) -> Result<Self, Unsupported> {
        match value {
            consts::BYTE => Ok(Self::I8),
            consts::UNSIGNED_BYTE => Ok(Self::U8),
            consts::SHORT => Ok(Self::I16),
            consts::UNSIGNED_SHORT => Ok(Self::U16),
            consts::UNSIGNED_INT => Ok(Self::U32),
            consts::FLOAT => Ok(Self::F32),
            _ => Err(Unsupported::ComponentType(value)),
        }
    }

    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            Self::I8 => size_of::<i8>(),
            Self::U8 => size_of::<u8>(),
            Self::I16 => size_of::<i16>(),
            Self::U16 => size_of::<u16>(),
            Self::U32 => size_of::<u32>(),
            Self::F32 => size_of::<f32>(),
        }
    }

    /// Decode the component at the front of `bytes`, or `None` if `bytes` is too short.
    #[inline]
    pub fn decode(self, bytes: &[u8]) -> Option<f64> {
        Some(match self {
            Self::I8 => f64::from(i8::from_le_bytes(le(bytes)?)),
            Self::U8 => f64::from(u8::from_le_bytes(le(bytes)?)),
            Self::I16 => f64::from(i16::from_le_bytes(le(bytes)?)),
            Self::U16 => f64::from(u16::from_le_bytes(le(bytes)?)),
            Self::U32 => f64::from(u32::from_le_bytes(le(bytes)?)),
            Self::F32 => f64::from(f32::from_le_bytes(le(bytes)?)),
        })
    }
}

#[inline(always)]
fn le<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    bytes.get(..N)?.try_into().ok()
}

/// The structure of an accessor's elements.
///
/// Values taken from the [glTF specification](https://github.com/KhronosGroup/glTF/tree/main/specification/1.0#accessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AccessorType {
    /// Interpret a glTF accessor `type` value.
    pub fn from_gltf(value: &str) -> Result<Self, Unsupported> {
        match value {
            "SCALAR" => Ok(Self::Scalar),
            "VEC2" => Ok(Self::Vec2),
            "VEC3" => Ok(Self::Vec3),
            "VEC4" => Ok(Self::Vec4),
            "MAT2" => Ok(Self::Mat2),
            "MAT3" => Ok(Self::Mat3),
            "MAT4" => Ok(Self::Mat4),
            _ => Err(Unsupported::AccessorType(value.to_owned())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
        }
    }

    /// Number of components per element.
    pub const fn components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
            Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }

    pub const fn size_bytes(self, comp: ComponentType) -> usize {
        comp.size() * self.components()
    }
}

impl std::fmt::Display for AccessorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated view of the data behind a single accessor.
///
/// Construction checks that every element the accessor declares lies within its buffer; reads
/// never touch bytes outside that range, and may be repeated.
#[derive(Debug, Clone)]
pub struct AccessorReader<'doc> {
    id: Id,
    accessor: &'doc Accessor,
    /// Bytes from the first element to the end of the last stride
    bytes: &'doc [u8],
    offset: usize,
    component: ComponentType,
    ty: AccessorType,
    /// Padding between the end of one element and the start of the next
    skip: usize,
}

static_assertions::assert_impl_all!(AccessorReader<'static>: Send, Sync);

impl<'doc> AccessorReader<'doc> {
    /// Resolve an accessor, its buffer view, and its buffer.
    ///
    /// # Errors
    ///
    /// * any of the three is unresolved, or the buffer has no attached data
    /// * the accessor's component type or structural type is unknown
    /// * `byteStride` is nonzero, but smaller than one element
    /// * `count * byteStride` (or `count * elementSize`, if unstrided) exceeds the bytes between
    ///   the accessor's start and the end of its buffer
    pub fn new(doc: &'doc Document, id: &str) -> Result<Self, Error> {
        let accessor = doc.accessor(id)?;
        let view = doc.buffer_view(&accessor.buffer_view)?;
        let data = doc.buffer_data(&view.buffer)?;

        let component = ComponentType::from_gl(accessor.component_type)?;
        let ty = AccessorType::from_gltf(&accessor.ty)?;
        let element_size = ty.size_bytes(component);
        let stride = accessor.byte_stride;
        let skip = match stride {
            0 => 0,
            s if s < element_size => {
                return Err(Invalid::Stride {
                    accessor: Id::from(id),
                    stride,
                    element_size,
                }
                .into())
            }
            s => s - element_size,
        };

        let offset = view.byte_offset.saturating_add(accessor.byte_offset);
        let required = accessor
            .count
            .checked_mul(element_size + skip)
            .unwrap_or(usize::MAX);
        let available = data.len().saturating_sub(offset);
        if required > available {
            return Err(Error::OutOfRange {
                accessor: Id::from(id),
                offset,
                required,
                available,
            });
        }

        tracing::trace!(
            id,
            component = ?component,
            ty = ty.as_str(),
            count = accessor.count,
            stride,
            offset,
            "reading accessor"
        );

        Ok(Self {
            id: Id::from(id),
            accessor,
            bytes: data.get(offset..offset + required).unwrap_or(&[][..]),
            offset,
            component,
            ty,
            skip,
        })
    }

    #[inline]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// The number of elements in this accessor.
    #[inline]
    pub fn len(&self) -> usize {
        self.accessor.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accessor.count == 0
    }

    #[inline]
    pub fn component_type(&self) -> ComponentType {
        self.component
    }

    #[inline]
    pub fn accessor_type(&self) -> AccessorType {
        self.ty
    }

    /// Distance between the starts of consecutive elements, in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.ty.size_bytes(self.component) + self.skip
    }

    /// Read every element of this accessor as a `T`.
    ///
    /// # Errors
    ///
    /// * `T::TYPE != self.accessor_type()`
    /// * some element has no representation in `T`
    pub fn read_array<T: Element>(&self) -> Result<Vec<T>, Error> {
        if T::TYPE != self.ty {
            return Err(Error::WrongType {
                accessor: self.id.clone(),
                expected: T::TYPE,
                actual: self.ty,
            });
        }

        let width = self.ty.components();
        let size = self.component.size();
        let mut components = [0f64; MAX_COMPONENTS];
        let mut res = Vec::with_capacity(self.len());
        let mut cursor = 0;
        for _ in 0..self.len() {
            for comp in &mut components[..width] {
                *comp = self
                    .bytes
                    .get(cursor..)
                    .and_then(|b| self.component.decode(b))
                    .ok_or_else(|| self.out_of_range(cursor + size))?;
                cursor += size;
            }
            let element = T::from_components(&components[..width]).ok_or_else(|| {
                Error::Unrepresentable {
                    accessor: self.id.clone(),
                    index: res.len(),
                    target: std::any::type_name::<T>(),
                }
            })?;
            res.push(element);
            cursor += self.skip;
        }
        Ok(res)
    }

    /// Should be unreachable, given the check in [Self::new].
    #[cold]
    fn out_of_range(&self, required: usize) -> Error {
        Error::OutOfRange {
            accessor: self.id.clone(),
            offset: self.offset,
            required,
            available: self.bytes.len(),
        }
    }

    /// Read a `SCALAR` accessor as integers, truncating fractional values toward zero.
    ///
    /// Values outside the range of `i32`, such as `UNSIGNED_INT` indices above `i32::MAX`, fail
    /// with [Error::Unrepresentable].
    #[inline]
    pub fn read_int_array(&self) -> Result<Vec<i32>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_float_array(&self) -> Result<Vec<f32>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_vector2_array(&self) -> Result<Vec<Vector2<f32>>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_vector3_array(&self) -> Result<Vec<Vector3<f32>>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_vector4_array(&self) -> Result<Vec<Vector4<f32>>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_matrix2_array(&self) -> Result<Vec<Matrix2<f32>>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_matrix3_array(&self) -> Result<Vec<Matrix3<f32>>, Error> {
        self.read_array()
    }

    #[inline]
    pub fn read_matrix4_array(&self) -> Result<Vec<Matrix4<f32>>, Error> {
        self.read_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_components() {
        assert_eq!(ComponentType::I8.decode(&[0xFF]), Some(-1.0));
        assert_eq!(ComponentType::U8.decode(&[0xFF]), Some(255.0));
        assert_eq!(ComponentType::I16.decode(&[0x00, 0x80]), Some(-32768.0));
        assert_eq!(ComponentType::U16.decode(&[0x34, 0x12]), Some(4660.0));
        assert_eq!(
            ComponentType::U32.decode(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Some(4294967295.0)
        );
        assert_eq!(
            ComponentType::F32.decode(&1.5f32.to_le_bytes()),
            Some(1.5)
        );
        // trailing bytes belong to the next component
        assert_eq!(ComponentType::U16.decode(&[1, 0, 9, 9]), Some(1.0));
        assert_eq!(ComponentType::F32.decode(&[0, 0, 0]), None);
        assert_eq!(ComponentType::U8.decode(&[]), None);
    }

    #[test]
    fn component_types() {
        assert_eq!(ComponentType::from_gl(5120), Ok(ComponentType::I8));
        assert_eq!(ComponentType::from_gl(5126), Ok(ComponentType::F32));
        assert_eq!(
            ComponentType::from_gl(5124),
            Err(Unsupported::ComponentType(5124))
        );
        assert_eq!(ComponentType::I16.size(), 2);
        assert_eq!(AccessorType::Mat3.size_bytes(ComponentType::F32), 36);
    }

    #[test]
    fn accessor_types() {
        for ty in [
            AccessorType::Scalar,
            AccessorType::Vec2,
            AccessorType::Vec3,
            AccessorType::Vec4,
            AccessorType::Mat2,
            AccessorType::Mat3,
            AccessorType::Mat4,
        ] {
            assert_eq!(AccessorType::from_gltf(ty.as_str()), Ok(ty));
        }
        assert_eq!(
            AccessorType::from_gltf("vec3"),
            Err(Unsupported::AccessorType("vec3".to_owned()))
        );
    }
}
