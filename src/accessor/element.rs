use nalgebra::{Matrix2, Matrix3, Matrix4, Point2, Point3, Point4, Vector2, Vector3, Vector4};

use super::AccessorType;

/// Upper bound on [AccessorType::components].
pub const MAX_COMPONENTS: usize = 16;

/// A type which can be constructed from a single accessor element.
pub trait Element: Sized {
    /// The structural type an accessor must declare to be read as `Self`.
    const TYPE: AccessorType;
    /// Construct an element from exactly `TYPE.components()` values, in the order they are
    /// stored (column-major, for matrices).
    ///
    /// Returns `None` if some value has no representation in `Self`.
    fn from_components(components: &[f64]) -> Option<Self>;
}

macro_rules! impl_element {
    ($ty:ident => $Target:ty, |$c:ident| $build:expr) => {
        impl_element!($ty => $Target, fallible |$c| Some($build));
    };
    ($ty:ident => $Target:ty, fallible |$c:ident| $build:expr) => {
        const _: () = {
            // one 32-bit lane per component
            static_assertions::const_assert_eq!(
                std::mem::size_of::<$Target>(),
                AccessorType::$ty.components() * 4
            );
            static_assertions::const_assert!(AccessorType::$ty.components() <= MAX_COMPONENTS);

            impl Element for $Target {
                const TYPE: AccessorType = AccessorType::$ty;
                #[inline]
                fn from_components($c: &[f64]) -> Option<Self> {
                    $build
                }
            }
        };
    };
}

// `as i64` is exact for every integer component type, and saturates floats well outside i32.
impl_element!(Scalar => i32, fallible |c| i32::try_from(c[0] as i64).ok());
impl_element!(Scalar => f32, |c| c[0] as f32);
impl_element!(Vec2 => Vector2<f32>, |c| Vector2::new(c[0] as f32, c[1] as f32));
impl_element!(Vec2 => Point2<f32>, |c| Point2::new(c[0] as f32, c[1] as f32));
impl_element!(Vec3 => Vector3<f32>, |c| Vector3::new(c[0] as f32, c[1] as f32, c[2] as f32));
impl_element!(Vec3 => Point3<f32>, |c| Point3::new(c[0] as f32, c[1] as f32, c[2] as f32));
impl_element!(Vec4 => Vector4<f32>, |c| Vector4::new(
    c[0] as f32,
    c[1] as f32,
    c[2] as f32,
    c[3] as f32
));
impl_element!(Vec4 => Point4<f32>, |c| Point4::new(
    c[0] as f32,
    c[1] as f32,
    c[2] as f32,
    c[3] as f32
));
impl_element!(Mat2 => Matrix2<f32>, |c| Matrix2::from_iterator(c.iter().map(|&v| v as f32)));
impl_element!(Mat3 => Matrix3<f32>, |c| Matrix3::from_iterator(c.iter().map(|&v| v as f32)));
impl_element!(Mat4 => Matrix4<f32>, |c| Matrix4::from_iterator(c.iter().map(|&v| v as f32)));
