//! WebGL enum values used by glTF 1.0.
//!
//! # Notes
//!
//! * `accessor.componentType`
//!   - `5120`: i8
//!   - `5121`: u8
//!   - `5122`: i16
//!   - `5123`: u16
//!   - `5125`: u32 (only with `OES_element_index_uint`)
//!   - `5126`: f32
//! * `accessor.type`: one of `SCALAR`, `VEC2`, `VEC3`, `VEC4`, `MAT2`, `MAT3`, `MAT4`
//! * `primitive.mode`: `0` POINTS, `1` LINES, `2` LINE_LOOP, `3` LINE_STRIP, `4` TRIANGLES, `5`
//!   TRIANGLE_STRIP, `6` TRIANGLE_FAN; defaults to TRIANGLES
//! * `sampler.wrapS` / `sampler.wrapT`: `33071` CLAMP_TO_EDGE, `33648` MIRRORED_REPEAT, `10497`
//!   REPEAT; defaults to REPEAT
//! * `shader.type`: `35632` FRAGMENT_SHADER, `35633` VERTEX_SHADER
//!
//! # See Also
//!
//! * [glTF 1.0 Specification](https://github.com/KhronosGroup/glTF/tree/main/specification/1.0)

pub const BYTE: u32 = 5120;
pub const UNSIGNED_BYTE: u32 = 5121;
pub const SHORT: u32 = 5122;
pub const UNSIGNED_SHORT: u32 = 5123;
pub const UNSIGNED_INT: u32 = 5125;
pub const FLOAT: u32 = 5126;

pub const POINTS: u32 = 0;
pub const LINES: u32 = 1;
pub const LINE_LOOP: u32 = 2;
pub const LINE_STRIP: u32 = 3;
pub const TRIANGLES: u32 = 4;
pub const TRIANGLE_STRIP: u32 = 5;
pub const TRIANGLE_FAN: u32 = 6;

pub const CLAMP_TO_EDGE: u32 = 33071;
pub const MIRRORED_REPEAT: u32 = 33648;
pub const REPEAT: u32 = 10497;

pub const FRAGMENT_SHADER: u32 = 35632;
pub const VERTEX_SHADER: u32 = 35633;

pub const ARRAY_BUFFER: u32 = 34962;
pub const ELEMENT_ARRAY_BUFFER: u32 = 34963;
