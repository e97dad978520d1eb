//! Plain-data output of a [SceneLoader](crate::SceneLoader).
//!
//! Nothing here refers back to the source [Document](scenery_schema::Document); a host may keep a
//! [DecodedScene] after dropping the document it came from.

mod debug;
mod iter;

use std::collections::BTreeMap;

use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use scenery_schema::{consts, Id};

pub use iter::*;

use crate::{convert::Color, Unsupported};

#[derive(Debug, Clone)]
pub struct DecodedScene {
    pub id: Id,
    pub name: Option<String>,
    pub roots: Vec<DecodedNode>,
    /// Every material referenced by a primitive in this scene.
    pub materials: BTreeMap<Id, MaterialDescriptor>,
}

impl DecodedScene {
    /// Iterate over every node in this scene, depth-first, in the order they were decoded.
    ///
    /// Each node is yielded along with its depth; roots have a depth of 0.
    pub fn nodes(&self) -> NodeIter<'_> {
        NodeIter::new(&self.roots)
    }

    pub fn primitive_count(&self) -> usize {
        self.nodes().map(|(n, _)| n.primitives.len()).sum()
    }

    #[inline]
    pub fn material(&self, id: &str) -> Option<&MaterialDescriptor> {
        self.materials.get(id)
    }
}

#[derive(Debug, Clone)]
pub struct DecodedNode {
    pub id: Id,
    pub name: Option<String>,
    /// Node space -> scene space
    pub transform: Matrix4<f32>,
    pub primitives: Vec<DecodedPrimitive>,
    pub camera: Option<CameraDescriptor>,
    pub children: Vec<DecodedNode>,
}

impl Drop for DecodedNode {
    // Unlinks descendants onto a flat stack; the derived drop would recurse once per level.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// A triangle list, in scene space.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPrimitive {
    /// The mesh which contained this primitive
    pub mesh: Id,
    pub mesh_name: Option<String>,
    pub positions: Vec<Point3<f32>>,
    /// Three per triangle
    pub indices: Vec<i32>,
    /// `TEXCOORD_0`, if present and well-typed.
    pub uvs: Option<Vec<Vector2<f32>>>,
    /// `NORMAL`, if present and well-typed. Unit length.
    pub normals: Option<Vec<Vector3<f32>>>,
    /// Key into [DecodedScene::materials]
    pub material: Option<Id>,
}

impl DecodedPrimitive {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraDescriptor {
    pub id: Id,
    pub name: Option<String>,
    pub projection: Projection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view, in radians
        yfov: f32,
        znear: f32,
        zfar: f32,
        aspect_ratio: Option<f32>,
    },
    Orthographic {
        xmag: f32,
        ymag: f32,
        znear: f32,
        zfar: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialDescriptor {
    pub id: Id,
    pub name: Option<String>,
    pub shader: Option<ShaderProgram>,
    pub ambient: Option<Color>,
    pub emission: Option<Color>,
    /// `diffuse`, when given as a color rather than a texture
    pub diffuse_color: Option<Color>,
    pub diffuse: Option<TextureDescriptor>,
}

/// The shader sources of a material's technique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    pub program: Id,
    pub vertex: String,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    pub id: Id,
    pub name: Option<String>,
    pub image: Id,
    /// Encoded image data, exactly as attached to the document
    pub data: Vec<u8>,
    pub wrap: WrapMode,
}

/// How texture coordinates outside `0..=1` are handled. Applies to both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    Clamp,
    #[default]
    Repeat,
    MirroredRepeat,
}

impl WrapMode {
    pub fn from_gl(value: u32) -> Result<Self, Unsupported> {
        match value {
            consts::CLAMP_TO_EDGE => Ok(Self::Clamp),
            consts::REPEAT => Ok(Self::Repeat),
            consts::MIRRORED_REPEAT => Ok(Self::MirroredRepeat),
            _ => Err(Unsupported::WrapMode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_modes() {
        assert_eq!(WrapMode::from_gl(33071), Ok(WrapMode::Clamp));
        assert_eq!(WrapMode::from_gl(10497), Ok(WrapMode::Repeat));
        assert_eq!(WrapMode::from_gl(33648), Ok(WrapMode::MirroredRepeat));
        assert_eq!(WrapMode::from_gl(9729), Err(Unsupported::WrapMode(9729)));
    }
}
