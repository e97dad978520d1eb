use std::collections::HashMap;

use serde::Deserialize;

use crate::{consts, Id};

/// A set of root nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub name: Option<String>,
    pub nodes: Vec<Id>,
}

/// An object within the node hierarchy.
///
/// Transform fields are kept as plain lists so that their lengths can be validated when they're
/// interpreted, instead of failing the whole parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    pub name: Option<String>,
    pub camera: Option<Id>,
    pub children: Vec<Id>,
    /// Column-major 4x4 matrix, applied after `translation`, `rotation`, and `scale`
    pub matrix: Option<Vec<f32>>,
    pub meshes: Vec<Id>,
    /// Unit quaternion, `[x, y, z, w]`
    pub rotation: Option<Vec<f32>>,
    pub scale: Option<Vec<f32>>,
    pub translation: Option<Vec<f32>>,
    pub joint_name: Option<String>,
    pub skeletons: Vec<Id>,
    pub skin: Option<Id>,
}

/// A set of primitives to be rendered together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// Geometry to be rendered with a single material.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
    /// Attribute semantic (`POSITION`, `NORMAL`, `TEXCOORD_0`, ...) -> accessor
    #[serde(default)]
    pub attributes: HashMap<String, Id>,
    /// If absent, vertices are drawn in order
    #[serde(default)]
    pub indices: Option<Id>,
    #[serde(default)]
    pub material: Option<Id>,
    #[serde(default = "default_mode")]
    pub mode: u32,
}

fn default_mode() -> u32 {
    consts::TRIANGLES
}

/// A projection from which a scene may be viewed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    #[serde(default)]
    pub name: Option<String>,
    /// `perspective` or `orthographic`
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub perspective: Option<Perspective>,
    #[serde(default)]
    pub orthographic: Option<Orthographic>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    #[serde(default)]
    pub aspect_ratio: Option<f32>,
    /// Vertical field of view, in radians
    pub yfov: f32,
    pub zfar: f32,
    pub znear: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orthographic {
    pub xmag: f32,
    pub ymag: f32,
    pub zfar: f32,
    pub znear: f32,
}
