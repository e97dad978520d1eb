use std::collections::HashMap;

use serde::Deserialize;

use crate::{consts, Id, Value};

/// Parameter values for a [Technique].
///
/// Common keys are `ambient`, `emission`, `diffuse`, and `specular`. A color is a list of numbers;
/// `diffuse` may instead be the id of a [Texture].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: Option<String>,
    pub technique: Option<Id>,
    pub values: HashMap<String, Value>,
}

/// A shading technique; only the program reference is interpreted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    #[serde(default)]
    pub name: Option<String>,
    pub program: Id,
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub uniforms: HashMap<String, String>,
}

/// A pair of shaders linked together.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    pub fragment_shader: Id,
    pub vertex_shader: Id,
}

/// GLSL source, referenced by URI.
#[derive(Debug, Clone, Deserialize)]
pub struct Shader {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    /// `FRAGMENT_SHADER` or `VERTEX_SHADER`
    #[serde(rename = "type")]
    pub ty: u32,
    #[serde(skip)]
    pub(crate) source: Option<String>,
}

impl Shader {
    #[inline]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// An image and the sampler with which to read it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texture {
    #[serde(default)]
    pub name: Option<String>,
    pub sampler: Id,
    pub source: Id,
    #[serde(default)]
    pub format: Option<u32>,
    #[serde(default)]
    pub internal_format: Option<u32>,
    #[serde(default)]
    pub target: Option<u32>,
}

/// Texture filtering and wrapping modes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampler {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mag_filter: Option<u32>,
    #[serde(default)]
    pub min_filter: Option<u32>,
    #[serde(default = "default_wrap")]
    pub wrap_s: u32,
    #[serde(default = "default_wrap")]
    pub wrap_t: u32,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            name: None,
            mag_filter: None,
            min_filter: None,
            wrap_s: consts::REPEAT,
            wrap_t: consts::REPEAT,
        }
    }
}

fn default_wrap() -> u32 {
    consts::REPEAT
}

/// An encoded image, referenced by URI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub name: Option<String>,
    pub uri: Option<String>,
    #[serde(skip)]
    pub(crate) data: Option<Vec<u8>>,
}

impl Image {
    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}
