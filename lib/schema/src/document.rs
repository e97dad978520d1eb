//! The top-level glTF 1.0 [Document] and the records it holds.
//!
//! # Notes
//!
//! * Every category of object is a JSON object keyed by [Id], rather than a list.
//! * Any category may be omitted entirely; it is then treated as empty.
//! * `scene` names the default scene. If it's omitted and the document holds exactly one scene,
//!   that scene is used instead.
//! * Buffers, images, and shaders refer to their payloads by URI. Those payloads are *not*
//!   fetched here; see [Document::attach_buffer], [Document::attach_image], and
//!   [Document::attach_shader].

mod buffer;
mod material;
mod scene;

use std::{collections::HashMap, str::FromStr};

pub use buffer::*;
pub use material::*;
pub use scene::*;

use serde::Deserialize;

use crate::{Error, Id};

/// Metadata about the glTF asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Asset {
    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub premultiplied_alpha: Option<bool>,
    pub version: Option<String>,
}

/// A parsed glTF 1.0 document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub asset: Option<Asset>,
    pub accessors: HashMap<Id, Accessor>,
    pub buffer_views: HashMap<Id, BufferView>,
    pub buffers: HashMap<Id, Buffer>,
    pub cameras: HashMap<Id, Camera>,
    pub images: HashMap<Id, Image>,
    pub materials: HashMap<Id, Material>,
    pub meshes: HashMap<Id, Mesh>,
    pub nodes: HashMap<Id, Node>,
    pub programs: HashMap<Id, Program>,
    pub samplers: HashMap<Id, Sampler>,
    /// The default scene
    pub scene: Option<Id>,
    pub scenes: HashMap<Id, Scene>,
    pub shaders: HashMap<Id, Shader>,
    pub techniques: HashMap<Id, Technique>,
    pub textures: HashMap<Id, Texture>,
}

/// Generate a lookup method for each category of record, returning [Error::Unresolved] for
/// unknown ids.
macro_rules! lookup {
    ($($name:ident: $field:ident -> $Target:ty, $kind:literal;)+) => {
        $(
            #[doc = concat!("Resolve a reference to a ", $kind, ".")]
            #[inline]
            pub fn $name(&self, id: &str) -> Result<&$Target, Error> {
                self.$field.get(id).ok_or_else(|| Error::Unresolved {
                    kind: $kind,
                    id: Id::from(id),
                })
            }
        )+
    };
}

impl Document {
    /// Parse a document from JSON bytes.
    pub fn from_slice(json: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(json)?)
    }

    lookup! {
        accessor: accessors -> Accessor, "accessor";
        buffer_view: buffer_views -> BufferView, "bufferView";
        buffer: buffers -> Buffer, "buffer";
        camera: cameras -> Camera, "camera";
        image: images -> Image, "image";
        material: materials -> Material, "material";
        mesh: meshes -> Mesh, "mesh";
        node: nodes -> Node, "node";
        program: programs -> Program, "program";
        sampler: samplers -> Sampler, "sampler";
        scene: scenes -> Scene, "scene";
        shader: shaders -> Shader, "shader";
        technique: techniques -> Technique, "technique";
        texture: textures -> Texture, "texture";
    }

    /// Resolve the default scene, along with its id.
    pub fn default_scene(&self) -> Result<(&Id, &Scene), Error> {
        match &self.scene {
            Some(id) => self
                .scenes
                .get_key_value(id.as_str())
                .ok_or_else(|| Error::Unresolved {
                    kind: "scene",
                    id: id.clone(),
                }),
            None => {
                let mut scenes = self.scenes.iter();
                match (scenes.next(), scenes.next()) {
                    (Some(only), None) => Ok(only),
                    _ => Err(Error::NoDefaultScene(self.scenes.len())),
                }
            }
        }
    }

    /// Store the bytes named by a buffer's URI.
    pub fn attach_buffer(&mut self, id: &str, data: Vec<u8>) -> Result<(), Error> {
        let buffer = self.buffers.get_mut(id).ok_or_else(|| Error::Unresolved {
            kind: "buffer",
            id: Id::from(id),
        })?;
        tracing::trace!(
            id,
            len = data.len(),
            declared = buffer.byte_length,
            "attaching buffer data"
        );
        buffer.data = Some(data);
        Ok(())
    }

    /// Store the encoded image named by an image's URI.
    pub fn attach_image(&mut self, id: &str, data: Vec<u8>) -> Result<(), Error> {
        let image = self.images.get_mut(id).ok_or_else(|| Error::Unresolved {
            kind: "image",
            id: Id::from(id),
        })?;
        tracing::trace!(id, len = data.len(), "attaching image data");
        image.data = Some(data);
        Ok(())
    }

    /// Store the GLSL source named by a shader's URI.
    pub fn attach_shader(&mut self, id: &str, source: String) -> Result<(), Error> {
        let shader = self.shaders.get_mut(id).ok_or_else(|| Error::Unresolved {
            kind: "shader",
            id: Id::from(id),
        })?;
        tracing::trace!(id, len = source.len(), "attaching shader source");
        shader.source = Some(source);
        Ok(())
    }

    /// The readable bytes of a buffer; see [Buffer::readable_len].
    pub fn buffer_data(&self, id: &str) -> Result<&[u8], Error> {
        let buffer = self.buffer(id)?;
        let data = buffer.data().ok_or_else(|| Error::MissingData {
            kind: "buffer",
            id: Id::from(id),
        })?;
        Ok(&data[..buffer.readable_len()])
    }

    /// The encoded bytes of an image.
    pub fn image_data(&self, id: &str) -> Result<&[u8], Error> {
        self.image(id)?.data().ok_or_else(|| Error::MissingData {
            kind: "image",
            id: Id::from(id),
        })
    }

    /// The source text of a shader.
    pub fn shader_source(&self, id: &str) -> Result<&str, Error> {
        self.shader(id)?.source().ok_or_else(|| Error::MissingData {
            kind: "shader",
            id: Id::from(id),
        })
    }
}

impl FromStr for Document {
    type Err = Error;
    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(json)?)
    }
}
