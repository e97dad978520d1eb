use serde::Deserialize;

use crate::Id;

/// A binary blob, referenced by URI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Buffer {
    pub name: Option<String>,
    pub uri: Option<String>,
    /// Declared length of the blob, in bytes
    pub byte_length: Option<usize>,
    /// `arraybuffer` or `text`
    #[serde(rename = "type")]
    pub ty: Option<String>,
    #[serde(skip)]
    pub(crate) data: Option<Vec<u8>>,
}

impl Buffer {
    /// The attached bytes, if any, regardless of [Self::byte_length].
    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// The number of bytes that may be read from this buffer.
    ///
    /// This is the lesser of the declared `byteLength` and the length of the attached data; a
    /// buffer without a declared length is bounded only by its data.
    pub fn readable_len(&self) -> usize {
        let len = self.data.as_ref().map_or(0, Vec::len);
        match self.byte_length {
            Some(declared) => declared.min(len),
            None => len,
        }
    }
}

/// A byte range within a [Buffer].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    #[serde(default)]
    pub name: Option<String>,
    pub buffer: Id,
    #[serde(default)]
    pub byte_offset: usize,
    #[serde(default)]
    pub byte_length: Option<usize>,
    /// `ARRAY_BUFFER` or `ELEMENT_ARRAY_BUFFER`
    #[serde(default)]
    pub target: Option<u32>,
}

/// A description of how to interpret the bytes of a [BufferView] as an array of typed elements.
///
/// `componentType` and `type` are kept raw; whether they're supported is decided by whoever reads
/// the accessor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    #[serde(default)]
    pub name: Option<String>,
    pub buffer_view: Id,
    #[serde(default)]
    pub byte_offset: usize,
    /// Distance in bytes between the start of consecutive elements; `0` means tightly packed
    #[serde(default)]
    pub byte_stride: usize,
    pub component_type: u32,
    pub count: usize,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub max: Option<Vec<f32>>,
    #[serde(default)]
    pub min: Option<Vec<f32>>,
}
