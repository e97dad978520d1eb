use scenery_schema::Id;

use crate::{AccessorType, LoadState, WrapMode};

/// Broad classification of an [Error], for hosts deciding whether to skip an entity or abort a
/// whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A fixed-length conversion received the wrong number of components.
    InvalidArity,
    /// An accessor would read past the end of its buffer, or holds a value its reader can't
    /// represent.
    OutOfRange,
    /// An accessor holds a different structural type than the one requested.
    WrongType,
    /// A recognized, but unimplemented, schema value.
    UnsupportedFormat,
    /// A structurally inconsistent document.
    InvalidFormat,
    /// An id that names nothing, or a record whose payload was never attached.
    UnresolvedReference,
    /// A node is its own ancestor.
    CyclicGraph,
    /// A field required by the current [LoadOptions](crate::LoadOptions) is absent.
    MissingField,
    /// The document isn't valid JSON, or doesn't match the glTF 1.0 schema.
    Parse,
    /// A [SceneLoader](crate::SceneLoader) was asked to load more than once.
    Reentry,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} components, received {actual}")]
    InvalidArity {
        expected: &'static str,
        actual: usize,
    },
    #[error("accessor {accessor:?} reads {required} bytes from offset {offset}, but only {available} are available")]
    OutOfRange {
        accessor: Id,
        offset: usize,
        required: usize,
        available: usize,
    },
    #[error("expected accessor {accessor:?} to hold {expected} elements, but it holds {actual} elements")]
    WrongType {
        accessor: Id,
        expected: AccessorType,
        actual: AccessorType,
    },
    #[error("element {index} of accessor {accessor:?} doesn't fit in {target}")]
    Unrepresentable {
        accessor: Id,
        index: usize,
        target: &'static str,
    },
    #[error(transparent)]
    Unsupported(#[from] Unsupported),
    #[error(transparent)]
    Invalid(#[from] Invalid),
    #[error(transparent)]
    Document(#[from] scenery_schema::Error),
    #[error("node {0:?} is its own ancestor")]
    CyclicGraph(Id),
    #[error("{kind} {id:?} has no `{field}`")]
    MissingField {
        kind: &'static str,
        id: Id,
        field: &'static str,
    },
    #[error("attempted to load a scene from loader state {0:?}")]
    Reentry(LoadState),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArity { .. } => ErrorKind::InvalidArity,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::WrongType { .. } => ErrorKind::WrongType,
            Self::Unrepresentable { .. } => ErrorKind::OutOfRange,
            Self::Unsupported(_) => ErrorKind::UnsupportedFormat,
            Self::Invalid(_) => ErrorKind::InvalidFormat,
            Self::Document(scenery_schema::Error::Json(_)) => ErrorKind::Parse,
            Self::Document(_) => ErrorKind::UnresolvedReference,
            Self::CyclicGraph(_) => ErrorKind::CyclicGraph,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Reentry(_) => ErrorKind::Reentry,
        }
    }
}

/// Schema values which are recognized but not implemented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unsupported {
    #[error("unsupported accessor component type: {0}")]
    ComponentType(u32),
    #[error("unsupported accessor type: {0:?}")]
    AccessorType(String),
    #[error("unsupported primitive mode: {0} (only TRIANGLES is supported)")]
    PrimitiveMode(u32),
    #[error("unsupported camera type: {0:?}")]
    CameraType(String),
    #[error("unsupported texture wrap mode: {0}")]
    WrapMode(u32),
    #[error("texture wrap modes differ between axes (S: {s:?}, T: {t:?})")]
    MixedWrapModes { s: WrapMode, t: WrapMode },
}

/// Ways in which a document can contradict itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Invalid {
    #[error("shader {shader:?} is used as a {expected} shader, but has type {actual}")]
    ShaderStage {
        shader: Id,
        expected: &'static str,
        actual: u32,
    },
    #[error("accessor {accessor:?} has a stride of {stride}, which is less than its element size ({element_size})")]
    Stride {
        accessor: Id,
        stride: usize,
        element_size: usize,
    },
    #[error("{ty} camera {camera:?} has no `{ty}` projection")]
    MissingProjection { camera: Id, ty: &'static str },
    #[error("material {material:?} has a malformed `{key}` value")]
    MaterialValue { material: Id, key: &'static str },
}
