use crate::Id;

/// Errors related to parsing and resolving a [Document](crate::Document).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unresolved {kind} reference: {id:?}")]
    Unresolved { kind: &'static str, id: Id },
    #[error("no {kind} data has been attached to {id:?}")]
    MissingData { kind: &'static str, id: Id },
    #[error("document names no default scene, and holds {0} scenes")]
    NoDefaultScene(usize),
}
