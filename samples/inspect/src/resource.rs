use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use scenery::{Document, Id};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("expected file, found directory: {0:?}")]
    IsADirectory(PathBuf),
    #[error("couldn't represent {0:?} as a file URL")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("expected local file path; instead, found: {0:?}")]
    UnsupportedUriScheme(String),
    #[error("{kind} {id:?} has no uri")]
    MissingUri { kind: &'static str, id: Id },
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Document(#[from] scenery::schema::Error),
    #[error(transparent)]
    Load(#[from] scenery::Error),
}

/// Reads the resources a document refers to, relative to the document itself.
#[derive(Debug)]
pub struct Resources {
    /// Path to the glTF document. Used when resolving relative URLs.
    src_path: Url,
}

impl Resources {
    pub fn new(src_path: impl AsRef<Path>) -> Result<Self, InspectError> {
        let src_path: PathBuf = src_path.as_ref().canonicalize()?;
        if src_path.is_dir() {
            return Err(InspectError::IsADirectory(src_path));
        }
        Ok(Self {
            src_path: Url::from_file_path(&src_path)
                .map_err(|()| InspectError::InvalidPath(src_path.clone()))?,
        })
    }

    #[tracing::instrument(skip(self), fields(src_url = self.src_path.as_str()))]
    pub fn read(&self, uri: &str) -> Result<Vec<u8>, InspectError> {
        let url = Url::options().base_url(Some(&self.src_path)).parse(uri)?;
        if url.scheme() != "file" {
            return Err(InspectError::UnsupportedUriScheme(url.scheme().to_owned()));
        }
        let path = url
            .to_file_path()
            .map_err(|()| InspectError::InvalidPath(url.path().into()))?;
        tracing::debug!(url = url.as_str(), "reading resource");
        Ok(fs::read(path)?)
    }

    /// Read and attach every buffer, image, and shader in `doc`.
    pub fn attach_all(&self, doc: &mut Document) -> Result<(), InspectError> {
        for (id, uri) in uris(&doc.buffers, "buffer", |b| b.uri.as_deref())? {
            doc.attach_buffer(&id, self.read(&uri)?)?;
        }
        for (id, uri) in uris(&doc.images, "image", |i| i.uri.as_deref())? {
            doc.attach_image(&id, self.read(&uri)?)?;
        }
        for (id, uri) in uris(&doc.shaders, "shader", |s| s.uri.as_deref())? {
            doc.attach_shader(&id, String::from_utf8(self.read(&uri)?)?)?;
        }
        Ok(())
    }
}

fn uris<T>(
    records: &HashMap<Id, T>,
    kind: &'static str,
    uri: impl Fn(&T) -> Option<&str>,
) -> Result<Vec<(Id, String)>, InspectError> {
    records
        .iter()
        .map(|(id, rec)| match uri(rec) {
            Some(u) => Ok((id.clone(), u.to_owned())),
            None => Err(InspectError::MissingUri {
                kind,
                id: id.clone(),
            }),
        })
        .collect()
}
