use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("malformed atlas metadata: {0}")]
    Parse(String),
    #[error("marker table does not match atlas metadata (missing: [{}], duplicated: [{}])", missing.join(", "), duplicated.join(", "))]
    ConfigMismatch { missing: Vec<String>, duplicated: Vec<String> },
    #[error("invalid marker for `{name}`: {reason}")]
    InvalidMarker { name: String, reason: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("image error for {}: {source}", path.display())]
    Image { path: PathBuf, #[source] source: image::ImageError },
    #[error("i/o error for {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },
}

impl PatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
