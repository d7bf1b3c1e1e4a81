use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, DocumentError};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document {path}: {source}")]
    InvalidDocument {
        path: PathBuf,
        source: DocumentError,
    },
}

/// Read a stored document from a JSON file.
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Document::from_json_str(&content).map_err(|source| IoError::InvalidDocument {
        path: path.to_path_buf(),
        source,
    })
}
