use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::editable::{Editable, EditableLoader, LoaderError};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid editable '{name}': {source}")]
    InvalidEditable { name: String, source: LoaderError },
    #[error("Duplicate editable: {0}")]
    DuplicateEditable(String),
}

/// Finds stored editables by their built identifier.
pub trait EditableLookup: Send + Sync {
    fn get_editable(&self, id: &str) -> Option<Editable>;
}

#[derive(Deserialize)]
struct DocumentFile {
    #[serde(default)]
    editables: Vec<EditableEntry>,
}

#[derive(Deserialize)]
struct EditableEntry {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// The editables stored for one document, keyed by identifier.
#[derive(Debug, Default, Clone)]
pub struct Document {
    editables: BTreeMap<String, Editable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON form.
    ///
    /// Type names go through [`EditableLoader`], so legacy names are accepted.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let file: DocumentFile = serde_json::from_str(json)?;
        let loader = EditableLoader::new();

        let mut document = Self::new();
        for entry in file.editables {
            let kind = loader.resolve(&entry.type_name).map_err(|source| {
                DocumentError::InvalidEditable {
                    name: entry.name.clone(),
                    source,
                }
            })?;
            if document.editables.contains_key(&entry.name) {
                return Err(DocumentError::DuplicateEditable(entry.name));
            }
            document.set_editable(Editable::new(entry.name, kind, entry.data));
        }
        Ok(document)
    }

    pub fn set_editable(&mut self, editable: Editable) {
        self.editables.insert(editable.name().to_string(), editable);
    }

    pub fn editables(&self) -> impl Iterator<Item = &Editable> {
        self.editables.values()
    }

    pub fn len(&self) -> usize {
        self.editables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editables.is_empty()
    }
}

impl EditableLookup for Document {
    fn get_editable(&self, id: &str) -> Option<Editable> {
        self.editables.get(id).cloned()
    }
}
