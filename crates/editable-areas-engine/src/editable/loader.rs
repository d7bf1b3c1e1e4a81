use thiserror::Error;

use super::{EditableKind, aliases};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Unknown editable type: {0}")]
    UnknownType(String),
}

/// Resolves editable type names, canonical or legacy, to a kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditableLoader;

impl EditableLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, type_name: &str) -> Result<EditableKind, LoaderError> {
        if let Some(kind) = EditableKind::ALL
            .iter()
            .find(|kind| kind.as_str() == type_name)
        {
            return Ok(*kind);
        }

        if let Some(kind) = aliases::resolve_legacy_alias(type_name) {
            log::warn!("Editable type \"{type_name}\" is deprecated. Use \"{kind}\" instead.");
            return Ok(kind);
        }

        Err(LoaderError::UnknownType(type_name.to_string()))
    }
}
