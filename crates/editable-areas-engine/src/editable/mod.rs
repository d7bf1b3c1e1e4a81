//! Stored editables and their kinds.

pub mod aliases;
pub mod loader;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use loader::{EditableLoader, LoaderError};

/// The kinds of editable a document can store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditableKind {
    Area,
    Block,
    Checkbox,
    Date,
    Input,
    Renderlet,
}

impl EditableKind {
    pub const ALL: &'static [EditableKind] = &[
        EditableKind::Area,
        EditableKind::Block,
        EditableKind::Checkbox,
        EditableKind::Date,
        EditableKind::Input,
        EditableKind::Renderlet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditableKind::Area => "area",
            EditableKind::Block => "block",
            EditableKind::Checkbox => "checkbox",
            EditableKind::Date => "date",
            EditableKind::Input => "input",
            EditableKind::Renderlet => "renderlet",
        }
    }
}

impl fmt::Display for EditableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element stored in a document under its built identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Editable {
    name: String,
    kind: EditableKind,
    data: serde_json::Value,
    parent_block_names: Vec<String>,
}

impl Editable {
    pub fn new(name: impl Into<String>, kind: EditableKind, data: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
            parent_block_names: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EditableKind {
        self.kind
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Ancestor chain the element was resolved under, outermost first.
    pub fn parent_block_names(&self) -> &[String] {
        &self.parent_block_names
    }

    pub fn set_parent_block_names(&mut self, names: Vec<String>) {
        self.parent_block_names = names;
    }
}
