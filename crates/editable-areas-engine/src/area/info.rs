use serde_json::{Map, Value};
use thiserror::Error;

use super::Area;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InfoError {
    #[error("area '{0}' has no type")]
    MissingType(String),
}

/// What the render handler gets to know about the area it renders.
#[derive(Debug)]
pub struct AreaInfo<'a> {
    id: String,
    editable: &'a Area,
    index: u32,
    params: Map<String, Value>,
}

impl<'a> AreaInfo<'a> {
    /// Fails when `id` is empty, as there is nothing to select a template by.
    pub fn new(id: &str, editable: &'a Area, index: u32) -> Result<Self, InfoError> {
        if id.is_empty() {
            return Err(InfoError::MissingType(editable.name().to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            editable,
            index,
            params: Map::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn editable(&self) -> &'a Area {
        self.editable
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn set_params(&mut self, params: Map<String, Value>) {
        self.params = params;
    }
}
