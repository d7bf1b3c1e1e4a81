//! Shared helpers for unit tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use tempfile::TempDir;

use crate::area::{AreaCapability, AreaHandler, AreaInfo, EditableServices};
use crate::naming::NestedNamingStrategy;
use crate::render::RenderContext;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn services_with(
    capability: impl AreaCapability + 'static,
    handler: Arc<dyn AreaHandler>,
) -> EditableServices {
    EditableServices {
        capability: Arc::new(capability),
        handler,
        naming: Arc::new(NestedNamingStrategy::new()),
    }
}

/// What the handler saw on one call.
#[derive(Debug, Clone)]
pub struct HandlerCall {
    pub ancestors: Vec<String>,
    pub index: Option<u32>,
    pub info_id: Option<String>,
    pub params: Map<String, Value>,
}

/// Handler that records each call, optionally writing output or failing.
pub struct RecordingHandler {
    calls: Mutex<Vec<HandlerCall>>,
    output: Option<String>,
    fail: bool,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            output: None,
            fail: false,
        }
    }

    pub fn writing(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<HandlerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AreaHandler for RecordingHandler {
    fn render_area_frontend(
        &self,
        info: Option<&AreaInfo<'_>>,
        ctx: &mut RenderContext,
    ) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(HandlerCall {
            ancestors: ctx.block_state().ancestor_names(),
            index: ctx.block_state().current_index(),
            info_id: info.map(|i| i.id().to_string()),
            params: info.map(|i| i.params().clone()).unwrap_or_default(),
        });
        if let Some(output) = &self.output {
            ctx.write(output);
        }
        if self.fail {
            anyhow::bail!("template missing");
        }
        Ok(())
    }
}
