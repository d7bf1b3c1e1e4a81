//! # Area Editable
//!
//! An area is a named slot of a page template whose content is rendered by
//! an external handler, selected by the area's type. Areas nest: the handler
//! may render further editables, including other areas, and those get
//! identifiers scoped below the area that contains them.
//!
//! ## Render Pass
//!
//! 1. **Enabled check**: disabled area types render nothing and leave the
//!    block stack untouched
//! 2. **Open**: a block named after the area is opened at repetition index 1
//! 3. **Info**: an [`AreaInfo`] with the params configured for this area type
//! 4. **Delegate**: the [`AreaHandler`] renders the content
//! 5. **Close**: the block scope pops index and block, whatever the handler did
//!
//! Collaborators come in through [`EditableServices`] and the owning document;
//! an area never looks anything up globally.

pub mod capability;
pub mod info;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::block_state::{BlockName, BlockState};
use crate::document::EditableLookup;
use crate::editable::{Editable, EditableKind};
use crate::markup::assemble_attribute_string;
use crate::naming::NamingStrategy;
use crate::render::RenderContext;

pub use capability::ConfiguredAreaCapability;
pub use info::{AreaInfo, InfoError};

/// Decides whether areas of a type may render at all.
pub trait AreaCapability: Send + Sync {
    fn is_area_enabled(&self, kind: &str) -> bool;
}

/// Renders the content of an area.
pub trait AreaHandler: Send + Sync {
    /// `info` is `None` when the area's info could not be built.
    fn render_area_frontend(
        &self,
        info: Option<&AreaInfo<'_>>,
        ctx: &mut RenderContext,
    ) -> anyhow::Result<()>;
}

/// Collaborators shared by all areas of a render.
#[derive(Clone)]
pub struct EditableServices {
    pub capability: Arc<dyn AreaCapability>,
    pub handler: Arc<dyn AreaHandler>,
    pub naming: Arc<dyn NamingStrategy>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render area '{area}': {source}")]
    Handler {
        area: String,
        source: anyhow::Error,
    },
}

/// How a frontend render ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendOutcome {
    /// The area type is disabled; nothing was rendered.
    Disabled,
    Rendered,
    /// The handler ran, but without an [`AreaInfo`] because building it failed.
    RenderedWithoutInfo(InfoError),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AreaOptions {
    /// Area type, selects the template the handler renders
    #[serde(rename = "type")]
    pub kind: String,
    /// Params keyed by area type; only the entry for `kind` reaches the handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(rename = "dontCheckEnabled")]
    pub dont_check_enabled: bool,
    /// Remaining template options, passed through to the edit-mode definition
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AreaOptions {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn dont_check_enabled(mut self) -> Self {
        self.dont_check_enabled = true;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Params for this area's own type. Anything other than an object
    /// holding an object under `kind` counts as no params.
    pub fn params_for_kind(&self) -> Map<String, Value> {
        match &self.params {
            Some(Value::Object(by_kind)) => match by_kind.get(&self.kind) {
                Some(Value::Object(params)) => params.clone(),
                _ => Map::new(),
            },
            _ => Map::new(),
        }
    }
}

#[derive(Serialize)]
struct EditmodeDefinition<'a> {
    name: &'a str,
    #[serde(rename = "realName")]
    real_name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    options: &'a AreaOptions,
}

pub struct Area {
    name: String,
    real_name: String,
    options: AreaOptions,
    parent_block_names: Vec<String>,
    services: EditableServices,
    document: Arc<dyn EditableLookup>,
}

impl fmt::Debug for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Area")
            .field("name", &self.name)
            .field("real_name", &self.real_name)
            .field("options", &self.options)
            .field("parent_block_names", &self.parent_block_names)
            .finish_non_exhaustive()
    }
}

impl Area {
    /// An area whose name is already built, outside of any block.
    ///
    /// `name` is used verbatim as the block name and as the parent of child
    /// identifiers; it is not escaped. Use [`Area::create`] to build the name
    /// from a template name.
    pub fn new(
        name: impl Into<String>,
        options: AreaOptions,
        services: EditableServices,
        document: Arc<dyn EditableLookup>,
    ) -> Self {
        let name = name.into();
        Self {
            real_name: name.clone(),
            name,
            options,
            parent_block_names: Vec::new(),
            services,
            document,
        }
    }

    /// An area created from a template while `state` is current.
    pub fn create(
        real_name: &str,
        options: AreaOptions,
        services: EditableServices,
        document: Arc<dyn EditableLookup>,
        state: &BlockState,
    ) -> Self {
        let name = services
            .naming
            .build_element_name(real_name, EditableKind::Area.as_str(), state);
        Self {
            name,
            real_name: real_name.to_string(),
            options,
            parent_block_names: state.ancestor_names(),
            services,
            document,
        }
    }

    /// Turn a stored editable, e.g. one returned by [`Area::get_element`],
    /// back into an area. `None` when the editable is not an area.
    pub fn from_editable(
        editable: Editable,
        options: AreaOptions,
        services: EditableServices,
        document: Arc<dyn EditableLookup>,
    ) -> Option<Self> {
        if editable.kind() != EditableKind::Area {
            return None;
        }
        let mut area = Self::new(editable.name(), options, services, document);
        area.parent_block_names = editable.parent_block_names().to_vec();
        Some(area)
    }

    pub fn get_type(&self) -> &'static str {
        EditableKind::Area.as_str()
    }

    /// Areas store no data of their own.
    pub fn get_data(&self) -> Option<Value> {
        None
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn real_name(&self) -> &str {
        &self.real_name
    }

    pub fn options(&self) -> &AreaOptions {
        &self.options
    }

    pub fn parent_block_names(&self) -> &[String] {
        &self.parent_block_names
    }

    /// Collaborators, for handlers creating nested areas.
    pub fn services(&self) -> &EditableServices {
        &self.services
    }

    pub fn document(&self) -> &Arc<dyn EditableLookup> {
        &self.document
    }

    pub fn set_parent_block_names(&mut self, names: Vec<String>) {
        self.parent_block_names = names;
    }

    pub fn set_data_from_resource(&mut self, _data: &Value) -> &mut Self {
        self
    }

    pub fn set_data_from_editmode(&mut self, _data: &Value) -> &mut Self {
        self
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn render(&self, ctx: &mut RenderContext) -> Result<FrontendOutcome, RenderError> {
        if ctx.is_edit_mode() {
            self.admin(ctx)
        } else {
            self.frontend(ctx)
        }
    }

    /// Frontend render wrapped in the markup the editor attaches to.
    pub fn admin(&self, ctx: &mut RenderContext) -> Result<FrontendOutcome, RenderError> {
        if let Some(script) = self.editmode_definition_script() {
            ctx.write_editmode(&script);
        }

        let attributes = assemble_attribute_string(&self.editmode_element_attributes());
        ctx.write_editmode(&format!("<div {attributes}>"));

        let outcome = self.frontend(ctx);

        ctx.write_editmode("</div>");
        outcome
    }

    pub fn frontend(&self, ctx: &mut RenderContext) -> Result<FrontendOutcome, RenderError> {
        let kind = self.options.kind.as_str();

        // don't show disabled areas
        if !self.options.dont_check_enabled && !self.services.capability.is_area_enabled(kind) {
            log::debug!("area '{}' of type '{kind}' is disabled", self.name);
            return Ok(FrontendOutcome::Disabled);
        }

        let mut scope = ctx.open_block(BlockName::new(&self.name, &self.real_name));
        scope.push_index(1);

        let info = AreaInfo::new(kind, self, 0).map(|mut info| {
            info.set_params(self.options.params_for_kind());
            info
        });
        if let Err(e) = &info {
            log::warn!("rendering area '{}' without info: {e}", self.name);
        }

        let result = self
            .services
            .handler
            .render_area_frontend(info.as_ref().ok(), &mut scope);
        drop(scope);

        result.map_err(|source| RenderError::Handler {
            area: self.name.clone(),
            source,
        })?;

        Ok(match info {
            Ok(_) => FrontendOutcome::Rendered,
            Err(e) => FrontendOutcome::RenderedWithoutInfo(e),
        })
    }

    /// Look up an element the area's handler defines, e.g. the block
    /// `"gallery"` of a gallery area.
    ///
    /// The returned element carries the ancestor chain it was found under so
    /// its own children resolve below it.
    pub fn get_element(&self, name: &str) -> Option<Editable> {
        self.get_element_of_kind(name, EditableKind::Area)
    }

    pub fn get_element_of_kind(&self, name: &str, kind: EditableKind) -> Option<Editable> {
        let mut parent_block_names = self.parent_block_names.clone();
        parent_block_names.push(self.name.clone());

        let id = self.services.naming.build_child_element_name(
            name,
            kind.as_str(),
            &parent_block_names,
            1,
        );
        let mut editable = self.document.get_editable(&id)?;
        editable.set_parent_block_names(parent_block_names);
        Some(editable)
    }

    fn editmode_element_attributes(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("id".to_string(), format!("editable_{}", self.name)),
            ("class".to_string(), "editable editable_area".to_string()),
            ("data-name".to_string(), self.name.clone()),
            ("data-real-name".to_string(), self.real_name.clone()),
            ("data-type".to_string(), self.get_type().to_string()),
        ])
    }

    fn editmode_definition_script(&self) -> Option<String> {
        let definition = EditmodeDefinition {
            name: &self.name,
            real_name: &self.real_name,
            kind: self.get_type(),
            options: &self.options,
        };
        match serde_json::to_string(&definition) {
            // keep "</script>" inside values from closing the element
            Ok(json) => Some(format!(
                "<script>editableDefinitions.push({});</script>",
                json.replace("</", "<\\/")
            )),
            Err(e) => {
                log::warn!("failed to serialize definition of area '{}': {e}", self.name);
                None
            }
        }
    }
}
