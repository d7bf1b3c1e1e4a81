pub mod area;
pub mod block_state;
pub mod document;
pub mod editable;
pub mod io;
pub mod markup;
pub mod naming;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use area::{
    Area, AreaCapability, AreaHandler, AreaInfo, AreaOptions, ConfiguredAreaCapability,
    EditableServices, FrontendOutcome, InfoError, RenderError,
};
pub use block_state::{BlockFrame, BlockName, BlockState, BlockStateError};
pub use document::{Document, DocumentError, EditableLookup};
pub use editable::{Editable, EditableKind, EditableLoader, LoaderError};
pub use naming::{NamingStrategy, NestedNamingStrategy};
pub use render::{BlockScope, RenderContext};
