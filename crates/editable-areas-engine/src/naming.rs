//! # Element Naming
//!
//! Builds the identifiers under which editables are stored in a document.
//!
//! An element rendered inside nested regions must get an identifier that
//! differs from every other element in the document, yet is the same on every
//! render so stored content finds its way back. The identifier is a pure
//! function of the element's logical name, its kind, the names of the enclosing
//! blocks and the repetition index of the innermost block.
//!
//! ## Nested format
//!
//! ```text
//! outer.gallery:1#area
//! ^^^^^ ^^^^^^^ ^ ^^^^
//! |     |       | kind
//! |     |       repetition index
//! |     logical name
//! ancestor, each one followed by '.'
//! ```
//!
//! Every component is escaped so that `.`, `:`, `#` and `\` inside names never
//! act as separators. The unescaped separators split an identifier back into
//! exactly one `(name, kind, ancestors, index)` tuple, so two different tuples
//! can never produce the same identifier.

use crate::block_state::BlockState;

/// Strategy used to turn element descriptions into document identifiers.
pub trait NamingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Identifier for an element created while `state` is current.
    fn build_element_name(&self, name: &str, kind: &str, state: &BlockState) -> String;

    /// Identifier for a child element below `parent_block_names` at repetition `index`.
    fn build_child_element_name(
        &self,
        name: &str,
        kind: &str,
        parent_block_names: &[String],
        index: u32,
    ) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NestedNamingStrategy;

impl NestedNamingStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl NamingStrategy for NestedNamingStrategy {
    fn name(&self) -> &'static str {
        "nested"
    }

    fn build_element_name(&self, name: &str, kind: &str, state: &BlockState) -> String {
        match state.current_index() {
            // Top-level elements keep their template name
            None => escape_component(name),
            Some(index) => {
                self.build_child_element_name(name, kind, &state.ancestor_names(), index)
            }
        }
    }

    fn build_child_element_name(
        &self,
        name: &str,
        kind: &str,
        parent_block_names: &[String],
        index: u32,
    ) -> String {
        let mut id = String::new();
        for parent in parent_block_names {
            push_escaped(&mut id, parent);
            id.push('.');
        }
        push_escaped(&mut id, name);
        id.push(':');
        id.push_str(&index.to_string());
        id.push('#');
        push_escaped(&mut id, kind);
        id
    }
}

fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    push_escaped(&mut out, component);
    out
}

fn push_escaped(out: &mut String, component: &str) {
    for c in component.chars() {
        if matches!(c, '\\' | '.' | ':' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
}
