//! Compatibility names for editable types.
//!
//! Editables used to be called "tags". Stored documents and templates written
//! against the old names still resolve through this table; every hit is
//! logged as deprecated by the loader.

use super::EditableKind;

pub const LEGACY_ALIASES: &[(&str, EditableKind)] = &[
    ("Tag\\Area", EditableKind::Area),
    ("Tag\\Block", EditableKind::Block),
    ("Tag\\Checkbox", EditableKind::Checkbox),
    ("Tag\\Date", EditableKind::Date),
    ("Tag\\Input", EditableKind::Input),
    ("Tag\\Renderlet", EditableKind::Renderlet),
];

/// Canonical kind for a legacy type name.
pub fn resolve_legacy_alias(name: &str) -> Option<EditableKind> {
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_legacy_alias() {
        for kind in EditableKind::ALL {
            assert!(
                LEGACY_ALIASES.iter().any(|(_, k)| k == kind),
                "missing legacy alias for {kind:?}"
            );
        }
    }

    #[test]
    fn test_unknown_alias() {
        assert_eq!(resolve_legacy_alias("Tag\\Wysiwyg"), None);
        assert_eq!(resolve_legacy_alias("area"), None);
    }
}
