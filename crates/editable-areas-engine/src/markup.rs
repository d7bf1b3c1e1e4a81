use std::collections::BTreeMap;

/// Join attributes into `key="value"` pairs separated by spaces.
///
/// Values are escaped for double-quoted attribute context. Keys are emitted
/// as given and must be valid attribute names. Attributes come out in key
/// order so the markup is stable between renders.
pub fn assemble_attribute_string(attributes: &BTreeMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(key, value)| {
            format!(
                "{key}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
