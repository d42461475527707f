// meshbridge-core/src/domain/naming.rs
//
// Catalog naming conventions shared by every engine.

use crate::domain::value::{ConfigMap, ConfigValue};

const GENERIC_TAGS_PREFIX: &str = "GenericTags.";

/// Joins catalog name segments with `.`, double-quoting a segment that
/// already contains a dot (`svc.db."my.table"`).
pub fn qualified_name<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        let part = part.as_ref();
        if i > 0 {
            out.push('.');
            if part.contains('.') {
                out.push('"');
                out.push_str(part);
                out.push('"');
                continue;
            }
        }
        out.push_str(part);
    }
    out
}

/// `GenericTags.PII` -> `PII`; other tags are returned unchanged.
pub fn strip_tag(tag: &str) -> &str {
    tag.strip_prefix(GENERIC_TAGS_PREFIX).unwrap_or(tag)
}

/// Sets `key` to a non-empty new value, otherwise falls back to the
/// original non-empty value (if any).
pub fn update_custom_property(
    custom_properties: &mut ConfigMap,
    original: &ConfigMap,
    key: &str,
    value: Option<&str>,
) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        custom_properties.insert(key.to_string(), ConfigValue::from(v));
        return;
    }

    if let Some(orig) = original.get(key)
        && orig.as_str() != Some("")
    {
        custom_properties.insert(key.to_string(), orig.clone());
    }
}
