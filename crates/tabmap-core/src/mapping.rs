use tracing::{debug, info};

use crate::error::TabmapError;
use crate::frame::collapse_whitespace;

/// Caller-supplied association of source column names to output aliases.
///
/// Entries keep the order they appeared in the JSON spec; projection emits
/// record keys in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<(String, String)>,
}

impl FieldMapping {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(source column, output alias)` pairs in spec order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, a)| (s.as_str(), a.as_str()))
    }

    /// Source column names, in spec order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    /// Insert with JSON-object semantics: a repeated source keeps its
    /// original position but takes the new alias.
    fn insert(&mut self, source: String, alias: String) {
        match self.entries.iter_mut().find(|(s, _)| *s == source) {
            Some(entry) => entry.1 = alias,
            None => self.entries.push((source, alias)),
        }
    }
}

/// Parse the `table_fields` JSON spec into a validated [`FieldMapping`].
///
/// The raw text has its whitespace collapsed before parsing, so specs
/// pasted with non-breaking spaces or stray newlines still parse. Keys and
/// aliases must be non-empty strings after trimming.
pub fn parse_field_mapping(raw: &str) -> Result<FieldMapping, TabmapError> {
    if raw.trim().is_empty() {
        return Err(TabmapError::InvalidInput("empty table_fields input".into()));
    }

    let normalized = collapse_whitespace(raw);
    debug!("processing table_fields spec: {normalized}");

    let value: serde_json::Value = serde_json::from_str(&normalized)
        .map_err(|e| TabmapError::InvalidInput(format!("invalid JSON format: {e}")))?;

    let object = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(TabmapError::InvalidInput(
                "table_fields must be a JSON object".into(),
            ))
        }
    };

    let mut mapping = FieldMapping::default();
    for (field, alias) in object {
        let field = field.trim();
        if field.is_empty() {
            return Err(TabmapError::InvalidInput(
                "field names must not be empty".into(),
            ));
        }

        let alias = match alias {
            serde_json::Value::String(s) => s,
            other => {
                return Err(TabmapError::InvalidInput(format!(
                    "alias for '{field}' must be a string, got: {other}"
                )))
            }
        };
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(TabmapError::InvalidInput(format!(
                "alias for '{field}' must not be empty"
            )));
        }

        mapping.insert(field.to_string(), alias.to_string());
    }

    info!("parsed {} field mappings", mapping.len());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_object_preserving_order() {
        let mapping = parse_field_mapping(r#"{"name": "full_name", "id": "ID"}"#).unwrap();
        assert_eq!(mapping.len(), 2);
        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, vec![("name", "full_name"), ("id", "ID")]);
    }

    #[test]
    fn trims_keys_and_aliases() {
        let mapping = parse_field_mapping(r#"{" name ": " alias "}"#).unwrap();
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("name", "alias")]);
    }

    #[test]
    fn tolerates_nbsp_and_newlines_around_syntax() {
        let spec = "{\u{00A0}\"a\":\n\"b\"\u{00A0}}";
        let mapping = parse_field_mapping(spec).unwrap();
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("a", "b")]);
    }

    #[test]
    fn rejects_empty_and_whitespace_input() {
        assert!(matches!(
            parse_field_mapping(""),
            Err(TabmapError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_field_mapping("   "),
            Err(TabmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_field_mapping("not json"),
            Err(TabmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(matches!(
            parse_field_mapping(r#"["a", "b"]"#),
            Err(TabmapError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_field_mapping("42"),
            Err(TabmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_empty_key() {
        assert!(matches!(
            parse_field_mapping(r#"{"": "x"}"#),
            Err(TabmapError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_field_mapping(r#"{"  ": "x"}"#),
            Err(TabmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_empty_or_non_string_alias() {
        assert!(matches!(
            parse_field_mapping(r#"{"a": ""}"#),
            Err(TabmapError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_field_mapping(r#"{"a": 1}"#),
            Err(TabmapError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_field_mapping(r#"{"a": null}"#),
            Err(TabmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_key_after_trim_takes_last_alias() {
        let mapping = parse_field_mapping(r#"{"a": "first", " a ": "second"}"#).unwrap();
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("a", "second")]);
    }
}
