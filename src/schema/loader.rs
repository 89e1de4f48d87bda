//! Schema loader for view descriptions
//!
//! Descriptions are single JSON objects read from a string, any reader
//! (standard input in practice) or a file on disk. Loading only decodes;
//! structural checks live in the validator.
//!
//! Keys match field names without regard to ASCII case, so `Name`,
//! `NAME` and `name` are the same key. When an object spells one field
//! several ways, the last occurrence wins. A `null` value leaves the
//! field untouched. Unknown keys are ignored.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::ViewDef;

/// Names used in errors for descriptions that did not come from a file
const STDIN_SOURCE: &str = "<stdin>";
const INLINE_SOURCE: &str = "<inline>";

const VIEW_KEYS: &[&str] = &[
    "name",
    "columns",
    "skip_triggers",
    "skip_indices",
    "unsafe_drop_orphan_indices",
];
const COLUMN_KEYS: &[&str] = &["name", "expr", "with_index"];

/// Decodes view descriptions from their JSON representation.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Decodes a description from an in-memory JSON document.
    pub fn from_json(payload: &str) -> SchemaResult<ViewDef> {
        Self::decode(INLINE_SOURCE, payload)
    }

    /// Reads the whole reader and decodes its content.
    pub fn from_reader<R: Read>(mut reader: R) -> SchemaResult<ViewDef> {
        let mut payload = String::new();
        reader.read_to_string(&mut payload).map_err(|e| {
            SchemaError::malformed(STDIN_SOURCE, format!("Failed to read input: {}", e))
        })?;

        Self::decode(STDIN_SOURCE, &payload)
    }

    /// Loads a description file.
    pub fn from_path(path: &Path) -> SchemaResult<ViewDef> {
        let source = path.display().to_string();
        let payload = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed(&source, format!("Failed to read file: {}", e))
        })?;

        Self::decode(&source, &payload)
    }

    fn decode(source: &str, payload: &str) -> SchemaResult<ViewDef> {
        if payload.trim().is_empty() {
            return Err(SchemaError::malformed(source, "Empty input"));
        }

        let invalid = |e: serde_json::Error| {
            SchemaError::malformed(source, format!("Invalid JSON: {}", e))
        };

        let mut deserializer = serde_json::Deserializer::from_str(payload);
        let fields = FoldKeys(VIEW_KEYS)
            .deserialize(&mut deserializer)
            .map_err(invalid)?;
        deserializer.end().map_err(invalid)?;

        serde_json::from_value(Value::Object(fields)).map_err(invalid)
    }
}

/// Reads a JSON object in document order, renaming each key to the field
/// it matches and dropping the rest.
#[derive(Clone, Copy)]
struct FoldKeys(&'static [&'static str]);

impl<'de> DeserializeSeed<'de> for FoldKeys {
    type Value = Map<String, Value>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for FoldKeys {
    type Value = Map<String, Value>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut folded = Map::new();

        while let Some(key) = access.next_key::<String>()? {
            let field = match self.0.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
                Some(field) => *field,
                None => {
                    access.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            let value = if field == "columns" {
                access.next_value_seed(ColumnList)?
            } else {
                access.next_value::<Value>()?
            };

            if !value.is_null() {
                folded.insert(field.to_string(), value);
            }
        }

        Ok(folded)
    }
}

/// The `columns` array, each element folded with `COLUMN_KEYS`.
struct ColumnList;

impl<'de> DeserializeSeed<'de> for ColumnList {
    type Value = Value;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ColumnList {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of column objects")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut columns = Vec::new();
        while let Some(column) = seq.next_element_seed(FoldKeys(COLUMN_KEYS))? {
            columns.push(Value::Object(column));
        }
        Ok(Value::Array(columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDef;
    use std::io::Cursor;

    #[test]
    fn test_from_json() {
        let def = SchemaLoader::from_json(r#"{"name":"events"}"#).unwrap();
        assert_eq!(def.name, "events");
    }

    #[test]
    fn test_from_reader() {
        let input = Cursor::new(r#"{"name":"logs","columns":[{"name":"lvl","expr":"raw"}]}"#);
        let def = SchemaLoader::from_reader(input).unwrap();
        assert_eq!(def.name, "logs");
        assert_eq!(def.columns.len(), 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = SchemaLoader::from_json("  \n").unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = SchemaLoader::from_json("{\"name\":").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = SchemaLoader::from_json(r#"{"name":"events","columns":{}}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }));
    }

    #[test]
    fn test_keys_ignore_case() {
        let def = SchemaLoader::from_json(
            r#"{
                "Name": "events",
                "SKIP_TRIGGERS": true,
                "Skip_Indices": true,
                "columns": [{"NAME": "ts", "EXPR": "raw", "WITH_INDEX": true}]
            }"#,
        )
        .unwrap();

        assert_eq!(def.name, "events");
        assert!(def.skip_triggers);
        assert!(def.skip_indices);
        assert!(!def.unsafe_drop_orphan_indices);
        assert_eq!(def.columns, vec![ColumnDef::indexed("ts", "raw")]);
    }

    #[test]
    fn test_last_spelling_wins() {
        let def = SchemaLoader::from_json(r#"{"name":"a","Name":"b"}"#).unwrap();
        assert_eq!(def.name, "b");

        let def = SchemaLoader::from_json(
            r#"{"name":"e","columns":[{"expr":"x","Expr":"y","with_index":true,"WITH_INDEX":false}]}"#,
        )
        .unwrap();
        assert_eq!(def.columns, vec![ColumnDef::new("", "y")]);
    }

    #[test]
    fn test_null_keeps_earlier_value() {
        let def =
            SchemaLoader::from_json(r#"{"name":"events","NAME":null,"columns":null}"#).unwrap();
        assert_eq!(def.name, "events");
        assert!(def.columns.is_empty());
    }

    #[test]
    fn test_unknown_and_camel_case_keys_ignored() {
        let def =
            SchemaLoader::from_json(r#"{"name":"events","SkipTriggers":true,"extra":1}"#).unwrap();
        assert!(!def.skip_triggers);
    }

    #[test]
    fn test_missing_file() {
        let err = SchemaLoader::from_path(Path::new("/nonexistent/view.json")).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("/nonexistent/view.json"));
        assert!(display.contains("Failed to read file"));
    }
}
