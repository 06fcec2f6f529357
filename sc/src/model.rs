//! Collection and field definitions decoded from the input document
//!
//! Decoding is lenient: any JSON value turns into a definition, with attributes that are
//! absent, `null`, `false`, `0` or `""` treated as missing. Shape problems are left for
//! the validator to report, so only a malformed document can fail to load.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Field type that must carry `options.collectionId`
pub const RELATION_FIELD_TYPE: &str = "relation";

/// Kind of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionType {
    Base,
    Auth,
    View,
    /// Any value outside the supported set, kept verbatim for error messages
    Other(String),
}

impl CollectionType {
    /// Names accepted for a collection type
    pub const VALID: [&'static str; 3] = ["base", "auth", "view"];

    fn from_text(text: String) -> Self {
        match text.as_str() {
            "base" => Self::Base,
            "auth" => Self::Auth,
            "view" => Self::View,
            _ => Self::Other(text),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "base",
            Self::Auth => "auth",
            Self::View => "view",
            Self::Other(text) => text,
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field list of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Schema {
    #[default]
    Missing,
    Fields(Vec<FieldDefinition>),
    /// Present, but not a JSON array
    NotAList,
}

impl Schema {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Fields of the schema; empty unless it is a list
    pub fn fields(&self) -> &[FieldDefinition] {
        match self {
            Self::Fields(fields) => fields,
            _ => &[],
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields().iter().any(|f| f.name.as_deref() == Some(name))
    }
}

/// One column of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct FieldDefinition {
    pub name: Option<String>,
    pub field_type: Option<String>,
    /// `options.collectionId`, only meaningful for relation fields
    pub collection_id: Option<String>,
}

impl FieldDefinition {
    pub fn is_relation(&self) -> bool {
        self.field_type.as_deref() == Some(RELATION_FIELD_TYPE)
    }

    /// Name used in messages: the field name, or its position when unnamed
    pub fn label(&self, position: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("#{}", position))
    }
}

impl From<Value> for FieldDefinition {
    fn from(value: Value) -> Self {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);

        let collection_id = obj
            .get("options")
            .and_then(Value::as_object)
            .and_then(|options| truthy_text(options.get("collectionId")));

        Self {
            name: truthy_text(obj.get("name")),
            field_type: truthy_text(obj.get("type")),
            collection_id,
        }
    }
}

/// One table-like collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct CollectionDefinition {
    pub id: Option<String>,
    pub name: Option<String>,
    pub collection_type: Option<CollectionType>,
    /// `type` as written, even when falsy; `None` only when the key is absent
    pub type_text: Option<String>,
    pub schema: Schema,
}

impl CollectionDefinition {
    /// Name used in messages: the collection name, or its index when unnamed
    pub fn label(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("#{}", index))
    }
}

impl From<Value> for CollectionDefinition {
    fn from(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };

        let schema = match obj.remove("schema") {
            Some(Value::Array(items)) => Schema::Fields(items.into_iter().map(FieldDefinition::from).collect()),
            other if truthy_text(other.as_ref()).is_some() => Schema::NotAList,
            _ => Schema::Missing,
        };

        Self {
            id: truthy_text(obj.get("id")),
            name: truthy_text(obj.get("name")),
            collection_type: truthy_text(obj.get("type")).map(CollectionType::from_text),
            type_text: obj.get("type").map(raw_text),
            schema,
        }
    }
}

/// Text of any value, strings unquoted
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text of a value that counts as present, following JSON-document truthiness
fn truthy_text(value: Option<&Value>) -> Option<String> {
    let value = value?;
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => None,
    }
}
