//! Document Model
//!
//! A stored document is whatever JSON value the caller handed in. Objects
//! are treated as composites (fields can be merged, an identity key can be
//! attached); every other value is a scalar and is only ever replaced.

use serde_json::{Map, Value};

/// A document's top-level value
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A JSON object; field order is insertion order
    Composite(Map<String, Value>),

    /// Any non-object JSON value (string, number, bool, null, array)
    Scalar(Value),
}

impl Document {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Document::Composite(map),
            other => Document::Scalar(other),
        }
    }

    /// Parse a stored file body
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes).map(Self::from_value)
    }

    /// Serialize to the exact on-disk form (no identity, no envelope)
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        match self {
            Document::Composite(map) => serde_json::to_vec(map),
            Document::Scalar(value) => serde_json::to_vec(value),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Document::Composite(_))
    }

    /// Apply `patch` on top of `self`
    ///
    /// Two composites merge shallowly: patch fields override, fields only in
    /// `self` are kept. If either side is a scalar, `patch` replaces `self`.
    pub fn merge(self, patch: Document) -> Document {
        match (self, patch) {
            (Document::Composite(mut base), Document::Composite(fields)) => {
                for (key, value) in fields {
                    base.insert(key, value);
                }
                Document::Composite(base)
            }
            (_, patch) => patch,
        }
    }

    /// Caller-facing value: composites get `field = doc_id`, scalars pass through
    pub fn with_identity(self, field: &str, doc_id: &str) -> Value {
        match self {
            Document::Composite(mut map) => {
                map.insert(field.to_string(), Value::String(doc_id.to_string()));
                Value::Object(map)
            }
            Document::Scalar(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Document::Composite(map) => Value::Object(map),
            Document::Scalar(value) => value,
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}
