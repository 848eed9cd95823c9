//! Callback response shapes: rejection with an error map, or a verbatim echo.

use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::DataField;

/// Keys of the `errors` object returned to the wallet host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    Field(DataField),
    Server,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field(field) => field.as_str(),
            Self::Server => "server",
        }
    }
}

impl From<DataField> for ErrorKey {
    fn from(field: DataField) -> Self {
        Self::Field(field)
    }
}

/// Ordered map of rejected fields. A value is either a message or an object
/// of sub-field messages (`physicalAddress.postalCode`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Map<String, Value>);

impl ValidationErrors {
    pub fn insert_message(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0
            .insert(key.as_str().to_string(), Value::String(message.into()));
    }

    /// Record a sub-field message, merging with sub-fields already rejected.
    pub fn insert_nested(&mut self, key: ErrorKey, sub_field: &str, message: impl Into<String>) {
        let entry = self
            .0
            .entry(key.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(nested) = entry {
            nested.insert(sub_field.to_string(), Value::String(message.into()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, key: ErrorKey) -> Option<&Value> {
        self.0.get(key.as_str())
    }
}

/// The four top-level request members, passed through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct Echo {
    pub calls: Box<RawValue>,
    #[serde(rename = "chainId")]
    pub chain_id: Box<RawValue>,
    pub version: Box<RawValue>,
    pub capabilities: Box<RawValue>,
}

/// What the endpoint answers. Serialises to exactly `{"errors": {...}}` or
/// `{"calls", "chainId", "version", "capabilities"}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CallbackResponse {
    Rejected { errors: ValidationErrors },
    Accepted(Echo),
}

impl CallbackResponse {
    /// `None` when there is nothing to reject.
    pub fn rejected(errors: ValidationErrors) -> Option<Self> {
        (!errors.is_empty()).then_some(Self::Rejected { errors })
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::default();
        errors.insert_message(ErrorKey::Server, message);
        Self::Rejected { errors }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Rejected { errors } => Some(errors),
            Self::Accepted(_) => None,
        }
    }
}
