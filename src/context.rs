//! Variables visible to every template of one generation run.

use crate::{config::AuthorInfo, constants::CREATION_DATE_FORMAT, error::{Error, Result}};
use chrono::{DateTime, Local};
use serde_json::{json, Map, Value};

/// Template variables, always a JSON object.
///
/// The walker only ever borrows a context, so every file of a run sees the
/// same values.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableContext {
    vars: Value,
}

impl VariableContext {
    pub fn new() -> Self {
        Self { vars: Value::Object(Map::new()) }
    }

    /// The standard context for a project: `modname`, `config` (author
    /// metadata), `creation_date` (`"%B %Y"`) and `creation_timestamp`
    /// (RFC 3339, for the `date` filter).
    pub fn for_project(modname: &str, author: &AuthorInfo, now: DateTime<Local>) -> Self {
        Self {
            vars: json!({
                "modname": modname,
                "config": author,
                "creation_date": now.format(CREATION_DATE_FORMAT).to_string(),
                "creation_timestamp": now.to_rfc3339(),
            }),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(Self { vars: value }),
            other => Err(Error::Other(anyhow::anyhow!(
                "Template variables must be a JSON object, got: {other}"
            ))),
        }
    }

    /// Returns the context with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        if let Value::Object(map) = &mut self.vars {
            map.insert(key.into(), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    pub fn modname(&self) -> Option<&str> {
        self.get("modname").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.vars
    }
}

impl Default for VariableContext {
    fn default() -> Self {
        Self::new()
    }
}
