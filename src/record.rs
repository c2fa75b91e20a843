//! Read-only view over a host record.
//!
//! The host hands the card a record whose `data` is a loose JSON object. Field
//! values follow the host's conventions: empty fields arrive as `false`, and
//! relations arrive either as a plain name, an `[id, "name"]` pair, or an
//! object carrying `display_name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::ReportState;

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

/// Placeholder name the host assigns to records that were never named.
pub const PLACEHOLDER_NAME: &str = "New";

/// A record supplied by the host at render time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Host-side identifier, absent for unsaved records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Field values keyed by field name.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Record {
    /// Build a record from its field map.
    #[must_use]
    pub fn new(data: Map<String, Value>) -> Self {
        Self { id: None, data }
    }

    /// Build a record from a JSON object of field values.
    ///
    /// Non-object values yield an empty record.
    #[must_use]
    pub fn from_data(value: Value) -> Self {
        match value {
            Value::Object(data) => Self::new(data),
            _ => Self::default(),
        }
    }

    /// Raw `state` string, if the field holds one.
    #[must_use]
    pub fn state_raw(&self) -> Option<&str> {
        self.data.get("state").and_then(Value::as_str)
    }

    /// Parsed workflow stage. Missing, non-string and unrecognized values all
    /// read as `None`.
    #[must_use]
    pub fn state(&self) -> Option<ReportState> {
        let raw = self.state_raw()?;
        match raw.parse() {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::trace!(id = ?self.id, error = %err, "unrecognized report state");
                None
            }
        }
    }

    /// Card title.
    ///
    /// Uses `name` unless it is empty or still the placeholder; otherwise
    /// joins employee, project and date as `Employee - Project - Date`.
    #[must_use]
    pub fn display_title(&self) -> String {
        if let Some(name) = self.text_field("name") {
            if name != PLACEHOLDER_NAME {
                return name.to_owned();
            }
        }

        let employee = self.relation_name("employee_id").unwrap_or("Employee");
        let project = self.relation_name("project_id").unwrap_or("Project");
        match self.text_field("date") {
            Some(date) => format!("{employee} - {project} - {date}"),
            None => format!("{employee} - {project}"),
        }
    }

    /// Non-empty string value of a scalar field.
    fn text_field(&self, field: &str) -> Option<&str> {
        self.data
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Display name of a relation field in any of the host's encodings.
    fn relation_name(&self, field: &str) -> Option<&str> {
        let name = match self.data.get(field)? {
            Value::String(name) => Some(name.as_str()),
            Value::Array(pair) => pair.get(1).and_then(Value::as_str),
            Value::Object(obj) => obj.get("display_name").and_then(Value::as_str),
            _ => None,
        };
        name.filter(|value| !value.is_empty())
    }
}
