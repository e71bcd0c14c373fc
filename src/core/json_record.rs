//! Wire shape of an entry rendered by the JSON writer
//!
//! One record per line:
//!
//! ```json
//! {"timestamp":"2025-01-08T10:30:45.123Z","severity":"INFO","message":"Stuff happened","data":{"x":1},"context":{"thread":"main"}}
//! ```
//!
//! `severity` is always the level name. `message`, `data` and `exception`
//! are omitted when unset; `context` is always present. Errors are
//! serialized as `{class, message, causes}` and cannot be turned back into
//! the original error value.

use super::captured_error::CapturedError;
use super::error::Result;
use super::field_map::FieldMap;
use super::log_entry::LogEntry;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub timestamp: serde_json::Value,

    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<CapturedError>,

    #[serde(default)]
    pub context: serde_json::Value,
}

impl JsonRecord {
    /// Convert an entry, failing if any field has no JSON representation
    pub fn from_entry(entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<Self> {
        Ok(Self {
            timestamp: timestamp_format.to_json_value(&entry.timestamp)?,
            severity: entry.severity,
            message: entry.message.clone(),
            data: entry.data.as_ref().map(FieldMap::to_json_value).transpose()?,
            exception: entry.exception.clone(),
            context: entry.context.to_json_value()?,
        })
    }

    /// Data mapping as fields, if present
    pub fn data_fields(&self) -> Result<Option<FieldMap>> {
        Ok(self
            .data
            .as_ref()
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()?)
    }

    /// Context mapping as fields
    pub fn context_fields(&self) -> Result<FieldMap> {
        if self.context.is_null() {
            return Ok(FieldMap::new());
        }
        Ok(serde_json::from_value(self.context.clone())?)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
