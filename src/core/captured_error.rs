//! Owned snapshot of an error attached to a log entry

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// An error captured for logging
///
/// Only the type name, the message and the messages of the `source()` chain
/// are kept; the original error value is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedError {
    pub class: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl CapturedError {
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Capture an error, recording its type name and source chain
    pub fn capture<E: Error + 'static>(error: &E) -> Self {
        Self {
            class: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
            causes: Self::source_chain(error.source()),
        }
    }

    /// Capture a type-erased error; the class is recorded as `"Error"`
    pub fn capture_dyn(error: &(dyn Error + 'static)) -> Self {
        Self {
            class: "Error".to_string(),
            message: error.to_string(),
            causes: Self::source_chain(error.source()),
        }
    }

    fn source_chain(mut source: Option<&(dyn Error + 'static)>) -> Vec<String> {
        let mut causes = Vec::new();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.message)?;
        for cause in &self.causes {
            write!(f, " (caused by: {})", cause)?;
        }
        Ok(())
    }
}
