//! The capability shared by every link of a logging chain

use super::{error::Result, log_entry::LogEntry, severity::Severity};
use std::sync::Arc;

/// Accepts log entries
///
/// Loggers, middleware layers and writers all implement this one trait, so
/// any of them can sit behind any other.
pub trait Downstream: Send + Sync {
    /// Handle one entry; `Ok(true)` if a writer ultimately took it,
    /// `Ok(false)` if a filter dropped it.
    fn accept(&self, entry: LogEntry) -> Result<bool>;

    /// Threshold of the nearest severity filter in this chain
    fn severity_threshold(&self) -> Severity {
        Severity::Debug
    }

    /// Whether an entry of `severity` would pass every filter in this chain
    fn accepts(&self, _severity: Severity) -> bool {
        true
    }

    fn name(&self) -> &str;
}

impl<D: Downstream + ?Sized> Downstream for Arc<D> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        (**self).accept(entry)
    }

    fn severity_threshold(&self) -> Severity {
        (**self).severity_threshold()
    }

    fn accepts(&self, severity: Severity) -> bool {
        (**self).accepts(severity)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<D: Downstream + ?Sized> Downstream for Box<D> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        (**self).accept(entry)
    }

    fn severity_threshold(&self) -> Severity {
        (**self).severity_threshold()
    }

    fn accepts(&self, severity: Severity) -> bool {
        (**self).accepts(severity)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
