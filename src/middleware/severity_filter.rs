//! Drops entries below a severity threshold

use crate::core::{Downstream, LogEntry, Result, Severity};
use std::sync::Arc;

/// Middleware that forwards only entries at or above `threshold`
pub struct SeverityFilter<D: Downstream = Arc<dyn Downstream>> {
    downstream: D,
    threshold: Severity,
}

impl<D: Downstream> SeverityFilter<D> {
    pub fn new(downstream: D, threshold: Severity) -> Self {
        Self {
            downstream,
            threshold,
        }
    }

    pub fn downstream(&self) -> &D {
        &self.downstream
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }
}

impl<D: Downstream> Downstream for SeverityFilter<D> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        if entry.severity < self.threshold {
            return Ok(false);
        }
        self.downstream.accept(entry)
    }

    fn severity_threshold(&self) -> Severity {
        self.threshold
    }

    fn accepts(&self, severity: Severity) -> bool {
        severity >= self.threshold && self.downstream.accepts(severity)
    }

    fn name(&self) -> &str {
        "severity_filter"
    }
}
