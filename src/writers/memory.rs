//! Writer that collects entries in memory
//!
//! Mostly useful in tests. Clones share the same buffer, so a test can keep a
//! handle while a logger owns another.

use crate::core::{Downstream, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Downstream for MemoryWriter {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        self.entries.lock().push(entry);
        Ok(true)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
