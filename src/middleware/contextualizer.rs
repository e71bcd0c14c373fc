//! Adds context to entries on their way downstream

use crate::core::{Downstream, FieldMap, LogEntry, Result, Severity};
use std::fmt;
use std::sync::Arc;

type ContextFn = Box<dyn Fn() -> FieldMap + Send + Sync>;

/// Where a contextualizer gets its context from
pub enum ContextSource {
    /// The same fields for every entry
    Static(FieldMap),
    /// Fields computed once per accepted entry, in call order
    Dynamic(ContextFn),
}

impl ContextSource {
    pub fn dynamic<F>(context: F) -> Self
    where
        F: Fn() -> FieldMap + Send + Sync + 'static,
    {
        ContextSource::Dynamic(Box::new(context))
    }

    /// Current context fields
    pub fn resolve(&self) -> FieldMap {
        match self {
            ContextSource::Static(fields) => fields.clone(),
            ContextSource::Dynamic(context) => context(),
        }
    }
}

impl From<FieldMap> for ContextSource {
    fn from(fields: FieldMap) -> Self {
        ContextSource::Static(fields)
    }
}

impl fmt::Debug for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextSource::Static(fields) => f.debug_tuple("Static").field(fields).finish(),
            ContextSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Middleware that adds context fields to every entry it forwards
///
/// Keys already present in the entry's context keep their values.
pub struct Contextualizer<D: Downstream = Arc<dyn Downstream>> {
    downstream: D,
    context: ContextSource,
}

impl<D: Downstream> Contextualizer<D> {
    pub fn new(downstream: D, context: impl Into<ContextSource>) -> Self {
        Self {
            downstream,
            context: context.into(),
        }
    }

    pub fn downstream(&self) -> &D {
        &self.downstream
    }

    pub fn context(&self) -> &ContextSource {
        &self.context
    }
}

impl<D: Downstream> Downstream for Contextualizer<D> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        let context = self.context.resolve();
        self.downstream.accept(entry.in_context(&context))
    }

    fn severity_threshold(&self) -> Severity {
        self.downstream.severity_threshold()
    }

    fn accepts(&self, severity: Severity) -> bool {
        self.downstream.accepts(severity)
    }

    fn name(&self) -> &str {
        "contextualizer"
    }
}
