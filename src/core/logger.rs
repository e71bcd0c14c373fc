//! Logger façade

use super::{
    downstream::Downstream,
    entry_builder::EntryBuilder,
    error::Result,
    field_map::FieldMap,
    log_entry::{LogEntry, Payload},
    severity::{IntoSeverity, Severity},
};
use crate::middleware::{ContextSource, Contextualizer, SeverityFilter};
use crate::writers::NullWriter;
use std::fmt;
use std::sync::Arc;

/// Entry point of a logging chain
///
/// A `Logger` owns a reference to the head of a chain of middleware layers
/// ending in a writer. Composition helpers such as
/// [`with_context`](Logger::with_context) return a new `Logger` with an extra
/// layer in front; the chain they extend is shared, not modified.
///
/// # Example
///
/// ```
/// use green_log::prelude::*;
///
/// let sink = MemoryWriter::new();
/// let logger = Logger::new(sink.clone()).with_context(fields! { "thread" => "main" });
///
/// assert!(logger.info("Stuff happened")?);
/// assert_eq!(sink.len(), 1);
/// # Ok::<(), green_log::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    level: Severity,
    downstream: Arc<dyn Downstream>,
}

impl Logger {
    /// Wrap a chain, accepting every severity
    #[must_use]
    pub fn new<D: Downstream + 'static>(downstream: D) -> Self {
        Self::from_arc(Arc::new(downstream))
    }

    /// Wrap a chain, dropping entries below `level` before any middleware sees them
    ///
    /// `level` may be a `Severity`, a name such as `"WARN"`, or a number.
    pub fn with_level<D: Downstream + 'static>(
        downstream: D,
        level: impl IntoSeverity,
    ) -> Result<Self> {
        Ok(Self {
            level: level.into_severity()?,
            downstream: Arc::new(downstream),
        })
    }

    /// Wrap a chain that is already shared, accepting every severity
    #[must_use]
    pub fn from_arc(downstream: Arc<dyn Downstream>) -> Self {
        Self {
            level: Severity::Debug,
            downstream,
        }
    }

    /// A logger that discards everything
    #[must_use]
    pub fn null() -> Self {
        Self::new(NullWriter::new())
    }

    /// The next link of the chain
    pub fn downstream(&self) -> &Arc<dyn Downstream> {
        &self.downstream
    }

    /// Threshold applied by this logger itself
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Set this logger's own threshold from a `Severity`, a name, or a number
    pub fn set_level(&mut self, level: impl IntoSeverity) -> Result<()> {
        self.level = level.into_severity()?;
        Ok(())
    }

    /// Threshold of the nearest severity filter downstream
    pub fn severity_threshold(&self) -> Severity {
        self.downstream.severity_threshold()
    }

    /// Whether an entry of `severity` would get past every filter
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level && self.downstream.accepts(severity)
    }

    /// Log a message, data mapping or error
    ///
    /// Returns `Ok(false)` if the entry was filtered out.
    pub fn log(&self, severity: Severity, payload: impl Into<Payload>) -> Result<bool> {
        self.emit(severity, payload.into(), |_| {})
    }

    /// Log an entry configured by `configure`
    ///
    /// The callback receives a builder pre-populated from `payload`. It is
    /// only called if the entry will pass every filter in the chain.
    pub fn log_with<F>(
        &self,
        severity: Severity,
        payload: impl Into<Payload>,
        configure: F,
    ) -> Result<bool>
    where
        F: FnOnce(&mut EntryBuilder),
    {
        self.emit(severity, payload.into(), configure)
    }

    fn emit<F>(&self, severity: Severity, payload: Payload, configure: F) -> Result<bool>
    where
        F: FnOnce(&mut EntryBuilder),
    {
        if !self.is_enabled(severity) {
            return Ok(false);
        }

        let mut builder = EntryBuilder::from_payload(severity, payload);
        configure(&mut builder);
        self.downstream.accept(builder.build())
    }

    #[inline]
    pub fn debug(&self, payload: impl Into<Payload>) -> Result<bool> {
        self.log(Severity::Debug, payload)
    }

    #[inline]
    pub fn info(&self, payload: impl Into<Payload>) -> Result<bool> {
        self.log(Severity::Info, payload)
    }

    #[inline]
    pub fn warn(&self, payload: impl Into<Payload>) -> Result<bool> {
        self.log(Severity::Warn, payload)
    }

    #[inline]
    pub fn error(&self, payload: impl Into<Payload>) -> Result<bool> {
        self.log(Severity::Error, payload)
    }

    #[inline]
    pub fn fatal(&self, payload: impl Into<Payload>) -> Result<bool> {
        self.log(Severity::Fatal, payload)
    }

    #[inline]
    pub fn debug_with<F: FnOnce(&mut EntryBuilder)>(&self, configure: F) -> Result<bool> {
        self.log_with(Severity::Debug, (), configure)
    }

    #[inline]
    pub fn info_with<F: FnOnce(&mut EntryBuilder)>(&self, configure: F) -> Result<bool> {
        self.log_with(Severity::Info, (), configure)
    }

    #[inline]
    pub fn warn_with<F: FnOnce(&mut EntryBuilder)>(&self, configure: F) -> Result<bool> {
        self.log_with(Severity::Warn, (), configure)
    }

    #[inline]
    pub fn error_with<F: FnOnce(&mut EntryBuilder)>(&self, configure: F) -> Result<bool> {
        self.log_with(Severity::Error, (), configure)
    }

    #[inline]
    pub fn fatal_with<F: FnOnce(&mut EntryBuilder)>(&self, configure: F) -> Result<bool> {
        self.log_with(Severity::Fatal, (), configure)
    }

    /// New logger that adds `context` to every entry
    ///
    /// Context applied later wins over context applied earlier; context set
    /// on the entry itself wins over both.
    #[must_use]
    pub fn with_context(&self, context: impl Into<ContextSource>) -> Logger {
        self.wrap(Contextualizer::new(Arc::clone(&self.downstream), context))
    }

    /// New logger whose context is computed afresh for every entry
    ///
    /// ```
    /// use green_log::prelude::*;
    /// use std::sync::atomic::{AtomicI64, Ordering};
    ///
    /// let sink = MemoryWriter::new();
    /// let counter = AtomicI64::new(0);
    /// let logger = Logger::new(sink.clone()).with_context_fn(move || {
    ///     fields! { "counter" => counter.fetch_add(1, Ordering::Relaxed) + 1 }
    /// });
    ///
    /// logger.info("x")?;
    /// logger.info("x")?;
    /// assert_eq!(sink.entries()[1].context.get("counter"), Some(&FieldValue::Int(2)));
    /// # Ok::<(), green_log::LoggerError>(())
    /// ```
    #[must_use]
    pub fn with_context_fn<F>(&self, context: F) -> Logger
    where
        F: Fn() -> FieldMap + Send + Sync + 'static,
    {
        self.with_context(ContextSource::dynamic(context))
    }

    /// New logger that drops entries below `threshold`
    #[must_use]
    pub fn with_severity_threshold(&self, threshold: Severity) -> Logger {
        self.wrap(SeverityFilter::new(Arc::clone(&self.downstream), threshold))
    }

    fn wrap<D: Downstream + 'static>(&self, layer: D) -> Logger {
        Logger {
            level: self.level,
            downstream: Arc::new(layer),
        }
    }
}

impl Downstream for Logger {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        if entry.severity < self.level {
            return Ok(false);
        }
        self.downstream.accept(entry)
    }

    fn severity_threshold(&self) -> Severity {
        self.downstream.severity_threshold()
    }

    fn accepts(&self, severity: Severity) -> bool {
        self.is_enabled(severity)
    }

    fn name(&self) -> &str {
        "logger"
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("downstream", &self.downstream.name())
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CapturedError, FieldValue, LoggerError};
    use crate::writers::MemoryWriter;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn warn_logger() -> (MemoryWriter, Logger) {
        let sink = MemoryWriter::new();
        let mut logger = Logger::new(sink.clone());
        logger.set_level("WARN").unwrap();
        (sink, logger)
    }

    #[test]
    fn test_level_defaults_to_debug() {
        let logger = Logger::new(MemoryWriter::new());
        assert_eq!(logger.level(), Severity::Debug);
    }

    #[test]
    fn test_level_can_be_set_by_value_name_or_number() {
        let mut logger = Logger::new(MemoryWriter::new());
        logger.set_level(Severity::Warn).unwrap();
        assert_eq!(logger.level(), Severity::Warn);
        logger.set_level("error").unwrap();
        assert_eq!(logger.level(), Severity::Error);
        logger.set_level(1u8).unwrap();
        assert_eq!(logger.level(), Severity::Info);
        assert!(logger.set_level("LOUD").is_err());
        assert_eq!(logger.level(), Severity::Info);
    }

    #[test]
    fn test_can_be_constructed_with_level() {
        let logger = Logger::with_level(MemoryWriter::new(), Severity::Warn).unwrap();
        assert_eq!(logger.level(), Severity::Warn);
    }

    #[test]
    fn test_can_be_constructed_with_level_name() {
        let logger = Logger::with_level(MemoryWriter::new(), "WARN").unwrap();
        assert_eq!(logger.level(), Severity::Warn);

        let err = Logger::with_level(MemoryWriter::new(), "LOUD")
            .err()
            .expect("unknown name should be rejected");
        assert!(matches!(err, LoggerError::UnknownSeverity { .. }));
    }

    #[test]
    fn test_logs_at_or_above_level() {
        let (sink, logger) = warn_logger();
        assert!(logger.log(Severity::Warn, "Stuff happened").unwrap());
        assert!(logger.log(Severity::Error, "More stuff happened").unwrap());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_drops_below_level() {
        let (sink, logger) = warn_logger();
        assert!(!logger.log(Severity::Info, "Boring stuff").unwrap());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_payload_kinds() {
        let (sink, logger) = warn_logger();
        let data = FieldMap::new().with_field("x", 1).with_field("y", 2);
        let exception = CapturedError::new("StandardError", "Ah, bugger!");

        logger.warn("Stuff happened").unwrap();
        assert_eq!(sink.last().unwrap().message.as_deref(), Some("Stuff happened"));

        logger.warn(data.clone()).unwrap();
        assert_eq!(sink.last().unwrap().data, Some(data));

        logger.warn(exception.clone()).unwrap();
        assert_eq!(sink.last().unwrap().exception, Some(exception));
    }

    #[test]
    fn test_callback_sets_properties() {
        let (sink, logger) = warn_logger();
        logger
            .log_with(Severity::Warn, (), |e| {
                e.message("Stuff happened").field("x", 1);
            })
            .unwrap();

        let entry = sink.last().unwrap();
        assert_eq!(entry.message.as_deref(), Some("Stuff happened"));
        assert_eq!(entry.data, Some(FieldMap::new().with_field("x", 1)));
    }

    #[test]
    fn test_callback_sees_payload() {
        let (sink, logger) = warn_logger();
        logger
            .log_with(Severity::Error, "failed", |e| {
                e.context_field("attempt", 3);
            })
            .unwrap();

        let entry = sink.last().unwrap();
        assert_eq!(entry.message.as_deref(), Some("failed"));
        assert_eq!(entry.context.get("attempt"), Some(&FieldValue::Int(3)));
    }

    #[test]
    fn test_callback_skipped_below_level() {
        let (sink, logger) = warn_logger();
        let calls = AtomicUsize::new(0);
        let accepted = logger
            .info_with(|_| {
                calls.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();

        assert!(!accepted);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_level_named_helpers() {
        let sink = MemoryWriter::new();
        let logger = Logger::new(sink.clone());

        logger.debug("Watch out").unwrap();
        logger.info("Watch out").unwrap();
        logger.warn("Watch out").unwrap();
        logger.error("Watch out").unwrap();
        logger.fatal("Watch out").unwrap();

        let severities: Vec<_> = sink.entries().iter().map(|e| e.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn test_with_context_adds_context() {
        let sink = MemoryWriter::new();
        let logger = Logger::new(sink.clone());
        let context = FieldMap::new().with_field("thread", "main");

        logger.with_context(context.clone()).info("Stuff happened").unwrap();

        let entry = sink.last().unwrap();
        assert_eq!(entry.context, context);
        assert_eq!(entry.message.as_deref(), Some("Stuff happened"));
    }

    #[test]
    fn test_with_context_leaves_original_alone() {
        let sink = MemoryWriter::new();
        let logger = Logger::new(sink.clone());
        let _scoped = logger.with_context(FieldMap::new().with_field("thread", "main"));

        logger.info("plain").unwrap();
        assert!(sink.last().unwrap().context.is_empty());
        assert_eq!(logger.downstream().name(), "memory");
    }

    #[test]
    fn test_severity_threshold_reads_downstream() {
        let logger = Logger::new(MemoryWriter::new()).with_severity_threshold(Severity::Error);
        assert_eq!(logger.severity_threshold(), Severity::Error);
        assert_eq!(logger.downstream().name(), "severity_filter");
    }

    #[test]
    fn test_with_severity_threshold_filters_and_skips_callbacks() {
        let sink = MemoryWriter::new();
        let logger = Logger::new(sink.clone()).with_severity_threshold(Severity::Error);

        assert!(logger.log(Severity::Error, "Stuff happened").unwrap());
        assert!(logger.log(Severity::Fatal, "More stuff happened").unwrap());
        assert_eq!(sink.len(), 2);

        let mut evaluated = false;
        let accepted = logger
            .log_with(Severity::Warn, (), |e| {
                evaluated = true;
                e.message("Unused message");
            })
            .unwrap();
        assert!(!accepted);
        assert!(!evaluated);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_logger_as_downstream_applies_level() {
        let sink = MemoryWriter::new();
        let inner = Logger::with_level(sink.clone(), Severity::Warn).unwrap();
        let outer = Logger::new(inner);

        assert!(!outer.is_enabled(Severity::Info));
        assert!(!outer.info("hidden").unwrap());
        assert!(outer.error("shown").unwrap());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_null_logger_accepts_everything() {
        let logger = Logger::null();
        assert!(logger.debug("anything").unwrap());
        assert_eq!(logger.downstream().name(), "null");
    }
}
