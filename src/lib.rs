//! # Green Log
//!
//! A structured logging pipeline. Entries carry a severity, a message,
//! optional structured data, an optional error, and contextual tags. They
//! travel down a chain of middleware layers (severity filters, context
//! injectors) to a writer that renders them.
//!
//! ## Features
//!
//! - **Composable**: every link of a chain implements [`Downstream`]
//! - **Lazy**: configuration callbacks only run for entries that will be written
//! - **Structured**: data and context are key-value fields, rendered as text or JSON
//! - **Synchronous**: `log` returns once the entry is written, with the outcome
//!
//! ```
//! use green_log::prelude::*;
//!
//! let sink = MemoryWriter::new();
//! let logger = Logger::new(sink.clone())
//!     .with_severity_threshold(Severity::Info)
//!     .with_context(fields! { "request_id" => "abc-123" });
//!
//! assert!(!logger.debug("Boring stuff")?);
//! assert!(logger.info("Stuff happened")?);
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), green_log::LoggerError>(())
//! ```

pub mod core;
pub mod factory;
pub mod macros;
pub mod middleware;
pub mod writers;

pub mod prelude {
    pub use crate::factory::{Destination, Format, LoggerBuilder, LoggerConfig};
    pub use crate::fields;
    pub use crate::middleware::{ContextSource, Contextualizer, SeverityFilter};
    pub use crate::writers::{JsonWriter, MemoryWriter, NullWriter, SimpleWriter, WriterRegistry};
    pub use crate::core::{
        CapturedError, Downstream, EntryBuilder, FieldMap, FieldValue, IntoSeverity, LogEntry,
        Logger, LoggerError, Payload, Result, Severity, TimestampFormat,
    };
}

pub use core::{
    CapturedError, Downstream, EntryBuilder, FieldMap, FieldValue, IntoSeverity, JsonRecord,
    LogEntry, Logger, LoggerError, Payload, Result, Severity, TimestampFormat,
};
pub use factory::{build, null, Destination, Format, LoggerBuilder, LoggerConfig};
pub use middleware::{ContextSource, Contextualizer, SeverityFilter};
pub use writers::{JsonWriter, MemoryWriter, NullWriter, SimpleWriter, WriterRegistry};
