//! Core logger types and traits

pub mod captured_error;
pub mod downstream;
pub mod entry_builder;
pub mod error;
pub mod field_map;
pub mod json_record;
pub mod log_entry;
pub mod logger;
pub mod severity;
pub mod timestamp;

pub use captured_error::CapturedError;
pub use downstream::Downstream;
pub use entry_builder::EntryBuilder;
pub use error::{LoggerError, Result};
pub use field_map::{FieldMap, FieldValue};
pub use json_record::JsonRecord;
pub use log_entry::{LogEntry, Payload};
pub use logger::Logger;
pub use severity::{IntoSeverity, Severity};
pub use timestamp::TimestampFormat;
