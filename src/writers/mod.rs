//! Writer implementations
//!
//! Writers are the terminal links of a chain: they render an entry and report
//! it as accepted.

pub mod json;
pub mod memory;
pub mod null;
pub mod registry;
pub mod simple;

pub use json::JsonWriter;
pub use memory::MemoryWriter;
pub use null::NullWriter;
pub use registry::{BoxedDest, WriterConstructor, WriterOptions, WriterRegistry};
pub use simple::SimpleWriter;

pub use crate::core::Downstream;
