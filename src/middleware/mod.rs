//! Middleware layers
//!
//! Each layer wraps exactly one downstream link and either drops an entry or
//! forwards it, possibly transformed.

pub mod contextualizer;
pub mod severity_filter;

pub use contextualizer::{ContextSource, Contextualizer};
pub use severity_filter::SeverityFilter;
