//! Lookup of writers by format name

use super::{JsonWriter, SimpleWriter};
use crate::core::{Downstream, LoggerError, Result, TimestampFormat};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Destination handed to a writer constructor
pub type BoxedDest = Box<dyn Write + Send>;

/// Settings shared by every writer the registry builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterOptions {
    pub timestamp_format: TimestampFormat,
    pub colors: bool,
}

/// Builds a writer for a destination
pub type WriterConstructor =
    Arc<dyn Fn(BoxedDest, &WriterOptions) -> Arc<dyn Downstream> + Send + Sync>;

/// Maps format names to writer constructors
///
/// # Example
///
/// ```
/// use green_log::writers::WriterRegistry;
///
/// let registry = WriterRegistry::with_defaults();
/// assert!(registry.contains("json"));
/// assert!(registry.create("xml", Box::new(std::io::sink()), &Default::default()).is_err());
/// ```
#[derive(Clone, Default)]
pub struct WriterRegistry {
    constructors: HashMap<String, WriterConstructor>,
}

impl WriterRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing `simple` and `json`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("simple", |dest, options| -> Arc<dyn Downstream> {
            Arc::new(
                SimpleWriter::new(dest)
                    .with_timestamp_format(options.timestamp_format.clone())
                    .with_colors(options.colors),
            )
        });
        registry.register("json", |dest, options| -> Arc<dyn Downstream> {
            Arc::new(JsonWriter::new(dest).with_timestamp_format(options.timestamp_format.clone()))
        });
        registry
    }

    /// Register a constructor; names are matched case-insensitively
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(BoxedDest, &WriterOptions) -> Arc<dyn Downstream> + Send + Sync + 'static,
    {
        self.constructors
            .insert(name.to_lowercase(), Arc::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Result<WriterConstructor> {
        self.constructors
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| LoggerError::unknown_format(name))
    }

    /// Build the writer registered under `name`
    pub fn create(
        &self,
        name: &str,
        dest: BoxedDest,
        options: &WriterOptions,
    ) -> Result<Arc<dyn Downstream>> {
        let constructor = self.get(name)?;
        Ok(constructor(dest, options))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for WriterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterRegistry")
            .field("names", &self.names())
            .finish()
    }
}
