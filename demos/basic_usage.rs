//! Basic logger usage example
//!
//! Demonstrates building a logger, filtering by severity, adding context and
//! configuring entries lazily.
//!
//! Run with: cargo run --example basic_usage

use green_log::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

fn main() -> Result<()> {
    println!("=== Green Log - Basic Usage Example ===\n");

    // Human-readable lines on stdout, colored severities
    let logger = Logger::builder()
        .dest(Destination::Stdout)
        .colors(true)
        .build()?;

    println!("1. Logging at different severities:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Structured data and errors:");
    logger.info(fields! { "user_id" => 42, "action" => "login" })?;
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    logger.error(Payload::error(&err))?;

    println!("\n3. Filtering with a severity threshold:");
    let quiet = logger.with_severity_threshold(Severity::Warn);
    let shown = quiet.info_with(|entry| {
        println!("   (never printed: callbacks only run for entries that pass)");
        entry.message("Info message (hidden)");
    })?;
    println!("   info accepted: {}", shown);
    quiet.warn("Warning message (visible)")?;

    println!("\n4. Context, static and per-entry:");
    let requests = AtomicI64::new(0);
    let scoped = logger
        .with_context(fields! { "service" => "api-gateway" })
        .with_context_fn(move || fields! { "request" => requests.fetch_add(1, Ordering::Relaxed) + 1 });
    scoped.info("Handling request")?;
    scoped.info("Handling request")?;

    println!("\n5. The same entries as JSON:");
    let json = Logger::builder().format("json").build()?;
    json.info_with(|entry| {
        entry
            .message("Request processed")
            .field("latency_ms", 42.5)
            .context_field("request_id", "abc-123");
    })?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
