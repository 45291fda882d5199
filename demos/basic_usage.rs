//! Basic logger usage example
//!
//! Logs one message per severity to the console and to `example.log`, and
//! mirrors them as JSON documents into `example.json`.
//!
//! Run with: cargo run --example basic_usage

use rust_color_logger::prelude::*;
use rust_color_logger::{get_logger, shutdown, warning};
use std::path::Path;

fn main() -> Result<()> {
    let logger = get_logger("root", Severity::Debug, Some(Path::new("example.log")))?;
    logger.add_json_handler("example.json")?;

    logger.debug("Initialized database connection pool with 10 connections.");
    logger.info("Server started successfully on port 8080");
    warning!(logger, "Slow query detected: execution time {} seconds", 3.8);
    logger.error("Failed to insert record into `orders` table. Integrity constraint violated");
    logger.critical("Out-of-memory error occurred while processing large request");

    // Raise the threshold: only ERROR and above from here on
    logger.set_min_severity(Severity::Error);
    logger.info("This line is filtered");
    logger.error("This line is written");

    shutdown()
}
