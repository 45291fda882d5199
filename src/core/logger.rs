//! Named logger handle

use super::{
    error::Result, log_record::LogRecord, metrics::LoggerMetrics, severity::Severity, sink::Sink,
};
use crate::sinks::FileSink;
use parking_lot::RwLock;
use std::path::Path;

/// A named handle holding a severity threshold and an ordered list of sinks
///
/// Records below the threshold are dropped before a record is even built.
/// Every record that passes is delivered to every sink, in attachment order,
/// while the sink list is locked, so concurrent callers never interleave
/// output within one logger.
pub struct Logger {
    name: String,
    min_severity: RwLock<Severity>,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    /// Metrics for observability (delivered, filtered, failed writes)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with no sinks and a DEBUG threshold
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_severity: RwLock::new(Severity::Debug),
            sinks: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_severity(&self) -> Severity {
        *self.min_severity.read()
    }

    pub fn set_min_severity(&self, severity: Severity) {
        *self.min_severity.write() = severity;
    }

    #[inline]
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity >= *self.min_severity.read()
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Attach an uncolored text sink appending to `path`
    pub fn add_file_handler(&self, path: impl AsRef<Path>) -> Result<&Self> {
        self.add_sink(Box::new(FileSink::text(path)?));
        Ok(self)
    }

    /// Attach a structured JSON sink appending to `path`
    pub fn add_json_handler(&self, path: impl AsRef<Path>) -> Result<&Self> {
        self.add_sink(Box::new(FileSink::json(path)?));
        Ok(self)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Sink names in delivery order
    pub fn sink_names(&self) -> Vec<String> {
        self.sinks.read().iter().map(|s| s.name().to_string()).collect()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log `message` at `severity`, recording the caller's file and line
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if !self.is_enabled_for(severity) {
            self.metrics.record_filtered();
            return;
        }

        let record = LogRecord::capture(severity, self.name.as_str(), message);
        self.dispatch(&record);
    }

    /// Deliver a prebuilt record, subject to the threshold
    pub fn log_record(&self, record: &LogRecord) {
        if !self.is_enabled_for(record.severity) {
            self.metrics.record_filtered();
            return;
        }
        self.dispatch(record);
    }

    fn dispatch(&self, record: &LogRecord) {
        let mut sinks = self.sinks.write();
        Self::process_sync(&mut sinks, record, &self.metrics);
    }

    /// Hand `record` to every sink with per-sink panic isolation
    ///
    /// A failing or panicking sink is reported on stderr and the remaining
    /// sinks still receive the record.
    fn process_sync(sinks: &mut [Box<dyn Sink>], record: &LogRecord, metrics: &LoggerMetrics) {
        for (idx, sink) in sinks.iter_mut().enumerate() {
            let append_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.append(record)));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    metrics.record_write_failure();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_msg
                    );
                    metrics.record_write_failure();
                }
            }
        }

        metrics.record_logged();
    }

    /// Flush every sink, returning the first error seen
    ///
    /// A failing sink does not stop the remaining sinks from being flushed.
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        let mut first_error = None;
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}' during shutdown: {}", self.name, e);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_severity", &self.min_severity())
            .field("sinks", &self.sink_names())
            .finish()
    }
}

/// Builder for constructing a standalone Logger with a fluent API
///
/// # Example
/// ```
/// use rust_color_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .min_severity(Severity::Info)
///     .sink(ConsoleSink::new())
///     .build();
/// assert_eq!(logger.sink_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    min_severity: Severity,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_severity: Severity::Debug,
            sinks: Vec::new(),
        }
    }

    /// Set minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        logger.set_min_severity(self.min_severity);
        for sink in self.sinks {
            logger.add_sink(sink);
        }
        logger
    }
}

impl Logger {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
