//! Logger construction and the process-wide registry
//!
//! [`LoggerFactory`] wires a console sink and optional file sinks onto a named
//! [`Logger`] and keeps one handle per name. The crate-level functions
//! ([`get_logger`], [`add_file_handler`], [`add_json_handler`],
//! [`clear_registry`], [`shutdown`]) go through a lazily created global
//! factory that lives for the rest of the process.

use super::{error::Result, logger::Logger, severity::Severity};
use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink, PlatformProbe, Sink, TerminalProbe};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Construction parameters for a logger handle
///
/// # Example
///
/// ```
/// use rust_color_logger::{LoggerConfig, Severity};
///
/// let config = LoggerConfig::new("api")
///     .min_severity(Severity::Info)
///     .file_path("api.log")
///     .json_path("api.json");
/// assert_eq!(config.name(), "api");
/// ```
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    name: String,
    min_severity: Severity,
    file_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
    use_colors: Option<bool>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_severity: Severity::Debug,
            file_path: None,
            json_path: None,
            use_colors: None,
        }
    }

    #[must_use]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Also write uncolored text lines to `path`
    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Also write JSON documents to `path`
    #[must_use]
    pub fn json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    /// Force console colors on or off instead of asking the terminal
    #[must_use]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Creates and caches named logger handles
pub struct LoggerFactory {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    console: ConsoleTarget,
    probe: Arc<dyn TerminalProbe>,
}

impl LoggerFactory {
    /// Factory writing console output to stdout
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerFactoryBuilder {
        LoggerFactoryBuilder::new()
    }

    /// Create or retrieve the handle `name`
    ///
    /// The threshold is set on every call. A console sink is attached only
    /// when the handle is created; `file_path` attaches a new text file sink
    /// on every call.
    pub fn get_logger(
        &self,
        name: &str,
        min_severity: Severity,
        file_path: Option<&Path>,
    ) -> Result<Arc<Logger>> {
        let mut config = LoggerConfig::new(name).min_severity(min_severity);
        if let Some(path) = file_path {
            config = config.file_path(path);
        }
        self.get_logger_with(config)
    }

    /// Create or retrieve a handle from a [`LoggerConfig`]
    ///
    /// File sinks are opened before the registry is touched, so a failing
    /// path leaves both the registry and any existing handle unchanged. An
    /// empty path means no file sink.
    pub fn get_logger_with(&self, config: LoggerConfig) -> Result<Arc<Logger>> {
        let mut file_sinks: Vec<Box<dyn Sink>> = Vec::new();
        if let Some(path) = non_empty(config.file_path.as_deref()) {
            file_sinks.push(Box::new(FileSink::text(path)?));
        }
        if let Some(path) = non_empty(config.json_path.as_deref()) {
            file_sinks.push(Box::new(FileSink::json(path)?));
        }

        let mut loggers = self.loggers.write();
        let logger = match loggers.get(&config.name) {
            Some(existing) => Arc::clone(existing),
            None => {
                let logger = Arc::new(Logger::new(config.name.clone()));
                logger.add_sink(Box::new(self.console_sink(config.use_colors)));
                loggers.insert(config.name.clone(), Arc::clone(&logger));
                logger
            }
        };

        logger.set_min_severity(config.min_severity);
        for sink in file_sinks {
            logger.add_sink(sink);
        }

        Ok(logger)
    }

    fn console_sink(&self, use_colors: Option<bool>) -> ConsoleSink {
        match use_colors {
            Some(use_colors) => ConsoleSink::with_colors(self.console.clone(), use_colors),
            None => ConsoleSink::for_target(self.console.clone(), self.probe.as_ref()),
        }
    }

    /// Look up an existing handle without creating one
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Flush every registered handle, returning the first error seen
    pub fn flush_all(&self) -> Result<()> {
        let mut first_error = None;
        for logger in self.loggers.read().values() {
            if let Err(e) = logger.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Flush and forget every registered handle
    ///
    /// Handles still held by callers keep working; their sinks close when the
    /// last reference goes away.
    pub fn clear(&self) {
        let drained: Vec<Arc<Logger>> = self.loggers.write().drain().map(|(_, l)| l).collect();
        for logger in drained {
            if let Err(e) = logger.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush logger '{}' while clearing registry: {}",
                    logger.name(),
                    e
                );
            }
        }
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`LoggerFactory`] with a custom console target or probe
///
/// # Example
///
/// ```
/// use rust_color_logger::prelude::*;
///
/// let console = MemoryBuffer::new();
/// let factory = LoggerFactory::builder()
///     .console(ConsoleTarget::Memory(console.clone()))
///     .probe(FixedProbe(false))
///     .build();
///
/// let logger = factory.get_logger("svc", Severity::Debug, None).unwrap();
/// logger.info("ready");
/// assert!(console.contents().contains("[svc]: ready"));
/// ```
pub struct LoggerFactoryBuilder {
    console: ConsoleTarget,
    probe: Arc<dyn TerminalProbe>,
}

impl LoggerFactoryBuilder {
    pub fn new() -> Self {
        Self {
            console: ConsoleTarget::Stdout,
            probe: Arc::new(PlatformProbe),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, target: ConsoleTarget) -> Self {
        self.console = target;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn probe<P: TerminalProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    pub fn build(self) -> LoggerFactory {
        LoggerFactory {
            loggers: RwLock::new(HashMap::new()),
            console: self.console,
            probe: self.probe,
        }
    }
}

impl Default for LoggerFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// The process-wide factory, created on first use and never torn down
pub fn global() -> &'static LoggerFactory {
    GLOBAL_FACTORY.get_or_init(LoggerFactory::new)
}

/// Create or retrieve a global handle
///
/// # Example
///
/// ```no_run
/// use rust_color_logger::{get_logger, Severity};
/// use std::path::Path;
///
/// let logger = get_logger("svc", Severity::Debug, Some(Path::new("out.log"))).unwrap();
/// logger.error("disk full");
/// ```
pub fn get_logger(name: &str, min_severity: Severity, file_path: Option<&Path>) -> Result<Arc<Logger>> {
    global().get_logger(name, min_severity, file_path)
}

/// Attach an uncolored text file sink to `logger`
pub fn add_file_handler(logger: &Logger, path: impl AsRef<Path>) -> Result<()> {
    logger.add_file_handler(path).map(|_| ())
}

/// Attach a structured JSON file sink to `logger`
pub fn add_json_handler(logger: &Logger, path: impl AsRef<Path>) -> Result<()> {
    logger.add_json_handler(path).map(|_| ())
}

/// Drop every handle from the global registry
pub fn clear_registry() {
    global().clear();
}

/// Flush every global handle; call before process exit
pub fn shutdown() -> Result<()> {
    global().flush_all()
}
