//! Core logger types and traits

pub mod error;
pub mod factory;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod palette;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use factory::{
    add_file_handler, add_json_handler, clear_registry, get_logger, global, shutdown,
    LoggerConfig, LoggerFactory, LoggerFactoryBuilder,
};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use palette::{strip_ansi, SeverityPalette, RESET};
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::{format_timestamp, DATE_FORMAT};
