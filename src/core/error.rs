//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file sink could not be opened at attachment time
    #[error("Cannot open log file '{path}': {source}")]
    FileSink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown severity name
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a file sink error for the given path
    pub fn file_sink(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(name: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity(name.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
