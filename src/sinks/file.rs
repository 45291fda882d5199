//! File sink implementation

use crate::core::{LogRecord, LoggerError, Result, Sink};
use crate::formatters::Formatter;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one formatted record per write to a file
///
/// Writes are unbuffered: a record is on disk once `append` returns. Opening
/// the same path twice gives two independent sinks that both write every
/// record.
pub struct FileSink {
    file: File,
    path: PathBuf,
    formatter: Formatter,
}

impl FileSink {
    /// Open `path` for appending, creating it if absent
    pub fn new(path: impl AsRef<Path>, formatter: Formatter) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e))?;

        Ok(Self {
            file,
            path,
            formatter,
        })
    }

    /// Uncolored text lines
    pub fn text(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(path, Formatter::text(false))
    }

    /// Pretty-printed JSON documents
    pub fn json(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(path, Formatter::structured())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl Sink for FileSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut output = self.formatter.format(record);
        output.push('\n');

        self.file.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        match self.formatter {
            Formatter::Structured(_) => "json-file",
            Formatter::Text(_) => "file",
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
