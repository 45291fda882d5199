//! Console sink implementation

use super::terminal::{PlatformProbe, TerminalProbe};
use crate::core::{LogRecord, Result, Sink};
use crate::formatters::Formatter;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// In-memory console stand-in, cloned handles share one buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    fn write_line(&self, line: &str) {
        let mut bytes = self.bytes.lock();
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
    }
}

/// Where console output goes
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    Memory(MemoryBuffer),
}

pub struct ConsoleSink {
    target: ConsoleTarget,
    formatter: Formatter,
}

impl ConsoleSink {
    /// Text sink on stdout, colored when stdout is a terminal
    pub fn new() -> Self {
        Self::for_target(ConsoleTarget::Stdout, &PlatformProbe)
    }

    /// Text sink on `target`, colored when `probe` reports a terminal
    pub fn for_target(target: ConsoleTarget, probe: &dyn TerminalProbe) -> Self {
        let use_colors = probe.is_terminal(&target);
        Self::with_colors(target, use_colors)
    }

    /// Text sink on `target` with an explicit color choice
    pub fn with_colors(target: ConsoleTarget, use_colors: bool) -> Self {
        Self {
            target,
            formatter: Formatter::text(use_colors),
        }
    }

    /// Replace the formatter, e.g. to emit structured documents on the console
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn target(&self) -> &ConsoleTarget {
        &self.target
    }

    // Each line goes out under one stream lock so concurrent writers never split it.
    fn write_line(&self, line: &str) -> Result<()> {
        match &self.target {
            ConsoleTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()?;
            }
            ConsoleTarget::Stderr => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", line)?;
                err.flush()?;
            }
            ConsoleTarget::Memory(buffer) => buffer.write_line(line),
        }
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.formatter.format(record);
        self.write_line(&output)
    }

    fn flush(&mut self) -> Result<()> {
        match &self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
            ConsoleTarget::Memory(_) => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use crate::sinks::terminal::FixedProbe;

    #[test]
    fn test_probe_decides_color() {
        let sink = ConsoleSink::for_target(ConsoleTarget::Memory(MemoryBuffer::new()), &FixedProbe(true));
        assert!(sink.formatter().is_colored());

        let sink = ConsoleSink::for_target(ConsoleTarget::Memory(MemoryBuffer::new()), &FixedProbe(false));
        assert!(!sink.formatter().is_colored());
    }

    #[test]
    fn test_memory_target_receives_lines() -> Result<()> {
        let buffer = MemoryBuffer::new();
        let mut sink = ConsoleSink::with_colors(ConsoleTarget::Memory(buffer.clone()), true);

        sink.append(&LogRecord::new(Severity::Warning, "svc", "first"))?;
        sink.append(&LogRecord::new(Severity::Debug, "svc", "second"))?;
        sink.flush()?;

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\x1b[33mWARNING\x1b[0m  - [svc]: first"));
        assert!(lines[1].contains("\x1b[36mDEBUG\x1b[0m    - [svc]: second"));
        Ok(())
    }

    #[test]
    fn test_memory_buffer_clear() {
        let buffer = MemoryBuffer::new();
        buffer.write_line("something");
        assert!(!buffer.contents().is_empty());
        buffer.clear();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_stdout_sink_does_not_fail() -> Result<()> {
        let mut sink = ConsoleSink::with_colors(ConsoleTarget::Stdout, false);
        sink.append(&LogRecord::new(Severity::Info, "svc", "console smoke test"))?;
        sink.flush()
    }
}
