//! Terminal capability detection for console color selection

use super::console::ConsoleTarget;
use std::io::IsTerminal;

/// Answers whether a console target is an interactive terminal
pub trait TerminalProbe: Send + Sync {
    fn is_terminal(&self, target: &ConsoleTarget) -> bool;
}

/// Asks the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProbe;

impl TerminalProbe for PlatformProbe {
    fn is_terminal(&self, target: &ConsoleTarget) -> bool {
        match target {
            ConsoleTarget::Stdout => std::io::stdout().is_terminal(),
            ConsoleTarget::Stderr => std::io::stderr().is_terminal(),
            ConsoleTarget::Memory(_) => false,
        }
    }
}

/// Always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl TerminalProbe for FixedProbe {
    fn is_terminal(&self, _target: &ConsoleTarget) -> bool {
        self.0
    }
}
