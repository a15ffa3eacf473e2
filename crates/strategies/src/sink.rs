// In crates/strategies/src/sink.rs

use std::cell::RefCell;
use std::io::{self, Write};

use core_types::Result;

/// Destination for the lines a strategy emits.
pub trait TradeSink {
    fn emit(&self, line: &str) -> Result<()>;
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TradeSink for StdoutSink {
    fn emit(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Keeps emitted lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Drains the recorded lines.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl TradeSink for MemorySink {
    fn emit(&self, line: &str) -> Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_order_and_drains() {
        let sink = MemorySink::new();
        sink.emit("first").unwrap();
        sink.emit("second").unwrap();

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.take(), vec!["first", "second"]);
        assert!(sink.lines().is_empty());
    }
}
