//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::{self, Write};
use std::sync::Once;

static ANSI_SUPPORT: Once = Once::new();

/// Turn on escape-sequence processing for this process's console
///
/// Runs its body at most once per process, however many loggers call it.
/// A no-op where terminals interpret escape sequences natively.
pub fn enable_ansi_support() {
    ANSI_SUPPORT.call_once(|| {
        #[cfg(windows)]
        {
            if colored::control::set_virtual_terminal(true).is_err() {
                eprintln!("[LOGGER WARNING] Console does not support color escape sequences");
            }
        }
    });
}

/// Writes every line to standard output
///
/// Each line goes out in a single `write_all` on a locked handle, so lines
/// from different loggers in one process never interleave mid-line.
pub struct ConsoleAppender {
    stdout: io::Stdout,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn prepare(&mut self) -> Result<()> {
        enable_ansi_support();
        Ok(())
    }

    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.stdout.lock().write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
