//! In-memory appender

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to the bytes collected by a [`MemoryAppender`]
///
/// Stays readable after the appender has moved into a logger.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Everything written so far, decoded lossily
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written lines without their terminating newline
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

/// Collects lines in memory; useful for tests and for capturing output
///
/// ```
/// use console_logger::{ColorChoice, Logger, MemoryAppender};
///
/// let memory = MemoryAppender::new();
/// let buffer = memory.buffer();
/// let logger = Logger::builder()
///     .color_choice(ColorChoice::Never)
///     .appender(memory)
///     .build();
///
/// logger.info("{} + {} = {}", &[&1, &2, &3]);
/// assert!(buffer.contents().ends_with("[INFO] 1 + 2 = 3\n"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryAppender {
    buffer: MemoryBuffer,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> MemoryBuffer {
        self.buffer.clone()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.buffer.bytes.lock().extend_from_slice(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
