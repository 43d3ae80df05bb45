//! Appender trait for log output destinations

use super::error::Result;

/// Destination of finished lines
///
/// Lines arrive as complete byte strings including the trailing newline.
pub trait Appender: Send {
    /// One-time setup before the first line is written
    ///
    /// Called at most once per logger, from whichever thread writes first.
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    fn append(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
