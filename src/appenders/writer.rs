//! Appender over any `io::Write`

use crate::core::{Appender, LoggerError, Result};
use std::io::Write;

/// Sends lines to an arbitrary writer, such as stderr, a file or a socket
///
/// ```
/// use console_logger::{ColorChoice, Logger, WriterAppender};
///
/// let logger = Logger::builder()
///     .color_choice(ColorChoice::Never)
///     .appender(WriterAppender::new(std::io::stderr()).with_name("stderr"))
///     .build();
/// logger.warn("to stderr", &[]);
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .map_err(|e| {
                LoggerError::io_operation("writing a line", format!("{}: {}", self.name, e), e)
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", format!("{}: {}", self.name, e), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
