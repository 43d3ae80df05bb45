//! Appender implementations

pub mod console;
pub mod memory;
pub mod writer;

pub use console::{enable_ansi_support, ConsoleAppender};
pub use memory::{MemoryAppender, MemoryBuffer};
pub use writer::WriterAppender;

pub use crate::core::Appender;
