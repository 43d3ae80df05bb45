//! # Console Logger
//!
//! A colorized console logger. Each call renders a message template with
//! its arguments and writes one line:
//!
//! ```text
//! [HH:MM:SS] [LEVEL] [file:line] message
//! ```
//!
//! Brackets, prefixes and message text are painted with per-level ANSI
//! colors. Lines are delivered synchronously on the calling thread or
//! handed to a single background writer.
//!
//! ## Features
//!
//! - **Typed arguments**: any type implementing [`LogValue`]; unsupported
//!   types are rejected at compile time
//! - **Two placeholder modes**: sequential `{}` and indexed `{N}`
//! - **Sync or async delivery** with identical output
//! - **Pluggable destinations** through the [`Appender`] trait
//!
//! ## Example
//!
//! ```
//! use console_logger::prelude::*;
//!
//! let mut logger = Logger::builder()
//!     .placeholder_mode(PlaceholderMode::Indexed)
//!     .async_mode()
//!     .build();
//!
//! logger.info("{0} connected from {1}; welcome, {0}", &[&"alice", &"10.0.0.7"]);
//! logger.shutdown().unwrap();
//! ```
//!
//! Arguments without a [`LogValue`] implementation do not compile:
//!
//! ```compile_fail
//! use console_logger::Logger;
//!
//! struct Opaque;
//! let logger = Logger::new();
//! logger.info("{}", &[&Opaque]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, MemoryBuffer, WriterAppender};
    pub use crate::core::{
        Appender, CallSite, ColorChoice, ColorScheme, HexCase, LogLevel, LogValue, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OverflowPolicy, Palette,
        PlaceholderMode, Result, TermColor, WriteErrorPolicy,
    };
}

pub use appenders::{
    enable_ansi_support, ConsoleAppender, MemoryAppender, MemoryBuffer, WriterAppender,
};
pub use core::{
    format_address, format_time, render, Appender, ArgumentList, CallSite, ColorChoice,
    ColorScheme, DispatchOptions, HexCase, LineComposer, LogLevel, LogRecord, LogValue, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OverflowPolicy, Palette,
    PlaceholderMode, Result, TermColor, WriteErrorPolicy, MAX_PLACEHOLDER_LEN, RESET, TIME_FORMAT,
    UNRESOLVED_MARKER,
};
