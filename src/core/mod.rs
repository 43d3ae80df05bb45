//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod color;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod overflow_policy;
pub mod template;

pub use appender::Appender;
pub use call_site::CallSite;
pub use color::{ColorChoice, ColorScheme, Palette, TermColor, RESET};
pub use compose::{format_time, LineComposer, TIME_FORMAT};
pub use config::{LoggerConfig, WriteErrorPolicy};
pub use dispatch::{format_address, ArgumentList, DispatchOptions, HexCase, LogValue};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, WRITER_THREAD_NAME};
pub use metrics::LoggerMetrics;
pub use overflow_policy::OverflowPolicy;
pub use template::{render, PlaceholderMode, MAX_PLACEHOLDER_LEN, UNRESOLVED_MARKER};
