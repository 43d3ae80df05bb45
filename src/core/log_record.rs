//! Log record structure

use super::call_site::CallSite;
use super::color::ColorScheme;
use super::compose::{format_time, LineComposer};
use super::dispatch::ArgumentList;
use super::log_level::LogLevel;
use super::template::{render, PlaceholderMode};
use chrono::{DateTime, Local};

/// One log call, captured by value
///
/// Arguments are already converted to text, so a record can cross to the
/// writer thread whatever the original argument types were. Each record is
/// rendered exactly once into exactly one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub colors: ColorScheme,
    pub call_site: Option<CallSite>,
    pub template: String,
    pub args: ArgumentList,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        colors: ColorScheme,
        call_site: Option<CallSite>,
        template: impl Into<String>,
        args: ArgumentList,
    ) -> Self {
        Self {
            level,
            colors,
            call_site,
            template: template.into(),
            args,
            timestamp: Local::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Message text with all placeholders resolved
    pub fn message(&self, mode: PlaceholderMode) -> String {
        render(&self.template, &self.args, mode)
    }

    /// Full line ready for the destination
    pub fn render(&self, composer: &LineComposer, mode: PlaceholderMode) -> String {
        composer.compose(
            self.level,
            &self.colors,
            self.call_site.as_ref(),
            &format_time(&self.timestamp),
            &self.message(mode),
        )
    }
}
