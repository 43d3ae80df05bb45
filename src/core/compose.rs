//! Assembly of the final colored log line
//!
//! A line is made of bracket fields followed by the message:
//!
//! ```text
//! [HH:MM:SS] [LEVEL] [file:line] message
//! ```
//!
//! With colors enabled every bracket field paints `[` and `]` with the
//! scheme's bracket color and its interior with the prefix color, then
//! resets. The message is painted with the text color. Every line starts
//! with its own color code, so nothing carries over from one line to the
//! next.

use super::call_site::CallSite;
use super::color::{ColorScheme, RESET};
use super::log_level::LogLevel;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// strftime pattern of the timestamp field
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Zero-padded `HH:MM:SS` of a timestamp
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(TIME_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineComposer {
    colorize: bool,
}

impl Default for LineComposer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LineComposer {
    pub const fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    pub const fn colorize(&self) -> bool {
        self.colorize
    }

    /// Build one newline-terminated line
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::{CallSite, ColorScheme, LineComposer, LogLevel};
    ///
    /// let plain = LineComposer::new(false);
    /// let site = CallSite::new("src/main.rs", 7);
    /// let warn = ColorScheme::WARN;
    /// let line = plain.compose(LogLevel::Warn, &warn, Some(&site), "09:05:00", "disk low");
    /// assert_eq!(line, "[09:05:00] [WARN] [main.rs:7] disk low\n");
    /// ```
    pub fn compose(
        &self,
        level: LogLevel,
        colors: &ColorScheme,
        call_site: Option<&CallSite>,
        time: &str,
        message: &str,
    ) -> String {
        let mut line = String::with_capacity(message.len() + 96);

        self.push_field(&mut line, colors, time);
        line.push(' ');
        self.push_field(&mut line, colors, level.to_str());
        line.push(' ');
        if let Some(site) = call_site {
            self.push_field(&mut line, colors, &site.to_string());
            line.push(' ');
        }
        if self.colorize {
            line.push_str(&colors.text.sgr());
        }
        line.push_str(message);
        line.push('\n');
        line
    }

    fn push_field(&self, line: &mut String, colors: &ColorScheme, text: &str) {
        if !self.colorize {
            line.push('[');
            line.push_str(text);
            line.push(']');
            return;
        }

        let bracket = colors.bracket.sgr();
        line.push_str(&bracket);
        line.push('[');
        line.push_str(&colors.prefix.sgr());
        line.push_str(text);
        line.push_str(&bracket);
        line.push(']');
        line.push_str(RESET);
    }
}
