//! Terminal colors and per-level color schemes
//!
//! Colors are the standard SGR foreground codes (30-37 and the bright
//! variants 90-97). A [`ColorScheme`] decorates one log line and a
//! [`Palette`] holds one scheme per [`LogLevel`].

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token that returns the terminal to its default color
pub const RESET: &str = "\x1b[0m";

/// Foreground terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermColor {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    #[serde(alias = "gray", alias = "grey")]
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

impl TermColor {
    /// Gray is bright black on every common terminal
    pub const GRAY: TermColor = TermColor::BrightBlack;

    /// SGR parameter for this color
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Escape sequence that switches the foreground to this color
    pub fn sgr(self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

impl fmt::Display for TermColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

/// Colors used to decorate one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Around `[` and `]`
    pub bracket: TermColor,
    /// Inside a bracket field
    pub prefix: TermColor,
    /// Message body
    pub text: TermColor,
}

impl ColorScheme {
    pub const fn new(bracket: TermColor, prefix: TermColor, text: TermColor) -> Self {
        Self {
            bracket,
            prefix,
            text,
        }
    }

    pub const DEBUG: ColorScheme =
        ColorScheme::new(TermColor::GRAY, TermColor::Blue, TermColor::White);
    pub const INFO: ColorScheme =
        ColorScheme::new(TermColor::GRAY, TermColor::Cyan, TermColor::White);
    pub const WARN: ColorScheme =
        ColorScheme::new(TermColor::GRAY, TermColor::Yellow, TermColor::White);
    pub const ERROR: ColorScheme =
        ColorScheme::new(TermColor::GRAY, TermColor::Red, TermColor::White);

    /// Preset scheme for a level
    pub const fn preset(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(TermColor::White, TermColor::White, TermColor::White)
    }
}

/// One color scheme per level
///
/// Owned by the logger configuration, so applications customize colors
/// before building a logger instead of mutating shared state.
///
/// # Examples
///
/// ```
/// use console_logger::{ColorScheme, LogLevel, Palette, TermColor};
///
/// let palette = Palette::default().with_scheme(
///     LogLevel::Warn,
///     ColorScheme::new(TermColor::White, TermColor::BrightYellow, TermColor::Yellow),
/// );
/// assert_eq!(palette.scheme(LogLevel::Warn).prefix, TermColor::BrightYellow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub debug: ColorScheme,
    pub info: ColorScheme,
    pub warn: ColorScheme,
    pub error: ColorScheme,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            debug: ColorScheme::DEBUG,
            info: ColorScheme::INFO,
            warn: ColorScheme::WARN,
            error: ColorScheme::ERROR,
        }
    }
}

impl Palette {
    #[inline]
    pub fn scheme(&self, level: LogLevel) -> ColorScheme {
        match level {
            LogLevel::Debug => self.debug,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }

    pub fn set_scheme(&mut self, level: LogLevel, scheme: ColorScheme) {
        match level {
            LogLevel::Debug => self.debug = scheme,
            LogLevel::Info => self.info = scheme,
            LogLevel::Warn => self.warn = scheme,
            LogLevel::Error => self.error = scheme,
        }
    }

    #[must_use]
    pub fn with_scheme(mut self, level: LogLevel, scheme: ColorScheme) -> Self {
        self.set_scheme(level, scheme);
        self
    }
}

/// Whether composed lines carry color escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    #[default]
    Always,
    Never,
    /// Decide from `NO_COLOR`/`CLICOLOR`/`CLICOLOR_FORCE` and whether stdout is a terminal
    Auto,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => colored::control::ShouldColorize::from_env().should_colorize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_codes() {
        assert_eq!(TermColor::Red.sgr(), "\x1b[31m");
        assert_eq!(TermColor::White.sgr(), "\x1b[37m");
        assert_eq!(TermColor::GRAY.sgr(), "\x1b[90m");
        assert_eq!(TermColor::BrightWhite.code(), 97);
        assert_eq!(TermColor::Cyan.to_string(), TermColor::Cyan.sgr());
    }

    #[test]
    fn test_presets() {
        let palette = Palette::default();
        assert_eq!(palette.scheme(LogLevel::Debug).prefix, TermColor::Blue);
        assert_eq!(palette.scheme(LogLevel::Info).prefix, TermColor::Cyan);
        assert_eq!(palette.scheme(LogLevel::Warn).prefix, TermColor::Yellow);
        assert_eq!(palette.scheme(LogLevel::Error).prefix, TermColor::Red);
        for level in LogLevel::ALL {
            assert_eq!(palette.scheme(level).bracket, TermColor::GRAY);
            assert_eq!(palette.scheme(level).text, TermColor::White);
            assert_eq!(palette.scheme(level), ColorScheme::preset(level));
        }
    }

    #[test]
    fn test_palette_override_is_local() {
        let custom = ColorScheme::new(TermColor::Magenta, TermColor::Green, TermColor::BrightWhite);
        let palette = Palette::default().with_scheme(LogLevel::Info, custom);

        assert_eq!(palette.scheme(LogLevel::Info), custom);
        assert_eq!(Palette::default().scheme(LogLevel::Info), ColorScheme::INFO);
        assert_eq!(palette.scheme(LogLevel::Error), ColorScheme::ERROR);
    }

    #[test]
    fn test_color_choice_fixed_values() {
        assert!(ColorChoice::Always.should_colorize());
        assert!(!ColorChoice::Never.should_colorize());
        assert_eq!(ColorChoice::default(), ColorChoice::Always);
    }

    // The only test in the crate that touches these variables.
    #[test]
    fn test_color_choice_auto_follows_environment() {
        std::env::set_var("CLICOLOR_FORCE", "1");
        std::env::remove_var("NO_COLOR");
        assert!(ColorChoice::Auto.should_colorize());

        std::env::remove_var("CLICOLOR_FORCE");
        std::env::set_var("NO_COLOR", "1");
        assert!(!ColorChoice::Auto.should_colorize());

        std::env::remove_var("NO_COLOR");
    }
}
