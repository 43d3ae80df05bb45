//! Logger configuration
//!
//! Everything here is fixed when a [`Logger`](crate::Logger) is built;
//! nothing is configured per call.

use super::color::{ColorChoice, ColorScheme, Palette};
use super::compose::LineComposer;
use super::dispatch::{DispatchOptions, HexCase};
use super::log_level::LogLevel;
use super::template::PlaceholderMode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What happens when the destination rejects a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteErrorPolicy {
    /// Count the failure and carry on
    Ignore,
    /// Count the failure and describe it on stderr
    #[default]
    Report,
}

/// Rendering and error-handling settings of a logger
///
/// Deserializable, so applications can keep it in their own config files:
///
/// ```
/// use console_logger::{HexCase, LoggerConfig, PlaceholderMode};
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{ "hex_case": "upper", "placeholder_mode": "indexed" }"#,
/// ).unwrap();
/// assert_eq!(config.hex_case, HexCase::Upper);
/// assert_eq!(config.placeholder_mode, PlaceholderMode::Indexed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Color scheme of each level
    pub palette: Palette,
    /// Letter case of hex digits in rendered addresses
    pub hex_case: HexCase,
    /// How placeholders address arguments
    pub placeholder_mode: PlaceholderMode,
    /// Handling of failed writes
    pub write_error_policy: WriteErrorPolicy,
    /// Whether lines carry color escape sequences
    pub color_choice: ColorChoice,
}

impl LoggerConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the color scheme of one level
    #[must_use]
    pub fn with_scheme(mut self, level: LogLevel, scheme: ColorScheme) -> Self {
        self.palette.set_scheme(level, scheme);
        self
    }

    #[must_use]
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    #[must_use]
    pub fn with_placeholder_mode(mut self, mode: PlaceholderMode) -> Self {
        self.placeholder_mode = mode;
        self
    }

    #[must_use]
    pub fn with_write_error_policy(mut self, policy: WriteErrorPolicy) -> Self {
        self.write_error_policy = policy;
        self
    }

    #[must_use]
    pub fn with_color_choice(mut self, choice: ColorChoice) -> Self {
        self.color_choice = choice;
        self
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions::new(self.hex_case)
    }

    /// Composer for this configuration; `Auto` colors are decided here
    pub fn composer(&self) -> LineComposer {
        LineComposer::new(self.color_choice.should_colorize())
    }

    /// Wrap this config in an Arc for sharing with the writer thread
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::TermColor;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.hex_case, HexCase::Lower);
        assert_eq!(config.placeholder_mode, PlaceholderMode::Sequential);
        assert_eq!(config.write_error_policy, WriteErrorPolicy::Report);
        assert_eq!(config.color_choice, ColorChoice::Always);
        assert!(config.composer().colorize());
    }

    #[test]
    fn test_builder_pattern() {
        let scheme = ColorScheme::new(TermColor::White, TermColor::Magenta, TermColor::BrightWhite);
        let config = LoggerConfig::new()
            .with_hex_case(HexCase::Upper)
            .with_placeholder_mode(PlaceholderMode::Indexed)
            .with_write_error_policy(WriteErrorPolicy::Ignore)
            .with_color_choice(ColorChoice::Never)
            .with_scheme(LogLevel::Debug, scheme);

        assert_eq!(config.dispatch_options().hex_case, HexCase::Upper);
        assert_eq!(config.placeholder_mode, PlaceholderMode::Indexed);
        assert_eq!(config.write_error_policy, WriteErrorPolicy::Ignore);
        assert!(!config.composer().colorize());
        assert_eq!(config.palette.scheme(LogLevel::Debug), scheme);
        assert_eq!(config.palette.scheme(LogLevel::Info), ColorScheme::INFO);
    }

    #[test]
    fn test_deserialize_partial_palette() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{
                "palette": {
                    "error": { "bracket": "gray", "prefix": "bright_red", "text": "red" }
                },
                "write_error_policy": "ignore",
                "color_choice": "never"
            }"#,
        )
        .expect("valid config");

        assert_eq!(
            config.palette.error,
            ColorScheme::new(TermColor::GRAY, TermColor::BrightRed, TermColor::Red)
        );
        assert_eq!(config.palette.warn, ColorScheme::WARN);
        assert_eq!(config.write_error_policy, WriteErrorPolicy::Ignore);
        assert_eq!(config.color_choice, ColorChoice::Never);
        assert_eq!(config.hex_case, HexCase::Lower);
    }

    #[test]
    fn test_serialize_roundtrip_names() {
        let json = serde_json::to_string(&LoggerConfig::default()).expect("serialize");
        assert!(json.contains("\"placeholder_mode\":\"sequential\""));
        assert!(json.contains("\"bracket\":\"bright_black\""));
    }

    #[test]
    fn test_shared_config() {
        let config = LoggerConfig::new().with_hex_case(HexCase::Upper).shared();
        let other = Arc::clone(&config);
        assert_eq!(other.hex_case, HexCase::Upper);
    }
}
