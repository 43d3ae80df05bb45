//! Logging macros
//!
//! The macros record the file and line they are invoked from, so every
//! line they produce carries a `[file:line]` field. Arguments may be of any
//! type implementing [`LogValue`](crate::LogValue); they are converted to
//! text before the macro returns.
//!
//! # Examples
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::info;
//!
//! let logger = Logger::builder().appender(MemoryAppender::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let user_id = 42;
//! let action = "login";
//! info!(logger, "User {} performed action: {}", user_id, action);
//! ```

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
///
/// // Report a different location, e.g. from a helper
/// let site = CallSite::new("src/handlers/upload.rs", 88);
/// log!(logger, LogLevel::Warn, at: site, "retrying {}", "upload");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, at: $site:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            ::core::option::Option::Some($site),
            $template,
            &[$(&$arg as &dyn $crate::LogValue),*],
        )
    };
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            ::core::option::Option::Some($crate::CallSite::new(::core::file!(), ::core::line!())),
            $template,
            &[$(&$arg as &dyn $crate::LogValue),*],
        )
    };
}

/// Log a debug-level message.
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Make types with a `Display` impl usable as log arguments.
///
/// ```
/// use console_logger::{impl_log_value_display, ColorChoice, Logger, MemoryAppender};
/// use std::fmt;
///
/// struct Port(u16);
///
/// impl fmt::Display for Port {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, ":{}", self.0)
///     }
/// }
///
/// impl_log_value_display!(Port);
///
/// let memory = MemoryAppender::new();
/// let buffer = memory.buffer();
/// let logger = Logger::builder().color_choice(ColorChoice::Never).appender(memory).build();
/// logger.info("bound {}", &[&Port(80)]);
/// assert!(buffer.contents().ends_with("bound :80\n"));
/// ```
#[macro_export]
macro_rules! impl_log_value_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::LogValue for $ty {
                fn to_log_string(
                    &self,
                    _options: &$crate::DispatchOptions,
                ) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}
