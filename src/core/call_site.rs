//! Source location of a log call

use std::fmt;
use std::panic::Location;

/// File basename and line of the code that issued a log call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Build a call site from a path; only the final path segment is kept
    pub fn new(path: &str, line: u32) -> Self {
        Self {
            file: basename(path).to_string(),
            line,
        }
    }

    /// Location of the caller
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::CallSite;
    ///
    /// let site = CallSite::here();
    /// assert!(site.file.ends_with(".rs"));
    /// assert!(!site.file.contains('/'));
    /// ```
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strip everything up to the last `/` or `\`
fn basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
