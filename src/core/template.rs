//! Placeholder substitution for message templates
//!
//! Two addressing modes are supported:
//!
//! - [`PlaceholderMode::Sequential`]: every `{}` takes the next unused
//!   argument. Nothing else inside braces is interpreted.
//! - [`PlaceholderMode::Indexed`]: `{N}` picks argument `N` (zero-based,
//!   repeatable, any order), `{}` still takes the next unused argument and
//!   any other `{text}` becomes [`UNRESOLVED_MARKER`].
//!
//! Malformed placeholders never fail: an unmatched `{` is copied as is, an
//! out-of-range `{N}` is copied with its braces, and an exhausted `{}` is
//! left in the output.

use super::dispatch::ArgumentList;
use serde::{Deserialize, Serialize};

/// Longest placeholder body (text between the braces) that is recognized
pub const MAX_PLACEHOLDER_LEN: usize = 10;

/// Emitted for named placeholders, which are parsed but not resolved
pub const UNRESOLVED_MARKER: &str = "TBI";

/// How placeholders address the argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderMode {
    #[default]
    Sequential,
    Indexed,
}

/// Substitute `args` into `template`
///
/// # Examples
///
/// ```
/// use console_logger::{render, ArgumentList, PlaceholderMode};
///
/// let args: ArgumentList = ["1", "2"].into_iter().collect();
/// assert_eq!(render("{} and {}", &args, PlaceholderMode::Sequential), "1 and 2");
///
/// let args: ArgumentList = ["a", "b"].into_iter().collect();
/// assert_eq!(render("{1}-{0}-{1}", &args, PlaceholderMode::Indexed), "b-a-b");
/// ```
pub fn render(template: &str, args: &ArgumentList, mode: PlaceholderMode) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + args.text_len());
    let mut next_arg = 0;
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }

        // Braces are ASCII, so every slice boundary below is a char boundary.
        out.push_str(&template[literal_start..i]);

        let step = match find_close(bytes, i) {
            Some(close) => match resolve(&template[i + 1..close], args, mode, &mut next_arg) {
                Outcome::Substitute(text) => {
                    out.push_str(text);
                    close + 1
                }
                Outcome::KeepPlaceholder => {
                    out.push_str(&template[i..=close]);
                    close + 1
                }
                Outcome::KeepBrace => {
                    out.push('{');
                    i + 1
                }
            },
            None => {
                out.push('{');
                i + 1
            }
        };

        i = step;
        literal_start = step;
    }

    out.push_str(&template[literal_start..]);
    out
}

/// Position of the `}` closing the brace at `open`, if within the window
fn find_close(bytes: &[u8], open: usize) -> Option<usize> {
    let start = open + 1;
    let end = (start + MAX_PLACEHOLDER_LEN + 1).min(bytes.len());
    bytes[start..end]
        .iter()
        .position(|&b| b == b'}')
        .map(|offset| start + offset)
}

/// What a complete `{...}` turns into
enum Outcome<'a> {
    Substitute(&'a str),
    /// Copy the whole placeholder, braces included
    KeepPlaceholder,
    /// Copy only the `{` and resume scanning right after it
    KeepBrace,
}

fn resolve<'a>(
    body: &str,
    args: &'a ArgumentList,
    mode: PlaceholderMode,
    next_arg: &mut usize,
) -> Outcome<'a> {
    if body.is_empty() {
        return match args.get(*next_arg) {
            Some(value) => {
                *next_arg += 1;
                Outcome::Substitute(value)
            }
            None => Outcome::KeepBrace,
        };
    }

    match mode {
        PlaceholderMode::Sequential => Outcome::KeepBrace,
        PlaceholderMode::Indexed if body.bytes().all(|b| b.is_ascii_digit()) => {
            // Indices too large for usize are out of range like any other.
            match body.parse::<usize>().ok().and_then(|index| args.get(index)) {
                Some(value) => Outcome::Substitute(value),
                None => Outcome::KeepPlaceholder,
            }
        }
        PlaceholderMode::Indexed => Outcome::Substitute(UNRESOLVED_MARKER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> ArgumentList {
        values.iter().copied().collect()
    }

    fn seq(template: &str, values: &[&str]) -> String {
        render(template, &args(values), PlaceholderMode::Sequential)
    }

    fn idx(template: &str, values: &[&str]) -> String {
        render(template, &args(values), PlaceholderMode::Indexed)
    }

    #[test]
    fn test_sequential_substitution() {
        assert_eq!(seq("{} and {}", &["1", "2"]), "1 and 2");
        assert_eq!(seq("{}{}{}", &["a", "b", "c"]), "abc");
        assert_eq!(seq("no placeholders", &["unused"]), "no placeholders");
        assert_eq!(seq("", &["x"]), "");
    }

    #[test]
    fn test_exhausted_placeholder_stays_literal() {
        assert_eq!(seq("{} {} {}", &["1", "2"]), "1 2 {}");
        assert_eq!(seq("value: {}", &[]), "value: {}");
    }

    #[test]
    fn test_sequential_ignores_indexed_and_named() {
        assert_eq!(seq("{0} {name} {}", &["a"]), "{0} {name} a");
        assert_eq!(seq("{a{}}", &["X"]), "{aX}");
    }

    #[test]
    fn test_unmatched_brace_is_literal() {
        assert_eq!(seq("{ {}", &["a"]), "{ a");
        assert_eq!(seq("trailing {", &["a"]), "trailing {");
        assert_eq!(idx("open {0 never closed", &["a"]), "open {0 never closed");
        assert_eq!(seq("}} stray {}", &["a"]), "}} stray a");
    }

    #[test]
    fn test_indexed_reorder_and_repeat() {
        assert_eq!(idx("{1}-{0}-{1}", &["a", "b"]), "b-a-b");
        assert_eq!(idx("{0}{0}{0}", &["x"]), "xxx");
    }

    #[test]
    fn test_indexed_out_of_range_keeps_braces() {
        assert_eq!(idx("{5}", &["x"]), "{5}");
        assert_eq!(idx("{3} {1}", &["x", "y"]), "{3} y");
    }

    #[test]
    fn test_large_index_is_out_of_range() {
        assert_eq!(idx("{9999999999}", &["x"]), "{9999999999}");
    }

    #[test]
    fn test_named_placeholder_marker() {
        assert_eq!(idx("hello {name}", &["x"]), "hello TBI");
        assert_eq!(idx("{a1}", &[]), "TBI");
        assert_eq!(idx("{-1}", &["x"]), "TBI");
    }

    #[test]
    fn test_mixed_modes_share_argument_list() {
        assert_eq!(idx("{} {0} {} {1}", &["a", "b"]), "a a b b");
        assert_eq!(idx("{} {} {}", &["1", "2"]), "1 2 {}");
    }

    #[test]
    fn test_lookahead_window() {
        // ten characters between the braces is the limit
        assert_eq!(idx("{0000000001}", &["a", "b"]), "b");
        assert_eq!(idx("{00000000001}", &["a", "b"]), "{00000000001}");
        assert_eq!(idx("{abcdefghij}", &["a"]), "TBI");
        assert_eq!(idx("{abcdefghijk}", &["a"]), "{abcdefghijk}");
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        assert_eq!(seq("héllo {} wörld {}", &["ü", "日本"]), "héllo ü wörld 日本");
        assert_eq!(idx("{é} {0}", &["z"]), "TBI z");
    }

    #[test]
    fn test_argument_text_is_not_rescanned() {
        assert_eq!(seq("{} {}", &["{}", "b"]), "{} b");
    }
}
