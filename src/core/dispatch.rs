//! Conversion of log arguments into their text form
//!
//! Every argument handed to a log call is converted exactly once, on the
//! calling thread, into an [`ArgumentList`]. A type is loggable when it
//! implements [`LogValue`]; anything else is rejected at compile time.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Letter case of hexadecimal digits in rendered addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Settings that influence how values are converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOptions {
    pub hex_case: HexCase,
}

impl DispatchOptions {
    pub const fn new(hex_case: HexCase) -> Self {
        Self { hex_case }
    }
}

/// A value that can appear as a log argument
///
/// Built-in implementations cover integers, floats, `bool`, `char`, text
/// and raw pointers. Other types become loggable by implementing this trait
/// (or through [`impl_log_value_display!`](crate::impl_log_value_display)).
///
/// ```
/// use console_logger::{DispatchOptions, LogValue};
///
/// struct Port(u16);
///
/// impl LogValue for Port {
///     fn to_log_string(&self, _options: &DispatchOptions) -> String {
///         format!(":{}", self.0)
///     }
/// }
///
/// assert_eq!(Port(8080).to_log_string(&DispatchOptions::default()), ":8080");
/// ```
///
/// Types without an implementation do not compile:
///
/// ```compile_fail
/// use console_logger::{ArgumentList, DispatchOptions, LogValue};
///
/// struct Opaque;
/// let _ = ArgumentList::dispatch(&[&Opaque as &dyn LogValue], &DispatchOptions::default());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a log argument",
    label = "no `LogValue` implementation for this type",
    note = "loggable kinds are integers, floats, bool, char, text and raw pointers",
    note = "implement `LogValue` for `{Self}` or register it with `impl_log_value_display!`"
)]
pub trait LogValue {
    fn to_log_string(&self, options: &DispatchOptions) -> String;
}

macro_rules! impl_via_to_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LogValue for $ty {
                #[inline]
                fn to_log_string(&self, _options: &DispatchOptions) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_via_to_string!(i8, i16, i32, i64, i128, isize);
impl_via_to_string!(u8, u16, u32, u64, u128, usize);
impl_via_to_string!(f32, f64, char);

impl LogValue for bool {
    #[inline]
    fn to_log_string(&self, _options: &DispatchOptions) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl LogValue for str {
    #[inline]
    fn to_log_string(&self, _options: &DispatchOptions) -> String {
        self.to_owned()
    }
}

impl LogValue for String {
    #[inline]
    fn to_log_string(&self, _options: &DispatchOptions) -> String {
        self.clone()
    }
}

impl LogValue for Cow<'_, str> {
    #[inline]
    fn to_log_string(&self, _options: &DispatchOptions) -> String {
        self.to_string()
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    #[inline]
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        (**self).to_log_string(options)
    }
}

impl<T: LogValue + ?Sized> LogValue for &mut T {
    #[inline]
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        (**self).to_log_string(options)
    }
}

impl<T: LogValue + ?Sized> LogValue for Box<T> {
    #[inline]
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        (**self).to_log_string(options)
    }
}

impl<T: LogValue + ?Sized> LogValue for Rc<T> {
    #[inline]
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        (**self).to_log_string(options)
    }
}

impl<T: LogValue + ?Sized> LogValue for Arc<T> {
    #[inline]
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        (**self).to_log_string(options)
    }
}

impl<T: ?Sized> LogValue for *const T {
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        format_address(self.cast::<()>() as usize, options.hex_case)
    }
}

impl<T: ?Sized> LogValue for *mut T {
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        format_address(self.cast::<()>() as usize, options.hex_case)
    }
}

impl<T: ?Sized> LogValue for NonNull<T> {
    fn to_log_string(&self, options: &DispatchOptions) -> String {
        format_address(self.as_ptr().cast::<()>() as usize, options.hex_case)
    }
}

/// Render an address as `0x` followed by hex digits without padding
///
/// The null address is always `0x0`.
pub fn format_address(address: usize, case: HexCase) -> String {
    match case {
        HexCase::Lower => format!("{:#x}", address),
        HexCase::Upper => format!("0x{:X}", address),
    }
}

/// Arguments of one log call, already converted to text
///
/// The list keeps call order and never changes after construction, so a
/// template may reference the same argument repeatedly without converting
/// it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    values: Vec<String>,
}

impl ArgumentList {
    /// Convert every argument once, in order
    pub fn dispatch(args: &[&dyn LogValue], options: &DispatchOptions) -> Self {
        Self {
            values: args.iter().map(|arg| arg.to_log_string(options)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Combined length of all converted values
    pub(crate) fn text_len(&self) -> usize {
        self.values.iter().map(String::len).sum()
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn text<T: LogValue + ?Sized>(value: &T) -> String {
        value.to_log_string(&DispatchOptions::default())
    }

    #[test]
    fn test_integers() {
        assert_eq!(text(&0_i32), "0");
        assert_eq!(text(&-42_i64), "-42");
        assert_eq!(text(&u64::MAX), "18446744073709551615");
        assert_eq!(text(&i8::MIN), "-128");
        assert_eq!(text(&7_u16), "7");
        assert_eq!(text(&i128::MIN), "-170141183460469231731687303715884105728");
    }

    #[test]
    fn test_floats_use_default_precision() {
        assert_eq!(text(&1.5_f64), "1.5");
        assert_eq!(text(&0.1_f32), "0.1");
        assert_eq!(text(&-2.25_f64), "-2.25");
    }

    #[test]
    fn test_bool_and_text() {
        assert_eq!(text(&true), "true");
        assert_eq!(text(&false), "false");
        assert_eq!(text("quoted \"as is\"\n"), "quoted \"as is\"\n");
        assert_eq!(text(&String::from("owned")), "owned");
        assert_eq!(text(&Cow::Borrowed("cow")), "cow");
        assert_eq!(text(&'x'), "x");
    }

    #[test]
    fn test_null_pointer_is_0x0() {
        let null: *const u8 = std::ptr::null();
        assert_eq!(text(&null), "0x0");

        let upper = DispatchOptions::new(HexCase::Upper);
        assert_eq!(null.to_log_string(&upper), "0x0");
        assert_eq!(std::ptr::null_mut::<u32>().to_log_string(&upper), "0x0");
    }

    #[test]
    fn test_pointer_hex_rendering() {
        let ptr = 0xdead_beef_usize as *const u8;
        assert_eq!(text(&ptr), "0xdeadbeef");
        assert_eq!(
            ptr.to_log_string(&DispatchOptions::new(HexCase::Upper)),
            "0xDEADBEEF"
        );
        assert_eq!(format_address(0x10, HexCase::Lower), "0x10");
        assert_eq!(format_address(0xabc, HexCase::Upper), "0xABC");
    }

    #[test]
    fn test_real_pointer_matches_address() {
        let value = 5_u64;
        let ptr: *const u64 = &value;
        let rendered = text(&ptr);
        assert_eq!(rendered, format!("{:#x}", ptr as usize));
        assert!(rendered.starts_with("0x"));
        assert!(!rendered[2..].starts_with('0'));

        let non_null = NonNull::from(&value);
        assert_eq!(text(&non_null), rendered);
    }

    #[test]
    fn test_wrappers_delegate() {
        assert_eq!(text(&Box::new(12_u8)), "12");
        assert_eq!(text(&Arc::new("shared")), "shared");
        assert_eq!(text(&Rc::new(String::from("rc"))), "rc");
        assert_eq!(text(&&&3_i32), "3");
    }

    struct Counted<'a> {
        calls: &'a Cell<usize>,
    }

    impl LogValue for Counted<'_> {
        fn to_log_string(&self, _options: &DispatchOptions) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("call#{}", self.calls.get())
        }
    }

    #[test]
    fn test_dispatch_converts_each_argument_once() {
        let calls = Cell::new(0);
        let counted = Counted { calls: &calls };
        let args = ArgumentList::dispatch(
            &[&counted, &"b", &3_u8],
            &DispatchOptions::default(),
        );

        assert_eq!(calls.get(), 1);
        assert_eq!(args.len(), 3);
        assert_eq!(args.get(0), Some("call#1"));
        assert_eq!(args.get(1), Some("b"));
        assert_eq!(args.get(2), Some("3"));
        assert_eq!(args.get(3), None);
        assert_eq!(args.text_len(), 8);
    }

    #[test]
    fn test_argument_list_from_iter() {
        let args: ArgumentList = ["a", "b"].into_iter().collect();
        assert_eq!(args.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(ArgumentList::default().is_empty());
    }
}
