//! String conversion utilities.
//!
//! HTML forms submit untouched inputs as empty strings, so "missing" and
//! "empty" have to be folded together before validation. Whitespace is
//! content: it is left for the field rules to judge.

/// Converts an empty string to `None`.
///
/// The value is returned untouched otherwise, whitespace included.
///
/// # Examples
///
/// ```
/// use charsheets_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("hello".to_string()), Some("hello".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// assert_eq!(some_if_not_empty("  ".to_string()), Some("  ".to_string()));
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Extension trait providing [`some_if_not_empty`] as a method.
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}

impl StringExt for Option<String> {
    fn into_option(self) -> Option<String> {
        self.and_then(some_if_not_empty)
    }
}
