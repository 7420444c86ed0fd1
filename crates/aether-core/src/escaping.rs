//! HTML escaping.
//!
//! Escaping is the only injection defense of the builder: every attribute
//! value and every text child goes through [`escape`] before reaching the
//! output, unless it is already a [`SafeString`].
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::borrow::Cow;

use crate::safe_string::SafeString;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use aether_core::html_escape;
///
/// assert_eq!(html_escape("Hello"), "Hello");
/// assert_eq!(html_escape("<a href='x'>"), "&lt;a href=&#x27;x&#x27;&gt;");
/// ```
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Values that can be turned into escaped markup.
///
/// Plain values are stringified and escaped; [`SafeString`] passes through
/// unchanged.
pub trait Escape {
	/// Returns the escaped markup for this value.
	fn escape(&self) -> SafeString;
}

/// Escapes any value into markup.
///
/// # Examples
///
/// ```
/// use aether_core::{escape, mark_safe};
///
/// assert_eq!(escape("<b>").as_str(), "&lt;b&gt;");
/// assert_eq!(escape(&42).as_str(), "42");
/// assert_eq!(escape(&mark_safe("<b>")).as_str(), "<b>");
/// ```
pub fn escape<T: Escape + ?Sized>(value: &T) -> SafeString {
	value.escape()
}

impl Escape for str {
	fn escape(&self) -> SafeString {
		SafeString::new(html_escape(self).into_owned())
	}
}

impl Escape for String {
	fn escape(&self) -> SafeString {
		self.as_str().escape()
	}
}

impl Escape for Cow<'_, str> {
	fn escape(&self) -> SafeString {
		self.as_ref().escape()
	}
}

impl Escape for SafeString {
	fn escape(&self) -> SafeString {
		self.clone()
	}
}

impl Escape for char {
	fn escape(&self) -> SafeString {
		let mut buf = [0u8; 4];
		self.encode_utf8(&mut buf).escape()
	}
}

impl Escape for bool {
	fn escape(&self) -> SafeString {
		SafeString::from_static(if *self { "true" } else { "false" })
	}
}

impl<T: Escape + ?Sized> Escape for &T {
	fn escape(&self) -> SafeString {
		(**self).escape()
	}
}

impl<T: Escape + ?Sized> Escape for Box<T> {
	fn escape(&self) -> SafeString {
		(**self).escape()
	}
}

macro_rules! impl_escape_for_numbers {
	($($ty:ty),* $(,)?) => {
		$(
			impl Escape for $ty {
				fn escape(&self) -> SafeString {
					self.to_string().escape()
				}
			}
		)*
	};
}

impl_escape_for_numbers!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
