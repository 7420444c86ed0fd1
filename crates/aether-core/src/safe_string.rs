//! Trusted markup strings.
//!
//! A [`SafeString`] is text that has already been escaped, or that the caller
//! vouches is free of injected markup. The renderer passes it through
//! untouched, while every other value goes through [`escape`](crate::escape).
//!
//! Combining values keeps the guarantee:
//! - safe + safe stays safe, unchanged,
//! - safe + plain escapes only the plain part.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::escaping::Escape;

/// Text marked as pre-escaped markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafeString(Cow<'static, str>);

impl SafeString {
	/// Wraps text the caller has verified to be injection-free.
	///
	/// # Examples
	///
	/// ```
	/// use aether_core::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
		Self(text.into())
	}

	/// Wraps a static fragment without allocating.
	pub const fn from_static(text: &'static str) -> Self {
		Self(Cow::Borrowed(text))
	}

	/// Returns the empty safe string.
	pub const fn empty() -> Self {
		Self::from_static("")
	}

	/// Returns the markup text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the safe string and returns the markup text.
	pub fn into_string(self) -> String {
		self.0.into_owned()
	}

	/// Length of the markup in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when there is no markup.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Appends another safe string verbatim.
	pub fn push_safe(&mut self, other: &SafeString) {
		if other.is_empty() {
			return;
		}
		self.0.to_mut().push_str(other.as_str());
	}

	/// Appends a value after escaping it.
	///
	/// Safe values are appended verbatim, plain values are escaped first.
	pub fn push_escaped<T: Escape + ?Sized>(&mut self, value: &T) {
		let escaped = value.escape();
		self.push_safe(&escaped);
	}

	/// Joins a sequence of mixed plain and safe values into one safe string.
	///
	/// Each plain segment is escaped on its own; safe segments are never
	/// escaped again.
	///
	/// # Examples
	///
	/// ```
	/// use aether_core::{SafeString, mark_safe};
	///
	/// let joined = SafeString::join([mark_safe("<b>"), SafeString::join(["a < b"]), mark_safe("</b>")]);
	/// assert_eq!(joined.as_str(), "<b>a &lt; b</b>");
	/// ```
	pub fn join<I, T>(parts: I) -> SafeString
	where
		I: IntoIterator<Item = T>,
		T: Escape,
	{
		let mut joined = SafeString::empty();
		for part in parts {
			joined.push_escaped(&part);
		}
		joined
	}
}

/// Marks text as trusted markup.
///
/// The caller asserts the text is free of injected markup; it will be
/// emitted as-is by the renderer.
///
/// # Examples
///
/// ```
/// use aether_core::mark_safe;
///
/// let partial = mark_safe("<em>already rendered</em>");
/// assert_eq!(partial.as_str(), "<em>already rendered</em>");
/// ```
pub fn mark_safe(text: impl Into<Cow<'static, str>>) -> SafeString {
	SafeString::new(text)
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<SafeString> for String {
	fn from(safe: SafeString) -> Self {
		safe.into_string()
	}
}

impl Add<SafeString> for SafeString {
	type Output = SafeString;

	fn add(mut self, rhs: SafeString) -> SafeString {
		self.push_safe(&rhs);
		self
	}
}

impl Add<&SafeString> for SafeString {
	type Output = SafeString;

	fn add(mut self, rhs: &SafeString) -> SafeString {
		self.push_safe(rhs);
		self
	}
}

impl Add<&str> for SafeString {
	type Output = SafeString;

	fn add(mut self, rhs: &str) -> SafeString {
		self.push_escaped(rhs);
		self
	}
}

impl Add<String> for SafeString {
	type Output = SafeString;

	fn add(mut self, rhs: String) -> SafeString {
		self.push_escaped(&rhs);
		self
	}
}

impl AddAssign<&SafeString> for SafeString {
	fn add_assign(&mut self, rhs: &SafeString) {
		self.push_safe(rhs);
	}
}

impl AddAssign<&str> for SafeString {
	fn add_assign(&mut self, rhs: &str) {
		self.push_escaped(rhs);
	}
}
