//! Attribute values.

use std::borrow::Cow;
use std::fmt;

use crate::escaping::Escape;
use crate::safe_string::SafeString;

/// The value of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// Plain text, escaped when rendered.
	Text(String),
	/// Trusted markup, rendered verbatim.
	Safe(SafeString),
	/// Boolean attribute; `true` renders the bare name, `false` omits it.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
}

impl AttrValue {
	/// Short name of the value shape, used in validation messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			AttrValue::Text(_) => "text",
			AttrValue::Safe(_) => "safe text",
			AttrValue::Bool(_) => "bool",
			AttrValue::Int(_) => "integer",
			AttrValue::Float(_) => "float",
		}
	}

	/// Returns the textual content of text and safe values.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(text) => Some(text),
			AttrValue::Safe(safe) => Some(safe.as_str()),
			_ => None,
		}
	}

	/// Returns the boolean of a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			AttrValue::Bool(flag) => Some(*flag),
			_ => None,
		}
	}

	/// Returns `true` for a boolean value.
	pub fn is_bool(&self) -> bool {
		matches!(self, AttrValue::Bool(_))
	}

	/// Whether the value counts as "set" for cross-field rules.
	///
	/// `false`, empty text and zero are unset; everything else is set.
	pub fn is_truthy(&self) -> bool {
		match self {
			AttrValue::Text(text) => !text.is_empty(),
			AttrValue::Safe(safe) => !safe.is_empty(),
			AttrValue::Bool(flag) => *flag,
			AttrValue::Int(number) => *number != 0,
			AttrValue::Float(number) => *number != 0.0,
		}
	}

	/// Debug-style rendering used when a value is quoted in an error message.
	pub(crate) fn describe(&self) -> String {
		match self {
			AttrValue::Text(text) => format!("{:?}", text),
			AttrValue::Safe(safe) => format!("{:?}", safe.as_str()),
			other => other.to_string(),
		}
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Text(text) => f.write_str(text),
			AttrValue::Safe(safe) => f.write_str(safe.as_str()),
			AttrValue::Bool(flag) => write!(f, "{}", flag),
			AttrValue::Int(number) => write!(f, "{}", number),
			AttrValue::Float(number) => write!(f, "{}", number),
		}
	}
}

impl Escape for AttrValue {
	fn escape(&self) -> SafeString {
		match self {
			AttrValue::Safe(safe) => safe.clone(),
			AttrValue::Text(text) => text.escape(),
			other => other.to_string().escape(),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(text: &str) -> Self {
		AttrValue::Text(text.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(text: String) -> Self {
		AttrValue::Text(text)
	}
}

impl From<&String> for AttrValue {
	fn from(text: &String) -> Self {
		AttrValue::Text(text.clone())
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(text: Cow<'_, str>) -> Self {
		AttrValue::Text(text.into_owned())
	}
}

impl From<SafeString> for AttrValue {
	fn from(safe: SafeString) -> Self {
		AttrValue::Safe(safe)
	}
}

impl From<bool> for AttrValue {
	fn from(flag: bool) -> Self {
		AttrValue::Bool(flag)
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(number: $ty) -> Self {
					AttrValue::Int(i64::from(number))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Wider integers stay integers when they fit in `i64` and fall back to their
/// decimal text otherwise.
macro_rules! impl_from_wide_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(number: $ty) -> Self {
					i64::try_from(number)
						.map(AttrValue::Int)
						.unwrap_or_else(|_| AttrValue::Text(number.to_string()))
				}
			}
		)*
	};
}

impl_from_wide_integer!(isize, usize, u64, i128, u128);

impl From<f32> for AttrValue {
	fn from(number: f32) -> Self {
		AttrValue::Float(f64::from(number))
	}
}

impl From<f64> for AttrValue {
	fn from(number: f64) -> Self {
		AttrValue::Float(number)
	}
}
