//! Attribute serialization.

use super::{AttrValue, Attributes};
use crate::escaping::Escape;
use crate::safe_string::SafeString;

/// Attribute whose boolean values are rendered as text instead of collapsing
/// into a bare name.
const VALUE_ATTRIBUTE: &str = "value";

/// Flattens attributes into the markup placed after a tag name.
///
/// Boolean attributes render as their bare name when `true` and are omitted
/// when `false`, except `value`, which renders `value="true"` or
/// `value="false"`. Everything else renders as `key="value"` with both sides
/// escaped. Fragments are joined by a single space in insertion order.
///
/// # Examples
///
/// ```
/// use aether_core::{attrs, serialize_attributes};
///
/// let attributes = attrs! { "class" => "a b", "disabled" => true, "hidden" => false };
/// assert_eq!(serialize_attributes(&attributes).as_str(), r#"class="a b" disabled"#);
/// ```
pub fn serialize_attributes(attributes: &Attributes) -> SafeString {
	let mut serialized = SafeString::empty();
	for (key, value) in attributes {
		let fragment = match value {
			AttrValue::Bool(false) if key != VALUE_ATTRIBUTE => continue,
			AttrValue::Bool(true) if key != VALUE_ATTRIBUTE => key.escape(),
			_ => {
				let mut pair = key.escape();
				pair.push_safe(&SafeString::from_static("=\""));
				pair.push_escaped(value);
				pair.push_safe(&SafeString::from_static("\""));
				pair
			}
		};
		if !serialized.is_empty() {
			serialized.push_safe(&SafeString::from_static(" "));
		}
		serialized.push_safe(&fragment);
	}
	serialized
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{attrs, mark_safe};
	use rstest::rstest;

	#[rstest]
	fn test_empty_attributes_serialize_to_empty_string() {
		assert!(serialize_attributes(&Attributes::new()).is_empty());
	}

	#[rstest]
	fn test_boolean_collapse_and_omission() {
		let attributes = attrs! { "class" => "a b", "disabled" => true, "hidden" => false };
		assert_eq!(
			serialize_attributes(&attributes).as_str(),
			r#"class="a b" disabled"#
		);
	}

	#[rstest]
	#[case(true, r#"value="true""#)]
	#[case(false, r#"value="false""#)]
	fn test_value_attribute_keeps_boolean_text(#[case] flag: bool, #[case] expected: &str) {
		let attributes = attrs! { "value" => flag };
		assert_eq!(serialize_attributes(&attributes).as_str(), expected);
	}

	#[rstest]
	fn test_values_and_keys_are_escaped() {
		let attributes = attrs! { "title" => "\"quoted\" & <b>", "data-<x>" => 1 };
		assert_eq!(
			serialize_attributes(&attributes).as_str(),
			r#"title="&quot;quoted&quot; &amp; &lt;b&gt;" data-&lt;x&gt;="1""#
		);
	}

	#[rstest]
	fn test_safe_values_are_not_escaped_again() {
		let attributes = attrs! { "x-data" => mark_safe("{ open: &#x27;a&#x27; }") };
		assert_eq!(
			serialize_attributes(&attributes).as_str(),
			r#"x-data="{ open: &#x27;a&#x27; }""#
		);
	}

	#[rstest]
	fn test_numbers_render_as_text() {
		let attributes = attrs! { "span" => 3, "opacity" => 0.5 };
		assert_eq!(
			serialize_attributes(&attributes).as_str(),
			r#"span="3" opacity="0.5""#
		);
	}
}
