//! Serialization of data into `x-data` and `x-init` expressions.

use std::fmt;

use aether_core::{AetherError, AetherResult, AttrValue};
use serde::Serialize;

use crate::data::{DataMap, DataValue, Statement, StatementKind};

/// Directive an expression is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Directive {
	/// `x-data`: an object literal, `{ key: value, ... }`.
	#[default]
	XData,
	/// `x-init`: a comma-joined list of assignments, `key = value, ...`.
	XInit,
}

impl Directive {
	/// Attribute name of the directive.
	pub fn attribute_name(&self) -> &'static str {
		match self {
			Directive::XData => "x-data",
			Directive::XInit => "x-init",
		}
	}

	fn separator(&self) -> &'static str {
		match self {
			Directive::XData => ": ",
			Directive::XInit => " = ",
		}
	}
}

impl fmt::Display for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.attribute_name())
	}
}

/// Serializes a data map into an expression for `directive`.
///
/// Per entry `(key, value)`:
///
/// | value | output |
/// |---|---|
/// | definition statement | `key code` |
/// | assignment statement | `key = code` |
/// | instance statement | `code` |
/// | bool, number, `null` | `key<sep>literal` |
/// | string | `key<sep>'text'` |
/// | list | `key<sep>[item, item]` |
/// | map | `key<sep>` + nested expression in the same mode |
///
/// `<sep>` is `": "` for `x-data` and `" = "` for `x-init`. `x-data` output is
/// wrapped in `{ }`; `x-init` output is the bare comma-joined list.
///
/// # Errors
///
/// Returns [`AetherError::UnsupportedValue`] for non-finite floats and for
/// statements inside lists.
pub fn serialize_data_expression(data: &DataMap, directive: Directive) -> AetherResult<String> {
	let mut entries = Vec::with_capacity(data.len());
	for (key, value) in data {
		entries.push(serialize_entry(key, value, directive)?);
	}
	let joined = entries.join(", ");
	Ok(match directive {
		Directive::XData => format!("{{ {joined} }}"),
		Directive::XInit => joined,
	})
}

fn serialize_entry(key: &str, value: &DataValue, directive: Directive) -> AetherResult<String> {
	if let DataValue::Statement(Statement { kind, code }) = value {
		return Ok(match kind {
			StatementKind::Definition => format!("{key} {code}"),
			StatementKind::Assignment => format!("{key} = {code}"),
			StatementKind::Instance => code.clone(),
		});
	}
	let literal = serialize_value(value, directive, key)?;
	Ok(format!("{key}{}{literal}", directive.separator()))
}

fn serialize_value(value: &DataValue, directive: Directive, context: &str) -> AetherResult<String> {
	match value {
		DataValue::Null => Ok("null".to_string()),
		DataValue::Bool(flag) => Ok(flag.to_string()),
		DataValue::Int(number) => Ok(number.to_string()),
		DataValue::Float(number) if number.is_finite() => Ok(format!("{number:?}")),
		DataValue::Str(text) => Ok(quote(text)),
		DataValue::List(items) => {
			let rendered = items
				.iter()
				.map(|item| match item {
					DataValue::Statement(_) => Err(unsupported(item, &format!("list `{context}`"))),
					other => serialize_value(other, directive, context),
				})
				.collect::<AetherResult<Vec<_>>>()?;
			Ok(format!("[{}]", rendered.join(", ")))
		}
		DataValue::Map(map) => serialize_data_expression(map, directive),
		DataValue::Float(_) | DataValue::Statement(_) => {
			Err(unsupported(value, &format!("entry `{context}`")))
		}
	}
}

fn unsupported(value: &DataValue, context: &str) -> AetherError {
	AetherError::UnsupportedValue {
		type_name: value.type_name().to_string(),
		context: context.to_string(),
	}
}

/// Single-quoted JavaScript string literal.
fn quote(text: &str) -> String {
	let mut quoted = String::with_capacity(text.len() + 2);
	quoted.push('\'');
	for c in text.chars() {
		match c {
			'\\' => quoted.push_str("\\\\"),
			'\'' => quoted.push_str("\\'"),
			'\n' => quoted.push_str("\\n"),
			'\r' => quoted.push_str("\\r"),
			_ => quoted.push(c),
		}
	}
	quoted.push('\'');
	quoted
}

/// A serialized `x-data` or `x-init` expression.
///
/// Converts into an attribute value, so it can be placed in an attribute map
/// under [`Directive::attribute_name`].
///
/// # Examples
///
/// ```
/// use aether_alpine::{AlpineData, Directive};
/// use aether_core::{attrs, serialize_attributes};
///
/// let data = AlpineData::new([("open", false)], Directive::XData).unwrap();
/// let attributes = attrs! { "x-data" => data };
/// assert_eq!(serialize_attributes(&attributes).as_str(), r#"x-data="{ open: false }""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlpineData {
	directive: Directive,
	expression: String,
}

impl AlpineData {
	/// Serializes key/value pairs.
	pub fn new<I, K, V>(entries: I, directive: Directive) -> AetherResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<DataValue>,
	{
		let data: DataMap = entries
			.into_iter()
			.map(|(key, value)| (key.into(), value.into()))
			.collect();
		Self::from_map(&data, directive)
	}

	/// Serializes a data map.
	pub fn from_map(data: &DataMap, directive: Directive) -> AetherResult<Self> {
		let expression = serialize_data_expression(data, directive)?;
		tracing::debug!(%directive, entries = data.len(), "serialized alpine data");
		Ok(Self {
			directive,
			expression,
		})
	}

	/// Serializes any value whose serde representation is a string-keyed map.
	///
	/// ```
	/// use aether_alpine::{AlpineData, Directive};
	/// use serde::Serialize;
	///
	/// #[derive(Serialize)]
	/// struct Counter {
	/// 	count: u32,
	/// 	label: &'static str,
	/// }
	///
	/// let data = AlpineData::from_serialize(&Counter { count: 0, label: "Clicks" }, Directive::XInit)
	/// 	.unwrap();
	/// assert_eq!(data.as_str(), "count = 0, label = 'Clicks'");
	/// ```
	///
	/// # Errors
	///
	/// Returns [`AetherError::UnsupportedValue`] when the value does not
	/// serialize to a map or uses non-string map keys.
	pub fn from_serialize<T: Serialize + ?Sized>(value: &T, directive: Directive) -> AetherResult<Self> {
		let json = serde_json::to_value(value).map_err(|error| AetherError::UnsupportedValue {
			type_name: std::any::type_name::<T>().to_string(),
			context: error.to_string(),
		})?;
		match DataValue::from(json) {
			DataValue::Map(map) => Self::from_map(&map, directive),
			other => Err(unsupported(&other, &format!("{directive} data, expected a map"))),
		}
	}

	/// Directive the expression was written for.
	pub fn directive(&self) -> Directive {
		self.directive
	}

	/// The expression text.
	pub fn as_str(&self) -> &str {
		&self.expression
	}

	/// Attribute name and value pair for an attribute map.
	pub fn into_attribute(self) -> (&'static str, AttrValue) {
		(self.directive.attribute_name(), AttrValue::Text(self.expression))
	}
}

impl fmt::Display for AlpineData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.expression)
	}
}

impl From<AlpineData> for AttrValue {
	fn from(data: AlpineData) -> Self {
		AttrValue::Text(data.expression)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sample() -> DataMap {
		let mut data = DataMap::new();
		data.insert("open".into(), DataValue::from(false));
		data.insert("name".into(), DataValue::from("it's"));
		data.insert("count".into(), DataValue::from(3));
		data.insert("ratio".into(), DataValue::from(0.5));
		data.insert("user".into(), DataValue::Null);
		data
	}

	#[rstest]
	#[case(Directive::XData, "{ open: false, name: 'it\\'s', count: 3, ratio: 0.5, user: null }")]
	#[case(Directive::XInit, "open = false, name = 'it\\'s', count = 3, ratio = 0.5, user = null")]
	fn test_modes(#[case] directive: Directive, #[case] expected: &str) {
		assert_eq!(serialize_data_expression(&sample(), directive).unwrap(), expected);
	}

	#[rstest]
	fn test_statements() {
		let data = DataValue::map([
			("count", DataValue::from(Statement::assignment("$persist(0)"))),
			("increment", DataValue::from(Statement::definition("() { this.count++ }"))),
			("ignored", DataValue::from(Statement::instance("...dropdown()"))),
		]);
		let DataValue::Map(map) = data else { unreachable!() };
		assert_eq!(
			serialize_data_expression(&map, Directive::XData).unwrap(),
			"{ count = $persist(0), increment() { this.count++ }, ...dropdown() }"
		);
	}

	#[rstest]
	fn test_nested_map_reuses_mode() {
		let mut data = DataMap::new();
		data.insert("form".into(), DataValue::map([("email", ""), ("name", "x")]));
		assert_eq!(
			serialize_data_expression(&data, Directive::XData).unwrap(),
			"{ form: { email: '', name: 'x' } }"
		);
		assert_eq!(
			serialize_data_expression(&data, Directive::XInit).unwrap(),
			"form = email = '', name = 'x'"
		);
	}

	#[rstest]
	fn test_lists() {
		let mut data = DataMap::new();
		data.insert(
			"items".into(),
			DataValue::List(vec![
				DataValue::from(1),
				DataValue::from("two"),
				DataValue::from(vec![true]),
				DataValue::map([("id", 4)]),
			]),
		);
		assert_eq!(
			serialize_data_expression(&data, Directive::XData).unwrap(),
			"{ items: [1, 'two', [true], { id: 4 }] }"
		);
	}

	#[rstest]
	fn test_empty_map() {
		let data = DataMap::new();
		assert_eq!(serialize_data_expression(&data, Directive::XData).unwrap(), "{  }");
		assert_eq!(serialize_data_expression(&data, Directive::XInit).unwrap(), "");
	}

	#[rstest]
	#[case(DataValue::from(f64::NAN), "non-finite float")]
	#[case(DataValue::List(vec![DataValue::from(Statement::instance("x"))]), "statement")]
	fn test_unsupported_values(#[case] value: DataValue, #[case] type_name: &str) {
		let mut data = DataMap::new();
		data.insert("bad".into(), value);
		match serialize_data_expression(&data, Directive::XData) {
			Err(AetherError::UnsupportedValue { type_name: found, context }) => {
				assert_eq!(found, type_name);
				assert!(context.contains("bad"));
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[rstest]
	#[case("a\\b", "'a\\\\b'")]
	#[case("line\nbreak", "'line\\nbreak'")]
	fn test_quote(#[case] text: &str, #[case] expected: &str) {
		assert_eq!(quote(text), expected);
	}

	#[rstest]
	fn test_from_serialize_rejects_non_maps() {
		let error = AlpineData::from_serialize(&[1, 2], Directive::XData).unwrap_err();
		assert!(matches!(error, AetherError::UnsupportedValue { .. }));
		assert!(error.to_string().contains("list"));
	}

	#[rstest]
	fn test_from_serialize_rejects_non_string_keys() {
		let mut map = std::collections::BTreeMap::new();
		map.insert(vec![1u8], true);
		let error = AlpineData::from_serialize(&map, Directive::XData).unwrap_err();
		assert!(matches!(error, AetherError::UnsupportedValue { .. }));
	}

	#[rstest]
	fn test_into_attribute() {
		let data = AlpineData::new([("ready", true)], Directive::XInit).unwrap();
		assert_eq!(data.into_attribute(), ("x-init", AttrValue::from("ready = true")));
	}
}
