//! Structured values of Alpine.js data expressions.

use indexmap::IndexMap;

/// Ordered mapping of data keys to values.
pub type DataMap = IndexMap<String, DataValue>;

/// How a [`Statement`] is attached to its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
	/// `key = code`, e.g. a computed initial value.
	Assignment,
	/// `key code`, e.g. a method or getter definition.
	Definition,
	/// `code` alone; the key is not emitted.
	Instance,
}

/// Raw JavaScript emitted verbatim into an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
	/// Attachment form.
	pub kind: StatementKind,
	/// JavaScript source.
	pub code: String,
}

impl Statement {
	/// Creates a statement.
	pub fn new(kind: StatementKind, code: impl Into<String>) -> Self {
		Self {
			kind,
			code: code.into(),
		}
	}

	/// `key = code`.
	pub fn assignment(code: impl Into<String>) -> Self {
		Self::new(StatementKind::Assignment, code)
	}

	/// `key code`.
	///
	/// ```
	/// use aether_alpine::{AlpineData, Directive, Statement};
	///
	/// let data = AlpineData::new(
	/// 	[("toggle", Statement::definition("() { this.open = !this.open }"))],
	/// 	Directive::XData,
	/// )
	/// .unwrap();
	/// assert_eq!(data.as_str(), "{ toggle() { this.open = !this.open } }");
	/// ```
	pub fn definition(code: impl Into<String>) -> Self {
		Self::new(StatementKind::Definition, code)
	}

	/// `code` alone.
	pub fn instance(code: impl Into<String>) -> Self {
		Self::new(StatementKind::Instance, code)
	}
}

/// One value of a data expression.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
	/// `null`.
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Integer literal.
	Int(i64),
	/// Floating point literal; must be finite.
	Float(f64),
	/// Single-quoted string literal.
	Str(String),
	/// Array literal.
	List(Vec<DataValue>),
	/// Nested expression in the same mode.
	Map(DataMap),
	/// Raw JavaScript.
	Statement(Statement),
}

impl DataValue {
	/// Name of the value type, used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			DataValue::Null => "null",
			DataValue::Bool(_) => "bool",
			DataValue::Int(_) => "integer",
			DataValue::Float(number) if !number.is_finite() => "non-finite float",
			DataValue::Float(_) => "float",
			DataValue::Str(_) => "string",
			DataValue::List(_) => "list",
			DataValue::Map(_) => "map",
			DataValue::Statement(_) => "statement",
		}
	}

	/// Builds a map value from key/value pairs.
	pub fn map<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<DataValue>,
	{
		DataValue::Map(
			entries
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl From<bool> for DataValue {
	fn from(flag: bool) -> Self {
		DataValue::Bool(flag)
	}
}

impl From<&str> for DataValue {
	fn from(text: &str) -> Self {
		DataValue::Str(text.to_string())
	}
}

impl From<String> for DataValue {
	fn from(text: String) -> Self {
		DataValue::Str(text)
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for DataValue {
				fn from(number: $ty) -> Self {
					DataValue::Int(i64::from(number))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Wider integers become floats when they do not fit in `i64`, matching the
/// conversion of large serde numbers.
macro_rules! impl_from_wide_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for DataValue {
				#[allow(clippy::cast_precision_loss)]
				fn from(number: $ty) -> Self {
					i64::try_from(number)
						.map(DataValue::Int)
						.unwrap_or(DataValue::Float(number as f64))
				}
			}
		)*
	};
}

impl_from_wide_integer!(isize, usize, u64, i128, u128);

impl From<f32> for DataValue {
	fn from(number: f32) -> Self {
		DataValue::Float(f64::from(number))
	}
}

impl From<f64> for DataValue {
	fn from(number: f64) -> Self {
		DataValue::Float(number)
	}
}

impl From<Statement> for DataValue {
	fn from(statement: Statement) -> Self {
		DataValue::Statement(statement)
	}
}

impl From<DataMap> for DataValue {
	fn from(map: DataMap) -> Self {
		DataValue::Map(map)
	}
}

impl<T: Into<DataValue>> From<Vec<T>> for DataValue {
	fn from(items: Vec<T>) -> Self {
		DataValue::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(DataValue::Null, Into::into)
	}
}

impl From<serde_json::Value> for DataValue {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => DataValue::Null,
			serde_json::Value::Bool(flag) => DataValue::Bool(flag),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(integer) => DataValue::Int(integer),
				None => DataValue::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(text) => DataValue::Str(text),
			serde_json::Value::Array(items) => {
				DataValue::List(items.into_iter().map(DataValue::from).collect())
			}
			serde_json::Value::Object(entries) => DataValue::Map(
				entries
					.into_iter()
					.map(|(key, value)| (key, DataValue::from(value)))
					.collect(),
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(DataValue::from(None::<bool>), "null")]
	#[case(DataValue::from(3u8), "integer")]
	#[case(DataValue::from(f64::INFINITY), "non-finite float")]
	#[case(DataValue::from(vec!["a"]), "list")]
	#[case(DataValue::from(Statement::instance("init()")), "statement")]
	fn test_type_name(#[case] value: DataValue, #[case] expected: &str) {
		assert_eq!(value.type_name(), expected);
	}

	#[rstest]
	fn test_from_json_keeps_key_order_and_shapes() {
		let value = DataValue::from(json!({ "b": 1, "a": [true, null], "c": 2.5, "d": "x" }));
		let DataValue::Map(map) = value else {
			panic!("expected a map");
		};
		let keys: Vec<&str> = map.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["b", "a", "c", "d"]);
		assert_eq!(map["a"], DataValue::List(vec![DataValue::Bool(true), DataValue::Null]));
		assert_eq!(map["c"], DataValue::Float(2.5));
		assert_eq!(map["d"], DataValue::from("x"));
	}

	#[rstest]
	#[case(DataValue::from(5usize), DataValue::Int(5))]
	#[case(DataValue::from(-5isize), DataValue::Int(-5))]
	#[case(DataValue::from(9u64), DataValue::Int(9))]
	#[case(DataValue::from(u64::MAX), DataValue::Float(u64::MAX as f64))]
	#[case(DataValue::from(i128::MAX), DataValue::Float(i128::MAX as f64))]
	fn test_wide_integers(#[case] value: DataValue, #[case] expected: DataValue) {
		assert_eq!(value, expected);
	}

	#[rstest]
	fn test_large_unsigned_becomes_float() {
		let value = DataValue::from(json!(u64::MAX));
		assert!(matches!(value, DataValue::Float(_)));
	}
}
