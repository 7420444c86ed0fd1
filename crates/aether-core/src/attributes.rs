//! Attribute model.
//!
//! Raw attributes are collected into an ordered [`Attributes`] map, checked
//! against the [`AttributeSchema`] of an element kind by [`validate`], and
//! finally flattened into markup by [`serialize_attributes`].

mod schema;
mod serialize;
mod validate;
mod value;

pub use schema::{
	AttrKind, AttrSpec, AttributeSchema, AttributeValidator, DefaultValue, GlobalAttributes,
	ValidatorError,
};
pub use serialize::serialize_attributes;
pub use validate::validate;
pub use value::AttrValue;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};

/// Ordered mapping from attribute name to value.
///
/// Keys are unique and keep their first insertion position, so rendering is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Inserts an attribute, returning the previous value.
	///
	/// Re-inserting an existing key replaces its value in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Inserts an attribute only when the key is absent.
	pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
		self.0.entry(key.into()).or_insert_with(|| value.into());
	}

	/// Removes an attribute, keeping the order of the remaining ones.
	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		self.0.shift_remove(key)
	}

	/// Returns the value of an attribute.
	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.0.get(key)
	}

	/// Returns `true` when the attribute is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Iterates over attribute names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Iterates over attributes in insertion order.
	pub fn iter(&self) -> Iter<'_, String, AttrValue> {
		self.0.iter()
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = Iter<'a, String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for Attributes {
	type Item = (String, AttrValue);
	type IntoIter = IntoIter<String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		for (key, value) in iter {
			attributes.insert(key, value);
		}
		attributes
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(pairs: Vec<(K, V)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl From<()> for Attributes {
	fn from(_: ()) -> Self {
		Attributes::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_preserves_order() {
		let attributes = crate::attrs! { "b" => "2", "a" => "1", "c" => true };
		let keys: Vec<&str> = attributes.keys().collect();
		assert_eq!(keys, vec!["b", "a", "c"]);
	}

	#[rstest]
	fn test_reinsert_keeps_position() {
		let mut attributes = crate::attrs! { "id" => "x", "class" => "a" };
		attributes.insert("id", "y");
		let keys: Vec<&str> = attributes.keys().collect();
		assert_eq!(keys, vec!["id", "class"]);
		assert_eq!(attributes.get("id"), Some(&AttrValue::from("y")));
	}

	#[rstest]
	fn test_remove_keeps_remaining_order() {
		let mut attributes = crate::attrs! { "a" => 1, "b" => 2, "c" => 3 };
		assert_eq!(attributes.remove("b"), Some(AttrValue::Int(2)));
		let keys: Vec<&str> = attributes.keys().collect();
		assert_eq!(keys, vec!["a", "c"]);
	}

	#[rstest]
	fn test_set_default_only_fills_missing() {
		let mut attributes = crate::attrs! { "lang" => "fr" };
		attributes.set_default("lang", "en");
		attributes.set_default("dir", "ltr");
		assert_eq!(attributes.get("lang"), Some(&AttrValue::from("fr")));
		assert_eq!(attributes.get("dir"), Some(&AttrValue::from("ltr")));
	}

	#[rstest]
	fn test_from_array_and_unit() {
		let attributes = Attributes::from([("src", "a.png"), ("alt", "A")]);
		assert_eq!(attributes.len(), 2);
		assert!(Attributes::from(()).is_empty());
	}
}
