//! Per-element attribute schemas.
//!
//! A schema is a fixed table describing which attributes an element kind
//! accepts, which are required, what shape their values must have, and which
//! defaults apply when they are absent. Schemas are `const`-constructible so
//! element catalogues can declare them as statics.

use std::fmt;

use super::{AttrValue, Attributes};
use crate::error::AetherResult;

/// Allowed value shape of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
	/// Text or safe text.
	Text,
	/// Boolean flag.
	Bool,
	/// Integer number.
	Integer,
	/// Integer or floating point number.
	Number,
	/// Length-like value: text (`"50%"`) or a number.
	Length,
	/// One of a fixed set of tokens.
	Enum(&'static [&'static str]),
	/// Any value.
	Any,
}

impl AttrKind {
	/// Returns `true` when the value has an allowed shape.
	pub fn accepts(&self, value: &AttrValue) -> bool {
		match self {
			AttrKind::Text => matches!(value, AttrValue::Text(_) | AttrValue::Safe(_)),
			AttrKind::Bool => value.is_bool(),
			AttrKind::Integer => matches!(value, AttrValue::Int(_)),
			AttrKind::Number => matches!(value, AttrValue::Int(_) | AttrValue::Float(_)),
			AttrKind::Length => !value.is_bool(),
			AttrKind::Enum(allowed) => value
				.as_text()
				.is_some_and(|token| allowed.contains(&token)),
			AttrKind::Any => true,
		}
	}
}

impl fmt::Display for AttrKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrKind::Text => f.write_str("text"),
			AttrKind::Bool => f.write_str("bool"),
			AttrKind::Integer => f.write_str("integer"),
			AttrKind::Number => f.write_str("number"),
			AttrKind::Length => f.write_str("length (text or number)"),
			AttrKind::Enum(allowed) => write!(f, "one of: {}", allowed.join(", ")),
			AttrKind::Any => f.write_str("any value"),
		}
	}
}

/// Default value applied when an attribute is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
	/// Text default.
	Text(&'static str),
	/// Boolean default.
	Bool(bool),
	/// Integer default.
	Int(i64),
}

impl DefaultValue {
	/// Converts the default into an attribute value.
	pub fn to_value(self) -> AttrValue {
		match self {
			DefaultValue::Text(text) => AttrValue::from(text),
			DefaultValue::Bool(flag) => AttrValue::Bool(flag),
			DefaultValue::Int(number) => AttrValue::Int(number),
		}
	}
}

/// Declaration of one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrSpec {
	/// Attribute name as rendered.
	pub name: &'static str,
	/// Allowed value shape.
	pub kind: AttrKind,
	/// Whether the attribute must be present after defaults are applied.
	pub required: bool,
	/// Value substituted when the attribute is absent.
	pub default: Option<DefaultValue>,
}

impl AttrSpec {
	/// Declares an optional attribute.
	pub const fn optional(name: &'static str, kind: AttrKind) -> Self {
		Self {
			name,
			kind,
			required: false,
			default: None,
		}
	}

	/// Declares a required attribute.
	pub const fn required(name: &'static str, kind: AttrKind) -> Self {
		Self {
			name,
			kind,
			required: true,
			default: None,
		}
	}

	/// Attaches a default value.
	pub const fn with_default(mut self, default: DefaultValue) -> Self {
		self.default = Some(default);
		self
	}
}

/// Rejection raised by a custom validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorError {
	/// Attributes involved in the rejected rule.
	pub fields: Vec<String>,
	/// Human readable explanation.
	pub message: String,
}

impl ValidatorError {
	/// Creates a rejection naming the attributes at fault.
	pub fn new<I, S>(fields: I, message: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			fields: fields.into_iter().map(Into::into).collect(),
			message: message.into(),
		}
	}
}

/// Cross-field rule run after schema checks.
///
/// Receives the normalized attributes and returns them, possibly rewritten,
/// or rejects them.
pub type AttributeValidator = fn(Attributes) -> Result<Attributes, ValidatorError>;

/// Prefixes of attribute names accepted on every element kind.
///
/// Covers custom data attributes, accessibility attributes and the
/// directives of reactive front-end libraries.
pub const OPEN_PREFIXES: &[&str] = &["data-", "aria-", "x-", "hx-", "@", ":"];

/// Set of global attributes an element kind inherits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAttributes {
	/// Global HTML attributes.
	Html,
	/// Core SVG and presentation attributes.
	Svg,
	/// No inherited attributes.
	None,
}

const HTML_GLOBALS: &[AttrSpec] = &[
	AttrSpec::optional("accesskey", AttrKind::Text),
	AttrSpec::optional("autocapitalize", AttrKind::Text),
	AttrSpec::optional("autofocus", AttrKind::Bool),
	AttrSpec::optional("class", AttrKind::Text),
	AttrSpec::optional("contenteditable", AttrKind::Any),
	AttrSpec::optional("dir", AttrKind::Enum(&["ltr", "rtl", "auto"])),
	AttrSpec::optional("draggable", AttrKind::Any),
	AttrSpec::optional("enterkeyhint", AttrKind::Text),
	AttrSpec::optional("hidden", AttrKind::Any),
	AttrSpec::optional("id", AttrKind::Text),
	AttrSpec::optional("inert", AttrKind::Bool),
	AttrSpec::optional("inputmode", AttrKind::Text),
	AttrSpec::optional("is", AttrKind::Text),
	AttrSpec::optional("itemid", AttrKind::Text),
	AttrSpec::optional("itemprop", AttrKind::Text),
	AttrSpec::optional("itemref", AttrKind::Text),
	AttrSpec::optional("itemscope", AttrKind::Bool),
	AttrSpec::optional("itemtype", AttrKind::Text),
	AttrSpec::optional("lang", AttrKind::Text),
	AttrSpec::optional("nonce", AttrKind::Text),
	AttrSpec::optional("part", AttrKind::Text),
	AttrSpec::optional("popover", AttrKind::Any),
	AttrSpec::optional("role", AttrKind::Text),
	AttrSpec::optional("slot", AttrKind::Text),
	AttrSpec::optional("spellcheck", AttrKind::Any),
	AttrSpec::optional("style", AttrKind::Text),
	AttrSpec::optional("tabindex", AttrKind::Integer),
	AttrSpec::optional("title", AttrKind::Text),
	AttrSpec::optional("translate", AttrKind::Enum(&["yes", "no"])),
];

const SVG_GLOBALS: &[AttrSpec] = &[
	AttrSpec::optional("id", AttrKind::Text),
	AttrSpec::optional("class", AttrKind::Text),
	AttrSpec::optional("style", AttrKind::Text),
	AttrSpec::optional("lang", AttrKind::Text),
	AttrSpec::optional("tabindex", AttrKind::Integer),
	AttrSpec::optional("fill", AttrKind::Text),
	AttrSpec::optional("fill-opacity", AttrKind::Length),
	AttrSpec::optional("fill-rule", AttrKind::Enum(&["nonzero", "evenodd", "inherit"])),
	AttrSpec::optional("stroke", AttrKind::Text),
	AttrSpec::optional("stroke-width", AttrKind::Length),
	AttrSpec::optional("stroke-linecap", AttrKind::Enum(&["butt", "round", "square"])),
	AttrSpec::optional(
		"stroke-linejoin",
		AttrKind::Enum(&["arcs", "bevel", "miter", "miter-clip", "round"]),
	),
	AttrSpec::optional("stroke-dasharray", AttrKind::Text),
	AttrSpec::optional("stroke-opacity", AttrKind::Length),
	AttrSpec::optional("opacity", AttrKind::Length),
	AttrSpec::optional("transform", AttrKind::Text),
	AttrSpec::optional("visibility", AttrKind::Enum(&["visible", "hidden", "collapse"])),
	AttrSpec::optional("display", AttrKind::Text),
	AttrSpec::optional("clip-path", AttrKind::Text),
	AttrSpec::optional("mask", AttrKind::Text),
	AttrSpec::optional("filter", AttrKind::Text),
];

impl GlobalAttributes {
	/// Declarations inherited from this set.
	pub fn specs(&self) -> &'static [AttrSpec] {
		match self {
			GlobalAttributes::Html => HTML_GLOBALS,
			GlobalAttributes::Svg => SVG_GLOBALS,
			GlobalAttributes::None => &[],
		}
	}

	/// Whether names with an open prefix (`data-`, `aria-`, ...) are accepted.
	pub fn allows_open_prefixes(&self) -> bool {
		!matches!(self, GlobalAttributes::None)
	}
}

/// Fixed description of the attributes of one element kind.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSchema {
	/// Element kind the schema belongs to, used in error messages.
	pub element: &'static str,
	/// Inherited global attributes.
	pub globals: GlobalAttributes,
	/// Element-specific declarations; these shadow globals of the same name.
	pub fields: &'static [AttrSpec],
	/// Cross-field rules run after the schema checks, in order.
	pub validators: &'static [AttributeValidator],
}

impl AttributeSchema {
	/// Creates a schema without custom validators.
	pub const fn new(
		element: &'static str,
		globals: GlobalAttributes,
		fields: &'static [AttrSpec],
	) -> Self {
		Self {
			element,
			globals,
			fields,
			validators: &[],
		}
	}

	/// Attaches cross-field validators.
	pub const fn with_validators(mut self, validators: &'static [AttributeValidator]) -> Self {
		self.validators = validators;
		self
	}

	/// Finds the declaration of an attribute.
	pub fn lookup(&self, name: &str) -> Option<&'static AttrSpec> {
		self.fields
			.iter()
			.chain(self.globals.specs())
			.find(|spec| spec.name == name)
	}

	/// Returns `true` when the schema accepts an attribute name.
	pub fn accepts_key(&self, name: &str) -> bool {
		self.lookup(name).is_some()
			|| (self.globals.allows_open_prefixes()
				&& OPEN_PREFIXES
					.iter()
					.any(|prefix| name.len() > prefix.len() && name.starts_with(prefix)))
	}

	/// Element-specific defaults in declaration order.
	pub fn defaults(&self) -> Attributes {
		self.fields
			.iter()
			.filter_map(|spec| spec.default.map(|default| (spec.name, default.to_value())))
			.collect()
	}

	/// Validates raw attributes against this schema.
	///
	/// Shorthand for [`validate`](super::validate) without extra defaults or
	/// extra validators.
	pub fn validate(&self, raw: impl Into<Attributes>) -> AetherResult<Attributes> {
		super::validate(self, raw.into(), None, &[])
	}
}
