//! Core building blocks of the aether document builder.
//!
//! This crate holds everything an element needs before it becomes part of a
//! tree: trusted markup strings, HTML escaping, attribute values and their
//! per-element schemas, the attribute serializer, the error type, the
//! diagnostics channel for non-fatal notices, and process-wide settings.
//!
//! ## Example
//!
//! ```
//! use aether_core::attributes::{AttrKind, AttrSpec, AttributeSchema, GlobalAttributes};
//! use aether_core::{attrs, serialize_attributes};
//!
//! static BUTTON: AttributeSchema = AttributeSchema::new(
//! 	"button",
//! 	GlobalAttributes::Html,
//! 	&[AttrSpec::optional("disabled", AttrKind::Bool)],
//! );
//!
//! let validated = BUTTON
//! 	.validate(attrs! { "class" => "a b", "disabled" => true, "hidden" => false })
//! 	.unwrap();
//! assert_eq!(serialize_attributes(&validated).as_str(), r#"class="a b" disabled"#);
//! ```

pub mod attributes;
pub mod diagnostics;
pub mod error;
pub mod escaping;
pub mod safe_string;
pub mod settings;
pub mod utils;

pub use attributes::{
	AttrKind, AttrSpec, AttrValue, AttributeSchema, AttributeValidator, Attributes,
	DefaultValue, GlobalAttributes, ValidatorError, serialize_attributes, validate,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{AetherError, AetherResult};
pub use escaping::{Escape, escape, html_escape};
pub use safe_string::{SafeString, mark_safe};
pub use settings::{ChildlessPolicy, Settings};
pub use utils::{error_fragment, html_class_merge};

/// Builds an ordered [`Attributes`] map.
///
/// Values may be anything convertible into [`AttrValue`], so one map can mix
/// text, booleans and numbers. Insertion order is preserved.
///
/// ```
/// use aether_core::attrs;
///
/// let attributes = attrs! { "id" => "main", "hidden" => true, "tabindex" => 0 };
/// assert_eq!(attributes.len(), 3);
/// assert_eq!(attributes.keys().next(), Some("id"));
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::attributes::Attributes::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::attributes::Attributes::new();
		$(
			attributes.insert($key, $value);
		)+
		attributes
	}};
}
