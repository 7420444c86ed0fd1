//! Typed HTML and SVG elements for the aether document builder.
//!
//! Each element kind is a static [`ElementKind`] descriptor paired with a
//! constructor function of the same name in [`html`] or [`svg`]. Constructors
//! validate attributes immediately; children are attached with
//! [`Element::compose`] (or its owned form [`Element::with`]); [`render`]
//! turns a finished tree into markup.
//!
//! ## Example
//!
//! ```
//! use aether_core::attrs;
//! use aether_tags::html::{a, body, h1, html};
//! use aether_tags::render;
//!
//! let page = html(attrs! { "doctype" => true })
//! 	.unwrap()
//! 	.with(
//! 		body(()).unwrap().with((
//! 			h1(()).unwrap().with("Tom & Jerry").unwrap(),
//! 			a(attrs! { "href" => "/next", "newtab" => true }).unwrap().with("Next").unwrap(),
//! 		))
//! 		.unwrap(),
//! 	)
//! 	.unwrap();
//!
//! assert_eq!(
//! 	render(&page).as_str(),
//! 	"<!DOCTYPE html><html lang=\"en\"><body><h1>Tom &amp; Jerry</h1>\
//! 	 <a href=\"/next\" target=\"_blank\" rel=\"noopener noreferrer\">Next</a></body></html>"
//! );
//! ```

/// Declares element kinds and their constructors.
///
/// Each entry produces a `pub static` descriptor and a `pub fn` constructor
/// taking anything convertible into attributes. Trailing `.method(args)`
/// calls are applied to the descriptor.
macro_rules! element_kinds {
	(
		namespace: $namespace:expr,
		globals: $globals:expr,
		prefix: $prefix:literal;
		$(
			$ctor:ident, $kind:ident = $tag:literal [$($spec:expr),* $(,)?]
				$(.$method:ident($($arg:expr),* $(,)?))*;
		)*
	) => {
		$(
			#[doc = concat!("Descriptor of the `<", $tag, ">` element.")]
			pub static $kind: $crate::kind::ElementKind = $crate::kind::ElementKind::new(
				$tag,
				$namespace,
				aether_core::AttributeSchema::new(concat!($prefix, $tag), $globals, &[$($spec),*]),
			)
			$(.$method($($arg),*))*;

			#[doc = concat!("Builds a `<", $tag, ">` element.")]
			pub fn $ctor(
				attributes: impl Into<aether_core::Attributes>,
			) -> aether_core::AetherResult<$crate::element::Element> {
				$crate::element::Element::new(&$kind, attributes)
			}
		)*
	};
}

pub mod children;
pub mod element;
pub mod html;
pub mod kind;
pub mod render;
pub mod svg;

pub use children::{Child, IntoChild, Lazy, lazy};
pub use element::{Element, Node};
pub use kind::{ChildRule, ComposeHook, ContentCategory, ElementKind, Namespace, Prefix};
pub use render::{Render, render};
