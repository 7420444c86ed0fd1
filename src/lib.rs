//! # Aether
//!
//! A typed HTML and SVG document builder for server-side rendering.
//!
//! Documents are trees of [`Element`]s built through one constructor per
//! element kind. Each constructor validates its attributes against the
//! kind's schema, children are type-checked when they are composed, and
//! rendering streams the tree as escaped markup with deterministic output.
//!
//! ## Crates
//!
//! - [`core`]: safe strings, escaping, attribute schemas and validation,
//!   errors, diagnostics and settings
//! - [`tags`]: element kinds, composition, rendering and the HTML and SVG
//!   catalogues
//! - [`alpine`]: Alpine.js `x-data` / `x-init` expressions (`alpine` feature)
//!
//! ## Feature Flags
//!
//! - `alpine` (default) - Alpine.js data-attribute expressions
//!
//! ## Quick Example
//!
//! ```
//! use aether::prelude::*;
//! use aether::tags::html::{a, body, h1, html};
//!
//! let page = html(attrs! { "doctype" => true })
//! 	.unwrap()
//! 	.with(
//! 		body(())
//! 			.unwrap()
//! 			.with((
//! 				h1(()).unwrap().with("Fish & Chips").unwrap(),
//! 				a(attrs! { "href" => "/menu", "newtab" => true }).unwrap().with("Menu").unwrap(),
//! 			))
//! 			.unwrap(),
//! 	)
//! 	.unwrap();
//!
//! assert_eq!(
//! 	render(&page).as_str(),
//! 	concat!(
//! 		r#"<!DOCTYPE html><html lang="en"><body><h1>Fish &amp; Chips</h1>"#,
//! 		r#"<a href="/menu" target="_blank" rel="noopener noreferrer">Menu</a>"#,
//! 		"</body></html>",
//! 	)
//! );
//! ```

#[cfg(feature = "alpine")]
pub mod alpine;
pub mod core;
pub mod tags;

pub use aether_core::{
	AetherError, AetherResult, AttrValue, Attributes, Diagnostic, DiagnosticKind, SafeString,
	Settings, attrs, escape, mark_safe,
};
pub use aether_tags::{Child, Element, IntoChild, Node, lazy, render};

/// Renders the tree produced by `build`, or a visible error block when it fails.
///
/// Intended for page handlers where a broken fragment should show up in the
/// page instead of aborting the whole response.
///
/// ```
/// use aether::render_or_error;
/// use aether::tags::html::{a, p};
///
/// let ok = render_or_error(|| p(()).and_then(|paragraph| paragraph.with("hi")));
/// assert_eq!(ok.as_str(), "<p>hi</p>");
///
/// let broken = render_or_error(|| a(()));
/// assert!(broken.as_str().starts_with("<pre"));
/// assert!(broken.as_str().contains("missing required attribute(s): href"));
/// ```
pub fn render_or_error<F>(build: F) -> SafeString
where
	F: FnOnce() -> AetherResult<Element>,
{
	match build() {
		Ok(root) => render(&root),
		Err(error) => {
			tracing::warn!(%error, "rendering error fragment");
			aether_core::error_fragment(&error)
		}
	}
}

pub mod prelude {
	pub use crate::{
		AetherError, AetherResult, Element, IntoChild, Node, SafeString, attrs, lazy, mark_safe,
		render, render_or_error,
	};

	#[cfg(feature = "alpine")]
	pub use crate::alpine::{AlpineData, DataValue, Directive, Statement};
}
