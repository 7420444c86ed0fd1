//! Rendering of element trees into markup.
//!
//! [`Render`] walks a tree depth-first and yields one escaped fragment per
//! step. It borrows the tree and keeps its cursor in the iterator, so a new
//! walk always starts from the root and a tree can be rendered any number of
//! times, concurrently if it is shared read-only.

use aether_core::{Escape, SafeString, serialize_attributes};

use crate::element::{Element, Node};

enum Step<'a> {
	Enter(&'a Element),
	Close(&'a Element),
	Child(&'a Node),
}

/// Lazy fragment sequence of an element tree.
pub struct Render<'a> {
	stack: Vec<Step<'a>>,
}

impl<'a> Render<'a> {
	/// Starts a walk at `root`.
	pub fn new(root: &'a Element) -> Self {
		Self {
			stack: vec![Step::Enter(root)],
		}
	}

	fn open(&mut self, element: &'a Element) -> SafeString {
		let mut fragment = SafeString::empty();
		if element.emits_prefix()
			&& let Some(prefix) = element.kind().prefix
		{
			fragment.push_safe(&SafeString::from_static(prefix.text));
		}

		fragment.push_safe(&SafeString::from_static("<"));
		fragment.push_safe(&SafeString::from_static(element.tag_name()));
		let attributes = serialize_attributes(element.attributes());
		if !attributes.is_empty() {
			fragment.push_safe(&SafeString::from_static(" "));
			fragment.push_safe(&attributes);
		}
		fragment.push_safe(&SafeString::from_static(">"));

		if element.kind().accepts_children {
			self.stack.push(Step::Close(element));
			self.stack.extend(element.children().iter().rev().map(Step::Child));
		}
		fragment
	}
}

impl Iterator for Render<'_> {
	type Item = SafeString;

	fn next(&mut self) -> Option<SafeString> {
		let step = self.stack.pop()?;
		let fragment = match step {
			Step::Enter(element) => self.open(element),
			Step::Close(element) => SafeString::new(format!("</{}>", element.tag_name())),
			Step::Child(Node::Text(text)) => text.escape(),
			Step::Child(Node::Safe(safe)) => safe.clone(),
			Step::Child(Node::Element(element)) => self.open(element),
		};
		Some(fragment)
	}
}

impl Element {
	/// Iterates over the rendered fragments of this element.
	pub fn fragments(&self) -> Render<'_> {
		Render::new(self)
	}

	/// Renders this element and its descendants.
	pub fn render(&self) -> SafeString {
		render(self)
	}
}

/// Renders a tree into one markup string.
///
/// Fragments are joined with [`SafeString::join`], which would escape a plain
/// fragment; every fragment of [`Render`] is already safe, so the join is a
/// plain concatenation.
///
/// # Examples
///
/// ```
/// use aether_core::attrs;
/// use aether_tags::html::{br, div};
/// use aether_tags::render;
///
/// let tree = div(attrs! { "id" => "main" })
/// 	.unwrap()
/// 	.with(("a < b", br(()).unwrap()))
/// 	.unwrap();
/// assert_eq!(render(&tree).as_str(), r#"<div id="main">a &lt; b<br></div>"#);
/// ```
pub fn render(root: &Element) -> SafeString {
	SafeString::join(Render::new(root))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::html::{br, div, html, p};
	use aether_core::{attrs, mark_safe};
	use rstest::rstest;

	#[rstest]
	fn test_empty_element_renders_open_and_close() {
		assert_eq!(div(()).unwrap().render().as_str(), "<div></div>");
	}

	#[rstest]
	fn test_void_element_has_no_closing_tag() {
		assert_eq!(br(()).unwrap().render().as_str(), "<br>");
	}

	#[rstest]
	fn test_fragments_follow_depth_first_order() {
		let tree = div(()).unwrap()
			.with((p(()).unwrap().with("x").unwrap(), "y"))
			.unwrap();
		let fragments: Vec<String> = tree.fragments().map(SafeString::into_string).collect();
		assert_eq!(fragments, vec!["<div>", "<p>", "x", "</p>", "y", "</div>"]);
	}

	#[rstest]
	fn test_text_is_escaped_and_safe_is_not() {
		let tree = p(()).unwrap()
			.with(("<i>", mark_safe("<i>")))
			.unwrap();
		assert_eq!(tree.render().as_str(), "<p>&lt;i&gt;<i></p>");
	}

	#[rstest]
	#[case(true, "<!DOCTYPE html><html lang=\"en\"></html>")]
	#[case(false, "<html lang=\"en\"></html>")]
	fn test_doctype_prefix(#[case] doctype: bool, #[case] expected: &str) {
		let root = html(attrs! { "doctype" => doctype }).unwrap();
		assert_eq!(root.render().as_str(), expected);
	}

	#[rstest]
	fn test_render_is_restartable() {
		let tree = div(()).unwrap().with(("a", br(()).unwrap())).unwrap();
		let mut walk = tree.fragments();
		walk.next();
		assert_eq!(tree.render(), tree.render());
		assert_eq!(tree.fragments().count(), 4);
	}
}
