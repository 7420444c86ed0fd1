//! Rendering of element trees
//!
//! Uses rstest for fixed documents and proptest to verify:
//! 1. Rendering is deterministic and restartable
//! 2. Arbitrary text children are escaped exactly once
//! 3. Trusted markup is emitted verbatim
//! 4. Attribute serialization inside rendered start tags

use aether_core::{attrs, escape, html_escape, mark_safe};
use aether_tags::html::{body, button, div, h1, head, html, li, meta, p, title, ul};
use aether_tags::svg::{circle, svg};
use aether_tags::{Element, render};
use proptest::prelude::*;
use rstest::rstest;

fn document() -> Element {
	let head_children = head(())
		.unwrap()
		.with((
			meta(attrs! { "charset" => "utf-8" }).unwrap(),
			title(()).unwrap().with("Q&A").unwrap(),
		))
		.unwrap();
	let body_children = body(attrs! { "class" => "page" })
		.unwrap()
		.with((
			h1(()).unwrap().with("Questions <and> answers").unwrap(),
			svg(attrs! { "width" => 10, "height" => 10 })
				.unwrap()
				.with(circle(attrs! { "r" => 4 }).unwrap())
				.unwrap(),
		))
		.unwrap();
	html(attrs! { "doctype" => true })
		.unwrap()
		.with((head_children, body_children))
		.unwrap()
}

#[rstest]
fn test_full_document() {
	assert_eq!(
		render(&document()).as_str(),
		concat!(
			"<!DOCTYPE html><html lang=\"en\">",
			"<head><meta charset=\"utf-8\"><title>Q&amp;A</title></head>",
			"<body class=\"page\"><h1>Questions &lt;and&gt; answers</h1>",
			"<svg width=\"10\" height=\"10\" xmlns=\"http://www.w3.org/2000/svg\">",
			"<circle r=\"4\" cx=\"0\" cy=\"0\"></svg>",
			"</body></html>",
		)
	);
}

#[rstest]
fn test_render_twice_is_byte_identical() {
	let root = document();
	let first = render(&root);
	let second = render(&root);
	assert_eq!(first, second);
}

#[rstest]
fn test_fragments_concatenate_to_render() {
	let root = document();
	let joined: String = root.fragments().map(|fragment| fragment.into_string()).collect();
	assert_eq!(joined, render(&root).into_string());
}

#[rstest]
fn test_boolean_attributes_in_start_tag() {
	let control = button(attrs! { "class" => "a b", "disabled" => true, "hidden" => false })
		.unwrap()
		.with("Go")
		.unwrap();
	assert_eq!(
		render(&control).as_str(),
		r#"<button class="a b" disabled>Go</button>"#
	);
}

#[rstest]
fn test_trusted_partial_is_not_escaped_again() {
	let partial = render(&p(()).unwrap().with("1 < 2").unwrap());
	let page = div(()).unwrap().with((partial, " & more")).unwrap();
	assert_eq!(
		render(&page).as_str(),
		"<div><p>1 &lt; 2</p> &amp; more</div>"
	);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(100))]

	/// Property: text children are escaped exactly once
	#[test]
	fn test_text_child_escaped_once(text in ".{0,40}") {
		let paragraph = p(()).unwrap().with(text.as_str()).unwrap();
		let expected = format!("<p>{}</p>", html_escape(&text));
		let rendered = render(&paragraph);
		prop_assert_eq!(rendered.as_str(), expected.as_str());
	}

	/// Property: marking escaped text safe keeps it from being escaped again
	#[test]
	fn test_safe_escaped_text_round_trips(text in ".{0,40}", tail in ".{0,10}") {
		let safe = mark_safe(escape(text.as_str()).into_string());
		let paragraph = p(()).unwrap().with((safe, tail.as_str())).unwrap();
		let expected = format!("<p>{}{}</p>", html_escape(&text), html_escape(&tail));
		let rendered = render(&paragraph);
		prop_assert_eq!(rendered.as_str(), expected.as_str());
	}

	/// Property: rendering an unmutated tree is deterministic
	#[test]
	fn test_render_is_deterministic(items in proptest::collection::vec(".{0,12}", 0..8)) {
		let list = ul(())
			.unwrap()
			.with(items.iter().map(|item| li(()).unwrap().with(item).unwrap()).collect::<Vec<_>>())
			.unwrap();
		let first = render(&list);
		let second = render(&list);
		prop_assert_eq!(&first, &second);
		prop_assert_eq!(list.fragments().count(), 2 + items.len() * 3);
	}

	/// Property: attribute values cannot terminate the quoted value
	#[test]
	fn test_attribute_values_are_contained(value in ".{0,24}") {
		let element = div(attrs! { "title" => value.as_str() }).unwrap();
		let rendered = render(&element);
		let expected = format!("<div title=\"{}\"></div>", html_escape(&value));
		prop_assert_eq!(rendered.as_str(), expected.as_str());
	}
}
