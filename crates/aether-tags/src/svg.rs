//! SVG element kinds.
//!
//! Shapes are void and carry geometry defaults (`"0"`), so a bare
//! `circle(())` renders `<circle cx="0" cy="0" r="0">`. Every kind accepts the
//! core SVG presentation attributes and the same prefixed attributes as HTML.

use aether_core::AttrKind::{Enum, Length, Number, Text};
use aether_core::{AttrKind, AttrSpec, DefaultValue, GlobalAttributes};

use crate::kind::ContentCategory::{
	Basic, Container, Graphics, Renderable, Shape, Structural, TextContent, TextContentChild,
};
use crate::kind::{ChildRule, ContentCategory, Namespace};

/// Namespace URI set on `<svg>` unless overridden.
pub const SVG_NAMESPACE_URI: &str = "http://www.w3.org/2000/svg";

const ROOT: &[ContentCategory] = &[Container, Structural, Renderable];
const GROUP: &[ContentCategory] = &[Container, Structural, Renderable];
const BASIC_SHAPE: &[ContentCategory] = &[Basic, Graphics, Shape, Renderable];
const SHAPE: &[ContentCategory] = &[Graphics, Shape, Renderable];
const TEXT: &[ContentCategory] = &[Graphics, TextContent, Renderable];
const TEXT_CHILD: &[ContentCategory] = &[TextContent, TextContentChild, Renderable];

/// `<text>` and `<tspan>` hold text and text content child elements.
const TEXT_CHILDREN: ChildRule = ChildRule::Categories {
	text: true,
	categories: &[TextContentChild],
};

const LENGTH_ADJUST: AttrKind = Enum(&["spacing", "spacingAndGlyphs"]);

const fn opt(name: &'static str, kind: AttrKind) -> AttrSpec {
	AttrSpec::optional(name, kind)
}

/// Geometry attribute defaulting to `"0"`.
const fn zero(name: &'static str) -> AttrSpec {
	AttrSpec::optional(name, Length).with_default(DefaultValue::Text("0"))
}

element_kinds! {
	namespace: Namespace::Svg,
	globals: GlobalAttributes::Svg,
	prefix: "svg:";

	g, G = "g" [].with_categories(GROUP);
	circle, CIRCLE = "circle" [
		zero("cx"),
		zero("cy"),
		zero("r"),
		opt("pathLength", Number),
	]
		.void()
		.with_categories(BASIC_SHAPE);
	ellipse, ELLIPSE = "ellipse" [
		zero("cx"),
		zero("cy"),
		zero("rx"),
		zero("ry"),
		opt("pathLength", Number),
	]
		.void()
		.with_categories(BASIC_SHAPE);
	line, LINE = "line" [
		zero("x1"),
		zero("y1"),
		zero("x2"),
		zero("y2"),
		opt("pathLength", Number),
	]
		.void()
		.with_categories(BASIC_SHAPE);
	path, PATH = "path" [opt("d", Text), opt("pathLength", Number)]
		.void()
		.with_categories(SHAPE);
	polygon, POLYGON = "polygon" [opt("points", Text), opt("pathLength", Number)]
		.void()
		.with_categories(BASIC_SHAPE);
	polyline, POLYLINE = "polyline" [opt("points", Text), opt("pathLength", Number)]
		.void()
		.with_categories(BASIC_SHAPE);
	rect, RECT = "rect" [
		zero("x"),
		zero("y"),
		zero("width"),
		zero("height"),
		opt("rx", Length),
		opt("ry", Length),
		opt("pathLength", Number),
	]
		.void()
		.with_categories(BASIC_SHAPE);
	text, TEXT_ELEMENT = "text" [
		zero("x"),
		zero("y"),
		opt("dx", Length),
		opt("dy", Length),
		opt("rotate", Text),
		opt("textLength", Length),
		opt("lengthAdjust", LENGTH_ADJUST).with_default(DefaultValue::Text("spacing")),
	]
		.with_categories(TEXT)
		.with_children(TEXT_CHILDREN);
	tspan, TSPAN = "tspan" [
		opt("x", Length),
		opt("y", Length),
		opt("dx", Length),
		opt("dy", Length),
		opt("rotate", Text),
		opt("textLength", Length),
		opt("lengthAdjust", LENGTH_ADJUST),
	]
		.with_categories(TEXT_CHILD)
		.with_children(TEXT_CHILDREN);
}

element_kinds! {
	namespace: Namespace::Svg,
	globals: GlobalAttributes::Svg,
	prefix: "";

	svg, SVG = "svg" [
		opt("xmlns", Text).with_default(DefaultValue::Text(SVG_NAMESPACE_URI)),
		opt("viewBox", Text),
		opt("width", Length),
		opt("height", Length),
		opt("x", Length),
		opt("y", Length),
		opt("preserveAspectRatio", Text),
		opt("version", Text),
	]
		.with_categories(ROOT);
}
