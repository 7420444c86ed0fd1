//! HTML element kinds.
//!
//! Every kind accepts the global HTML attributes and any `data-`, `aria-`,
//! `x-`, `hx-`, `@` or `:` prefixed attribute in addition to its own.
//! Void kinds (`area`, `base`, `br`, `col`, `embed`, `hr`, `img`, `input`,
//! `link`, `meta`, `source`, `track`, `wbr`) never hold children and render
//! without a closing tag.

use aether_core::AttrKind::{Any, Bool, Enum, Integer, Length, Number, Text};
use aether_core::settings;
use aether_core::{
	AetherResult, AttrKind, AttrSpec, AttrValue, AttributeSchema, Attributes, DefaultValue,
	DiagnosticKind, GlobalAttributes, ValidatorError, attrs,
};

use crate::element::{Element, Node};
use crate::kind::ContentCategory::{
	Embedded, Flow, Form, Heading, Interactive, Metadata, Phrasing, Sectioning,
};
use crate::kind::{ChildRule, ContentCategory, ElementKind, Namespace};

pub use crate::svg::{SVG, svg};

const METADATA: &[ContentCategory] = &[Metadata];
const FLOW: &[ContentCategory] = &[Flow];
const PHRASING: &[ContentCategory] = &[Flow, Phrasing];
const SECTIONING: &[ContentCategory] = &[Flow, Sectioning];
const HEADING: &[ContentCategory] = &[Flow, Heading];
const EMBEDDED: &[ContentCategory] = &[Flow, Phrasing, Embedded];
const INTERACTIVE: &[ContentCategory] = &[Flow, Phrasing, Interactive];
const FORM: &[ContentCategory] = &[Flow, Phrasing, Interactive, Form];

const INPUT_TYPES: &[&str] = &[
	"button",
	"checkbox",
	"color",
	"date",
	"datetime-local",
	"email",
	"file",
	"hidden",
	"image",
	"month",
	"number",
	"password",
	"radio",
	"range",
	"reset",
	"search",
	"submit",
	"tel",
	"text",
	"time",
	"url",
	"week",
];

const LOADING: AttrKind = Enum(&["eager", "lazy"]);
const PRELOAD: AttrKind = Enum(&["none", "metadata", "auto"]);
const FETCH_PRIORITY: AttrKind = Enum(&["high", "low", "auto"]);

const fn opt(name: &'static str, kind: AttrKind) -> AttrSpec {
	AttrSpec::optional(name, kind)
}

const fn req(name: &'static str, kind: AttrKind) -> AttrSpec {
	AttrSpec::required(name, kind)
}

fn is_set(attributes: &Attributes, key: &str) -> bool {
	attributes.get(key).is_some_and(AttrValue::is_truthy)
}

/// Expands the `newtab` flag of `<a>` into `target` and `rel`.
fn expand_newtab(mut attributes: Attributes) -> Result<Attributes, ValidatorError> {
	if attributes.remove("newtab").is_some_and(|flag| flag.is_truthy()) {
		attributes.insert("target", "_blank");
		attributes.insert("rel", "noopener noreferrer");
	}
	Ok(attributes)
}

fn exclusive_defer_async(attributes: Attributes) -> Result<Attributes, ValidatorError> {
	if is_set(&attributes, "defer") && is_set(&attributes, "async") {
		return Err(ValidatorError::new(
			["defer", "async"],
			"`defer` and `async` cannot both be set",
		));
	}
	Ok(attributes)
}

fn deferred_script_needs_src(attributes: Attributes) -> Result<Attributes, ValidatorError> {
	if (is_set(&attributes, "defer") || is_set(&attributes, "async")) && !is_set(&attributes, "src")
	{
		return Err(ValidatorError::new(
			["src"],
			"`src` is required when `defer` or `async` is set",
		));
	}
	Ok(attributes)
}

/// Drops `span` from `<colgroup>` once `<col>` children arrive.
fn col_supersedes_span(element: &mut Element, children: &[Node]) {
	let has_col = children
		.iter()
		.filter_map(Node::as_element)
		.any(|child| child.tag_name() == "col");
	if has_col && element.remove_attribute("span").is_some() {
		element.push_diagnostic(
			DiagnosticKind::AttributeSuperseded,
			"`span` is not permitted when <col> children are present, ignoring `span`",
		);
	}
}

/// Descriptor of the `<html>` element.
///
/// The `doctype` construction flag controls the `<!DOCTYPE html>` prefix.
pub static HTML: ElementKind = ElementKind::new(
	"html",
	Namespace::Html,
	AttributeSchema::new("html", GlobalAttributes::Html, &[opt("xmlns", Text)]),
)
.with_prefix("doctype", "<!DOCTYPE html>");

/// Builds an `<html>` element.
///
/// `lang` defaults to the configured `render.lang` setting. Pass
/// `"doctype" => true` to emit `<!DOCTYPE html>` before the element; when the
/// flag is absent the `render.doctype` setting decides.
pub fn html(attributes: impl Into<Attributes>) -> AetherResult<Element> {
	let defaults = attrs! { "lang" => settings::current().render.lang.as_str() };
	Element::with_defaults(&HTML, attributes, &defaults)
}

element_kinds! {
	namespace: Namespace::Html,
	globals: GlobalAttributes::Html,
	prefix: "";

	a, A = "a" [
		req("href", Text),
		opt("newtab", Bool),
		opt("download", Any),
		opt("hreflang", Text),
		opt("ping", Text),
		opt("referrerpolicy", Text),
		opt("rel", Text),
		opt("target", Text),
		opt("type", Text),
	]
		.with_categories(INTERACTIVE)
		.with_validators(&[expand_newtab]);
	abbr, ABBR = "abbr" [].with_categories(PHRASING);
	address, ADDRESS = "address" [].with_categories(FLOW);
	area, AREA = "area" [
		opt("alt", Text),
		opt("coords", Text),
		opt("download", Any),
		opt("href", Text),
		opt("ping", Text),
		opt("referrerpolicy", Text),
		opt("rel", Text),
		opt("shape", Enum(&["rect", "circle", "poly", "default"])),
		opt("target", Text),
	]
		.void()
		.with_categories(PHRASING);
	article, ARTICLE = "article" [].with_categories(SECTIONING);
	aside, ASIDE = "aside" [].with_categories(SECTIONING);
	audio, AUDIO = "audio" [
		opt("autoplay", Bool),
		opt("controls", Bool),
		opt("crossorigin", Text),
		opt("loop", Bool),
		opt("muted", Bool),
		opt("preload", PRELOAD),
		opt("src", Text),
	]
		.with_categories(EMBEDDED);
	b, B = "b" [].with_categories(PHRASING);
	base, BASE = "base" [opt("href", Text), opt("target", Text)]
		.void()
		.with_categories(METADATA);
	bdi, BDI = "bdi" [].with_categories(PHRASING);
	bdo, BDO = "bdo" [].with_categories(PHRASING);
	blockquote, BLOCKQUOTE = "blockquote" [opt("cite", Text)].with_categories(FLOW);
	body, BODY = "body" [];
	br, BR = "br" [].void().with_categories(PHRASING);
	button, BUTTON = "button" [
		opt("disabled", Bool),
		opt("form", Text),
		opt("formaction", Text),
		opt("formenctype", Text),
		opt("formmethod", Text),
		opt("formnovalidate", Bool),
		opt("formtarget", Text),
		opt("name", Text),
		opt("popovertarget", Text),
		opt("popovertargetaction", Enum(&["hide", "show", "toggle"])),
		opt("type", Enum(&["submit", "reset", "button"])),
		opt("value", Any),
	]
		.with_categories(FORM);
	canvas, CANVAS = "canvas" [opt("width", Length), opt("height", Length)]
		.with_categories(EMBEDDED);
	caption, CAPTION = "caption" [];
	cite, CITE = "cite" [].with_categories(PHRASING);
	code, CODE = "code" [].with_categories(PHRASING);
	col, COL = "col" [opt("span", Integer)].void();
	colgroup, COLGROUP = "colgroup" [opt("span", Integer)]
		.with_children(ChildRule::Only { text: true, tags: &["col"] })
		.with_compose_hook(col_supersedes_span);
	data, DATA = "data" [opt("value", Any)].with_categories(PHRASING);
	datalist, DATALIST = "datalist" [].with_categories(PHRASING);
	dd, DD = "dd" [];
	del, DEL = "del" [opt("cite", Text), opt("datetime", Text)].with_categories(PHRASING);
	details, DETAILS = "details" [opt("open", Bool), opt("name", Text)]
		.with_categories(INTERACTIVE);
	dfn, DFN = "dfn" [].with_categories(PHRASING);
	dialog, DIALOG = "dialog" [opt("open", Bool)].with_categories(FLOW);
	div, DIV = "div" [].with_categories(FLOW);
	dl, DL = "dl" [].with_categories(FLOW);
	dt, DT = "dt" [];
	em, EM = "em" [].with_categories(PHRASING);
	embed, EMBED = "embed" [
		opt("height", Length),
		opt("src", Text),
		opt("type", Text),
		opt("width", Length),
	]
		.void()
		.with_categories(EMBEDDED);
	fieldset, FIELDSET = "fieldset" [
		opt("disabled", Bool),
		opt("form", Text),
		opt("name", Text),
	]
		.with_categories(FLOW);
	figcaption, FIGCAPTION = "figcaption" [];
	figure, FIGURE = "figure" [].with_categories(FLOW);
	footer, FOOTER = "footer" [].with_categories(FLOW);
	form, FORM_ELEMENT = "form" [
		opt("accept-charset", Text),
		opt("action", Text),
		opt("autocomplete", Enum(&["on", "off"])),
		opt("enctype", Text),
		opt("method", Enum(&["get", "post", "dialog"])),
		opt("name", Text),
		opt("novalidate", Bool),
		opt("rel", Text),
		opt("target", Text),
	]
		.with_categories(FLOW);
	h1, H1 = "h1" [].with_categories(HEADING);
	h2, H2 = "h2" [].with_categories(HEADING);
	h3, H3 = "h3" [].with_categories(HEADING);
	h4, H4 = "h4" [].with_categories(HEADING);
	h5, H5 = "h5" [].with_categories(HEADING);
	h6, H6 = "h6" [].with_categories(HEADING);
	head, HEAD = "head" [];
	header, HEADER = "header" [].with_categories(FLOW);
	hgroup, HGROUP = "hgroup" [].with_categories(HEADING);
	hr, HR = "hr" [].void().with_categories(FLOW);
	i, I = "i" [].with_categories(PHRASING);
	iframe, IFRAME = "iframe" [
		opt("allow", Text),
		opt("allowfullscreen", Bool),
		opt("height", Length),
		opt("loading", LOADING),
		opt("name", Text),
		opt("referrerpolicy", Text),
		opt("sandbox", Text),
		opt("src", Text),
		opt("srcdoc", Text),
		opt("width", Length),
	]
		.with_categories(EMBEDDED);
	img, IMG = "img" [
		req("src", Text),
		opt("alt", Text),
		opt("crossorigin", Text),
		opt("decoding", Enum(&["sync", "async", "auto"])),
		opt("fetchpriority", FETCH_PRIORITY),
		opt("height", Length),
		opt("ismap", Bool),
		opt("loading", LOADING),
		opt("referrerpolicy", Text),
		opt("sizes", Text),
		opt("srcset", Text),
		opt("usemap", Text),
		opt("width", Length),
	]
		.void()
		.with_categories(EMBEDDED);
	input, INPUT = "input" [
		opt("type", Enum(INPUT_TYPES)).with_default(DefaultValue::Text("text")),
		opt("accept", Text),
		opt("alt", Text),
		opt("autocomplete", Text),
		opt("checked", Bool),
		opt("dirname", Text),
		opt("disabled", Bool),
		opt("form", Text),
		opt("formaction", Text),
		opt("formenctype", Text),
		opt("formmethod", Text),
		opt("formnovalidate", Bool),
		opt("formtarget", Text),
		opt("height", Length),
		opt("list", Text),
		opt("max", Length),
		opt("maxlength", Integer),
		opt("min", Length),
		opt("minlength", Integer),
		opt("multiple", Bool),
		opt("name", Text),
		opt("pattern", Text),
		opt("placeholder", Text),
		opt("readonly", Bool),
		opt("required", Bool),
		opt("size", Integer),
		opt("src", Text),
		opt("step", Length),
		opt("value", Any),
		opt("width", Length),
	]
		.void()
		.with_categories(FORM);
	ins, INS = "ins" [opt("cite", Text), opt("datetime", Text)].with_categories(PHRASING);
	kbd, KBD = "kbd" [].with_categories(PHRASING);
	label, LABEL = "label" [opt("for", Text)].with_categories(FORM);
	legend, LEGEND = "legend" [];
	li, LI = "li" [opt("value", Integer)];
	link, LINK = "link" [
		opt("as", Text),
		opt("blocking", Text),
		opt("crossorigin", Text),
		opt("disabled", Bool),
		opt("fetchpriority", FETCH_PRIORITY),
		opt("href", Text),
		opt("hreflang", Text),
		opt("integrity", Text),
		opt("media", Text),
		opt("referrerpolicy", Text),
		opt("rel", Text),
		opt("sizes", Text),
		opt("type", Text),
	]
		.void()
		.with_categories(METADATA);
	main, MAIN = "main" [].with_categories(FLOW);
	map, MAP = "map" [opt("name", Text)].with_categories(PHRASING);
	mark, MARK = "mark" [].with_categories(PHRASING);
	math, MATH = "math" [opt("display", Enum(&["block", "inline"]))].with_categories(EMBEDDED);
	menu, MENU = "menu" [].with_categories(FLOW);
	meta, META = "meta" [
		opt("charset", Text),
		opt("content", Text),
		opt("http-equiv", Text),
		opt("media", Text),
		opt("name", Text),
	]
		.void()
		.with_categories(METADATA);
	meter, METER = "meter" [
		opt("value", Number),
		opt("min", Number),
		opt("max", Number),
		opt("low", Number),
		opt("high", Number),
		opt("optimum", Number),
	]
		.with_categories(PHRASING);
	nav, NAV = "nav" [].with_categories(SECTIONING);
	noscript, NOSCRIPT = "noscript" [].with_categories(PHRASING);
	object, OBJECT = "object" [
		opt("data", Text),
		opt("form", Text),
		opt("height", Length),
		opt("name", Text),
		opt("type", Text),
		opt("width", Length),
	]
		.with_categories(EMBEDDED);
	ol, OL = "ol" [
		opt("reversed", Bool),
		opt("start", Integer),
		opt("type", Enum(&["1", "a", "A", "i", "I"])),
	]
		.with_categories(FLOW);
	optgroup, OPTGROUP = "optgroup" [opt("disabled", Bool), opt("label", Text)];
	option, OPTION = "option" [
		opt("disabled", Bool),
		opt("label", Text),
		opt("selected", Bool),
		opt("value", Any),
	];
	output, OUTPUT = "output" [opt("for", Text), opt("form", Text), opt("name", Text)]
		.with_categories(FORM);
	p, P = "p" [].with_categories(FLOW);
	picture, PICTURE = "picture" [].with_categories(EMBEDDED);
	pre, PRE = "pre" [].with_categories(FLOW);
	progress, PROGRESS = "progress" [opt("max", Number), opt("value", Number)]
		.with_categories(PHRASING);
	q, Q = "q" [opt("cite", Text)].with_categories(PHRASING);
	rp, RP = "rp" [];
	rt, RT = "rt" [];
	ruby, RUBY = "ruby" [].with_categories(PHRASING);
	s, S = "s" [].with_categories(PHRASING);
	samp, SAMP = "samp" [].with_categories(PHRASING);
	script, SCRIPT = "script" [
		opt("async", Bool),
		opt("blocking", Text),
		opt("crossorigin", Text),
		opt("defer", Bool),
		opt("fetchpriority", FETCH_PRIORITY),
		opt("integrity", Text),
		opt("nomodule", Bool),
		opt("referrerpolicy", Text),
		opt("src", Text),
		opt("type", Text),
	]
		.with_categories(METADATA)
		.with_validators(&[exclusive_defer_async, deferred_script_needs_src]);
	search, SEARCH = "search" [].with_categories(FLOW);
	section, SECTION = "section" [].with_categories(SECTIONING);
	select, SELECT = "select" [
		opt("autocomplete", Text),
		opt("disabled", Bool),
		opt("form", Text),
		opt("multiple", Bool),
		opt("name", Text),
		opt("required", Bool),
		opt("size", Integer),
	]
		.with_categories(FORM);
	slot, SLOT = "slot" [opt("name", Text)].with_categories(PHRASING);
	small, SMALL = "small" [].with_categories(PHRASING);
	source, SOURCE = "source" [
		opt("height", Length),
		opt("media", Text),
		opt("sizes", Text),
		opt("src", Text),
		opt("srcset", Text),
		opt("type", Text),
		opt("width", Length),
	]
		.void();
	span, SPAN = "span" [].with_categories(PHRASING);
	strong, STRONG = "strong" [].with_categories(PHRASING);
	style, STYLE = "style" [opt("blocking", Text), opt("media", Text)]
		.with_categories(METADATA);
	sub, SUB = "sub" [].with_categories(PHRASING);
	summary, SUMMARY = "summary" [];
	sup, SUP = "sup" [].with_categories(PHRASING);
	table, TABLE = "table" [].with_categories(FLOW);
	tbody, TBODY = "tbody" [];
	td, TD = "td" [
		opt("colspan", Integer),
		opt("headers", Text),
		opt("rowspan", Integer),
	];
	template, TEMPLATE = "template" [opt("shadowrootmode", Enum(&["open", "closed"]))]
		.with_categories(METADATA);
	textarea, TEXTAREA = "textarea" [
		opt("autocomplete", Text),
		opt("cols", Integer),
		opt("dirname", Text),
		opt("disabled", Bool),
		opt("form", Text),
		opt("maxlength", Integer),
		opt("minlength", Integer),
		opt("name", Text),
		opt("placeholder", Text),
		opt("readonly", Bool),
		opt("required", Bool),
		opt("rows", Integer),
		opt("wrap", Enum(&["hard", "soft", "off"])),
	]
		.with_categories(FORM);
	tfoot, TFOOT = "tfoot" [];
	th, TH = "th" [
		opt("abbr", Text),
		opt("colspan", Integer),
		opt("headers", Text),
		opt("rowspan", Integer),
		opt("scope", Enum(&["row", "col", "rowgroup", "colgroup"])),
	];
	thead, THEAD = "thead" [];
	time, TIME = "time" [opt("datetime", Text)].with_categories(PHRASING);
	title, TITLE = "title" [].with_categories(METADATA);
	tr, TR = "tr" [];
	track, TRACK = "track" [
		opt("default", Bool),
		opt("kind", Enum(&["subtitles", "captions", "chapters", "metadata"])),
		opt("label", Text),
		opt("src", Text),
		opt("srclang", Text),
	]
		.void();
	u, U = "u" [].with_categories(PHRASING);
	ul, UL = "ul" [].with_categories(FLOW);
	var, VAR = "var" [].with_categories(PHRASING);
	video, VIDEO = "video" [
		opt("autoplay", Bool),
		opt("controls", Bool),
		opt("crossorigin", Text),
		opt("height", Length),
		opt("loop", Bool),
		opt("muted", Bool),
		opt("playsinline", Bool),
		opt("poster", Text),
		opt("preload", PRELOAD),
		opt("src", Text),
		opt("width", Length),
	]
		.with_categories(EMBEDDED);
	wbr, WBR = "wbr" [].void().with_categories(PHRASING);
}

#[cfg(test)]
mod tests {
	use super::*;
	use aether_core::{AetherError, mark_safe};
	use rstest::rstest;

	#[rstest]
	#[case(&AREA)]
	#[case(&BASE)]
	#[case(&BR)]
	#[case(&COL)]
	#[case(&EMBED)]
	#[case(&HR)]
	#[case(&IMG)]
	#[case(&INPUT)]
	#[case(&LINK)]
	#[case(&META)]
	#[case(&SOURCE)]
	#[case(&TRACK)]
	#[case(&WBR)]
	fn test_void_kinds(#[case] kind: &ElementKind) {
		assert!(!kind.accepts_children);
	}

	#[rstest]
	fn test_anchor_requires_href() {
		let error = a(()).unwrap_err();
		assert!(matches!(error, AetherError::SchemaValidation { .. }));
		assert!(error.to_string().contains("href"));
	}

	#[rstest]
	#[case(true, r#"<a href="/" target="_blank" rel="noopener noreferrer"></a>"#)]
	#[case(false, r#"<a href="/"></a>"#)]
	fn test_anchor_newtab(#[case] newtab: bool, #[case] expected: &str) {
		let anchor = a(attrs! { "href" => "/", "newtab" => newtab }).unwrap();
		assert_eq!(anchor.render().as_str(), expected);
	}

	#[rstest]
	fn test_img_requires_src() {
		assert!(img(attrs! { "alt" => "logo" }).is_err());
		assert_eq!(
			img(attrs! { "src" => "logo.png" }).unwrap().render().as_str(),
			r#"<img src="logo.png">"#
		);
	}

	#[rstest]
	fn test_input_type_defaults_to_text() {
		let field = input(attrs! { "name" => "q" }).unwrap();
		assert_eq!(field.render().as_str(), r#"<input name="q" type="text">"#);
	}

	#[rstest]
	fn test_input_type_outside_set_names_allowed_values() {
		let error = input(attrs! { "type" => "weekday" }).unwrap_err();
		let message = error.to_string();
		assert!(matches!(error, AetherError::SchemaValidation { .. }));
		assert!(message.contains("\"weekday\""));
		assert!(message.contains(&INPUT_TYPES.join(", ")));
	}

	#[rstest]
	#[case(attrs! { "defer" => true, "async" => true, "src" => "app.js" }, "defer, async")]
	#[case(attrs! { "defer" => true }, "src")]
	#[case(attrs! { "async" => true }, "src")]
	fn test_script_rules(#[case] attributes: Attributes, #[case] fields: &str) {
		let error = script(attributes).unwrap_err();
		assert!(matches!(error, AetherError::Configuration { .. }));
		assert!(error.to_string().contains(fields));
	}

	#[rstest]
	fn test_script_with_src_and_defer() {
		let tag = script(attrs! { "src" => "app.js", "defer" => true, "async" => false }).unwrap();
		assert_eq!(tag.render().as_str(), r#"<script src="app.js" defer></script>"#);
	}

	#[rstest]
	fn test_html_lang_can_be_overridden() {
		let root = html(attrs! { "lang" => "fr" }).unwrap();
		assert_eq!(root.render().as_str(), r#"<html lang="fr"></html>"#);
	}

	#[rstest]
	fn test_colgroup_accepts_text_and_col_only() {
		let mut group = colgroup(()).unwrap();
		group.compose(("\n", col(()).unwrap(), mark_safe("<!-- c -->"))).unwrap();
		assert_eq!(group.children().len(), 3);
		assert!(group.compose(div(()).unwrap()).is_err());
	}

	#[rstest]
	fn test_colgroup_keeps_span_without_col_children() {
		let mut group = colgroup(attrs! { "span" => 3 }).unwrap();
		group.compose("text").unwrap();
		assert_eq!(group.render().as_str(), r#"<colgroup span="3">text</colgroup>"#);
		assert!(group.diagnostics().is_empty());
	}

	#[rstest]
	fn test_globals_and_prefixes_are_accepted() {
		let element = div(attrs! {
			"id" => "main",
			"hidden" => true,
			"tabindex" => -1,
			"data-role" => "panel",
			"aria-label" => "Main",
			"@click" => "open = !open",
		})
		.unwrap();
		assert_eq!(
			element.render().as_str(),
			r#"<div id="main" hidden tabindex="-1" data-role="panel" aria-label="Main" @click="open = !open"></div>"#
		);
	}

	#[rstest]
	fn test_categories() {
		assert!(A.is_in(ContentCategory::Interactive));
		assert!(H1.is_in(ContentCategory::Heading));
		assert!(!DIV.is_in(ContentCategory::Phrasing));
	}
}
