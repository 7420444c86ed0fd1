//! Element kind descriptors.
//!
//! Every element kind is one static [`ElementKind`]: its tag name, namespace,
//! whether it takes children, which children it takes, its attribute schema
//! and an optional composition hook. The tree and the renderer are written
//! once against this descriptor.

use std::fmt;

use aether_core::{AttributeSchema, AttributeValidator};

use crate::element::{Element, Node};

/// Markup vocabulary an element kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
	/// HTML elements.
	Html,
	/// SVG elements.
	Svg,
}

impl Namespace {
	/// Prefix used in qualified names, `None` for HTML.
	pub fn prefix(&self) -> Option<&'static str> {
		match self {
			Namespace::Html => None,
			Namespace::Svg => Some("svg"),
		}
	}
}

/// Content categories used to classify element kinds.
///
/// Nesting is not enforced globally; a kind opts in through
/// [`ChildRule::Categories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
	/// Document metadata (`head`, `link`, `meta`, ...).
	Metadata,
	/// Flow content.
	Flow,
	/// Sectioning content.
	Sectioning,
	/// Heading content.
	Heading,
	/// Phrasing content.
	Phrasing,
	/// Embedded content.
	Embedded,
	/// Interactive content.
	Interactive,
	/// Form-associated elements.
	Form,
	/// SVG basic shapes.
	Basic,
	/// SVG container elements.
	Container,
	/// SVG graphics elements.
	Graphics,
	/// SVG shape elements.
	Shape,
	/// SVG structural elements.
	Structural,
	/// SVG text content elements.
	TextContent,
	/// SVG text content child elements.
	TextContentChild,
	/// SVG renderable elements.
	Renderable,
}

impl ContentCategory {
	/// Human readable name, e.g. `phrasing content`.
	pub fn label(&self) -> &'static str {
		match self {
			ContentCategory::Metadata => "metadata content",
			ContentCategory::Flow => "flow content",
			ContentCategory::Sectioning => "sectioning content",
			ContentCategory::Heading => "heading content",
			ContentCategory::Phrasing => "phrasing content",
			ContentCategory::Embedded => "embedded content",
			ContentCategory::Interactive => "interactive content",
			ContentCategory::Form => "form-associated elements",
			ContentCategory::Basic => "basic shapes",
			ContentCategory::Container => "container elements",
			ContentCategory::Graphics => "graphics elements",
			ContentCategory::Shape => "shape elements",
			ContentCategory::Structural => "structural elements",
			ContentCategory::TextContent => "text content elements",
			ContentCategory::TextContentChild => "text content child elements",
			ContentCategory::Renderable => "renderable elements",
		}
	}
}

impl fmt::Display for ContentCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Which children an element kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRule {
	/// Text, trusted markup and any element.
	Any,
	/// Text and trusted markup when `text` is set, and elements of the listed
	/// tag names.
	Only {
		/// Whether text and trusted markup are accepted.
		text: bool,
		/// Accepted element tag names.
		tags: &'static [&'static str],
	},
	/// Text and trusted markup when `text` is set, and elements in at least
	/// one of the listed categories.
	Categories {
		/// Whether text and trusted markup are accepted.
		text: bool,
		/// Accepted content categories.
		categories: &'static [ContentCategory],
	},
}

impl ChildRule {
	/// Returns `true` when the node may be a child.
	pub fn allows(&self, node: &Node) -> bool {
		match (self, node) {
			(ChildRule::Any, _) => true,
			(
				ChildRule::Only { text, .. } | ChildRule::Categories { text, .. },
				Node::Text(_) | Node::Safe(_),
			) => *text,
			(ChildRule::Only { tags, .. }, Node::Element(element)) => {
				tags.contains(&element.tag_name())
			}
			(ChildRule::Categories { categories, .. }, Node::Element(element)) => categories
				.iter()
				.any(|category| element.kind().is_in(*category)),
		}
	}

	/// Human readable description of the accepted children.
	pub fn describe(&self) -> String {
		match self {
			ChildRule::Any => "text or any element".to_string(),
			ChildRule::Only { text, tags } => {
				join_allowed(*text, tags.iter().map(|tag| format!("<{tag}>")))
			}
			ChildRule::Categories { text, categories } => {
				join_allowed(*text, categories.iter().map(ContentCategory::to_string))
			}
		}
	}
}

fn join_allowed(text: bool, elements: impl Iterator<Item = String>) -> String {
	let mut allowed: Vec<String> = Vec::new();
	if text {
		allowed.push("text".to_string());
	}
	allowed.extend(elements);
	if allowed.is_empty() {
		"nothing".to_string()
	} else {
		allowed.join(" or ")
	}
}

/// Fixed literal emitted before an element, toggled by a boolean flag given
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
	/// Construction flag controlling the prefix; never rendered.
	pub flag: &'static str,
	/// Literal markup emitted before the start tag.
	pub text: &'static str,
}

/// Hook run by composition after the children passed the type check and
/// before they are appended.
pub type ComposeHook = fn(&mut Element, &[Node]);

/// Descriptor of one element kind.
#[derive(Clone, Copy)]
pub struct ElementKind {
	/// Tag name as rendered.
	pub name: &'static str,
	/// Vocabulary the kind belongs to.
	pub namespace: Namespace,
	/// `false` for void kinds: no children, no closing tag.
	pub accepts_children: bool,
	/// Informational classification.
	pub categories: &'static [ContentCategory],
	/// Attribute schema.
	pub schema: AttributeSchema,
	/// Accepted children.
	pub children: ChildRule,
	/// Optional literal emitted before the element.
	pub prefix: Option<Prefix>,
	/// Optional composition hook.
	pub on_compose: Option<ComposeHook>,
}

impl ElementKind {
	/// Declares an element kind that accepts any child.
	pub const fn new(name: &'static str, namespace: Namespace, schema: AttributeSchema) -> Self {
		Self {
			name,
			namespace,
			accepts_children: true,
			categories: &[],
			schema,
			children: ChildRule::Any,
			prefix: None,
			on_compose: None,
		}
	}

	/// Marks the kind as void.
	pub const fn void(mut self) -> Self {
		self.accepts_children = false;
		self
	}

	/// Sets the content categories.
	pub const fn with_categories(mut self, categories: &'static [ContentCategory]) -> Self {
		self.categories = categories;
		self
	}

	/// Restricts the accepted children.
	pub const fn with_children(mut self, children: ChildRule) -> Self {
		self.children = children;
		self
	}

	/// Attaches a prefix literal toggled by a construction flag.
	pub const fn with_prefix(mut self, flag: &'static str, text: &'static str) -> Self {
		self.prefix = Some(Prefix { flag, text });
		self
	}

	/// Attaches cross-field attribute validators to the schema.
	pub const fn with_validators(mut self, validators: &'static [AttributeValidator]) -> Self {
		self.schema = self.schema.with_validators(validators);
		self
	}

	/// Attaches a composition hook.
	pub const fn with_compose_hook(mut self, hook: ComposeHook) -> Self {
		self.on_compose = Some(hook);
		self
	}

	/// Tag name as rendered.
	pub fn tag_name(&self) -> &'static str {
		self.name
	}

	/// Tag name qualified by its namespace, e.g. `svg:circle`.
	///
	/// The root element of a namespace is not prefixed (`svg`, not `svg:svg`).
	pub fn qualified_name(&self) -> String {
		match self.namespace.prefix() {
			Some(prefix) if prefix != self.name => format!("{prefix}:{}", self.name),
			_ => self.name.to_string(),
		}
	}

	/// Returns `true` when the kind is in the category.
	pub fn is_in(&self, category: ContentCategory) -> bool {
		self.categories.contains(&category)
	}
}

impl fmt::Debug for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementKind")
			.field("name", &self.name)
			.field("namespace", &self.namespace)
			.field("accepts_children", &self.accepts_children)
			.field("categories", &self.categories)
			.field("children", &self.children)
			.field("prefix", &self.prefix)
			.finish_non_exhaustive()
	}
}
