//! The element tree.
//!
//! An [`Element`] is created by a constructor that validates its attributes
//! immediately, then receives children through [`Element::compose`]. Each
//! child has exactly one parent slot, so trees are finite and acyclic.

use aether_core::settings::{self, ChildlessPolicy};
use aether_core::{
	AetherError, AetherResult, AttrValue, Attributes, Diagnostic, DiagnosticKind, SafeString,
	validate,
};

use crate::children::IntoChild;
use crate::kind::ElementKind;

/// One child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Plain text, escaped when rendered.
	Text(String),
	/// Trusted markup, rendered verbatim.
	Safe(SafeString),
	/// Nested element.
	Element(Element),
}

impl Node {
	/// Returns the element of an element node.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			_ => None,
		}
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<SafeString> for Node {
	fn from(safe: SafeString) -> Self {
		Node::Safe(safe)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

/// One markup element with validated attributes and ordered children.
#[derive(Debug, Clone)]
pub struct Element {
	kind: &'static ElementKind,
	attributes: Attributes,
	children: Vec<Node>,
	emit_prefix: bool,
	childless_policy: ChildlessPolicy,
	diagnostics: Vec<Diagnostic>,
}

impl Element {
	/// Builds an element, validating its attributes against the kind's schema.
	///
	/// For kinds with a prefix literal the prefix flag is taken out of the
	/// attributes first; it must be a boolean and falls back to the
	/// configured `render.doctype` setting when absent.
	///
	/// # Errors
	///
	/// Returns [`AetherError::SchemaValidation`] or
	/// [`AetherError::Configuration`] when the attributes are rejected.
	pub fn new(kind: &'static ElementKind, attributes: impl Into<Attributes>) -> AetherResult<Self> {
		Self::build(kind, attributes.into(), None)
	}

	/// Builds an element with extra defaults layered over the schema defaults.
	pub fn with_defaults(
		kind: &'static ElementKind,
		attributes: impl Into<Attributes>,
		defaults: &Attributes,
	) -> AetherResult<Self> {
		Self::build(kind, attributes.into(), Some(defaults))
	}

	fn build(
		kind: &'static ElementKind,
		mut raw: Attributes,
		defaults: Option<&Attributes>,
	) -> AetherResult<Self> {
		let settings = settings::current();
		let emit_prefix = match kind.prefix {
			Some(prefix) => match raw.remove(prefix.flag) {
				None => settings.render.doctype,
				Some(AttrValue::Bool(flag)) => flag,
				Some(other) => {
					return Err(AetherError::SchemaValidation {
						element: kind.qualified_name(),
						message: format!(
							"flag `{}` received {} ({}), expected bool",
							prefix.flag,
							other,
							other.type_name()
						),
					});
				}
			},
			None => false,
		};
		let attributes = validate(&kind.schema, raw, defaults, &[])?;

		Ok(Self {
			kind,
			attributes,
			children: Vec::new(),
			emit_prefix,
			childless_policy: settings.compose.childless_policy,
			diagnostics: Vec::new(),
		})
	}

	/// Overrides the policy applied when children reach a void element.
	pub fn with_childless_policy(mut self, policy: ChildlessPolicy) -> Self {
		self.childless_policy = policy;
		self
	}

	/// Appends children.
	///
	/// `None`, `()` and empty collections are skipped. Every supplied node
	/// is checked against the kind's child rule before anything is appended,
	/// so a failing call leaves the element unchanged.
	///
	/// Children handed to a void kind are ignored with an
	/// [`DiagnosticKind::ChildrenIgnored`] notice under
	/// [`ChildlessPolicy::Warn`], and rejected under
	/// [`ChildlessPolicy::Reject`].
	///
	/// # Errors
	///
	/// Returns [`AetherError::ChildType`] for a disallowed child and
	/// [`AetherError::ChildrenNotAccepted`] for children of a void kind under
	/// the reject policy.
	///
	/// # Examples
	///
	/// ```
	/// use aether_tags::html::{li, ul};
	///
	/// let mut list = ul(()).unwrap();
	/// list.compose((li(()).unwrap().with("one").unwrap(), None::<&str>))
	/// 	.unwrap()
	/// 	.compose(li(()).unwrap().with("two").unwrap())
	/// 	.unwrap();
	/// assert_eq!(list.render().as_str(), "<ul><li>one</li><li>two</li></ul>");
	/// ```
	pub fn compose(&mut self, children: impl IntoChild) -> AetherResult<&mut Self> {
		let nodes = children.into_child().into_nodes();
		if nodes.is_empty() {
			return Ok(self);
		}

		if !self.kind.accepts_children {
			return match self.childless_policy {
				ChildlessPolicy::Warn => {
					let diagnostic = Diagnostic::new(
						DiagnosticKind::ChildrenIgnored,
						self.kind.qualified_name(),
						format!(
							"void element does not accept children, ignoring {} child node(s)",
							nodes.len()
						),
					)
					.emit();
					self.diagnostics.push(diagnostic);
					Ok(self)
				}
				ChildlessPolicy::Reject => Err(AetherError::ChildrenNotAccepted {
					element: self.kind.qualified_name(),
				}),
			};
		}

		if !nodes.iter().all(|node| self.kind.children.allows(node)) {
			return Err(AetherError::ChildType {
				element: self.kind.qualified_name(),
				allowed: self.kind.children.describe(),
			});
		}

		if let Some(hook) = self.kind.on_compose {
			hook(self, &nodes);
		}
		tracing::debug!(
			element = %self.kind.qualified_name(),
			count = nodes.len(),
			"composed children"
		);
		self.children.extend(nodes);
		Ok(self)
	}

	/// Owned form of [`compose`](Self::compose) for chained construction.
	///
	/// ```
	/// use aether_tags::html::{p, strong};
	///
	/// let paragraph = p(()).unwrap()
	/// 	.with(("Hello, ", strong(()).unwrap().with("world").unwrap()))
	/// 	.unwrap();
	/// assert_eq!(paragraph.render().as_str(), "<p>Hello, <strong>world</strong></p>");
	/// ```
	pub fn with(mut self, children: impl IntoChild) -> AetherResult<Self> {
		self.compose(children)?;
		Ok(self)
	}

	/// Kind descriptor.
	pub fn kind(&self) -> &'static ElementKind {
		self.kind
	}

	/// Tag name as rendered.
	pub fn tag_name(&self) -> &'static str {
		self.kind.tag_name()
	}

	/// Validated attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns one attribute.
	pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
		self.attributes.get(key)
	}

	/// Children in rendering order.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Whether the prefix literal is emitted before the element.
	pub fn emits_prefix(&self) -> bool {
		self.emit_prefix
	}

	/// Policy applied when children reach a void element.
	pub fn childless_policy(&self) -> ChildlessPolicy {
		self.childless_policy
	}

	/// Notices recorded while this element was composed.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Drains the notices recorded on this element.
	pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
		std::mem::take(&mut self.diagnostics)
	}

	/// Notices of this element and all descendants, depth-first.
	pub fn collect_diagnostics(&self) -> Vec<Diagnostic> {
		let mut collected = Vec::new();
		let mut stack = vec![self];
		while let Some(element) = stack.pop() {
			collected.extend(element.diagnostics.iter().cloned());
			stack.extend(element.children.iter().rev().filter_map(Node::as_element));
		}
		collected
	}

	/// Removes an attribute superseded by children.
	pub(crate) fn remove_attribute(&mut self, key: &str) -> Option<AttrValue> {
		self.attributes.remove(key)
	}

	/// Records a notice and logs it.
	pub(crate) fn push_diagnostic(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
		let diagnostic = Diagnostic::new(kind, self.kind.qualified_name(), message).emit();
		self.diagnostics.push(diagnostic);
	}
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.kind, other.kind)
			&& self.attributes == other.attributes
			&& self.children == other.children
			&& self.emit_prefix == other.emit_prefix
	}
}
