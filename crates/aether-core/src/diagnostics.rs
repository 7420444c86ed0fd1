//! Non-fatal notices raised while a tree is built.
//!
//! Conditions that do not stop construction (children handed to a void
//! element, an attribute superseded by children) are both logged through
//! `tracing` and recorded on the element as a [`Diagnostic`], so callers can
//! inspect them without installing a subscriber.

use std::fmt;

/// Category of a non-fatal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
	/// Children supplied to an element kind that never has children were
	/// ignored.
	ChildrenIgnored,
	/// An attribute was dropped because children took over its role.
	AttributeSuperseded,
}

impl fmt::Display for DiagnosticKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DiagnosticKind::ChildrenIgnored => f.write_str("children ignored"),
			DiagnosticKind::AttributeSuperseded => f.write_str("attribute superseded"),
		}
	}
}

/// One non-fatal notice attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Category of the notice.
	pub kind: DiagnosticKind,
	/// Element kind that raised it.
	pub element: String,
	/// Human readable explanation.
	pub message: String,
}

impl Diagnostic {
	/// Creates a notice.
	pub fn new(kind: DiagnosticKind, element: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			kind,
			element: element.into(),
			message: message.into(),
		}
	}

	/// Logs the notice as a `tracing` warning and returns it.
	pub fn emit(self) -> Self {
		tracing::warn!(
			element = %self.element,
			kind = %self.kind,
			"{}",
			self.message
		);
		self
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}>: {}", self.element, self.message)
	}
}
