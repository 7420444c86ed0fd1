//! Safe strings, escaping, attribute schemas and settings
//!
//! This module re-exports `aether-core`: the building blocks an element
//! needs before it joins a tree.
//!
//! ## Example
//!
//! ```
//! use aether::core::{AttrKind, AttrSpec, AttributeSchema, GlobalAttributes};
//!
//! static BADGE: AttributeSchema = AttributeSchema::new(
//! 	"badge",
//! 	GlobalAttributes::Html,
//! 	&[AttrSpec::required("label", AttrKind::Text)],
//! );
//!
//! assert!(BADGE.validate(()).is_err());
//! ```

pub use aether_core::*;
