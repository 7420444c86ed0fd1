//! Alpine.js data-attribute expressions
//!
//! This module re-exports `aether-alpine`.

pub use aether_alpine::*;
