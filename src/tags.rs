//! Element kinds, composition and rendering
//!
//! This module re-exports `aether-tags`, including the [`html`] and [`svg`]
//! constructor catalogues.
//!
//! ## Example
//!
//! ```
//! use aether::tags::html::{li, ul};
//! use aether::tags::{lazy, render};
//!
//! let list = ul(())
//! 	.unwrap()
//! 	.with(lazy(["a", "b"].into_iter().map(|label| li(()).unwrap().with(label).unwrap())))
//! 	.unwrap();
//! assert_eq!(render(&list).as_str(), "<ul><li>a</li><li>b</li></ul>");
//! ```

pub use aether_tags::*;
