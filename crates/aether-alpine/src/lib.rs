//! Alpine.js data expressions for the aether document builder.
//!
//! Alpine.js reads component state from the `x-data` attribute and runs
//! `x-init` on startup. This crate turns structured values (booleans,
//! numbers, strings, `null`, lists, nested maps and raw JavaScript
//! [`Statement`]s) into the compact expression those attributes expect.
//!
//! ## Example
//!
//! ```
//! use aether_alpine::{AlpineData, DataValue, Directive, Statement};
//!
//! let data = AlpineData::new(
//! 	[
//! 		("open", DataValue::from(false)),
//! 		("toggle", DataValue::from(Statement::definition("() { this.open = !this.open }"))),
//! 	],
//! 	Directive::XData,
//! )
//! .unwrap();
//!
//! assert_eq!(data.as_str(), "{ open: false, toggle() { this.open = !this.open } }");
//! ```

pub mod data;
pub mod expression;

pub use data::{DataMap, DataValue, Statement, StatementKind};
pub use expression::{AlpineData, Directive, serialize_data_expression};
