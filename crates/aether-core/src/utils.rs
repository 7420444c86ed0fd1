//! Small HTML helpers.

use crate::error::AetherError;
use crate::escaping::html_escape;
use crate::safe_string::SafeString;

/// Merges utility classes into a base class list.
///
/// A class from `merge` is appended only when no class of `base` shares its
/// prefix, the text before the first `-`. This lets callers pass overrides
/// such as `bg-red-500` without duplicating a `bg-*` class from the base.
///
/// # Examples
///
/// ```
/// use aether_core::html_class_merge;
///
/// assert_eq!(html_class_merge("p-4 bg-white", "bg-red-500 m-2"), "p-4 bg-white m-2");
/// ```
pub fn html_class_merge(base: &str, merge: &str) -> String {
	let prefix = |class: &str| class.split('-').next().unwrap_or(class).to_string();
	let taken: Vec<String> = base.split_whitespace().map(prefix).collect();

	base.split_whitespace()
		.chain(
			merge
				.split_whitespace()
				.filter(|class| !taken.contains(&prefix(*class))),
		)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Renders an error as a visible block followed by a console log.
///
/// Used to surface a failed document build in the page itself instead of
/// producing no output.
pub fn error_fragment(error: &AetherError) -> SafeString {
	let message = error.to_string();
	let escaped = html_escape(&message);
	SafeString::new(format!(
		"<pre style=\"border: solid 1px red; color: red; padding: 1rem; \
		 background-color: #ffdddd\"><code>~~~ Exception: {escaped} ~~~</code></pre>\
		 <script>console.log(\"Error: {escaped}\")</script>"
	))
}
