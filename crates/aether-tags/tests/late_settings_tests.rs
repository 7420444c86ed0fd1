//! Settings installed after elements were already built
//!
//! Reading the settings during construction must not install the defaults,
//! so this binary builds elements first and configures afterwards.

use aether_core::settings::{self, ChildlessPolicy};
use aether_core::{AetherError, Settings};
use aether_tags::html::{br, div, html};
use aether_tags::render;
use rstest::rstest;

#[rstest]
fn test_configure_after_building_elements() {
	let early = div(()).unwrap();
	assert_eq!(early.childless_policy(), ChildlessPolicy::Warn);
	assert_eq!(settings::current(), &Settings::default());
	assert_eq!(render(&html(()).unwrap()).as_str(), r#"<html lang="en"></html>"#);

	let strict = Settings::from_toml_str("[compose]\nchildless_policy = \"reject\"\n").unwrap();
	settings::configure(strict.clone()).unwrap();

	assert_eq!(settings::current(), &strict);
	assert_eq!(br(()).unwrap().childless_policy(), ChildlessPolicy::Reject);
	assert_eq!(early.childless_policy(), ChildlessPolicy::Warn);

	let second = settings::configure(Settings::default()).unwrap_err();
	assert!(matches!(second, AetherError::Settings(_)));
}
