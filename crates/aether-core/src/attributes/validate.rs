//! Generic attribute validation.

use super::{AttributeSchema, AttributeValidator, Attributes, ValidatorError};
use crate::error::{AetherError, AetherResult};

/// Validates and normalizes raw attributes against a schema.
///
/// The steps run in a fixed order and the first failure wins:
///
/// 1. defaults are appended for absent keys, schema defaults first, then
///    `defaults` (which override schema defaults of the same key),
/// 2. unknown keys are rejected, all of them named in one error,
/// 3. values are checked against the declared shape of their key,
/// 4. missing required keys are rejected, all of them named in one error,
/// 5. the schema's own validators run, then `custom_validators`, each
///    receiving the output of the previous one.
///
/// Provided keys keep their order; defaulted keys follow in declaration
/// order. Boolean `false` values are kept so the serializer can omit them.
///
/// # Errors
///
/// Steps 2 to 4 fail with [`AetherError::SchemaValidation`], step 5 with
/// [`AetherError::Configuration`]. Nothing is returned on failure, so a
/// caller never sees partially validated attributes.
pub fn validate(
	schema: &AttributeSchema,
	raw: Attributes,
	defaults: Option<&Attributes>,
	custom_validators: &[AttributeValidator],
) -> AetherResult<Attributes> {
	let mut normalized = raw;

	let mut fallback = schema.defaults();
	if let Some(extra) = defaults {
		for (key, value) in extra {
			fallback.insert(key.clone(), value.clone());
		}
	}
	for (key, value) in fallback {
		normalized.set_default(key, value);
	}

	let unknown: Vec<&str> = normalized
		.keys()
		.filter(|key| !schema.accepts_key(key))
		.collect();
	if !unknown.is_empty() {
		return Err(schema_error(
			schema,
			format!("unknown attribute(s): {}", unknown.join(", ")),
		));
	}

	for (key, value) in &normalized {
		let Some(spec) = schema.lookup(key) else {
			continue;
		};
		if !spec.kind.accepts(value) {
			return Err(schema_error(
				schema,
				format!(
					"attribute `{}` received {} ({}), expected {}",
					key,
					value.describe(),
					value.type_name(),
					spec.kind
				),
			));
		}
	}

	let missing: Vec<&str> = schema
		.fields
		.iter()
		.filter(|spec| spec.required && !normalized.contains_key(spec.name))
		.map(|spec| spec.name)
		.collect();
	if !missing.is_empty() {
		return Err(schema_error(
			schema,
			format!("missing required attribute(s): {}", missing.join(", ")),
		));
	}

	schema
		.validators
		.iter()
		.chain(custom_validators)
		.try_fold(normalized, |attributes, validator| {
			validator(attributes).map_err(|error| configuration_error(schema, error))
		})
}

fn schema_error(schema: &AttributeSchema, message: String) -> AetherError {
	AetherError::SchemaValidation {
		element: schema.element.to_string(),
		message,
	}
}

fn configuration_error(schema: &AttributeSchema, error: ValidatorError) -> AetherError {
	AetherError::Configuration {
		element: schema.element.to_string(),
		fields: error.fields,
		message: error.message,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attributes::{AttrKind, AttrSpec, AttrValue, DefaultValue, GlobalAttributes};
	use crate::attrs;
	use rstest::rstest;

	const INPUT_TYPES: &[&str] = &["text", "number", "week"];

	fn no_both_min_max(attributes: Attributes) -> Result<Attributes, ValidatorError> {
		if attributes.contains_key("min") && attributes.contains_key("max") {
			return Err(ValidatorError::new(["min", "max"], "cannot be combined"));
		}
		Ok(attributes)
	}

	fn upper_name(mut attributes: Attributes) -> Result<Attributes, ValidatorError> {
		if let Some(name) = attributes.get("name").and_then(AttrValue::as_text) {
			let upper = name.to_uppercase();
			attributes.insert("name", upper);
		}
		Ok(attributes)
	}

	static FIELD: AttributeSchema = AttributeSchema::new(
		"field",
		GlobalAttributes::Html,
		&[
			AttrSpec::required("name", AttrKind::Text),
			AttrSpec::optional("type", AttrKind::Enum(INPUT_TYPES))
				.with_default(DefaultValue::Text("text")),
			AttrSpec::optional("min", AttrKind::Number),
			AttrSpec::optional("max", AttrKind::Number),
			AttrSpec::optional("required", AttrKind::Bool),
		],
	)
	.with_validators(&[no_both_min_max]);

	#[rstest]
	fn test_unknown_keys_are_all_named() {
		let error = FIELD
			.validate(attrs! { "name" => "q", "colour" => "red", "size" => 3 })
			.unwrap_err();
		let message = error.to_string();
		assert!(matches!(error, AetherError::SchemaValidation { .. }));
		assert!(message.contains("colour"));
		assert!(message.contains("size"));
		assert!(message.contains("field"));
	}

	#[rstest]
	fn test_missing_required_is_named() {
		let error = FIELD.validate(attrs! { "min" => 1 }).unwrap_err();
		assert!(error.to_string().contains("missing required attribute(s): name"));
	}

	#[rstest]
	fn test_default_substitutes_missing_required() {
		let defaults = attrs! { "name" => "fallback" };
		let validated = validate(&FIELD, attrs! {}, Some(&defaults), &[]).unwrap();
		assert_eq!(validated.get("name"), Some(&AttrValue::from("fallback")));
	}

	#[rstest]
	fn test_enum_mismatch_names_key_value_and_allowed_set() {
		let error = FIELD
			.validate(attrs! { "name" => "q", "type" => "weekday" })
			.unwrap_err();
		let message = error.to_string();
		assert!(message.contains("`type`"));
		assert!(message.contains("\"weekday\""));
		assert!(message.contains("one of: text, number, week"));
	}

	#[rstest]
	#[case(attrs! { "name" => "q", "min" => "low" })]
	#[case(attrs! { "name" => 3 })]
	#[case(attrs! { "name" => "q", "required" => "yes" })]
	#[case(attrs! { "name" => "q", "tabindex" => "first" })]
	fn test_shape_mismatch_is_rejected(#[case] raw: Attributes) {
		assert!(matches!(
			FIELD.validate(raw),
			Err(AetherError::SchemaValidation { .. })
		));
	}

	#[rstest]
	fn test_provided_order_then_defaults() {
		let validated = FIELD
			.validate(attrs! { "required" => false, "name" => "q", "data-x" => "1" })
			.unwrap();
		let keys: Vec<&str> = validated.keys().collect();
		assert_eq!(keys, vec!["required", "name", "data-x", "type"]);
		assert_eq!(validated.get("required"), Some(&AttrValue::Bool(false)));
	}

	#[rstest]
	fn test_caller_defaults_override_schema_defaults() {
		let defaults = attrs! { "type" => "number" };
		let validated = validate(&FIELD, attrs! { "name" => "q" }, Some(&defaults), &[]).unwrap();
		assert_eq!(validated.get("type"), Some(&AttrValue::from("number")));
	}

	#[rstest]
	fn test_schema_validator_maps_to_configuration_error() {
		let error = FIELD
			.validate(attrs! { "name" => "q", "min" => 1, "max" => 2.5 })
			.unwrap_err();
		match error {
			AetherError::Configuration {
				element,
				fields,
				message,
			} => {
				assert_eq!(element, "field");
				assert_eq!(fields, vec!["min", "max"]);
				assert_eq!(message, "cannot be combined");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[rstest]
	fn test_custom_validators_run_after_schema_validators() {
		let validated = validate(&FIELD, attrs! { "name" => "q" }, None, &[upper_name]).unwrap();
		assert_eq!(validated.get("name"), Some(&AttrValue::from("Q")));
	}
}
