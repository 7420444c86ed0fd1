//! Error types for the aether document builder.
//!
//! Every failure of element construction, composition, micro-language
//! serialization and settings loading is reported through [`AetherError`].

use thiserror::Error;

/// Errors that can occur while building or configuring a document.
#[derive(Debug, Error)]
pub enum AetherError {
	/// Raw attributes failed the schema of an element kind.
	#[error("Invalid attributes for <{element}>: {message}")]
	SchemaValidation {
		/// Element kind whose schema rejected the attributes.
		element: String,
		/// What was wrong, naming the attribute(s) at fault.
		message: String,
	},

	/// A cross-field rule of an element kind rejected the attributes.
	#[error("Invalid configuration for <{element}> ({}): {message}", fields.join(", "))]
	Configuration {
		/// Element kind the rule belongs to.
		element: String,
		/// Attributes involved in the rule.
		fields: Vec<String>,
		/// Why the combination was rejected.
		message: String,
	},

	/// Composition received a child of a disallowed type.
	#[error("<{element}> only accepts {allowed} as children")]
	ChildType {
		/// Element kind being composed.
		element: String,
		/// Description of the accepted child types.
		allowed: String,
	},

	/// Children were supplied to an element kind that never has children.
	#[error("<{element}> does not accept children")]
	ChildrenNotAccepted {
		/// Void element kind.
		element: String,
	},

	/// A value has no serialization rule in an attribute micro-language.
	#[error("Unsupported value of type {type_name} in {context}")]
	UnsupportedValue {
		/// Type of the offending value.
		type_name: String,
		/// Where the value was found.
		context: String,
	},

	/// Settings could not be parsed or installed.
	#[error("Settings error: {0}")]
	Settings(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for aether operations.
pub type AetherResult<T> = Result<T, AetherError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_schema_validation_display() {
		let error = AetherError::SchemaValidation {
			element: "img".to_string(),
			message: "missing required attribute(s): src".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Invalid attributes for <img>: missing required attribute(s): src"
		);
	}

	#[rstest]
	fn test_configuration_display_joins_fields() {
		let error = AetherError::Configuration {
			element: "script".to_string(),
			fields: vec!["defer".to_string(), "async".to_string()],
			message: "cannot be combined".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Invalid configuration for <script> (defer, async): cannot be combined"
		);
	}

	#[rstest]
	fn test_child_type_display() {
		let error = AetherError::ChildType {
			element: "colgroup".to_string(),
			allowed: "text or <col>".to_string(),
		};
		assert_eq!(error.to_string(), "<colgroup> only accepts text or <col> as children");
	}

	#[rstest]
	fn test_io_error_conversion() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
		let error: AetherError = io.into();
		assert!(matches!(error, AetherError::Io(_)));
	}
}
