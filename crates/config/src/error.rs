use thiserror::Error;

/// Errors produced while constructing an [`Ident`](crate::Ident).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
	/// The identifier string was empty.
	#[error("empty identifier")]
	Empty,
	/// The identifier contained a character outside `[a-z0-9_]`.
	#[error("invalid character {ch:?} in identifier {ident:?}")]
	InvalidChar {
		/// The offending identifier string.
		ident: String,
		/// The first rejected character.
		ch: char,
	},
	/// The identifier did not start with a lowercase letter.
	#[error("identifier {0:?} must start with a lowercase letter")]
	BadStart(String),
}

/// Errors produced by a single field validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
	/// The value had the wrong variant for this field.
	#[error("expected {expected}, got {found}")]
	WrongType {
		/// Name of the expected value type.
		expected: &'static str,
		/// Name of the value type actually present.
		found: &'static str,
	},
	/// The value had the right type but an unacceptable content.
	#[error("{0}")]
	Invalid(String),
}

/// Errors produced by validating a configuration mapping against a schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	/// A key the schema marks as required was absent.
	#[error("missing required key: {key}")]
	MissingRequiredKey {
		/// The absent key.
		key: &'static str,
	},
	/// The mapping contained a key no field descriptor recognizes.
	#[error("unknown key: {key}")]
	UnknownKey {
		/// The unrecognized key.
		key: String,
	},
	/// A present value failed its field's validator.
	#[error("invalid value for {key}: {source}")]
	InvalidValue {
		/// The key whose value was rejected.
		key: &'static str,
		/// The validator's rejection.
		source: ValueError,
	},
}
