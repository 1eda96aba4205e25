use crate::error::{ConfigError, ValueError};
use crate::map::ConfigMap;
use crate::value::ConfigValue;

/// Validator function attached to a field descriptor.
///
/// Validators judge a single present value; presence/absence policy lives in
/// [`FieldKind`]. They must be pure so validation stays idempotent.
pub type Validator = fn(&ConfigValue) -> Result<(), ValueError>;

/// Presence policy for a schema field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
	/// The entry's own identifier. Optional in the mapping; the generation
	/// pass synthesizes one when absent.
	GeneratedId,
	/// The key must be present.
	Required,
	/// The key may be absent; `default`, when set, supplies the value the
	/// consumer should assume.
	Optional {
		/// Value assumed when the key is absent.
		default: Option<fn() -> ConfigValue>,
	},
}

/// A typed field descriptor: one recognized key, its presence policy, and
/// its validator.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
	/// The configuration key this descriptor recognizes.
	pub key: &'static str,
	/// Presence policy.
	pub kind: FieldKind,
	/// Shape check applied when the key is present.
	pub validate: Validator,
}

impl FieldDef {
	/// Descriptor for a required key.
	pub const fn required(key: &'static str, validate: Validator) -> Self {
		Self {
			key,
			kind: FieldKind::Required,
			validate,
		}
	}

	/// Descriptor for an optional key without a default.
	pub const fn optional(key: &'static str, validate: Validator) -> Self {
		Self {
			key,
			kind: FieldKind::Optional { default: None },
			validate,
		}
	}

	/// Descriptor for an optional key with a default value.
	pub const fn optional_with_default(
		key: &'static str,
		validate: Validator,
		default: fn() -> ConfigValue,
	) -> Self {
		Self {
			key,
			kind: FieldKind::Optional {
				default: Some(default),
			},
			validate,
		}
	}

	/// Descriptor for the entry's own identifier key.
	pub const fn generated_id(key: &'static str, validate: Validator) -> Self {
		Self {
			key,
			kind: FieldKind::GeneratedId,
			validate,
		}
	}
}

/// A set of field descriptors describing the recognized options of one
/// component kind.
///
/// Schemas compose: a component schema is typically the host's base
/// lifecycle schema extended with component-specific fields, mirroring how
/// the configuration surface is declared to users.
#[derive(Debug, Clone, Default)]
pub struct Schema {
	fields: Vec<FieldDef>,
}

impl Schema {
	/// Creates a schema from a slice of descriptors.
	pub fn new(fields: &[FieldDef]) -> Self {
		Self {
			fields: fields.to_vec(),
		}
	}

	/// Extends this schema with additional descriptors.
	///
	/// Descriptors in `fields` override base descriptors with the same key,
	/// so a component can tighten an inherited option.
	pub fn extend(mut self, fields: &[FieldDef]) -> Self {
		for field in fields {
			if let Some(existing) = self.fields.iter_mut().find(|f| f.key == field.key) {
				*existing = *field;
			} else {
				self.fields.push(*field);
			}
		}
		self
	}

	/// Returns the descriptor for a key, if the schema recognizes it.
	pub fn field(&self, key: &str) -> Option<&FieldDef> {
		self.fields.iter().find(|f| f.key == key)
	}

	/// Iterates the descriptors in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
		self.fields.iter()
	}

	/// Validates a configuration mapping against this schema.
	///
	/// Checks, in order: every required key is present, every present key is
	/// recognized, every present value passes its field's validator. Pure:
	/// the mapping is never mutated and re-validation yields the same
	/// verdict.
	pub fn validate(&self, config: &ConfigMap) -> Result<(), ConfigError> {
		for field in &self.fields {
			if matches!(field.kind, FieldKind::Required) && !config.contains_key(field.key) {
				return Err(ConfigError::MissingRequiredKey { key: field.key });
			}
		}

		for (key, value) in config.iter() {
			let Some(field) = self.field(key) else {
				return Err(ConfigError::UnknownKey { key: key.to_string() });
			};
			(field.validate)(value).map_err(|source| ConfigError::InvalidValue {
				key: field.key,
				source,
			})?;
		}

		Ok(())
	}
}
