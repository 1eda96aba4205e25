//! Shape validators for the standard field roles.
//!
//! Each validator checks one present [`ConfigValue`] against the shape its
//! field expects. Capability checks against the declaration registry happen
//! later, during resolution; these only judge the token itself.

use crate::error::ValueError;
use crate::value::ConfigValue;

/// Accepts a declared-identifier token.
pub fn declare_id(value: &ConfigValue) -> Result<(), ValueError> {
	match value {
		ConfigValue::DeclareId(_) => Ok(()),
		other => Err(wrong_type("declared id", other)),
	}
}

/// Accepts a reference token.
pub fn reference(value: &ConfigValue) -> Result<(), ValueError> {
	match value {
		ConfigValue::Ref(_) => Ok(()),
		other => Err(wrong_type("reference", other)),
	}
}

/// Accepts a boolean.
pub fn boolean(value: &ConfigValue) -> Result<(), ValueError> {
	match value {
		ConfigValue::Bool(_) => Ok(()),
		other => Err(wrong_type("bool", other)),
	}
}

/// Accepts a non-zero duration.
pub fn update_interval(value: &ConfigValue) -> Result<(), ValueError> {
	match value {
		ConfigValue::Duration(d) if !d.is_zero() => Ok(()),
		ConfigValue::Duration(_) => Err(ValueError::Invalid("interval must be non-zero".into())),
		other => Err(wrong_type("duration", other)),
	}
}

/// Accepts a finite float used for setup ordering.
pub fn setup_priority(value: &ConfigValue) -> Result<(), ValueError> {
	match value {
		ConfigValue::Float(f) if f.is_finite() => Ok(()),
		ConfigValue::Float(_) => Err(ValueError::Invalid("priority must be finite".into())),
		other => Err(wrong_type("float", other)),
	}
}

fn wrong_type(expected: &'static str, found: &ConfigValue) -> ValueError {
	ValueError::WrongType {
		expected,
		found: found.type_name(),
	}
}
