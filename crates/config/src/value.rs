use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ident::Ident;

/// A value appearing in a configuration mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
	/// A declared-identifier token: the id the new object will be known by.
	DeclareId(Ident),
	/// A reference token naming a previously declared object.
	Ref(Ident),
	/// A time interval, e.g. for periodic update scheduling.
	Duration(Duration),
}

impl ConfigValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ConfigValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			ConfigValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			ConfigValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ConfigValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the identifier if this is a `DeclareId` variant.
	pub fn as_declare_id(&self) -> Option<&Ident> {
		match self {
			ConfigValue::DeclareId(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the identifier if this is a `Ref` variant.
	pub fn as_ref_ident(&self) -> Option<&Ident> {
		match self {
			ConfigValue::Ref(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the duration if this is a `Duration` variant.
	pub fn as_duration(&self) -> Option<Duration> {
		match self {
			ConfigValue::Duration(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the type name of this value, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			ConfigValue::Bool(_) => "bool",
			ConfigValue::Int(_) => "int",
			ConfigValue::Float(_) => "float",
			ConfigValue::String(_) => "string",
			ConfigValue::DeclareId(_) => "declared id",
			ConfigValue::Ref(_) => "reference",
			ConfigValue::Duration(_) => "duration",
		}
	}
}

impl From<bool> for ConfigValue {
	fn from(v: bool) -> Self {
		ConfigValue::Bool(v)
	}
}

impl From<i64> for ConfigValue {
	fn from(v: i64) -> Self {
		ConfigValue::Int(v)
	}
}

impl From<f64> for ConfigValue {
	fn from(v: f64) -> Self {
		ConfigValue::Float(v)
	}
}

impl From<String> for ConfigValue {
	fn from(v: String) -> Self {
		ConfigValue::String(v)
	}
}

impl From<&str> for ConfigValue {
	fn from(v: &str) -> Self {
		ConfigValue::String(v.to_string())
	}
}

impl From<Duration> for ConfigValue {
	fn from(v: Duration) -> Self {
		ConfigValue::Duration(v)
	}
}
