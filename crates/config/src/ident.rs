use serde::{Deserialize, Serialize};

use crate::error::IdentError;

/// A validated identifier naming a declared object.
///
/// Identifiers are lowercase snake case: they start with a lowercase letter
/// and contain only `[a-z0-9_]`. Both declaration tokens and reference
/// tokens use this type; the surrounding [`ConfigValue`](crate::ConfigValue)
/// variant distinguishes the role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ident(String);

impl Ident {
	/// Parses and validates an identifier string.
	pub fn new(s: impl Into<String>) -> Result<Self, IdentError> {
		let s = s.into();
		let mut chars = s.chars();
		let Some(first) = chars.next() else {
			return Err(IdentError::Empty);
		};
		if !first.is_ascii_lowercase() {
			return Err(IdentError::BadStart(s));
		}
		if let Some(ch) = chars.find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_')) {
			return Err(IdentError::InvalidChar { ident: s, ch });
		}
		Ok(Self(s))
	}

	/// Synthesizes an identifier for a configuration entry without an
	/// explicit `id` key.
	///
	/// The result is `<prefix>_<n>`; uniqueness within a pass is the
	/// caller's responsibility (the pass counter is monotonic).
	pub fn generated(prefix: &str, n: u32) -> Self {
		debug_assert!(Ident::new(prefix).is_ok(), "generated prefix must itself be valid");
		Self(format!("{prefix}_{n}"))
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Ident {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<String> for Ident {
	type Error = IdentError;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		Self::new(s)
	}
}

impl From<Ident> for String {
	fn from(id: Ident) -> Self {
		id.0
	}
}

impl std::str::FromStr for Ident {
	type Err = IdentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
