use thiserror::Error;

use wiregen_config::{ConfigError, Ident};
use wiregen_registry::{CapabilityError, CapabilitySet, DeclareError};

/// Errors surfaced by a generation pass.
///
/// All of these are detected during the single pass and none are
/// recoverable: the pass aborts and reports to whatever invoked it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
	/// Schema validation failed (missing key, unknown key, bad value).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// An explicit `id` collides with an existing declaration.
	#[error("duplicate identifier: {id}")]
	DuplicateIdentifier {
		/// The colliding identifier.
		id: Ident,
	},
	/// A reference never resolved: its target is undeclared or part of a
	/// dependency cycle.
	#[error("unresolved reference: {id}")]
	UnresolvedReference {
		/// The identifier that never materialized.
		id: Ident,
	},
	/// A reference resolved to an object of the wrong kind.
	#[error("reference {id} resolved to {kind:?}, which lacks required capability ({required:?})")]
	CapabilityMismatch {
		/// The reference token.
		id: Ident,
		/// Kind name of the object it resolved to.
		kind: &'static str,
		/// Capabilities the reference role requires.
		required: CapabilitySet,
	},
}

impl BuildError {
	/// Attaches the reference identifier to a registry capability error.
	pub fn capability(id: Ident, err: CapabilityError) -> Self {
		let CapabilityError::Mismatch { kind, required } = err;
		BuildError::CapabilityMismatch { id, kind, required }
	}
}

impl From<DeclareError> for BuildError {
	fn from(err: DeclareError) -> Self {
		let DeclareError::DuplicateIdentifier { id } = err;
		BuildError::DuplicateIdentifier { id }
	}
}
