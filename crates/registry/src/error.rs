use thiserror::Error;

use wiregen_config::Ident;

use crate::capability::CapabilitySet;

/// Errors produced by writing to the declaration registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclareError {
	/// The identifier is already bound to a declared object.
	#[error("duplicate identifier: {id}")]
	DuplicateIdentifier {
		/// The colliding identifier.
		id: Ident,
	},
}

/// Errors produced by capability-checked resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
	/// The object resolved but does not satisfy the required capability.
	#[error("object of kind {kind:?} lacks required capability ({required:?})")]
	Mismatch {
		/// Kind name of the resolved object.
		kind: &'static str,
		/// Capabilities the reference role requires.
		required: CapabilitySet,
	},
}
