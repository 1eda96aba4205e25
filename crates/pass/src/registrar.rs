use wiregen_config::{ConfigMap, Ident, Schema};
use wiregen_registry::{ComponentHandle, SharedObject};

use crate::error::BuildError;
use crate::pass::GenerationPass;

/// Phase 1 verdict for one configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
	/// All references resolved; the entry can be constructed.
	Ready,
	/// A reference target has not been declared yet. The pass parks the
	/// entry and retries it after the remaining entries have run.
	Waiting(Ident),
}

/// Outcome of resolving one reference role.
pub enum RefResolution {
	/// The reference resolved and passed its capability check.
	Ready {
		/// The reference token, kept for later diagnostics.
		id: Ident,
		/// The resolved object.
		object: SharedObject,
	},
	/// The target identifier is not declared yet.
	Waiting(Ident),
}

impl std::fmt::Debug for RefResolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RefResolution::Ready { id, object } => f
				.debug_struct("Ready")
				.field("id", id)
				.field("object", &object.kind())
				.finish(),
			RefResolution::Waiting(id) => f.debug_tuple("Waiting").field(id).finish(),
		}
	}
}

impl RefResolution {
	/// Unwraps a resolution that phase 2 requires to be ready.
	///
	/// Phase 2 only runs after phase 1 saw every reference resolved, so a
	/// `Waiting` here means the pass driver was bypassed; it surfaces as
	/// [`BuildError::UnresolvedReference`] rather than a panic.
	pub fn ready(self) -> Result<(Ident, SharedObject), BuildError> {
		match self {
			RefResolution::Ready { id, object } => Ok((id, object)),
			RefResolution::Waiting(id) => Err(BuildError::UnresolvedReference { id }),
		}
	}
}

/// A component registrar: one per component kind.
///
/// The pass driver drives each entry through schema validation, then
/// [`resolve`](Registrar::resolve) (phase 1, read-only), then
/// [`construct`](Registrar::construct) (phase 2) once resolve reports
/// [`Readiness::Ready`]. Implementations must keep `resolve` free of side
/// effects; the driver relies on it being safe to call repeatedly.
pub trait Registrar {
	/// Short kind name; also the prefix for generated identifiers.
	fn kind(&self) -> &'static str;

	/// The schema this component's configuration is validated against.
	fn schema(&self) -> &Schema;

	/// Phase 1: resolve all references and check identifier availability,
	/// without mutating pass state.
	fn resolve(&self, pass: &GenerationPass, config: &ConfigMap) -> Result<Readiness, BuildError>;

	/// Phase 2: construct the component and register it. Only called after
	/// `resolve` returned [`Readiness::Ready`] in the same round.
	fn construct(
		&self,
		pass: &mut GenerationPass,
		config: &ConfigMap,
	) -> Result<ComponentHandle, BuildError>;
}
