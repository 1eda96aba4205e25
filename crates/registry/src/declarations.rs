use rustc_hash::FxHashMap;

use wiregen_config::Ident;

use crate::capability::CapabilitySet;
use crate::error::{CapabilityError, DeclareError};
use crate::object::SharedObject;

/// Outcome of looking up a reference token.
///
/// An undeclared identifier is *pending*, not an error: within a generation
/// pass the target entry may simply not have run yet. The pass driver
/// decides when pending becomes fatal.
#[derive(Clone)]
pub enum Resolution {
	/// The identifier is bound; here is the object.
	Resolved(SharedObject),
	/// The identifier has no binding yet.
	Pending,
}

impl std::fmt::Debug for Resolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Resolution::Resolved(obj) => {
				f.debug_tuple("Resolved").field(&obj.kind()).finish()
			}
			Resolution::Pending => write!(f, "Pending"),
		}
	}
}

impl Resolution {
	/// Returns the object if resolved.
	pub fn resolved(self) -> Option<SharedObject> {
		match self {
			Resolution::Resolved(obj) => Some(obj),
			Resolution::Pending => None,
		}
	}

	/// Returns true if the lookup found a binding.
	pub fn is_resolved(&self) -> bool {
		matches!(self, Resolution::Resolved(_))
	}
}

/// The append-only table of declared objects for one generation pass.
///
/// Identifiers are written at most once; reads after a write always observe
/// it. The table is passed explicitly through the pass rather than living in
/// ambient global state, so passes stay independent and testable.
#[derive(Default)]
pub struct Declarations {
	objects: FxHashMap<Ident, SharedObject>,
}

impl Declarations {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds an identifier to an object.
	///
	/// Fails if the identifier is already bound; existing bindings are never
	/// replaced.
	pub fn declare(&mut self, id: Ident, object: SharedObject) -> Result<(), DeclareError> {
		if self.objects.contains_key(&id) {
			return Err(DeclareError::DuplicateIdentifier { id });
		}
		tracing::debug!(id = %id, kind = object.kind(), "declared object");
		self.objects.insert(id, object);
		Ok(())
	}

	/// Looks up a reference token.
	pub fn resolve(&self, id: &Ident) -> Resolution {
		match self.objects.get(id) {
			Some(obj) => Resolution::Resolved(obj.clone()),
			None => Resolution::Pending,
		}
	}

	/// Looks up a reference token and checks the resolved object against the
	/// capabilities its role requires.
	///
	/// Pending stays pending; the capability check only applies once a
	/// binding exists.
	pub fn resolve_checked(
		&self,
		id: &Ident,
		required: CapabilitySet,
	) -> Result<Resolution, CapabilityError> {
		match self.resolve(id) {
			Resolution::Pending => Ok(Resolution::Pending),
			Resolution::Resolved(obj) => {
				if obj.capabilities().contains(required) {
					Ok(Resolution::Resolved(obj))
				} else {
					Err(CapabilityError::Mismatch {
						kind: obj.kind(),
						required,
					})
				}
			}
		}
	}

	/// Returns true if the identifier is bound.
	pub fn contains(&self, id: &Ident) -> bool {
		self.objects.contains_key(id)
	}

	/// Number of declared objects.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	/// Returns true if nothing has been declared.
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::capability::CapabilitySet;
	use crate::object::DeclaredObject;

	struct Fake(CapabilitySet);

	impl DeclaredObject for Fake {
		fn kind(&self) -> &'static str {
			"fake"
		}

		fn capabilities(&self) -> CapabilitySet {
			self.0
		}
	}

	fn ident(s: &str) -> Ident {
		Ident::new(s).unwrap()
	}

	fn serial() -> SharedObject {
		Arc::new(Fake(CapabilitySet::SERIAL_INTERFACE))
	}

	#[test]
	fn test_declare_then_resolve() {
		let mut decls = Declarations::new();
		decls.declare(ident("uart_a"), serial()).unwrap();
		assert!(decls.resolve(&ident("uart_a")).is_resolved());
	}

	#[test]
	fn test_undeclared_is_pending() {
		let decls = Declarations::new();
		assert!(!decls.resolve(&ident("nope")).is_resolved());
	}

	#[test]
	fn test_duplicate_identifier_rejected() {
		let mut decls = Declarations::new();
		decls.declare(ident("uart_a"), serial()).unwrap();
		let err = decls.declare(ident("uart_a"), serial()).unwrap_err();
		assert_eq!(
			err,
			DeclareError::DuplicateIdentifier { id: ident("uart_a") }
		);
		// First binding survives.
		assert_eq!(decls.len(), 1);
	}

	#[test]
	fn test_resolve_checked_enforces_capability() {
		let mut decls = Declarations::new();
		decls.declare(ident("uart_a"), serial()).unwrap();

		let ok = decls
			.resolve_checked(&ident("uart_a"), CapabilitySet::SERIAL_INTERFACE)
			.unwrap();
		assert!(ok.is_resolved());

		let err = decls
			.resolve_checked(&ident("uart_a"), CapabilitySet::SENSOR)
			.unwrap_err();
		assert!(matches!(err, CapabilityError::Mismatch { kind: "fake", .. }));
	}

	#[test]
	fn test_resolve_checked_pending_skips_capability_check() {
		let decls = Declarations::new();
		let res = decls
			.resolve_checked(&ident("later"), CapabilitySet::SENSOR)
			.unwrap();
		assert!(!res.is_resolved());
	}
}
