use std::sync::Arc;

use crate::capability::{Capability, CapabilitySet};
use crate::error::CapabilityError;

/// A host object that can be declared in the registry and referenced by
/// later configuration entries.
///
/// Implementors advertise their capabilities once; reference roles check
/// against that set at resolution time. Objects carry no other
/// generation-time interface: their runtime behavior belongs to the host.
pub trait DeclaredObject: Send + Sync {
	/// Short kind name for diagnostics (e.g. `"uart"`).
	fn kind(&self) -> &'static str;

	/// The capability contracts this object satisfies.
	fn capabilities(&self) -> CapabilitySet;
}

/// A shared, non-owning handle to a declared object.
///
/// Declared objects are owned by whatever declared them; components capture
/// clones of this handle, so lifetime is managed by the last holder.
pub type SharedObject = Arc<dyn DeclaredObject>;

/// A reference that is statically known to point at a serial interface.
///
/// Construction goes through [`SerialRef::checked`], so holding one proves
/// the capability check already passed.
#[derive(Clone)]
pub struct SerialRef(SharedObject);

impl SerialRef {
	/// Wraps an object after verifying it satisfies
	/// [`Capability::SerialInterface`].
	pub fn checked(object: SharedObject) -> Result<Self, CapabilityError> {
		check(&object, Capability::SerialInterface)?;
		Ok(Self(object))
	}

	/// The underlying shared object.
	pub fn object(&self) -> &SharedObject {
		&self.0
	}
}

/// A reference that is statically known to point at a sensor.
#[derive(Clone)]
pub struct SensorRef(SharedObject);

impl SensorRef {
	/// Wraps an object after verifying it satisfies [`Capability::Sensor`].
	pub fn checked(object: SharedObject) -> Result<Self, CapabilityError> {
		check(&object, Capability::Sensor)?;
		Ok(Self(object))
	}

	/// The underlying shared object.
	pub fn object(&self) -> &SharedObject {
		&self.0
	}
}

fn check(object: &SharedObject, required: Capability) -> Result<(), CapabilityError> {
	let required = required.as_set();
	if object.capabilities().contains(required) {
		Ok(())
	} else {
		Err(CapabilityError::Mismatch {
			kind: object.kind(),
			required,
		})
	}
}

impl std::fmt::Debug for SerialRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SerialRef").field(&self.0.kind()).finish()
	}
}

impl std::fmt::Debug for SensorRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SensorRef").field(&self.0.kind()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fake(CapabilitySet);

	impl DeclaredObject for Fake {
		fn kind(&self) -> &'static str {
			"fake"
		}

		fn capabilities(&self) -> CapabilitySet {
			self.0
		}
	}

	#[test]
	fn test_checked_ref_accepts_matching_capability() {
		let obj: SharedObject = Arc::new(Fake(CapabilitySet::SERIAL_INTERFACE));
		assert!(SerialRef::checked(obj).is_ok());
	}

	#[test]
	fn test_checked_ref_rejects_missing_capability() {
		let obj: SharedObject = Arc::new(Fake(CapabilitySet::SENSOR));
		let err = SerialRef::checked(obj).unwrap_err();
		assert_eq!(
			err,
			CapabilityError::Mismatch {
				kind: "fake",
				required: CapabilitySet::SERIAL_INTERFACE,
			}
		);
	}

	#[test]
	fn test_superset_capabilities_accepted() {
		let obj: SharedObject = Arc::new(Fake(CapabilitySet::all()));
		assert!(SerialRef::checked(obj.clone()).is_ok());
		assert!(SensorRef::checked(obj).is_ok());
	}
}
