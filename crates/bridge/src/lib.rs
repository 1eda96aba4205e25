//! The serial bridge component.
//!
//! A bridge sits between two serial interfaces and publishes readings
//! through a sensor. This crate provides its configuration surface and
//! registration only: [`BridgeRegistrar`] validates a mapping, resolves the
//! three collaborator references, constructs a [`Bridge`], and registers it
//! with the host lifecycle. The byte traffic between the two interfaces is
//! host runtime behavior, out of scope here.

mod component;
mod registrar;

pub use component::Bridge;
pub use registrar::{
	BridgeRegistrar, CONF_DEPENDENCY_A, CONF_DEPENDENCY_B, CONF_SENSOR_REF,
};
