//! Declaration registry and host lifecycle infrastructure.
//!
//! This crate provides the object side of component generation:
//! - [`Capability`], [`CapabilitySet`]: named contracts a declared object
//!   satisfies
//! - [`DeclaredObject`], [`SharedObject`]: the trait seam between the
//!   generation pass and concrete host objects
//! - [`SerialRef`], [`SensorRef`]: capability-checked reference wrappers
//! - [`Declarations`]: the append-only registry the pass resolves against
//! - [`Component`], [`LifecycleTable`]: the host-owned table of constructed
//!   components and their setup/update hooks

mod capability;
mod declarations;
mod error;
mod lifecycle;
mod object;

pub use capability::{Capability, CapabilitySet};
pub use declarations::{Declarations, Resolution};
pub use error::{CapabilityError, DeclareError};
pub use lifecycle::{Component, ComponentConfig, ComponentHandle, LifecycleTable};
pub use object::{DeclaredObject, SensorRef, SerialRef, SharedObject};
