use wiregen_config::Ident;
use wiregen_registry::{
	CapabilitySet, Component, DeclaredObject, SensorRef, SerialRef,
};

/// A constructed bridge: two serial interfaces and a sensor, captured as
/// immutable collaborators.
///
/// The collaborators are shared, non-owning references; their lifetime is
/// managed by whatever declared them. The bridge itself is owned by the
/// host's lifecycle table after registration.
pub struct Bridge {
	id: Ident,
	dependency_a: SerialRef,
	dependency_b: SerialRef,
	sensor: SensorRef,
}

impl Bridge {
	/// Captures the three resolved collaborators.
	pub fn new(id: Ident, dependency_a: SerialRef, dependency_b: SerialRef, sensor: SensorRef) -> Self {
		Self {
			id,
			dependency_a,
			dependency_b,
			sensor,
		}
	}

	/// The identifier this bridge was declared under.
	pub fn id(&self) -> &Ident {
		&self.id
	}

	/// First serial collaborator.
	pub fn dependency_a(&self) -> &SerialRef {
		&self.dependency_a
	}

	/// Second serial collaborator.
	pub fn dependency_b(&self) -> &SerialRef {
		&self.dependency_b
	}

	/// Sensor collaborator.
	pub fn sensor(&self) -> &SensorRef {
		&self.sensor
	}
}

impl Component for Bridge {
	fn kind(&self) -> &'static str {
		"bridge"
	}

	fn setup(&mut self) {
		tracing::debug!(
			id = %self.id,
			a = self.dependency_a.object().kind(),
			b = self.dependency_b.object().kind(),
			sensor = self.sensor.object().kind(),
			"bridge wired"
		);
	}
}

/// The bridge's face in the declaration registry.
///
/// Later entries can reference a bridge by id; it advertises no
/// capabilities, so it cannot stand in for a serial interface or sensor.
pub(crate) struct BridgeDecl;

impl DeclaredObject for BridgeDecl {
	fn kind(&self) -> &'static str {
		"bridge"
	}

	fn capabilities(&self) -> CapabilitySet {
		CapabilitySet::empty()
	}
}
