use std::sync::Arc;

use wiregen_config::{ConfigMap, FieldDef, Schema, validators};
use wiregen_pass::{BuildError, GenerationPass, Readiness, RefResolution, Registrar, base_schema};
use wiregen_registry::{Capability, ComponentHandle, SensorRef, SerialRef};

use crate::component::{Bridge, BridgeDecl};

/// Key for the first serial interface reference.
pub const CONF_DEPENDENCY_A: &str = "dependency_a";
/// Key for the second serial interface reference.
pub const CONF_DEPENDENCY_B: &str = "dependency_b";
/// Key for the sensor reference.
pub const CONF_SENSOR_REF: &str = "sensor_ref";

/// The reference roles a bridge configuration must fill.
const ROLES: [(&str, Capability); 3] = [
	(CONF_DEPENDENCY_A, Capability::SerialInterface),
	(CONF_DEPENDENCY_B, Capability::SerialInterface),
	(CONF_SENSOR_REF, Capability::Sensor),
];

/// Registrar for the bridge component kind.
///
/// Schema: the inherited lifecycle options extended with the three required
/// reference keys. Registration is two-phase: [`Registrar::resolve`] checks
/// the identifier and all three references without side effects, then
/// [`Registrar::construct`] builds the [`Bridge`], declares its id, and
/// inserts it into the lifecycle table.
pub struct BridgeRegistrar {
	schema: Schema,
}

impl BridgeRegistrar {
	/// Creates the registrar with its composed schema.
	pub fn new() -> Self {
		Self {
			schema: base_schema().extend(&[
				FieldDef::required(CONF_DEPENDENCY_A, validators::reference),
				FieldDef::required(CONF_DEPENDENCY_B, validators::reference),
				FieldDef::required(CONF_SENSOR_REF, validators::reference),
			]),
		}
	}
}

impl Default for BridgeRegistrar {
	fn default() -> Self {
		Self::new()
	}
}

impl Registrar for BridgeRegistrar {
	fn kind(&self) -> &'static str {
		"bridge"
	}

	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn resolve(&self, pass: &GenerationPass, config: &ConfigMap) -> Result<Readiness, BuildError> {
		pass.check_declare_id(config)?;
		for (key, capability) in ROLES {
			if let RefResolution::Waiting(id) = pass.resolve_required(config, key, capability)? {
				return Ok(Readiness::Waiting(id));
			}
		}
		Ok(Readiness::Ready)
	}

	fn construct(
		&self,
		pass: &mut GenerationPass,
		config: &ConfigMap,
	) -> Result<ComponentHandle, BuildError> {
		let id = pass.allocate_id(config, "bridge")?;

		let (a_id, a) = pass
			.resolve_required(config, CONF_DEPENDENCY_A, Capability::SerialInterface)?
			.ready()?;
		let (b_id, b) = pass
			.resolve_required(config, CONF_DEPENDENCY_B, Capability::SerialInterface)?
			.ready()?;
		let (s_id, sensor) = pass
			.resolve_required(config, CONF_SENSOR_REF, Capability::Sensor)?
			.ready()?;

		let a = SerialRef::checked(a).map_err(|err| BuildError::capability(a_id, err))?;
		let b = SerialRef::checked(b).map_err(|err| BuildError::capability(b_id, err))?;
		let sensor = SensorRef::checked(sensor).map_err(|err| BuildError::capability(s_id, err))?;

		let component_config = pass.component_config(config);
		let bridge = Bridge::new(id.clone(), a, b, sensor);
		pass.commit(id, Arc::new(BridgeDecl), Box::new(bridge), component_config)
	}
}
