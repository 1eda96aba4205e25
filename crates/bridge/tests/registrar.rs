//! Registration contract tests for the bridge component.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use wiregen_bridge::{
	Bridge, BridgeRegistrar, CONF_DEPENDENCY_A, CONF_DEPENDENCY_B, CONF_SENSOR_REF,
};
use wiregen_config::{ConfigError, ConfigMap, ConfigValue, Ident};
use wiregen_pass::{BuildError, GenerationPass, PassEntry, Readiness, Registrar};
use wiregen_registry::{CapabilitySet, DeclaredObject, SensorRef, SerialRef, SharedObject};

struct FakeUart;

impl DeclaredObject for FakeUart {
	fn kind(&self) -> &'static str {
		"uart"
	}

	fn capabilities(&self) -> CapabilitySet {
		CapabilitySet::SERIAL_INTERFACE
	}
}

struct FakeSensor;

impl DeclaredObject for FakeSensor {
	fn kind(&self) -> &'static str {
		"sensor"
	}

	fn capabilities(&self) -> CapabilitySet {
		CapabilitySet::SENSOR
	}
}

fn ident(s: &str) -> Ident {
	Ident::new(s).unwrap()
}

/// A pass with `uart_a`, `uart_b`, and `height` pre-declared.
fn pass_with_collaborators() -> GenerationPass {
	let mut pass = GenerationPass::new();
	pass.declare(ident("uart_a"), Arc::new(FakeUart)).unwrap();
	pass.declare(ident("uart_b"), Arc::new(FakeUart)).unwrap();
	pass.declare(ident("height"), Arc::new(FakeSensor)).unwrap();
	pass
}

fn full_config() -> ConfigMap {
	ConfigMap::new()
		.with(CONF_DEPENDENCY_A, ConfigValue::Ref(ident("uart_a")))
		.with(CONF_DEPENDENCY_B, ConfigValue::Ref(ident("uart_b")))
		.with(CONF_SENSOR_REF, ConfigValue::Ref(ident("height")))
}

fn bridge_entry(config: ConfigMap) -> PassEntry {
	PassEntry::new(Box::new(BridgeRegistrar::new()), config)
}

#[test]
fn valid_config_registers_exactly_one_component() {
	let mut pass = pass_with_collaborators();
	let report = pass.run(vec![bridge_entry(full_config())]).unwrap();

	assert_eq!(report.handles.len(), 1);
	assert_eq!(pass.lifecycle().len(), 1);
	assert_eq!(pass.lifecycle().kind_of(report.handles[0]), Some("bridge"));
	// The generated id is declared for later references.
	assert!(pass.declarations().contains(&ident("bridge_0")));
}

#[test]
fn explicit_id_is_used_verbatim() {
	let mut pass = pass_with_collaborators();
	let config = full_config().with("id", ConfigValue::DeclareId(ident("desk")));
	pass.run(vec![bridge_entry(config)]).unwrap();
	assert!(pass.declarations().contains(&ident("desk")));
	assert!(!pass.declarations().contains(&ident("bridge_0")));
}

#[test]
fn missing_any_required_reference_fails() {
	for missing in [CONF_DEPENDENCY_A, CONF_DEPENDENCY_B, CONF_SENSOR_REF] {
		let mut pass = pass_with_collaborators();
		let config: ConfigMap = full_config()
			.iter()
			.filter(|(key, _)| *key != missing)
			.map(|(key, value)| (key.to_string(), value.clone()))
			.collect();

		let err = pass.run(vec![bridge_entry(config)]).unwrap_err();
		assert_eq!(
			err,
			BuildError::Config(ConfigError::MissingRequiredKey { key: missing }),
			"dropping {missing} must fail validation"
		);
		// No component was constructed, nothing was declared.
		assert_eq!(pass.lifecycle().len(), 0);
		assert!(!pass.declarations().contains(&ident("bridge_0")));
	}
}

#[test]
fn wrong_capability_is_rejected() {
	let mut pass = pass_with_collaborators();
	// A uart where a sensor is required.
	let config = full_config().with(CONF_SENSOR_REF, ConfigValue::Ref(ident("uart_b")));

	let err = pass.run(vec![bridge_entry(config)]).unwrap_err();
	assert_eq!(
		err,
		BuildError::CapabilityMismatch {
			id: ident("uart_b"),
			kind: "uart",
			required: CapabilitySet::SENSOR,
		}
	);
	assert_eq!(pass.lifecycle().len(), 0);
}

#[test]
fn never_declared_reference_is_unresolved() {
	let mut pass = pass_with_collaborators();
	let config = full_config().with(CONF_SENSOR_REF, ConfigValue::Ref(ident("ghost")));

	let err = pass.run(vec![bridge_entry(config)]).unwrap_err();
	assert_eq!(err, BuildError::UnresolvedReference { id: ident("ghost") });
	assert_eq!(pass.lifecycle().len(), 0);
}

#[test]
fn duplicate_explicit_id_is_rejected() {
	let mut pass = pass_with_collaborators();
	let with_id = || full_config().with("id", ConfigValue::DeclareId(ident("desk")));

	let err = pass
		.run(vec![bridge_entry(with_id()), bridge_entry(with_id())])
		.unwrap_err();
	assert_eq!(err, BuildError::DuplicateIdentifier { id: ident("desk") });
	// The first entry was committed before the collision was detected.
	assert_eq!(pass.lifecycle().len(), 1);
}

#[test]
fn id_colliding_with_prior_declaration_is_rejected() {
	let mut pass = pass_with_collaborators();
	let config = full_config().with("id", ConfigValue::DeclareId(ident("uart_a")));

	let err = pass.run(vec![bridge_entry(config)]).unwrap_err();
	assert_eq!(err, BuildError::DuplicateIdentifier { id: ident("uart_a") });
	assert_eq!(pass.lifecycle().len(), 0);
}

#[test]
fn check_verdict_is_stable_and_side_effect_free() {
	let pass = pass_with_collaborators();
	let registrar = BridgeRegistrar::new();
	let config = full_config();

	let first = pass.check(&registrar, &config);
	let second = pass.check(&registrar, &config);
	assert_eq!(first, second);
	assert_eq!(first, Ok(Readiness::Ready));
	assert_eq!(pass.lifecycle().len(), 0);
	assert_eq!(pass.declarations().len(), 3);
}

#[test]
fn lifecycle_table_hands_over_and_runs_hooks() {
	let mut pass = pass_with_collaborators();
	pass.run(vec![bridge_entry(full_config())]).unwrap();

	let table = pass.into_lifecycle();
	table.run_setup();
	table.tick(std::time::Duration::ZERO);
	assert_eq!(table.len(), 1);
}

#[test]
fn bridge_captures_the_resolved_objects() {
	let uart_a: SharedObject = Arc::new(FakeUart);
	let uart_b: SharedObject = Arc::new(FakeUart);
	let sensor: SharedObject = Arc::new(FakeSensor);

	let bridge = Bridge::new(
		ident("desk"),
		SerialRef::checked(uart_a.clone()).unwrap(),
		SerialRef::checked(uart_b.clone()).unwrap(),
		SensorRef::checked(sensor.clone()).unwrap(),
	);

	assert!(Arc::ptr_eq(bridge.dependency_a().object(), &uart_a));
	assert!(Arc::ptr_eq(bridge.dependency_b().object(), &uart_b));
	assert!(Arc::ptr_eq(bridge.sensor().object(), &sensor));
}

#[test]
fn bridge_waits_for_a_late_collaborator() {
	// The sensor is declared by a later entry in the same pass: the bridge
	// entry defers and then converges.
	struct SensorRegistrar {
		schema: wiregen_config::Schema,
	}

	impl Registrar for SensorRegistrar {
		fn kind(&self) -> &'static str {
			"sensor"
		}

		fn schema(&self) -> &wiregen_config::Schema {
			&self.schema
		}

		fn resolve(
			&self,
			pass: &GenerationPass,
			config: &ConfigMap,
		) -> Result<Readiness, BuildError> {
			pass.check_declare_id(config)?;
			Ok(Readiness::Ready)
		}

		fn construct(
			&self,
			pass: &mut GenerationPass,
			config: &ConfigMap,
		) -> Result<wiregen_registry::ComponentHandle, BuildError> {
			struct SensorComponent;
			impl wiregen_registry::Component for SensorComponent {
				fn kind(&self) -> &'static str {
					"sensor"
				}
			}
			let id = pass.allocate_id(config, "sensor")?;
			let cc = pass.component_config(config);
			pass.commit(id, Arc::new(FakeSensor), Box::new(SensorComponent), cc)
		}
	}

	let mut pass = GenerationPass::new();
	pass.declare(ident("uart_a"), Arc::new(FakeUart)).unwrap();
	pass.declare(ident("uart_b"), Arc::new(FakeUart)).unwrap();

	let sensor_entry = PassEntry::new(
		Box::new(SensorRegistrar {
			schema: wiregen_pass::base_schema(),
		}),
		ConfigMap::new().with("id", ConfigValue::DeclareId(ident("height"))),
	);

	let report = pass
		.run(vec![bridge_entry(full_config()), sensor_entry])
		.unwrap();
	assert_eq!(report.handles.len(), 2);
	assert!(report.rounds > 1);
	assert_eq!(pass.lifecycle().len(), 2);
	assert!(pass.declarations().contains(&ident("bridge_0")));
}
