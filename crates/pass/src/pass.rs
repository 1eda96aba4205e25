use wiregen_config::{ConfigError, ConfigMap, Ident, ValueError};
use wiregen_registry::{
	Capability, Component, ComponentConfig, ComponentHandle, Declarations, LifecycleTable,
	Resolution, SharedObject,
};

use crate::base::{CONF_ID, CONF_SETUP_PRIORITY, CONF_UPDATE_INTERVAL};
use crate::error::BuildError;
use crate::registrar::{Readiness, RefResolution, Registrar};

/// One configuration entry handed to a pass: a registrar plus the mapping it
/// should build from.
pub struct PassEntry {
	/// The registrar for this entry's component kind.
	pub registrar: Box<dyn Registrar>,
	/// The raw configuration mapping.
	pub config: ConfigMap,
}

impl PassEntry {
	/// Pairs a registrar with a configuration mapping.
	pub fn new(registrar: Box<dyn Registrar>, config: ConfigMap) -> Self {
		Self { registrar, config }
	}
}

/// Summary of a completed pass.
#[derive(Debug)]
pub struct PassReport {
	/// Handles of the components constructed, in construction order.
	pub handles: Vec<ComponentHandle>,
	/// Number of entries processed.
	pub entries: usize,
	/// Number of scheduling rounds taken; more than one means deferrals
	/// reordered entries.
	pub rounds: u32,
}

/// State for one generation pass.
///
/// Owns the declaration registry and the lifecycle table being populated.
/// A fresh pass has fresh state; nothing is shared between passes, so runs
/// are reentrant.
#[derive(Default)]
pub struct GenerationPass {
	declarations: Declarations,
	lifecycle: LifecycleTable,
	next_generated: u32,
}

impl GenerationPass {
	/// Creates a pass with empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// The declaration registry for this pass.
	pub fn declarations(&self) -> &Declarations {
		&self.declarations
	}

	/// The lifecycle table being populated by this pass.
	pub fn lifecycle(&self) -> &LifecycleTable {
		&self.lifecycle
	}

	/// Hands the populated lifecycle table over to the host.
	pub fn into_lifecycle(self) -> LifecycleTable {
		self.lifecycle
	}

	/// Declares an externally-constructed object, making it referenceable by
	/// configuration entries.
	pub fn declare(&mut self, id: Ident, object: SharedObject) -> Result<(), BuildError> {
		self.declarations.declare(id, object)?;
		Ok(())
	}

	/// Resolves a required reference role from a configuration mapping.
	///
	/// The value must be a reference token; a resolved target must carry the
	/// role's capability. An undeclared target yields
	/// [`RefResolution::Waiting`] so the caller can defer.
	pub fn resolve_required(
		&self,
		config: &ConfigMap,
		key: &'static str,
		required: Capability,
	) -> Result<RefResolution, BuildError> {
		let Some(value) = config.get(key) else {
			return Err(ConfigError::MissingRequiredKey { key }.into());
		};
		let Some(id) = value.as_ref_ident() else {
			return Err(ConfigError::InvalidValue {
				key,
				source: ValueError::WrongType {
					expected: "reference",
					found: value.type_name(),
				},
			}
			.into());
		};
		match self.declarations.resolve_checked(id, required.as_set()) {
			Ok(Resolution::Resolved(object)) => Ok(RefResolution::Ready {
				id: id.clone(),
				object,
			}),
			Ok(Resolution::Pending) => Ok(RefResolution::Waiting(id.clone())),
			Err(err) => Err(BuildError::capability(id.clone(), err)),
		}
	}

	/// Phase 1 check that an explicit `id`, when present, is still free.
	pub fn check_declare_id(&self, config: &ConfigMap) -> Result<(), BuildError> {
		if let Some(value) = config.get(CONF_ID)
			&& let Some(id) = value.as_declare_id()
			&& self.declarations.contains(id)
		{
			return Err(BuildError::DuplicateIdentifier { id: id.clone() });
		}
		Ok(())
	}

	/// Takes the entry's identifier: the explicit `id` when given, otherwise
	/// a synthesized `<prefix>_<n>` unique within this pass.
	pub fn allocate_id(&mut self, config: &ConfigMap, prefix: &str) -> Result<Ident, BuildError> {
		if let Some(value) = config.get(CONF_ID)
			&& let Some(id) = value.as_declare_id()
		{
			if self.declarations.contains(id) {
				return Err(BuildError::DuplicateIdentifier { id: id.clone() });
			}
			return Ok(id.clone());
		}
		loop {
			let id = Ident::generated(prefix, self.next_generated);
			self.next_generated += 1;
			if !self.declarations.contains(&id) {
				return Ok(id);
			}
		}
	}

	/// Extracts the inherited lifecycle options from a validated mapping.
	pub fn component_config(&self, config: &ConfigMap) -> ComponentConfig {
		let mut cc = ComponentConfig::default();
		if let Some(value) = config.get(CONF_UPDATE_INTERVAL)
			&& let Some(interval) = value.as_duration()
		{
			cc.update_interval = Some(interval);
		}
		if let Some(value) = config.get(CONF_SETUP_PRIORITY)
			&& let Some(priority) = value.as_float()
		{
			cc.setup_priority = priority;
		}
		cc
	}

	/// Phase 2 commit: declares the component's identifier and registers the
	/// instance in the lifecycle table.
	pub fn commit(
		&mut self,
		id: Ident,
		declared: SharedObject,
		component: Box<dyn Component>,
		config: ComponentConfig,
	) -> Result<ComponentHandle, BuildError> {
		self.declarations.declare(id, declared)?;
		Ok(self.lifecycle.register(component, config))
	}

	/// Validation without commitment: schema check plus phase 1 resolution.
	///
	/// Mutates nothing; calling it twice on the same mapping yields the same
	/// verdict.
	pub fn check(
		&self,
		registrar: &dyn Registrar,
		config: &ConfigMap,
	) -> Result<Readiness, BuildError> {
		registrar.schema().validate(config)?;
		registrar.resolve(self, config)
	}

	/// Runs the generation pass over a set of entries.
	///
	/// Entries run in the given order; an entry waiting on an undeclared
	/// reference is parked and retried after the rest. A retry round in
	/// which nothing progresses proves a missing or cyclic declaration and
	/// fails the pass with [`BuildError::UnresolvedReference`]. Any other
	/// error aborts immediately.
	pub fn run(&mut self, entries: Vec<PassEntry>) -> Result<PassReport, BuildError> {
		let total = entries.len();
		let mut queue = entries;
		let mut handles = Vec::with_capacity(total);
		let mut rounds = 0u32;

		while !queue.is_empty() {
			rounds += 1;
			let mut deferred: Vec<(PassEntry, Ident)> = Vec::new();
			let mut progressed = false;

			for entry in queue {
				match self.check(entry.registrar.as_ref(), &entry.config)? {
					Readiness::Ready => {
						let handle = entry.registrar.construct(self, &entry.config)?;
						tracing::debug!(kind = entry.registrar.kind(), %handle, "constructed component");
						handles.push(handle);
						progressed = true;
					}
					Readiness::Waiting(id) => {
						tracing::debug!(kind = entry.registrar.kind(), waiting_on = %id, "entry deferred");
						deferred.push((entry, id));
					}
				}
			}

			if deferred.is_empty() {
				break;
			}
			if !progressed {
				// Every remaining entry is blocked: the dependency will
				// never materialize in this pass.
				let (_, id) = deferred.swap_remove(0);
				tracing::warn!(waiting_on = %id, "generation pass stalled");
				return Err(BuildError::UnresolvedReference { id });
			}
			queue = deferred.into_iter().map(|(entry, _)| entry).collect();
		}

		Ok(PassReport {
			handles,
			entries: total,
			rounds,
		})
	}
}
