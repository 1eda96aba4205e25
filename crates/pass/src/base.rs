//! The inherited lifecycle option set.
//!
//! Every component schema extends this base: the entry's own identifier
//! plus the host-defined lifecycle options.

use wiregen_config::{FieldDef, Schema, validators};

/// Key for the entry's own identifier.
pub const CONF_ID: &str = "id";
/// Key for the minimum time between `update` invocations.
pub const CONF_UPDATE_INTERVAL: &str = "update_interval";
/// Key for the setup ordering priority.
pub const CONF_SETUP_PRIORITY: &str = "setup_priority";

/// Builds the base lifecycle schema component schemas extend.
pub fn base_schema() -> Schema {
	Schema::new(&[
		FieldDef::generated_id(CONF_ID, validators::declare_id),
		FieldDef::optional(CONF_UPDATE_INTERVAL, validators::update_interval),
		FieldDef::optional(CONF_SETUP_PRIORITY, validators::setup_priority),
	])
}
