//! The generation pass.
//!
//! A pass takes a sequence of configuration entries, validates each against
//! its registrar's schema, resolves reference tokens against the declaration
//! registry, constructs components, and registers them in the host lifecycle
//! table. Construction is two-phase: phase 1 (validate + resolve) never
//! mutates anything, phase 2 (construct + register) runs only once phase 1
//! has fully succeeded, so a failing entry leaves no partial state behind.
//!
//! Entries whose references are not yet declared are deferred and retried
//! after the remaining entries, giving dependency ordering without threads;
//! a retry round that makes no progress proves a missing or cyclic
//! declaration and fails the pass.

mod base;
mod error;
mod pass;
mod registrar;

pub use base::{CONF_ID, CONF_SETUP_PRIORITY, CONF_UPDATE_INTERVAL, base_schema};
pub use error::BuildError;
pub use pass::{GenerationPass, PassEntry, PassReport};
pub use registrar::{Readiness, RefResolution, Registrar};
