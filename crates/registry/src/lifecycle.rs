use std::time::Duration;

use parking_lot::RwLock;

/// A constructed component eligible for host lifecycle hooks.
///
/// Hooks default to no-ops; a component that only exists to hold wiring can
/// implement nothing but [`kind`](Component::kind).
pub trait Component: Send + Sync {
	/// Short kind name for diagnostics.
	fn kind(&self) -> &'static str;

	/// Invoked once, after the generation pass, in setup-priority order.
	fn setup(&mut self) {}

	/// Invoked periodically, gated by the component's update interval.
	fn update(&mut self) {}
}

/// Lifecycle options inherited by every component configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentConfig {
	/// Minimum time between `update` invocations. `None` updates on every
	/// tick.
	pub update_interval: Option<Duration>,
	/// Setup ordering; higher runs earlier.
	pub setup_priority: f64,
}

impl Default for ComponentConfig {
	fn default() -> Self {
		Self {
			update_interval: None,
			setup_priority: 0.0,
		}
	}
}

/// Numeric handle to a registered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(u32);

impl ComponentHandle {
	/// Represents an invalid component handle.
	pub const INVALID: ComponentHandle = ComponentHandle(u32::MAX);

	/// Returns true if this handle refers to a registered component.
	#[inline]
	pub fn is_valid(self) -> bool {
		self != Self::INVALID
	}

	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

impl std::fmt::Display for ComponentHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if *self == Self::INVALID {
			write!(f, "ComponentHandle(INVALID)")
		} else {
			write!(f, "ComponentHandle({})", self.0)
		}
	}
}

struct Slot {
	component: Box<dyn Component>,
	config: ComponentConfig,
	next_due: Duration,
}

/// The host-owned table of registered components.
///
/// Registration is append-only and components are never removed; the table
/// lives as long as the host process. Ticking is single-threaded and
/// run-to-completion, but the table itself sits behind a lock so the host
/// can hold it in shared state.
#[derive(Default)]
pub struct LifecycleTable {
	slots: RwLock<Vec<Slot>>,
}

impl LifecycleTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a component, making it eligible for setup and periodic
	/// update for the remainder of the process lifetime.
	pub fn register(&self, component: Box<dyn Component>, config: ComponentConfig) -> ComponentHandle {
		let mut slots = self.slots.write();
		let handle = ComponentHandle(slots.len() as u32);
		tracing::debug!(kind = component.kind(), %handle, "registered component");
		slots.push(Slot {
			component,
			config,
			next_due: Duration::ZERO,
		});
		handle
	}

	/// Number of registered components.
	pub fn len(&self) -> usize {
		self.slots.read().len()
	}

	/// Returns true if no component is registered.
	pub fn is_empty(&self) -> bool {
		self.slots.read().is_empty()
	}

	/// Returns the kind name of a registered component.
	pub fn kind_of(&self, handle: ComponentHandle) -> Option<&'static str> {
		self.slots
			.read()
			.get(handle.0 as usize)
			.map(|slot| slot.component.kind())
	}

	/// Runs every component's `setup` hook once, highest setup priority
	/// first. Ties keep registration order.
	pub fn run_setup(&self) {
		let mut slots = self.slots.write();
		let mut order: Vec<usize> = (0..slots.len()).collect();
		order.sort_by(|&a, &b| {
			slots[b]
				.config
				.setup_priority
				.total_cmp(&slots[a].config.setup_priority)
		});
		for idx in order {
			let slot = &mut slots[idx];
			tracing::debug!(kind = slot.component.kind(), "setup");
			slot.component.setup();
		}
	}

	/// Runs `update` on every component whose interval has elapsed.
	///
	/// `now` is monotonic time since host start. Components without an
	/// update interval run on every tick.
	pub fn tick(&self, now: Duration) {
		let mut slots = self.slots.write();
		for slot in slots.iter_mut() {
			match slot.config.update_interval {
				None => slot.component.update(),
				Some(interval) => {
					if now >= slot.next_due {
						slot.component.update();
						slot.next_due = now + interval;
					}
				}
			}
		}
	}
}
