/// A named contract a declared object must satisfy to be accepted as a
/// reference of a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	/// A bidirectional serial byte stream.
	SerialInterface,
	/// A sensor that publishes measured values.
	Sensor,
	/// An actuator that accepts commands.
	Actuator,
	/// A shared peripheral bus.
	Bus,
}

bitflags::bitflags! {
	/// A set of object capabilities.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CapabilitySet: u32 {
		/// A bidirectional serial byte stream.
		const SERIAL_INTERFACE = 1 << 0;
		/// A sensor that publishes measured values.
		const SENSOR = 1 << 1;
		/// An actuator that accepts commands.
		const ACTUATOR = 1 << 2;
		/// A shared peripheral bus.
		const BUS = 1 << 3;
	}
}

impl Capability {
	/// Returns the bitflag for this capability.
	pub const fn as_set(self) -> CapabilitySet {
		match self {
			Self::SerialInterface => CapabilitySet::SERIAL_INTERFACE,
			Self::Sensor => CapabilitySet::SENSOR,
			Self::Actuator => CapabilitySet::ACTUATOR,
			Self::Bus => CapabilitySet::BUS,
		}
	}
}

impl From<Capability> for CapabilitySet {
	fn from(cap: Capability) -> Self {
		cap.as_set()
	}
}

impl FromIterator<Capability> for CapabilitySet {
	fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
		let mut set = CapabilitySet::empty();
		for cap in iter {
			set |= cap.as_set();
		}
		set
	}
}

impl std::fmt::Display for Capability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::SerialInterface => write!(f, "serial interface"),
			Self::Sensor => write!(f, "sensor"),
			Self::Actuator => write!(f, "actuator"),
			Self::Bus => write!(f, "bus"),
		}
	}
}
