use indexmap::IndexMap;

use crate::value::ConfigValue;

/// An ordered configuration mapping, as handed over by a host loader.
///
/// Insertion order is preserved so diagnostics and iteration are stable
/// across runs. The map itself knows nothing about schemas; pairing it with
/// a [`Schema`](crate::Schema) happens in the generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
	entries: IndexMap<String, ConfigValue>,
}

impl ConfigMap {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a key/value pair, replacing any previous value for the key.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
		self.entries.insert(key.into(), value.into());
	}

	/// Builder-style insertion, convenient for literals in tests.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the value for a key, if present.
	pub fn get(&self, key: &str) -> Option<&ConfigValue> {
		self.entries.get(key)
	}

	/// Returns true if the key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of entries in the mapping.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
	fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a ConfigMap {
	type Item = (&'a String, &'a ConfigValue);
	type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
