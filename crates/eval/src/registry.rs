//! The typed variable store consulted by commands, the evaluator, and the script stepper.

use std::fmt;

use indexmap::IndexMap;

use crate::value::{EnumType, WeaverValue};

/// Insertion-ordered `key -> (value, type)` store. Process-lifetime only: there is no
/// persistence across `VariableRegistry` instances.
#[derive(Debug, Default, Clone)]
pub struct VariableRegistry {
	entries: IndexMap<String, WeaverValue>,
}

impl VariableRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Overwrite (or insert) `key`. The type may change across calls.
	pub fn set(&mut self, key: impl Into<String>, value: WeaverValue) {
		self.entries.insert(key.into(), value);
	}

	/// Look up a key without removing it.
	pub fn try_get(&self, key: &str) -> Option<(&WeaverValue, EnumType)> {
		self.entries.get(key).map(|v| (v, v.type_tag()))
	}

	/// Remove a key, returning whether it was present.
	pub fn remove(&mut self, key: &str) -> bool {
		self.entries.shift_remove(key).is_some()
	}

	/// Drop every entry.
	pub fn clear_all(&mut self) {
		self.entries.clear();
	}

	/// Iterate entries in insertion order.
	pub fn enumerate(&self) -> impl Iterator<Item = (&str, &WeaverValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for VariableRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, value) in self.enumerate() {
			writeln!(f, "{key} = {value} : {}", value.type_tag())?;
		}
		Ok(())
	}
}
