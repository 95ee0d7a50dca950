// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Free-form payload builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object used for events whose payload is open-ended.
///
/// Serialized key order is not insertion order; the collect API does not
/// depend on it.
///
/// Thing interactions and custom events pass caller keys through unchanged;
/// the catalog helpers only add the identifying keys (`thing_id`,
/// `subtype`, ...).
///
/// ```
/// use copilot_collect_core::Properties;
///
/// let props = Properties::new()
///     .insert("user_id", "u1")
///     .insert("button", "feed_now")
///     .insert("portion_grams", 40);
/// assert_eq!(props.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Adds a key, replacing any previous value (builder form).
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.set(key, value);
		self
	}

	/// Adds a key in place, replacing any previous value.
	pub fn set<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Properties::new();
		for (k, v) in iter {
			props.set(k, v);
		}
		props
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn starts_empty() {
		let props = Properties::new();
		assert!(props.is_empty());
		assert_eq!(props.len(), 0);
	}

	#[test]
	fn insert_overwrites_existing_key() {
		let props = Properties::new()
			.insert("thing_id", "caller")
			.insert("thing_id", "forced");
		assert_eq!(props.len(), 1);
		assert_eq!(props.get("thing_id"), Some(&json!("forced")));
	}

	#[test]
	fn set_mutates_in_place() {
		let mut props = Properties::new();
		props.set("subtype", "meal_logged");
		assert!(props.contains_key("subtype"));
		assert!(!props.contains_key("user_id"));
	}

	#[test]
	fn mixed_value_types() {
		let props = Properties::new()
			.insert("name", "feeder")
			.insert("grams", 40)
			.insert("ratio", 0.5)
			.insert("on", true);
		assert_eq!(
			serde_json::to_value(props).unwrap(),
			json!({"name": "feeder", "grams": 40, "ratio": 0.5, "on": true})
		);
	}

	#[test]
	fn from_iterator_collects_pairs() {
		let props: Properties = [("user_id", "u1"), ("thing_id", "t1")].into_iter().collect();
		assert_eq!(props.len(), 2);
	}

	#[test]
	fn serializes_as_plain_object() {
		let props = Properties::new().insert("zeta", 1).insert("alpha", 2);
		assert_eq!(
			serde_json::to_value(props).unwrap(),
			json!({"alpha": 2, "zeta": 1})
		);
	}

	proptest! {
		#[test]
		fn len_counts_unique_keys(keys in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
			let unique: std::collections::HashSet<_> = keys.iter().cloned().collect();
			let props: Properties = keys.iter().map(|k| (k.clone(), 1)).collect();
			prop_assert_eq!(props.len(), unique.len());
		}
	}
}
