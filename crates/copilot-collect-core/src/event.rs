// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The event envelope and its type catalog.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CollectCoreError, Result};
use crate::payload::EventPayload;

/// Maximum length, in characters, of an event id accepted by the collect API.
pub const MAX_EVENT_ID_LEN: usize = 50;

/// The fixed catalog of event types understood by the collect API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
	UserCreated,
	UserUpdated,
	ThingCreated,
	ThingUpdated,
	#[serde(rename = "user_thing_associated")]
	ThingAssociated,
	#[serde(rename = "user_thing_disassociated")]
	ThingDisassociated,
	ThingStatusChanged,
	ThingInteraction,
	ThingConnected,
	#[serde(rename = "consumable_usage")]
	ThingConsumableUsage,
	#[serde(rename = "firmware_upgrade_started")]
	ThingFirmwareUpgradeStarted,
	#[serde(rename = "firmware_upgrade_completed")]
	ThingFirmwareUpgradeCompleted,
	#[serde(rename = "preexisting_sync_started")]
	SyncStarted,
	#[serde(rename = "preexisting_sync_completed")]
	SyncCompleted,
	PreexistingUserCreated,
	PreexistingThingCreated,
	PreexistingUserThingAssociated,
	Unsubscribe,
	CustomEvent,
}

impl EventType {
	pub const ALL: [EventType; 19] = [
		EventType::UserCreated,
		EventType::UserUpdated,
		EventType::ThingCreated,
		EventType::ThingUpdated,
		EventType::ThingAssociated,
		EventType::ThingDisassociated,
		EventType::ThingStatusChanged,
		EventType::ThingInteraction,
		EventType::ThingConnected,
		EventType::ThingConsumableUsage,
		EventType::ThingFirmwareUpgradeStarted,
		EventType::ThingFirmwareUpgradeCompleted,
		EventType::SyncStarted,
		EventType::SyncCompleted,
		EventType::PreexistingUserCreated,
		EventType::PreexistingThingCreated,
		EventType::PreexistingUserThingAssociated,
		EventType::Unsubscribe,
		EventType::CustomEvent,
	];

	/// The wire tag for this type.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::UserCreated => "user_created",
			EventType::UserUpdated => "user_updated",
			EventType::ThingCreated => "thing_created",
			EventType::ThingUpdated => "thing_updated",
			EventType::ThingAssociated => "user_thing_associated",
			EventType::ThingDisassociated => "user_thing_disassociated",
			EventType::ThingStatusChanged => "thing_status_changed",
			EventType::ThingInteraction => "thing_interaction",
			EventType::ThingConnected => "thing_connected",
			EventType::ThingConsumableUsage => "consumable_usage",
			EventType::ThingFirmwareUpgradeStarted => "firmware_upgrade_started",
			EventType::ThingFirmwareUpgradeCompleted => "firmware_upgrade_completed",
			EventType::SyncStarted => "preexisting_sync_started",
			EventType::SyncCompleted => "preexisting_sync_completed",
			EventType::PreexistingUserCreated => "preexisting_user_created",
			EventType::PreexistingThingCreated => "preexisting_thing_created",
			EventType::PreexistingUserThingAssociated => "preexisting_user_thing_associated",
			EventType::Unsubscribe => "unsubscribe",
			EventType::CustomEvent => "custom_event",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EventType {
	type Err = CollectCoreError;

	fn from_str(s: &str) -> Result<Self> {
		EventType::ALL
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| CollectCoreError::UnknownEventType(s.to_string()))
	}
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
	Utc::now().timestamp_millis()
}

/// Derives a deterministic event id from `{type}-{key}-{timestamp}`.
///
/// An empty key yields `{type}-{timestamp}`. The result is cut to
/// [`MAX_EVENT_ID_LEN`] characters, which may split the key or the
/// timestamp; the collect API accepts that.
pub fn synthesize_event_id(event_type: EventType, key: &str, timestamp: i64) -> String {
	let mut id = if key.is_empty() {
		format!("{event_type}-{timestamp}")
	} else {
		format!("{event_type}-{key}-{timestamp}")
	};

	if let Some((cut, _)) = id.char_indices().nth(MAX_EVENT_ID_LEN) {
		id.truncate(cut);
	}
	id
}

/// Returns true if `id` is non-empty and within [`MAX_EVENT_ID_LEN`] characters.
pub fn validate_event_id(id: &str) -> bool {
	!id.is_empty() && id.chars().count() <= MAX_EVENT_ID_LEN
}

/// Per-call overrides shared by every catalog helper.
///
/// A `None` or `0` timestamp means "now"; a `None` or empty id means the id
/// is synthesized from the event type, the subject key and the timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOptions {
	pub timestamp: Option<i64>,
	pub event_id: Option<String>,
}

impl EventOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the event time in milliseconds since the epoch.
	pub fn at(mut self, timestamp_ms: i64) -> Self {
		self.timestamp = Some(timestamp_ms);
		self
	}

	/// Sets a caller-chosen event id.
	pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
		self.event_id = Some(event_id.into());
		self
	}

	/// The explicit timestamp, or the current time when unset or zero.
	pub fn resolve_timestamp(&self) -> i64 {
		self.timestamp.filter(|ts| *ts != 0).unwrap_or_else(now_millis)
	}

	/// The caller-supplied id, if any.
	pub fn event_id(&self) -> Option<&str> {
		self.event_id.as_deref().filter(|id| !id.is_empty())
	}
}

/// A single reportable occurrence.
///
/// Built once per call and never mutated. Submission moves it into a
/// single-event [`EventRequest`](crate::EventRequest).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
	#[serde(rename = "type")]
	pub event_type: EventType,
	pub event_id: String,
	pub timestamp: i64,
	pub payload: EventPayload,
}

impl Event {
	/// Builds a finalized event.
	///
	/// A zero `timestamp` is replaced with the current time. A missing or
	/// empty `event_id` is synthesized from `event_type`, `key` and the
	/// final timestamp.
	pub fn new(
		event_type: EventType,
		key: &str,
		timestamp: i64,
		event_id: Option<&str>,
		payload: impl Into<EventPayload>,
	) -> Self {
		let timestamp = if timestamp == 0 {
			now_millis()
		} else {
			timestamp
		};

		let event_id = match event_id.filter(|id| !id.is_empty()) {
			Some(id) => id.to_string(),
			None => synthesize_event_id(event_type, key, timestamp),
		};

		Self {
			event_type,
			event_id,
			timestamp,
			payload: payload.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::properties::Properties;
	use proptest::prelude::*;

	#[test]
	fn event_type_wire_names_match_serde() {
		for event_type in EventType::ALL {
			let json = serde_json::to_value(event_type).unwrap();
			assert_eq!(json, serde_json::Value::String(event_type.as_str().into()));
		}
	}

	#[test]
	fn event_type_round_trips_through_from_str() {
		for event_type in EventType::ALL {
			assert_eq!(event_type.as_str().parse::<EventType>(), Ok(event_type));
		}
		assert_eq!(
			"bogus".parse::<EventType>(),
			Err(CollectCoreError::UnknownEventType("bogus".to_string()))
		);
	}

	#[test]
	fn renamed_types_use_collect_api_tags() {
		assert_eq!(EventType::ThingAssociated.as_str(), "user_thing_associated");
		assert_eq!(EventType::ThingConsumableUsage.as_str(), "consumable_usage");
		assert_eq!(EventType::SyncStarted.as_str(), "preexisting_sync_started");
	}

	#[test]
	fn synthesized_id_includes_type_key_and_timestamp() {
		let id = synthesize_event_id(EventType::ThingCreated, "t1", 1234);
		assert_eq!(id, "thing_created-t1-1234");
	}

	#[test]
	fn synthesized_id_without_key_skips_separator() {
		let id = synthesize_event_id(EventType::SyncCompleted, "", 1234);
		assert_eq!(id, "preexisting_sync_completed-1234");
	}

	#[test]
	fn long_ids_are_cut_to_fifty_characters() {
		let id = synthesize_event_id(
			EventType::PreexistingUserThingAssociated,
			"thing-0123456789",
			1_700_000_000_000,
		);
		assert_eq!(id.chars().count(), MAX_EVENT_ID_LEN);
		assert!(id.starts_with("preexisting_user_thing_associated-thing-"));
	}

	#[test]
	fn truncation_respects_char_boundaries() {
		let key = "é".repeat(60);
		let id = synthesize_event_id(EventType::CustomEvent, &key, 1);
		assert_eq!(id.chars().count(), MAX_EVENT_ID_LEN);
	}

	#[test]
	fn validate_event_id_bounds() {
		assert!(!validate_event_id(""));
		assert!(validate_event_id("a"));
		assert!(validate_event_id(&"a".repeat(MAX_EVENT_ID_LEN)));
		assert!(!validate_event_id(&"a".repeat(MAX_EVENT_ID_LEN + 1)));
	}

	#[test]
	fn zero_timestamp_becomes_now() {
		let before = now_millis();
		let event = Event::new(EventType::UserCreated, "u1", 0, None, Properties::new());
		let after = now_millis();

		assert!(event.timestamp >= before && event.timestamp <= after);
		assert_eq!(
			event.event_id,
			synthesize_event_id(EventType::UserCreated, "u1", event.timestamp)
		);
	}

	#[test]
	fn caller_id_is_kept() {
		let event = Event::new(
			EventType::UserCreated,
			"u1",
			42,
			Some("my-id"),
			Properties::new(),
		);
		assert_eq!(event.event_id, "my-id");
		assert_eq!(event.timestamp, 42);
	}

	#[test]
	fn empty_caller_id_is_synthesized() {
		let event = Event::new(EventType::UserCreated, "u1", 42, Some(""), Properties::new());
		assert_eq!(event.event_id, "user_created-u1-42");
	}

	#[test]
	fn envelope_serializes_with_type_tag() {
		let event = Event::new(
			EventType::Unsubscribe,
			"a@b.com",
			7,
			None,
			Properties::new().insert("email", "a@b.com"),
		);
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"type": "unsubscribe",
				"event_id": "unsubscribe-a@b.com-7",
				"timestamp": 7,
				"payload": {"email": "a@b.com"}
			})
		);
	}

	#[test]
	fn options_resolve_zero_as_now() {
		let before = now_millis();
		assert!(EventOptions::new().at(0).resolve_timestamp() >= before);
		assert!(EventOptions::new().resolve_timestamp() >= before);
		assert_eq!(EventOptions::new().at(99).resolve_timestamp(), 99);
	}

	#[test]
	fn options_ignore_empty_event_id() {
		assert_eq!(EventOptions::new().with_event_id("").event_id(), None);
		assert_eq!(EventOptions::new().with_event_id("x").event_id(), Some("x"));
	}

	proptest! {
		#[test]
		fn synthesis_is_deterministic(key in "[a-z0-9_@.]{0,80}", ts in 1i64..i64::MAX) {
			let a = synthesize_event_id(EventType::ThingUpdated, &key, ts);
			let b = synthesize_event_id(EventType::ThingUpdated, &key, ts);
			prop_assert_eq!(a, b);
		}

		#[test]
		fn synthesized_ids_never_exceed_limit(key in "\\PC{0,120}", ts in 1i64..i64::MAX) {
			let id = synthesize_event_id(EventType::CustomEvent, &key, ts);
			prop_assert!(id.chars().count() <= MAX_EVENT_ID_LEN);
			prop_assert!(validate_event_id(&id));
		}

		#[test]
		fn long_inputs_truncate_to_exactly_limit(key in "[a-z]{50,80}", ts in 1i64..i64::MAX) {
			let id = synthesize_event_id(EventType::UserUpdated, &key, ts);
			prop_assert_eq!(id.chars().count(), MAX_EVENT_ID_LEN);
		}
	}
}
