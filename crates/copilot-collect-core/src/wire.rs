// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response bodies of the collect and consent endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::event::Event;

/// Body of a collect request: `{"events": [...]}`.
///
/// The wire format accepts several events; the SDK always sends one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRequest {
	pub events: Vec<Event>,
}

impl EventRequest {
	pub fn single(event: Event) -> Self {
		Self {
			events: vec![event],
		}
	}
}

/// Body of a 200 collect response.
///
/// The collect API answers 200 even when it refuses events; refused events
/// are listed in `invalid_events`. An empty list means every event was
/// accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
	#[serde(default, deserialize_with = "null_as_empty")]
	pub invalid_events: Vec<InvalidEvent>,
}

impl EventResponse {
	pub fn is_fully_accepted(&self) -> bool {
		self.invalid_events.is_empty()
	}

	/// The rejection record for `event_id`, if the service refused it.
	pub fn rejection_for(&self, event_id: &str) -> Option<&InvalidEvent> {
		self.invalid_events.iter().find(|ie| ie.event_id == event_id)
	}
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One refused event inside an otherwise successful collect response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidEvent {
	pub event_id: String,
	/// Position of the event in the request's `events` array.
	#[serde(default)]
	pub index: i64,
	#[serde(rename = "error", default)]
	pub message: String,
}

impl fmt::Display for InvalidEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.event_id, self.message)
	}
}

/// Body of a non-200 collect response (authentication, malformed request).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponseError {
	#[serde(default)]
	pub error_message: String,
	#[serde(default)]
	pub reason: String,
}

impl fmt::Display for EventResponseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.reason, self.error_message)
	}
}

/// Body of a consent update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRequest {
	pub user_id: String,
	pub consent_value: bool,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::EventType;
	use crate::properties::Properties;
	use serde_json::json;

	#[test]
	fn request_wraps_single_event() {
		let event = Event::new(EventType::SyncStarted, "", 5, None, Properties::new());
		let json = serde_json::to_value(EventRequest::single(event)).unwrap();
		assert_eq!(
			json,
			json!({
				"events": [{
					"type": "preexisting_sync_started",
					"event_id": "preexisting_sync_started-5",
					"timestamp": 5,
					"payload": {}
				}]
			})
		);
	}

	#[test]
	fn empty_response_is_full_acceptance() {
		let resp: EventResponse = serde_json::from_str(r#"{"invalid_events": []}"#).unwrap();
		assert!(resp.is_fully_accepted());

		let resp: EventResponse = serde_json::from_str("{}").unwrap();
		assert!(resp.is_fully_accepted());

		let resp: EventResponse = serde_json::from_str(r#"{"invalid_events": null}"#).unwrap();
		assert!(resp.is_fully_accepted());
	}

	#[test]
	fn rejection_lookup_matches_event_id() {
		let resp: EventResponse = serde_json::from_value(json!({
			"invalid_events": [
				{"event_id": "other", "index": 1, "error": "bad"},
				{"event_id": "mine", "index": 0, "error": "missing user_id"}
			]
		}))
		.unwrap();

		let rejection = resp.rejection_for("mine").unwrap();
		assert_eq!(rejection.index, 0);
		assert_eq!(rejection.message, "missing user_id");
		assert_eq!(rejection.to_string(), "mine-missing user_id");
		assert!(resp.rejection_for("absent").is_none());
	}

	#[test]
	fn response_error_display_is_reason_then_message() {
		let err: EventResponseError =
			serde_json::from_str(r#"{"error_message":"bad auth","reason":"unauthorized"}"#)
				.unwrap();
		assert_eq!(err.to_string(), "unauthorized-bad auth");
	}

	#[test]
	fn consent_request_shape() {
		let body = ConsentRequest {
			user_id: "u1".into(),
			consent_value: true,
		};
		assert_eq!(
			serde_json::to_value(body).unwrap(),
			json!({"user_id": "u1", "consent_value": true})
		);
	}
}
