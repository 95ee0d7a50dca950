// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payload shapes carried inside the event envelope.
//!
//! Every field is optional and omitted from the JSON when absent, so an
//! explicit zero (for example `original_creation_date: Some(0)`) is still
//! distinguishable from "not provided".

use serde::{Deserialize, Serialize};

use crate::properties::Properties;

/// Payload for `user_created` and `user_updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Offset from UTC, e.g. `-0500`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub utc_offset: Option<String>,
}

/// Payload for `thing_created` and `thing_updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingPayload {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thing_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub firmware_version: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
}

/// Payload for `thing_status_changed`.
///
/// Covers activation state, battery level, connectivity and any other
/// key/value status a thing reports. `status_key` and `status_value` are
/// required by the catalog helper; `status_date` defaults to the event time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingStatusPayload {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thing_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_value: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_date: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
}

/// Payload for `preexisting_user_created`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreexistingUserPayload {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub utc_offset: Option<String>,
	/// When the user was first created, in milliseconds since the epoch.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub original_creation_date: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub copilot_analysis_consent: Option<bool>,
}

/// Payload for `preexisting_thing_created`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreexistingThingPayload {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thing_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub firmware_version: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub original_creation_date: Option<i64>,
}

/// The closed set of payloads an [`Event`](crate::Event) can carry.
///
/// Serialized untagged: the envelope's `type` field already identifies the
/// shape, so the payload renders as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
	User(UserPayload),
	Thing(ThingPayload),
	ThingStatus(ThingStatusPayload),
	PreexistingUser(PreexistingUserPayload),
	PreexistingThing(PreexistingThingPayload),
	/// Free-form key/values: associations, interactions, sync markers,
	/// unsubscribes and custom events.
	Properties(Properties),
}

impl From<UserPayload> for EventPayload {
	fn from(payload: UserPayload) -> Self {
		EventPayload::User(payload)
	}
}

impl From<ThingPayload> for EventPayload {
	fn from(payload: ThingPayload) -> Self {
		EventPayload::Thing(payload)
	}
}

impl From<ThingStatusPayload> for EventPayload {
	fn from(payload: ThingStatusPayload) -> Self {
		EventPayload::ThingStatus(payload)
	}
}

impl From<PreexistingUserPayload> for EventPayload {
	fn from(payload: PreexistingUserPayload) -> Self {
		EventPayload::PreexistingUser(payload)
	}
}

impl From<PreexistingThingPayload> for EventPayload {
	fn from(payload: PreexistingThingPayload) -> Self {
		EventPayload::PreexistingThing(payload)
	}
}

impl From<Properties> for EventPayload {
	fn from(properties: Properties) -> Self {
		EventPayload::Properties(properties)
	}
}
