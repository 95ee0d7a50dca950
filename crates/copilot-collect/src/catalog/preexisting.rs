// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Backfill of users and things that existed before the integration.
//!
//! A backfill is bracketed by [`CopilotClient::sync_started`] and
//! [`CopilotClient::sync_completed`].

use copilot_collect_core::{
	EventOptions, EventType, PreexistingThingPayload, PreexistingUserPayload, Properties,
};

use super::require;
use crate::client::CopilotClient;
use crate::error::Result;

impl CopilotClient {
	pub async fn sync_started(&self, options: EventOptions) -> Result<String> {
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::SyncStarted, "", timestamp, &options, Properties::new())
			.await
	}

	pub async fn sync_completed(&self, options: EventOptions) -> Result<String> {
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::SyncCompleted, "", timestamp, &options, Properties::new())
			.await
	}

	/// Backfills a user. `user_id` replaces any `user_id` in `payload`.
	pub async fn preexisting_user_created(
		&self,
		user_id: &str,
		mut payload: PreexistingUserPayload,
		options: EventOptions,
	) -> Result<String> {
		require("user_id", user_id)?;
		payload.user_id = Some(user_id.to_string());

		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::PreexistingUserCreated, user_id, timestamp, &options, payload)
			.await
	}

	/// Backfills a thing. `thing_id` replaces any `thing_id` in `payload`.
	pub async fn preexisting_thing_created(
		&self,
		thing_id: &str,
		mut payload: PreexistingThingPayload,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;
		payload.thing_id = Some(thing_id.to_string());

		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::PreexistingThingCreated, thing_id, timestamp, &options, payload)
			.await
	}

	/// Backfills an ownership link. A zero `original_association_date` is
	/// treated as unknown and omitted.
	pub async fn preexisting_user_thing_associated(
		&self,
		thing_id: &str,
		user_id: &str,
		original_association_date: Option<i64>,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;
		require("user_id", user_id)?;

		let mut payload = Properties::new()
			.insert("thing_id", thing_id)
			.insert("user_id", user_id);
		if let Some(date) = original_association_date.filter(|d| *d != 0) {
			payload.set("original_association_date", date);
		}

		let timestamp = options.resolve_timestamp();
		self.dispatch(
			EventType::PreexistingUserThingAssociated,
			thing_id,
			timestamp,
			&options,
			payload,
		)
		.await
	}
}
