// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use copilot_collect_core::{EventOptions, EventType, UserPayload};

use super::require;
use crate::client::CopilotClient;
use crate::error::Result;

impl CopilotClient {
	/// Reports a newly registered user.
	///
	/// `user_id` is required and replaces any `user_id` already in `payload`.
	pub async fn user_created(
		&self,
		user_id: &str,
		payload: UserPayload,
		options: EventOptions,
	) -> Result<String> {
		self.user_event(EventType::UserCreated, user_id, payload, options)
			.await
	}

	/// Reports a change to a user's profile.
	pub async fn user_updated(
		&self,
		user_id: &str,
		payload: UserPayload,
		options: EventOptions,
	) -> Result<String> {
		self.user_event(EventType::UserUpdated, user_id, payload, options)
			.await
	}

	async fn user_event(
		&self,
		event_type: EventType,
		user_id: &str,
		mut payload: UserPayload,
		options: EventOptions,
	) -> Result<String> {
		require("user_id", user_id)?;
		payload.user_id = Some(user_id.to_string());

		let timestamp = options.resolve_timestamp();
		self.dispatch(event_type, user_id, timestamp, &options, payload)
			.await
	}
}
