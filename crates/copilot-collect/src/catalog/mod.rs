// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed helpers for each event in the catalog.
//!
//! Every helper checks its required arguments before touching the network,
//! forces the subject identifiers into the payload, builds the envelope and
//! hands it to [`CopilotClient::submit_event`]. On success the accepted
//! event id is returned.

mod custom;
mod preexisting;
mod thing;
mod unsubscribe;
mod user;

use copilot_collect_core::{Event, EventOptions, EventPayload, EventType};

use crate::client::CopilotClient;
use crate::error::{CopilotError, Result};

/// Fails with a validation error when `value` is empty.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
	if value.is_empty() {
		return Err(CopilotError::validation(format!("{field} cannot be blank")));
	}
	Ok(())
}

/// Treats an empty string as absent.
pub(crate) fn present(value: Option<&str>) -> Option<String> {
	value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl CopilotClient {
	/// Builds the envelope for a catalog event and submits it.
	///
	/// `timestamp` must already be resolved so that payload fields derived
	/// from it agree with the envelope and the synthesized id.
	async fn dispatch(
		&self,
		event_type: EventType,
		key: &str,
		timestamp: i64,
		options: &EventOptions,
		payload: impl Into<EventPayload>,
	) -> Result<String> {
		let event = Event::new(event_type, key, timestamp, options.event_id(), payload);
		self.submit_event(event).await
	}
}
