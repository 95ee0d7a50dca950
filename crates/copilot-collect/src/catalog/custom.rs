// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use copilot_collect_core::{EventOptions, EventType, Properties};

use super::require;
use crate::client::CopilotClient;
use crate::error::{CopilotError, Result};

impl CopilotClient {
	/// Reports an application-defined event.
	///
	/// `subtype` names the event and is added to the payload. The payload
	/// must identify a subject with a `user_id` or `thing_id` key.
	pub async fn custom_event(
		&self,
		subtype: &str,
		properties: Properties,
		options: EventOptions,
	) -> Result<String> {
		require("subtype", subtype)?;
		if !properties.contains_key("user_id") && !properties.contains_key("thing_id") {
			return Err(CopilotError::validation(
				"custom event payload must include a user_id or a thing_id",
			));
		}

		let payload = properties.insert("subtype", subtype);
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::CustomEvent, subtype, timestamp, &options, payload)
			.await
	}
}
