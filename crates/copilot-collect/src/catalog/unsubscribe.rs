// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use copilot_collect_core::{EventOptions, EventType, Properties};

use super::require;
use crate::client::CopilotClient;
use crate::error::Result;

impl CopilotClient {
	/// Reports that the owner of `email` opted out of Copilot email.
	pub async fn unsubscribe_user_email(&self, email: &str, options: EventOptions) -> Result<String> {
		require("email", email)?;

		let payload = Properties::new().insert("email", email);
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::Unsubscribe, email, timestamp, &options, payload)
			.await
	}
}
