// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consent updates.

use copilot_collect_core::ConsentRequest;
use tracing::instrument;

use crate::catalog::require;
use crate::client::CopilotClient;
use crate::error::{ConfigError, Result};

impl CopilotClient {
	/// Records whether `user_id` consents to Copilot analysis.
	///
	/// Sent to the consent endpoint rather than the collect endpoint, so it
	/// requires a consent endpoint in the configuration. Any status other
	/// than 200 is reported as [`CopilotError::UnexpectedStatus`].
	///
	/// [`CopilotError::UnexpectedStatus`]: crate::CopilotError::UnexpectedStatus
	#[instrument(skip(self))]
	pub async fn update_user_consent(&self, user_id: &str, consent: bool) -> Result<()> {
		require("user_id", user_id)?;

		let config = self.require_config()?;
		let endpoint = config
			.consent_endpoint()
			.cloned()
			.ok_or(ConfigError::MissingConsentEndpoint)?;

		let request = ConsentRequest {
			user_id: user_id.to_string(),
			consent_value: consent,
		};
		self.transport()
			.post_consent(&config, &endpoint, &request)
			.await
	}
}
