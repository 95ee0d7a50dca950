// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration.
//!
//! A [`CopilotConfig`] is validated once at build time and never mutated
//! afterwards. Reconfiguring a client installs a fresh value.

use std::time::Duration;

use copilot_common_config::{env_u64, env_var, load_secret_env, SecretString};
use reqwest::Url;

use crate::error::ConfigError;

/// Default per-request timeout for collect and consent calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_CLIENT_ID: &str = "COPILOT_CLIENT_ID";
/// Also read from the file named by `COPILOT_CLIENT_SECRET_FILE`.
pub const ENV_CLIENT_SECRET: &str = "COPILOT_CLIENT_SECRET";
pub const ENV_COLLECT_ENDPOINT: &str = "COPILOT_CLIENT_COLLECT_ENDPOINT";
pub const ENV_CONSENT_ENDPOINT: &str = "COPILOT_CLIENT_CONSENT_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "COPILOT_CLIENT_TIMEOUT_SECS";

/// Credentials and endpoints for the Copilot collect and consent APIs.
#[derive(Debug, Clone)]
pub struct CopilotConfig {
	client_id: String,
	client_secret: SecretString,
	collect_endpoint: Url,
	consent_endpoint: Option<Url>,
	request_timeout: Duration,
}

impl CopilotConfig {
	pub fn builder() -> CopilotConfigBuilder {
		CopilotConfigBuilder::default()
	}

	/// Loads configuration from `COPILOT_*` environment variables.
	///
	/// | Variable | Required |
	/// |----------|----------|
	/// | `COPILOT_CLIENT_ID` | yes |
	/// | `COPILOT_CLIENT_SECRET` or `COPILOT_CLIENT_SECRET_FILE` | yes |
	/// | `COPILOT_CLIENT_COLLECT_ENDPOINT` | yes |
	/// | `COPILOT_CLIENT_CONSENT_ENDPOINT` | no |
	/// | `COPILOT_CLIENT_TIMEOUT_SECS` | no, defaults to 5 |
	pub fn from_env() -> Result<Self, ConfigError> {
		let mut builder = Self::builder();

		if let Some(client_id) = env_var(ENV_CLIENT_ID) {
			builder = builder.client_id(client_id);
		}
		if let Some(secret) = load_secret_env(ENV_CLIENT_SECRET)? {
			builder = builder.client_secret(secret);
		}
		if let Some(endpoint) = env_var(ENV_COLLECT_ENDPOINT) {
			builder = builder.collect_endpoint(endpoint);
		}
		if let Some(endpoint) = env_var(ENV_CONSENT_ENDPOINT) {
			builder = builder.consent_endpoint(endpoint);
		}
		if let Some(secs) = env_u64(ENV_TIMEOUT_SECS)? {
			builder = builder.request_timeout(Duration::from_secs(secs));
		}

		builder.build()
	}

	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	pub fn client_secret(&self) -> &SecretString {
		&self.client_secret
	}

	pub fn collect_endpoint(&self) -> &Url {
		&self.collect_endpoint
	}

	pub fn consent_endpoint(&self) -> Option<&Url> {
		self.consent_endpoint.as_ref()
	}

	pub fn request_timeout(&self) -> Duration {
		self.request_timeout
	}
}

/// Builder for [`CopilotConfig`].
#[derive(Debug, Clone)]
pub struct CopilotConfigBuilder {
	client_id: Option<String>,
	client_secret: Option<SecretString>,
	collect_endpoint: Option<String>,
	consent_endpoint: Option<String>,
	request_timeout: Duration,
}

impl Default for CopilotConfigBuilder {
	fn default() -> Self {
		Self {
			client_id: None,
			client_secret: None,
			collect_endpoint: None,
			consent_endpoint: None,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
		}
	}
}

impl CopilotConfigBuilder {
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());
		self
	}

	pub fn client_secret(mut self, client_secret: impl Into<SecretString>) -> Self {
		self.client_secret = Some(client_secret.into());
		self
	}

	pub fn collect_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.collect_endpoint = Some(endpoint.into());
		self
	}

	/// Optional. Without it, consent updates fail with
	/// [`ConfigError::MissingConsentEndpoint`].
	pub fn consent_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.consent_endpoint = Some(endpoint.into());
		self
	}

	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Validates the settings.
	///
	/// Client id, client secret and collect endpoint must be non-empty.
	/// Endpoints must be absolute `http` or `https` URLs. An empty consent
	/// endpoint is treated as unset.
	pub fn build(self) -> Result<CopilotConfig, ConfigError> {
		let client_id = self
			.client_id
			.filter(|id| !id.is_empty())
			.ok_or(ConfigError::MissingField("client id"))?;

		let client_secret = self
			.client_secret
			.filter(|secret| !secret.is_empty())
			.ok_or(ConfigError::MissingField("client secret"))?;

		let collect_endpoint = self
			.collect_endpoint
			.filter(|endpoint| !endpoint.is_empty())
			.ok_or(ConfigError::MissingField("collect endpoint"))?;
		let collect_endpoint = parse_endpoint("collect endpoint", &collect_endpoint)?;

		let consent_endpoint = self
			.consent_endpoint
			.filter(|endpoint| !endpoint.is_empty())
			.map(|endpoint| parse_endpoint("consent endpoint", &endpoint))
			.transpose()?;

		if self.request_timeout.is_zero() {
			return Err(ConfigError::InvalidValue {
				field: "request timeout",
				message: "must be greater than zero".to_string(),
			});
		}

		Ok(CopilotConfig {
			client_id,
			client_secret,
			collect_endpoint,
			consent_endpoint,
			request_timeout: self.request_timeout,
		})
	}
}

fn parse_endpoint(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
		field,
		message: format!("{raw}: {e}"),
	})?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		scheme => Err(ConfigError::InvalidValue {
			field,
			message: format!("unsupported scheme {scheme:?}"),
		}),
	}
}
