// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The collect client.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use copilot_collect_core::{validate_event_id, Event, EventRequest, MAX_EVENT_ID_LEN};
use tracing::{debug, info, instrument, warn};

use crate::config::CopilotConfig;
use crate::error::{ConfigError, CopilotError, Result};
use crate::transport::{CollectReply, CollectTransport, HttpTransport};

/// Client for the Copilot collect and consent APIs.
///
/// Cheap to clone; clones share configuration and the connection pool.
/// Every operation takes a snapshot of the configuration when it starts,
/// so a concurrent [`configure`](Self::configure) never affects a request
/// already in flight.
///
/// # Example
///
/// ```no_run
/// use copilot_collect::{CopilotClient, CopilotConfig, EventOptions, UserPayload};
///
/// # async fn example() -> copilot_collect::Result<()> {
/// let config = CopilotConfig::builder()
///     .client_id("my-client")
///     .client_secret("my-secret")
///     .collect_endpoint("https://collect.example.com/v1/events")
///     .build()?;
/// let client = CopilotClient::new(config)?;
///
/// let payload = UserPayload {
///     email: Some("user@example.com".to_string()),
///     ..Default::default()
/// };
/// let event_id = client.user_created("user-123", payload, EventOptions::new()).await?;
/// println!("accepted {event_id}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CopilotClient {
	inner: Arc<CopilotClientInner>,
}

struct CopilotClientInner {
	config: RwLock<Option<Arc<CopilotConfig>>>,
	transport: Arc<dyn CollectTransport>,
}

impl CopilotClient {
	/// Creates a configured client over HTTPS.
	pub fn new(config: CopilotConfig) -> Result<Self> {
		let client = Self::unconfigured()?;
		client.set_config(config);
		Ok(client)
	}

	/// Creates a client with no configuration. Every operation fails with
	/// [`ConfigError::NotConfigured`] until [`configure`](Self::configure)
	/// succeeds.
	pub fn unconfigured() -> Result<Self> {
		Ok(Self::with_transport(Arc::new(HttpTransport::new()?), None))
	}

	/// Creates a client from `COPILOT_*` environment variables.
	///
	/// Missing variables are not an error: the client is returned
	/// unconfigured and a warning is logged. See
	/// [`CopilotConfig::from_env`] for the variable names.
	pub fn from_env() -> Result<Self> {
		let client = Self::unconfigured()?;
		match CopilotConfig::from_env() {
			Ok(config) => client.set_config(config),
			Err(e) => warn!(
				error = %e,
				"Copilot client not configured from environment; events will not be sent until configure is called"
			),
		}
		Ok(client)
	}

	/// Creates a client over a custom transport.
	pub fn with_transport(
		transport: Arc<dyn CollectTransport>,
		config: Option<CopilotConfig>,
	) -> Self {
		Self {
			inner: Arc::new(CopilotClientInner {
				config: RwLock::new(config.map(Arc::new)),
				transport,
			}),
		}
	}

	/// Validates and installs credentials and endpoints.
	///
	/// On failure the previous configuration, if any, stays in effect. An
	/// empty or `None` consent endpoint disables consent updates.
	pub fn configure(
		&self,
		client_id: &str,
		client_secret: &str,
		collect_endpoint: &str,
		consent_endpoint: Option<&str>,
	) -> Result<()> {
		let mut builder = CopilotConfig::builder()
			.client_id(client_id)
			.client_secret(client_secret)
			.collect_endpoint(collect_endpoint);
		if let Some(endpoint) = consent_endpoint {
			builder = builder.consent_endpoint(endpoint);
		}

		self.set_config(builder.build()?);
		Ok(())
	}

	/// Installs an already validated configuration.
	pub fn set_config(&self, config: CopilotConfig) {
		info!(
			collect_endpoint = %config.collect_endpoint(),
			consent_enabled = config.consent_endpoint().is_some(),
			"Copilot client configured"
		);
		*self
			.inner
			.config
			.write()
			.unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(config));
	}

	/// True once credentials and a collect endpoint are installed.
	pub fn is_configured(&self) -> bool {
		self.config().is_some()
	}

	/// A snapshot of the current configuration.
	pub fn config(&self) -> Option<Arc<CopilotConfig>> {
		self.inner
			.config
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub(crate) fn require_config(&self) -> Result<Arc<CopilotConfig>> {
		self.config()
			.ok_or_else(|| ConfigError::NotConfigured.into())
	}

	pub(crate) fn transport(&self) -> &dyn CollectTransport {
		self.inner.transport.as_ref()
	}

	/// Sends one finalized event and returns its id once accepted.
	///
	/// The event id is checked before anything else, so a malformed id
	/// fails with [`CopilotError::Validation`] without a network call.
	///
	/// # Errors
	///
	/// - [`CopilotError::Configuration`] if the client is not configured
	/// - [`CopilotError::Transport`] on connection failure or timeout
	/// - [`CopilotError::Response`] for a non-200 status with an error body
	/// - [`CopilotError::Protocol`] for an undecodable or `null` body
	/// - [`CopilotError::EventRejected`] if the service refused this event
	#[instrument(
		skip(self, event),
		fields(event_type = %event.event_type, event_id = %event.event_id)
	)]
	pub async fn submit_event(&self, event: Event) -> Result<String> {
		if !validate_event_id(&event.event_id) {
			return Err(CopilotError::validation(format!(
				"event_id must be between 1 and {MAX_EVENT_ID_LEN} characters"
			)));
		}

		let config = self.require_config()?;
		let event_id = event.event_id.clone();
		let request = EventRequest::single(event);

		match self.transport().post_events(&config, &request).await? {
			CollectReply::Failed { status, error } => {
				debug!(status, reason = %error.reason, "Collect request failed");
				Err(CopilotError::Response { status, error })
			}
			CollectReply::Accepted(None) => Err(CopilotError::Protocol {
				status: 200,
				message: "invalid client request".to_string(),
			}),
			CollectReply::Accepted(Some(response)) => match response.rejection_for(&event_id) {
				Some(rejection) => {
					debug!(error = %rejection.message, "Event rejected");
					Err(CopilotError::EventRejected(rejection.clone()))
				}
				None => {
					debug!("Event accepted");
					Ok(event_id)
				}
			},
		}
	}
}

impl fmt::Debug for CopilotClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CopilotClient")
			.field("config", &self.config())
			.finish_non_exhaustive()
	}
}
