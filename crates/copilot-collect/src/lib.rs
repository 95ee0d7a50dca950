// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust SDK for the Copilot collect API.
//!
//! Reports user, thing, backfill, unsubscribe and custom events, and updates
//! analysis consent. Each call builds one event, sends it synchronously to
//! the collect endpoint and returns the accepted event id, or an error
//! describing why the event was not accepted. Nothing is queued or retried;
//! [`CopilotError`] implements `RetryableError` for callers that want to
//! retry transient failures with the same event id.
//!
//! # Example
//!
//! ```no_run
//! use copilot_collect::{CopilotClient, EventOptions, Properties};
//!
//! # async fn example() -> copilot_collect::Result<()> {
//! let client = CopilotClient::from_env()?;
//!
//! client.thing_associated("feeder-1", "user-123", EventOptions::new()).await?;
//! client
//!     .custom_event(
//!         "meal_logged",
//!         Properties::new().insert("user_id", "user-123").insert("grams", 40),
//!         EventOptions::new(),
//!     )
//!     .await?;
//! client.update_user_consent("user-123", true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The SDK emits `tracing` events and spans but never installs a
//! subscriber. Client secrets are never logged.

mod catalog;
mod client;
mod config;
mod consent;
mod error;
mod transport;

#[cfg(test)]
mod test_support;

pub use client::CopilotClient;
pub use config::{
	CopilotConfig, CopilotConfigBuilder, DEFAULT_REQUEST_TIMEOUT, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
	ENV_COLLECT_ENDPOINT, ENV_CONSENT_ENDPOINT, ENV_TIMEOUT_SECS,
};
pub use error::{ConfigError, CopilotError, Result};
pub use transport::{decode_collect_reply, CollectReply, CollectTransport, HttpTransport};

pub use copilot_collect_core::{
	ConsentRequest, Event, EventOptions, EventPayload, EventRequest, EventResponse,
	EventResponseError, EventType, InvalidEvent, PreexistingThingPayload, PreexistingUserPayload,
	Properties, ThingPayload, ThingStatusPayload, UserPayload, MAX_EVENT_ID_LEN,
};
pub use copilot_common_config::SecretString;
pub use copilot_common_http::RetryableError;
