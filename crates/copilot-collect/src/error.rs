// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the collect SDK.

use copilot_collect_core::{EventResponseError, InvalidEvent};
use copilot_common_config::EnvError;
use copilot_common_http::{is_retryable_status, RetryableError};
use thiserror::Error;

/// Problems with the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// An operation was attempted before any configuration was installed.
	#[error("copilot client not configured")]
	NotConfigured,

	/// A required setting was missing or empty.
	#[error("missing required configuration: {0}")]
	MissingField(&'static str),

	/// A setting was present but unusable.
	#[error("invalid {field}: {message}")]
	InvalidValue { field: &'static str, message: String },

	/// A consent update was attempted without a consent endpoint.
	#[error("consent endpoint not configured")]
	MissingConsentEndpoint,

	/// Reading the environment failed.
	#[error(transparent)]
	Env(#[from] EnvError),
}

/// Collect SDK errors.
#[derive(Debug, Error)]
pub enum CopilotError {
	/// The client is unconfigured or misconfigured. No request was sent.
	#[error("configuration error: {0}")]
	Configuration(#[from] ConfigError),

	/// A required argument was missing or malformed. No request was sent.
	#[error("validation failed: {0}")]
	Validation(String),

	/// The request could not be sent or no response was received
	/// (connection failure, timeout, body read failure).
	#[error("HTTP request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The request body could not be encoded.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// The collect API answered with a non-200 status and a structured reason.
	#[error("collect request failed with status {status}: {error}")]
	Response {
		status: u16,
		error: EventResponseError,
	},

	/// The collect API accepted the request but refused this event.
	#[error("event rejected: {0}")]
	EventRejected(InvalidEvent),

	/// The collect API answered with a body that does not match its contract.
	#[error("unexpected collect response (status {status}): {message}")]
	Protocol { status: u16, message: String },

	/// The consent endpoint answered with a non-200 status.
	#[error("unexpected status code {status} from consent endpoint")]
	UnexpectedStatus { status: u16 },
}

impl CopilotError {
	pub(crate) fn validation(message: impl Into<String>) -> Self {
		CopilotError::Validation(message.into())
	}
}

impl RetryableError for CopilotError {
	fn is_retryable(&self) -> bool {
		match self {
			CopilotError::Transport(e) => e.is_retryable(),
			CopilotError::Response { status, .. } | CopilotError::UnexpectedStatus { status } => {
				is_retryable_status(*status)
			}
			_ => false,
		}
	}
}

/// Result type alias for collect operations.
pub type Result<T> = std::result::Result<T, CopilotError>;
