// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP transport for the collect and consent endpoints.

use async_trait::async_trait;
use copilot_collect_core::{ConsentRequest, EventRequest, EventResponse, EventResponseError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::debug;

use crate::config::CopilotConfig;
use crate::error::{CopilotError, Result};

/// A decoded collect response.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectReply {
	/// Status 200. `None` when the body was the JSON literal `null`.
	Accepted(Option<EventResponse>),
	/// Any other status, with the structured error body.
	Failed {
		status: u16,
		error: EventResponseError,
	},
}

/// Sends requests to the Copilot API.
///
/// [`HttpTransport`] is the production implementation. Every call receives
/// the configuration snapshot taken by the client when the operation began.
#[async_trait]
pub trait CollectTransport: Send + Sync {
	async fn post_events(
		&self,
		config: &CopilotConfig,
		request: &EventRequest,
	) -> Result<CollectReply>;

	/// Returns `Ok(())` only on status 200.
	async fn post_consent(
		&self,
		config: &CopilotConfig,
		endpoint: &Url,
		request: &ConsentRequest,
	) -> Result<()>;
}

/// reqwest-backed transport with a pooled connection.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	http: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Result<Self> {
		Ok(Self {
			http: copilot_common_http::new_client()?,
		})
	}

	/// Uses an existing client, e.g. one with custom TLS roots or a proxy.
	pub fn with_client(http: reqwest::Client) -> Self {
		Self { http }
	}

	fn post(&self, config: &CopilotConfig, endpoint: &Url, body: Vec<u8>) -> reqwest::RequestBuilder {
		self.http
			.post(endpoint.clone())
			.basic_auth(config.client_id(), Some(config.client_secret().expose()))
			.header(CONTENT_TYPE, "application/json")
			.timeout(config.request_timeout())
			.body(body)
	}
}

#[async_trait]
impl CollectTransport for HttpTransport {
	async fn post_events(
		&self,
		config: &CopilotConfig,
		request: &EventRequest,
	) -> Result<CollectReply> {
		let body = serde_json::to_vec(request)?;
		debug!(
			endpoint = %config.collect_endpoint(),
			events = request.events.len(),
			"Sending collect request"
		);

		let response = self
			.post(config, config.collect_endpoint(), body)
			.send()
			.await?;
		let status = response.status().as_u16();
		let bytes = response.bytes().await?;

		debug!(status, bytes = bytes.len(), "Collect response received");
		decode_collect_reply(status, &bytes)
	}

	async fn post_consent(
		&self,
		config: &CopilotConfig,
		endpoint: &Url,
		request: &ConsentRequest,
	) -> Result<()> {
		let body = serde_json::to_vec(request)?;
		debug!(endpoint = %endpoint, "Sending consent update");

		let response = self.post(config, endpoint, body).send().await?;
		let status = response.status().as_u16();

		debug!(status, "Consent response received");
		if status != 200 {
			return Err(CopilotError::UnexpectedStatus { status });
		}
		Ok(())
	}
}

/// Decodes a collect response body according to its status code.
///
/// A body that does not match the expected shape yields
/// [`CopilotError::Protocol`].
pub fn decode_collect_reply(status: u16, body: &[u8]) -> Result<CollectReply> {
	if status != 200 {
		let error = serde_json::from_slice::<EventResponseError>(body).map_err(|e| {
			CopilotError::Protocol {
				status,
				message: format!("undecodable error body: {e}"),
			}
		})?;
		return Ok(CollectReply::Failed { status, error });
	}

	let response = serde_json::from_slice::<Option<EventResponse>>(body).map_err(|e| {
		CopilotError::Protocol {
			status,
			message: format!("undecodable collect response: {e}"),
		}
	})?;
	Ok(CollectReply::Accepted(response))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn empty_acceptance_decodes() {
		let reply = decode_collect_reply(200, br#"{"invalid_events":[]}"#).unwrap();
		assert_eq!(reply, CollectReply::Accepted(Some(EventResponse::default())));
	}

	#[test]
	fn null_body_decodes_to_none() {
		let reply = decode_collect_reply(200, b"null").unwrap();
		assert_eq!(reply, CollectReply::Accepted(None));
	}

	#[test]
	fn rejection_list_decodes() {
		let body = br#"{"invalid_events":[{"event_id":"e1","index":0,"error":"bad"}]}"#;
		let CollectReply::Accepted(Some(response)) = decode_collect_reply(200, body).unwrap() else {
			panic!("expected accepted reply");
		};
		assert_eq!(response.invalid_events.len(), 1);
		assert_eq!(response.invalid_events[0].message, "bad");
	}

	#[test]
	fn error_status_decodes_error_body() {
		let body = br#"{"error_message":"bad auth","reason":"unauthorized"}"#;
		let reply = decode_collect_reply(401, body).unwrap();
		assert_eq!(
			reply,
			CollectReply::Failed {
				status: 401,
				error: EventResponseError {
					error_message: "bad auth".into(),
					reason: "unauthorized".into(),
				},
			}
		);
	}

	#[test]
	fn garbage_bodies_are_protocol_errors() {
		let err = decode_collect_reply(200, b"<html>").unwrap_err();
		assert!(matches!(err, CopilotError::Protocol { status: 200, .. }));

		let err = decode_collect_reply(502, b"Bad Gateway").unwrap_err();
		assert!(matches!(err, CopilotError::Protocol { status: 502, .. }));

		let err = decode_collect_reply(200, b"").unwrap_err();
		assert!(matches!(err, CopilotError::Protocol { status: 200, .. }));
	}

	#[test]
	fn http_transport_builds() {
		assert!(HttpTransport::new().is_ok());
	}

	proptest! {
		#[test]
		fn any_error_status_with_error_body_is_failed(
			status in (100u16..600).prop_filter("not 200", |s| *s != 200),
			reason in "[a-z_]{0,16}",
			message in "[ -~]{0,32}",
		) {
			let body = serde_json::to_vec(&EventResponseError {
				error_message: message.clone(),
				reason: reason.clone(),
			})
			.unwrap();

			let reply = decode_collect_reply(status, &body).unwrap();
			prop_assert_eq!(
				reply,
				CollectReply::Failed {
					status,
					error: EventResponseError { error_message: message, reason },
				}
			);
		}
	}
}
