// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory transport for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use copilot_collect_core::{ConsentRequest, Event, EventRequest, EventResponse};
use reqwest::Url;

use crate::client::CopilotClient;
use crate::config::CopilotConfig;
use crate::error::{CopilotError, Result};
use crate::transport::{CollectReply, CollectTransport};

type Responder = dyn Fn(&EventRequest) -> Result<CollectReply> + Send + Sync;

pub(crate) struct MockTransport {
	collect_calls: AtomicUsize,
	consent_calls: AtomicUsize,
	requests: Mutex<Vec<EventRequest>>,
	consents: Mutex<Vec<(Url, ConsentRequest)>>,
	responder: Box<Responder>,
	consent_status: u16,
}

impl MockTransport {
	/// Accepts every event and every consent update.
	pub(crate) fn accepting() -> Self {
		Self::responding(|_| Ok(CollectReply::Accepted(Some(EventResponse::default()))))
	}

	pub(crate) fn responding<F>(responder: F) -> Self
	where
		F: Fn(&EventRequest) -> Result<CollectReply> + Send + Sync + 'static,
	{
		Self {
			collect_calls: AtomicUsize::new(0),
			consent_calls: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
			consents: Mutex::new(Vec::new()),
			responder: Box::new(responder),
			consent_status: 200,
		}
	}

	pub(crate) fn with_consent_status(mut self, status: u16) -> Self {
		self.consent_status = status;
		self
	}

	pub(crate) fn collect_calls(&self) -> usize {
		self.collect_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn consent_calls(&self) -> usize {
		self.consent_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn requests(&self) -> Vec<EventRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub(crate) fn last_event(&self) -> Option<Event> {
		self.requests
			.lock()
			.unwrap()
			.last()
			.and_then(|request| request.events.first().cloned())
	}

	pub(crate) fn consents(&self) -> Vec<(Url, ConsentRequest)> {
		self.consents.lock().unwrap().clone()
	}
}

#[async_trait]
impl CollectTransport for MockTransport {
	async fn post_events(
		&self,
		_config: &CopilotConfig,
		request: &EventRequest,
	) -> Result<CollectReply> {
		self.collect_calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().unwrap().push(request.clone());
		(self.responder)(request)
	}

	async fn post_consent(
		&self,
		_config: &CopilotConfig,
		endpoint: &Url,
		request: &ConsentRequest,
	) -> Result<()> {
		self.consent_calls.fetch_add(1, Ordering::SeqCst);
		self.consents
			.lock()
			.unwrap()
			.push((endpoint.clone(), request.clone()));
		if self.consent_status != 200 {
			return Err(CopilotError::UnexpectedStatus {
				status: self.consent_status,
			});
		}
		Ok(())
	}
}

pub(crate) fn test_config() -> CopilotConfig {
	CopilotConfig::builder()
		.client_id("test-client")
		.client_secret("test-secret")
		.collect_endpoint("https://collect.example.com/v1/events")
		.consent_endpoint("https://consent.example.com/v1/consent")
		.build()
		.unwrap()
}

/// A configured client over `transport`.
pub(crate) fn client_with(transport: &Arc<MockTransport>) -> CopilotClient {
	CopilotClient::with_transport(transport.clone(), Some(test_config()))
}
