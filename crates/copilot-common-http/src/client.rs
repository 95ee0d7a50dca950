// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::debug;

const SDK_NAME: &str = "copilot-collect-rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates a client builder carrying the standard User-Agent.
///
/// `reqwest::Client` pools connections internally and is safe to share
/// across tasks; build one and clone it rather than building per request.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and a connect timeout.
///
/// No client-wide request timeout is set; callers apply one per request.
pub fn new_client() -> reqwest::Result<Client> {
	debug!("building HTTP client");
	builder().connect_timeout(CONNECT_TIMEOUT).build()
}

/// Returns the SDK User-Agent.
///
/// Format: `copilot-collect-rust/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"{SDK_NAME}/{SDK_VERSION} ({}-{})",
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
