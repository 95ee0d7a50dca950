// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Failure classification.
//!
//! The SDK never retries on its own. Callers that want to retry use
//! [`RetryableError::is_retryable`] to tell transient failures (timeouts,
//! refused connections, 408/429/5xx) from permanent ones.

use reqwest::StatusCode;

const RETRYABLE_STATUSES: [StatusCode; 6] = [
	StatusCode::REQUEST_TIMEOUT,
	StatusCode::TOO_MANY_REQUESTS,
	StatusCode::INTERNAL_SERVER_ERROR,
	StatusCode::BAD_GATEWAY,
	StatusCode::SERVICE_UNAVAILABLE,
	StatusCode::GATEWAY_TIMEOUT,
];

/// Errors that know whether repeating the request could succeed.
pub trait RetryableError {
	fn is_retryable(&self) -> bool;
}

/// True for statuses that usually indicate a transient server-side condition.
pub fn is_retryable_status(status: u16) -> bool {
	RETRYABLE_STATUSES.iter().any(|s| s.as_u16() == status)
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		if self.is_timeout() || self.is_connect() {
			return true;
		}
		self
			.status()
			.map(|status| is_retryable_status(status.as_u16()))
			.unwrap_or(false)
	}
}
