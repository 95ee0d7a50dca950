// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Copilot SDK.
//!
//! This crate provides:
//! - A pre-configured, connection-pooled HTTP client with a consistent User-Agent
//! - Classification of failures into retryable and permanent ones

mod client;
mod retryable;

pub use client::{builder, new_client, user_agent};
pub use retryable::{is_retryable_status, RetryableError};
