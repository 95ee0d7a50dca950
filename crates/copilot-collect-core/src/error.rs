// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectCoreError {
	#[error("unknown event type: {0}")]
	UnknownEventType(String),
}

pub type Result<T> = std::result::Result<T, CollectCoreError>;
