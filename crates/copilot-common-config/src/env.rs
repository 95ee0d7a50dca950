// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Empty variables are treated as unset throughout. Secrets additionally
//! support the `VAR_FILE` convention (Docker and Kubernetes secret mounts).

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::SecretString;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum EnvError {
	/// The file named by `VAR_FILE` could not be read.
	#[error("failed to read secret file at {path}: {source}")]
	SecretFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A variable was set but did not parse.
	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}

/// Reads `name`, returning `None` when unset or empty.
pub fn env_var(name: &str) -> Option<String> {
	env::var(name).ok().filter(|v| !v.is_empty())
}

/// Reads `name` as an unsigned integer.
pub fn env_u64(name: &str) -> Result<Option<u64>, EnvError> {
	match env_var(name) {
		Some(v) => v
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| EnvError::InvalidValue {
				key: name.to_string(),
				message: format!("expected an unsigned integer, got '{v}'"),
			}),
		None => Ok(None),
	}
}

/// Reads a secret from `{var}_FILE` (preferred) or `{var}`.
///
/// A single trailing newline is stripped from file contents. Returns
/// `Ok(None)` when neither variable is set.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, EnvError> {
	let file_var = format!("{var}_FILE");

	if let Some(path) = env_var(&file_var) {
		let path = PathBuf::from(path);
		let content = fs::read_to_string(&path).map_err(|source| EnvError::SecretFile {
			path: path.clone(),
			source,
		})?;
		let value = content
			.strip_suffix('\n')
			.map(|s| s.strip_suffix('\r').unwrap_or(s))
			.unwrap_or(&content);
		if value.is_empty() {
			return Ok(None);
		}
		return Ok(Some(SecretString::from(value)));
	}

	Ok(env_var(var).map(SecretString::from))
}
