// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the Copilot collect crates.
//!
//! - [`Secret<T>`]: keeps client secrets out of logs and debug output
//! - [`load_secret_env`]: reads a secret from `VAR` or the file named by `VAR_FILE`
//! - [`env_var`] / [`env_u64`]: environment lookups that treat empty values as unset

pub mod env;
pub mod secret;

pub use env::{env_u64, env_var, load_secret_env, EnvError};
pub use secret::{Secret, SecretString, REDACTED};
