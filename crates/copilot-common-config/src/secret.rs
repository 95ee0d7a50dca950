// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.
//!
//! The collect API authenticates with a client id and a client secret. The
//! secret is wrapped in [`Secret`] so that it never shows up in `Debug`
//! output, `Display` output, serialized configuration dumps or `tracing`
//! fields. Reading it requires an explicit [`Secret::expose`] call.
//!
//! ```
//! use copilot_common_config::Secret;
//!
//! let secret = Secret::new("cs_live_123".to_string());
//! assert_eq!(format!("{secret}"), "[REDACTED]");
//! assert_eq!(secret.expose(), "cs_live_123");
//! ```

use std::fmt;

use zeroize::Zeroize;

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must not leak into logs. Zeroized on drop.
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: a secret string such as a client secret.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Returns the wrapped value. Keep call sites to a minimum.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl SecretString {
	/// True when the wrapped string is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl<T> Drop for Secret<T>
where
	T: Zeroize,
{
	fn drop(&mut self) {
		self.inner.zeroize();
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self::new(self.inner.clone())
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

// Opt-in via the `serde` feature, for callers that load credentials from
// serialized config files.
#[cfg(feature = "serde")]
mod serde_impl {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	use super::{Secret, REDACTED};

	impl<T> Serialize for Secret<T>
	where
		T: Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_output_hides_value() {
		let secret = SecretString::from("client-secret-value");
		let out = format!("{secret:?}");
		assert!(!out.contains("client-secret-value"));
		assert_eq!(out, "Secret(\"[REDACTED]\")");
	}

	#[test]
	fn display_output_hides_value() {
		let secret = SecretString::from("client-secret-value");
		assert_eq!(secret.to_string(), REDACTED);
	}

	#[test]
	fn expose_returns_value() {
		let secret = SecretString::from("abc");
		assert_eq!(secret.expose(), "abc");
		assert!(!secret.is_empty());
		assert!(SecretString::from("").is_empty());
	}

	#[test]
	fn clone_and_eq_compare_inner_values() {
		let a = SecretString::from("same");
		let b = a.clone();
		assert_eq!(a, b);
		assert_ne!(a, SecretString::from("other"));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serializes_as_placeholder() {
		let secret = SecretString::from("do-not-leak");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserializes_plain_value() {
		let secret: SecretString = serde_json::from_str("\"from-config\"").unwrap();
		assert_eq!(secret.expose(), "from-config");
	}

	proptest! {
		#[test]
		fn never_formats_inner_value(value in "[a-zA-Z0-9]{12,40}") {
			let secret = SecretString::from(value.as_str());
			let displayed = format!("{secret}");
			let debugged = format!("{secret:?}");
			prop_assert!(!displayed.contains(&value));
			prop_assert!(!debugged.contains(&value));
		}
	}
}
