// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Copilot collect API.
//!
//! This crate holds everything that goes over the wire and nothing that
//! performs I/O. It is used by the `copilot-collect` SDK.
//!
//! # Overview
//!
//! - [`Event`]: the `{type, event_id, timestamp, payload}` envelope
//! - [`EventType`]: the fixed catalog of event type tags
//! - [`EventPayload`]: the closed set of payload shapes an event can carry
//! - [`EventRequest`] / [`EventResponse`]: the collect endpoint request and
//!   its 200 response listing per-event rejections
//! - [`EventResponseError`]: the non-200 error body
//! - [`ConsentRequest`]: the consent endpoint body
//!
//! # Example
//!
//! ```
//! use copilot_collect_core::{Event, EventType, UserPayload};
//!
//! let payload = UserPayload {
//!     user_id: Some("u1".to_string()),
//!     email: Some("a@b.com".to_string()),
//!     ..Default::default()
//! };
//! let event = Event::new(EventType::UserCreated, "u1", 1_700_000_000_000, None, payload);
//!
//! assert_eq!(event.event_id, "user_created-u1-1700000000000");
//! ```

pub mod error;
pub mod event;
pub mod payload;
pub mod properties;
pub mod wire;

pub use error::CollectCoreError;
pub use event::{
	now_millis, synthesize_event_id, validate_event_id, Event, EventOptions, EventType,
	MAX_EVENT_ID_LEN,
};
pub use payload::{
	EventPayload, PreexistingThingPayload, PreexistingUserPayload, ThingPayload,
	ThingStatusPayload, UserPayload,
};
pub use properties::Properties;
pub use wire::{ConsentRequest, EventRequest, EventResponse, EventResponseError, InvalidEvent};
