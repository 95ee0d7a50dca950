// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use copilot_collect_core::{EventOptions, EventType, Properties, ThingPayload, ThingStatusPayload};

use super::{present, require};
use crate::client::CopilotClient;
use crate::error::Result;

impl CopilotClient {
	/// Reports a newly provisioned thing (device).
	///
	/// `thing_id` is required and replaces any `thing_id` already in `payload`.
	pub async fn thing_created(
		&self,
		thing_id: &str,
		payload: ThingPayload,
		options: EventOptions,
	) -> Result<String> {
		self.thing_event(EventType::ThingCreated, thing_id, payload, options)
			.await
	}

	pub async fn thing_updated(
		&self,
		thing_id: &str,
		payload: ThingPayload,
		options: EventOptions,
	) -> Result<String> {
		self.thing_event(EventType::ThingUpdated, thing_id, payload, options)
			.await
	}

	async fn thing_event(
		&self,
		event_type: EventType,
		thing_id: &str,
		mut payload: ThingPayload,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;
		payload.thing_id = Some(thing_id.to_string());

		let timestamp = options.resolve_timestamp();
		self.dispatch(event_type, thing_id, timestamp, &options, payload)
			.await
	}

	/// Reports that a user took ownership of a thing.
	pub async fn thing_associated(
		&self,
		thing_id: &str,
		user_id: &str,
		options: EventOptions,
	) -> Result<String> {
		self.association_event(EventType::ThingAssociated, thing_id, user_id, options)
			.await
	}

	/// Reports that a user released a thing.
	pub async fn thing_disassociated(
		&self,
		thing_id: &str,
		user_id: &str,
		options: EventOptions,
	) -> Result<String> {
		self.association_event(EventType::ThingDisassociated, thing_id, user_id, options)
			.await
	}

	async fn association_event(
		&self,
		event_type: EventType,
		thing_id: &str,
		user_id: &str,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;
		require("user_id", user_id)?;

		let payload = Properties::new()
			.insert("thing_id", thing_id)
			.insert("user_id", user_id);
		let timestamp = options.resolve_timestamp();
		self.dispatch(event_type, thing_id, timestamp, &options, payload)
			.await
	}

	/// Reports a status change such as battery level or connectivity.
	///
	/// `status_key` and `status_value` are required. A missing or zero
	/// `status_date` is set to the event timestamp.
	pub async fn thing_status_changed(
		&self,
		thing_id: &str,
		mut payload: ThingStatusPayload,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;
		require("status_key", payload.status_key.as_deref().unwrap_or_default())?;
		require("status_value", payload.status_value.as_deref().unwrap_or_default())?;

		let timestamp = options.resolve_timestamp();
		payload.thing_id = Some(thing_id.to_string());
		payload.status_date = Some(payload.status_date.filter(|d| *d != 0).unwrap_or(timestamp));
		payload.user_id = payload.user_id.filter(|u| !u.is_empty());

		self.dispatch(EventType::ThingStatusChanged, thing_id, timestamp, &options, payload)
			.await
	}

	/// Reports a user interaction with a thing. Caller properties are sent
	/// as given, plus `thing_id`.
	pub async fn thing_interaction(
		&self,
		thing_id: &str,
		properties: Properties,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;

		let payload = properties.insert("thing_id", thing_id);
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::ThingInteraction, thing_id, timestamp, &options, payload)
			.await
	}

	/// Reports that a thing came online.
	pub async fn thing_connected(
		&self,
		thing_id: &str,
		user_id: Option<&str>,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;

		let payload = thing_properties(thing_id, user_id);
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::ThingConnected, thing_id, timestamp, &options, payload)
			.await
	}

	/// Reports consumption of a consumable (filter, cartridge, food...).
	pub async fn thing_consumable_usage(
		&self,
		thing_id: &str,
		user_id: Option<&str>,
		consumable_type: Option<&str>,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;

		let mut payload = thing_properties(thing_id, user_id);
		if let Some(consumable_type) = present(consumable_type) {
			payload.set("consumable_type", consumable_type);
		}
		let timestamp = options.resolve_timestamp();
		self.dispatch(EventType::ThingConsumableUsage, thing_id, timestamp, &options, payload)
			.await
	}

	pub async fn thing_firmware_upgrade_started(
		&self,
		thing_id: &str,
		user_id: Option<&str>,
		firmware_version: Option<&str>,
		options: EventOptions,
	) -> Result<String> {
		self.firmware_event(
			EventType::ThingFirmwareUpgradeStarted,
			thing_id,
			user_id,
			firmware_version,
			options,
		)
		.await
	}

	pub async fn thing_firmware_upgrade_completed(
		&self,
		thing_id: &str,
		user_id: Option<&str>,
		firmware_version: Option<&str>,
		options: EventOptions,
	) -> Result<String> {
		self.firmware_event(
			EventType::ThingFirmwareUpgradeCompleted,
			thing_id,
			user_id,
			firmware_version,
			options,
		)
		.await
	}

	async fn firmware_event(
		&self,
		event_type: EventType,
		thing_id: &str,
		user_id: Option<&str>,
		firmware_version: Option<&str>,
		options: EventOptions,
	) -> Result<String> {
		require("thing_id", thing_id)?;

		let mut payload = thing_properties(thing_id, user_id);
		if let Some(version) = present(firmware_version) {
			payload.set("firmware_version", version);
		}
		let timestamp = options.resolve_timestamp();
		self.dispatch(event_type, thing_id, timestamp, &options, payload)
			.await
	}
}

fn thing_properties(thing_id: &str, user_id: Option<&str>) -> Properties {
	let mut props = Properties::new().insert("thing_id", thing_id);
	if let Some(user_id) = present(user_id) {
		props.set("user_id", user_id);
	}
	props
}
