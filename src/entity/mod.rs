// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing entities of a Smart Clock.
//!
//! Each entity is a small handle onto the shared [`SmartClock`] context. An
//! entity exposes its capabilities through plain traits; a host adapter maps
//! these onto whatever its own entity model requires:
//!
//! - [`Entity`]: registration metadata and a host-readable state value
//! - [`Pollable`]: one refresh per host tick
//! - [`Commandable`]: host-initiated commands
//!
//! | Entity | Platform | Pollable | Commandable |
//! |--------|----------|----------|-------------|
//! | [`ClockLight`] | light | yes | turn on/off |
//! | [`TabSelect`] | select | yes | select option |
//! | [`RefreshButton`] | button | no | press |
//! | [`SnapStatusSensor`] | sensor | yes | no |
//! | [`AudioStreamSensor`] | sensor | yes | no |
//!
//! # Failure policy
//!
//! Commands never raise: a failed command leaves the cache untouched, logs,
//! and reports [`CommandOutcome::Failed`]. A failed poll leaves actuator
//! state unchanged, while status sensors switch to `error` or `unavailable`.

mod button;
mod light;
mod select;
mod sensor;

pub use button::RefreshButton;
pub use light::ClockLight;
pub use select::TabSelect;
pub use sensor::{AudioStreamSensor, SnapStatusSensor};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::SmartClock;
use crate::error::{ClientError, ValueError};
use crate::poll::PollOutcome;
use crate::protocol::DeviceAddress;
use crate::state::{EntityKind, EntityState};
use crate::types::HostBrightness;

/// Integration domain, used as the device-info identifier namespace.
pub const DOMAIN: &str = "smart_clock";

/// Host platform an entity registers under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Dimmable light.
    Light,
    /// Read-only sensor.
    Sensor,
    /// Option selector.
    Select,
    /// Stateless push button.
    Button,
}

impl Platform {
    /// Every platform the integration registers entities under.
    pub const ALL: [Self; 4] = [Self::Light, Self::Sensor, Self::Select, Self::Button];

    /// Returns the platform name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Sensor => "sensor",
            Self::Select => "select",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device metadata attached to every entity so the host groups them as one
/// logical device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// `(domain, identity)` pairs.
    pub identifiers: Vec<(String, String)>,
    /// Device name.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Model.
    pub model: String,
}

impl DeviceInfo {
    /// Builds the device info for a device at `address`.
    #[must_use]
    pub fn for_address(address: &DeviceAddress) -> Self {
        Self {
            identifiers: vec![(DOMAIN.to_string(), address.identity())],
            name: "Smart Clock".to_string(),
            manufacturer: "Custom".to_string(),
            model: "Smart Clock v1".to_string(),
        }
    }
}

/// Registration metadata for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    /// Stable unique ID, `smart_clock_{host}_{port}_{suffix}`.
    pub unique_id: String,
    /// Display name.
    pub name: String,
    /// Material Design icon, if any.
    pub icon: Option<String>,
    /// Host platform.
    pub platform: Platform,
    /// Owning device.
    pub device_info: DeviceInfo,
}

impl EntityDescriptor {
    pub(crate) fn new(
        clock: &SmartClock,
        suffix: &str,
        name: &str,
        icon: Option<&str>,
        platform: Platform,
    ) -> Self {
        Self {
            unique_id: format!("{DOMAIN}_{}_{suffix}", clock.address().identity()),
            name: name.to_string(),
            icon: icon.map(str::to_string),
            platform,
            device_info: clock.device_info().clone(),
        }
    }
}

/// Base trait implemented by every entity.
pub trait Entity {
    /// Returns the registration metadata.
    fn descriptor(&self) -> EntityDescriptor;

    /// Returns the current state as the host should display it.
    fn state_value(&self) -> serde_json::Value;
}

/// An entity whose state is refreshed by polling the device.
#[allow(async_fn_in_trait)]
pub trait Pollable {
    /// Returns the cache slot this entity owns.
    fn kind(&self) -> EntityKind;

    /// Issues at most one request and folds the result into the cache.
    ///
    /// Never fails: the outcome describes what happened.
    async fn update(&self) -> PollOutcome;
}

/// A command a host can send to an entity.
///
/// Deserializes from host service calls such as
/// `{"service": "turn_on", "brightness": 204}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum EntityCommand {
    /// Switch the light on, optionally at a host-scale brightness.
    TurnOn {
        /// Target brightness on the 0-255 host scale (defaults to 255).
        #[serde(default)]
        brightness: Option<HostBrightness>,
    },
    /// Switch the light off.
    TurnOff,
    /// Select an option by name.
    SelectOption {
        /// Option name.
        option: String,
    },
    /// Press a button.
    Press,
}

/// Result of a host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The device acknowledged the command and the cache was updated.
    Applied,
    /// The device call failed; the cache is untouched.
    Failed(ClientError),
    /// The input was invalid; no request was sent.
    Rejected(ValueError),
    /// The entity does not handle this command.
    Unsupported,
}

impl CommandOutcome {
    /// Returns `true` if the command took effect.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// An entity that accepts host commands.
#[allow(async_fn_in_trait)]
pub trait Commandable {
    /// Sends exactly one request for the command.
    ///
    /// Never fails: the outcome describes what happened.
    async fn dispatch(&self, command: EntityCommand) -> CommandOutcome;
}

/// Every entity registered for one device.
#[derive(Debug, Clone)]
pub struct SmartClockEntities {
    /// Display brightness.
    pub light: ClockLight,
    /// Displayed tab.
    pub tab: TabSelect,
    /// Display reload.
    pub refresh: RefreshButton,
    /// Snapcast client status.
    pub snap_status: SnapStatusSensor,
    /// Audio stream status.
    pub audio_stream: AudioStreamSensor,
}

impl SmartClockEntities {
    /// Returns the descriptors of every entity, in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<EntityDescriptor> {
        vec![
            self.light.descriptor(),
            self.snap_status.descriptor(),
            self.audio_stream.descriptor(),
            self.tab.descriptor(),
            self.refresh.descriptor(),
        ]
    }

    /// Returns the descriptors registered under one platform.
    #[must_use]
    pub fn descriptors_for(&self, platform: Platform) -> Vec<EntityDescriptor> {
        self.descriptors()
            .into_iter()
            .filter(|d| d.platform == platform)
            .collect()
    }
}

/// Stores a state the entity itself produced.
///
/// The entity always offers a state matching its own kind, so a mismatch is
/// a programming error; it is logged rather than propagated.
fn record(clock: &SmartClock, kind: EntityKind, state: EntityState) -> bool {
    clock.cache().observe(kind, state).unwrap_or_else(|err| {
        tracing::warn!(%kind, error = %err, "Dropped state of the wrong kind");
        false
    })
}
