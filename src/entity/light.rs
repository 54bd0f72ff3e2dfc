// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display brightness exposed as a dimmable light.

use std::sync::Arc;

use serde_json::json;

use crate::device::SmartClock;
use crate::poll::PollOutcome;
use crate::state::EntityKind;
use crate::types::{Brightness, HostBrightness};

use super::{CommandOutcome, Commandable, Entity, EntityCommand, EntityDescriptor, Platform, Pollable, record};

/// The clock display as a dimmable light.
///
/// The cache holds the canonical 0-100 value. The host sees the light on its
/// own 0-255 scale through [`host_brightness`](Self::host_brightness), and
/// [`turn_on`](Self::turn_on) takes a host-scale value.
///
/// The light is on whenever brightness is above zero. State only moves on a
/// 200 acknowledgment; a failed command leaves it where it was.
#[derive(Debug, Clone)]
pub struct ClockLight {
    clock: Arc<SmartClock>,
}

impl ClockLight {
    pub(crate) fn new(clock: Arc<SmartClock>) -> Self {
        Self { clock }
    }

    /// Returns the cached canonical brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.clock.cache().brightness()
    }

    /// Returns the cached brightness on the host scale.
    #[must_use]
    pub fn host_brightness(&self) -> HostBrightness {
        self.brightness().to_host()
    }

    /// Returns `true` if the display is lit.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.brightness().is_on()
    }

    /// Turns the display on.
    ///
    /// `brightness` is on the host scale and defaults to full brightness.
    pub async fn turn_on(&self, brightness: Option<HostBrightness>) -> CommandOutcome {
        let level = brightness.unwrap_or_default().to_canonical();
        self.set_brightness(level).await
    }

    /// Turns the display off (brightness 0).
    pub async fn turn_off(&self) -> CommandOutcome {
        self.set_brightness(Brightness::OFF).await
    }

    /// Sets a canonical brightness.
    pub async fn set_brightness(&self, level: Brightness) -> CommandOutcome {
        match self.clock.client().set_brightness(level).await {
            Ok(()) => {
                record(&self.clock, EntityKind::Brightness, level.into());
                tracing::info!(
                    device = %self.clock.address(),
                    brightness = level.value(),
                    "Brightness set"
                );
                CommandOutcome::Applied
            }
            Err(err) => {
                tracing::error!(
                    device = %self.clock.address(),
                    brightness = level.value(),
                    error = %err,
                    "Failed to set brightness"
                );
                CommandOutcome::Failed(err)
            }
        }
    }
}

impl Entity for ClockLight {
    fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(
            &self.clock,
            "brightness",
            "Smart Clock Display",
            None,
            Platform::Light,
        )
    }

    fn state_value(&self) -> serde_json::Value {
        let level = self.brightness();
        json!({
            "state": if level.is_on() { "on" } else { "off" },
            "brightness": level.to_host().value(),
            "color_mode": "brightness",
        })
    }
}

impl Pollable for ClockLight {
    fn kind(&self) -> EntityKind {
        EntityKind::Brightness
    }

    async fn update(&self) -> PollOutcome {
        let Some(_guard) = self.clock.in_flight().try_acquire(EntityKind::Brightness) else {
            tracing::debug!(device = %self.clock.address(), "Brightness poll still in flight, skipping");
            return PollOutcome::Skipped;
        };

        match self.clock.client().get_brightness().await {
            Ok(level) => {
                let changed = record(&self.clock, EntityKind::Brightness, level.into());
                PollOutcome::Updated { changed }
            }
            Err(err) => {
                tracing::error!(
                    device = %self.clock.address(),
                    error = %err,
                    "Error getting brightness"
                );
                PollOutcome::Stale(err)
            }
        }
    }
}

impl Commandable for ClockLight {
    async fn dispatch(&self, command: EntityCommand) -> CommandOutcome {
        match command {
            EntityCommand::TurnOn { brightness } => self.turn_on(brightness).await,
            EntityCommand::TurnOff => self.turn_off().await,
            EntityCommand::SelectOption { .. } | EntityCommand::Press => {
                CommandOutcome::Unsupported
            }
        }
    }
}
