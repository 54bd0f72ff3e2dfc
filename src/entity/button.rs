// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display refresh button.

use std::sync::Arc;

use crate::device::SmartClock;

use super::{CommandOutcome, Commandable, Entity, EntityCommand, EntityDescriptor, Platform};

/// Reloads the display on every screen attached to the device.
///
/// The button has no state and is never polled.
#[derive(Debug, Clone)]
pub struct RefreshButton {
    clock: Arc<SmartClock>,
}

impl RefreshButton {
    pub(crate) fn new(clock: Arc<SmartClock>) -> Self {
        Self { clock }
    }

    /// Sends the refresh request.
    pub async fn press(&self) -> CommandOutcome {
        match self.clock.client().refresh().await {
            Ok(()) => {
                tracing::info!(device = %self.clock.address(), "Refresh command sent");
                CommandOutcome::Applied
            }
            Err(err) => {
                tracing::error!(
                    device = %self.clock.address(),
                    error = %err,
                    "Error sending refresh command"
                );
                CommandOutcome::Failed(err)
            }
        }
    }
}

impl Entity for RefreshButton {
    fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(
            &self.clock,
            "refresh",
            "Smart Clock Refresh",
            Some("mdi:refresh"),
            Platform::Button,
        )
    }

    fn state_value(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

impl Commandable for RefreshButton {
    async fn dispatch(&self, command: EntityCommand) -> CommandOutcome {
        match command {
            EntityCommand::Press => self.press().await,
            _ => CommandOutcome::Unsupported,
        }
    }
}
