// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Displayed tab exposed as a select entity.

use std::sync::Arc;

use crate::device::SmartClock;
use crate::poll::PollOutcome;
use crate::state::EntityKind;
use crate::types::Tab;

use super::{CommandOutcome, Commandable, Entity, EntityCommand, EntityDescriptor, Platform, Pollable, record};

/// Selector for the page shown on the display.
#[derive(Debug, Clone)]
pub struct TabSelect {
    clock: Arc<SmartClock>,
}

impl TabSelect {
    pub(crate) fn new(clock: Arc<SmartClock>) -> Self {
        Self { clock }
    }

    /// Returns the option names offered to the host.
    #[must_use]
    pub fn options(&self) -> Vec<&'static str> {
        Tab::options()
    }

    /// Returns the cached tab.
    #[must_use]
    pub fn current_option(&self) -> Tab {
        self.clock.cache().tab()
    }

    /// Selects a tab by name.
    ///
    /// Unknown names are rejected without contacting the device.
    pub async fn select_option(&self, option: &str) -> CommandOutcome {
        match option.parse::<Tab>() {
            Ok(tab) => self.select(tab).await,
            Err(err) => {
                tracing::warn!(option, "Rejected unknown tab");
                CommandOutcome::Rejected(err)
            }
        }
    }

    /// Selects a tab.
    pub async fn select(&self, tab: Tab) -> CommandOutcome {
        match self.clock.client().set_tab(tab).await {
            Ok(()) => {
                record(&self.clock, EntityKind::Tab, tab.into());
                tracing::info!(device = %self.clock.address(), %tab, "Tab set");
                CommandOutcome::Applied
            }
            Err(err) => {
                tracing::error!(
                    device = %self.clock.address(),
                    %tab,
                    error = %err,
                    "Failed to set tab"
                );
                CommandOutcome::Failed(err)
            }
        }
    }
}

impl Entity for TabSelect {
    fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(
            &self.clock,
            "tab",
            "Smart Clock Tab",
            Some("mdi:tab"),
            Platform::Select,
        )
    }

    fn state_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.current_option().as_str())
    }
}

impl Pollable for TabSelect {
    fn kind(&self) -> EntityKind {
        EntityKind::Tab
    }

    async fn update(&self) -> PollOutcome {
        let Some(_guard) = self.clock.in_flight().try_acquire(EntityKind::Tab) else {
            tracing::debug!(device = %self.clock.address(), "Tab poll still in flight, skipping");
            return PollOutcome::Skipped;
        };

        match self.clock.client().get_tab().await {
            Ok(tab) => {
                let changed = record(&self.clock, EntityKind::Tab, tab.into());
                PollOutcome::Updated { changed }
            }
            Err(err) => {
                tracing::error!(device = %self.clock.address(), error = %err, "Error getting tab");
                PollOutcome::Stale(err)
            }
        }
    }
}

impl Commandable for TabSelect {
    async fn dispatch(&self, command: EntityCommand) -> CommandOutcome {
        match command {
            EntityCommand::SelectOption { option } => self.select_option(&option).await,
            _ => CommandOutcome::Unsupported,
        }
    }
}
