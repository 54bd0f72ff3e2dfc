// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-entity state values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BinaryStatus, Brightness, Tab};

/// Identifies one entity of a Smart Clock, and therefore one cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Display brightness (light entity).
    Brightness,
    /// Displayed tab (select entity).
    Tab,
    /// Snapcast client status (sensor entity).
    SnapStatus,
    /// Audio stream status (sensor entity).
    AudioStream,
}

impl EntityKind {
    /// Every kind that holds state.
    pub const ALL: [Self; 4] = [
        Self::Brightness,
        Self::Tab,
        Self::SnapStatus,
        Self::AudioStream,
    ];

    /// Returns the stable name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Tab => "tab",
            Self::SnapStatus => "snap_status",
            Self::AudioStream => "audio_stream",
        }
    }

    /// Returns the state a slot of this kind holds before any observation.
    #[must_use]
    pub fn default_state(&self) -> EntityState {
        match self {
            Self::Brightness => EntityState::Brightness(Brightness::default()),
            Self::Tab => EntityState::TabSelection(Tab::default()),
            Self::SnapStatus | Self::AudioStream => {
                EntityState::BinaryStatus(BinaryStatus::default())
            }
        }
    }

    /// Returns `true` if `state` belongs in a slot of this kind.
    #[must_use]
    pub fn accepts(&self, state: &EntityState) -> bool {
        matches!(
            (self, state),
            (Self::Brightness, EntityState::Brightness(_))
                | (Self::Tab, EntityState::TabSelection(_))
                | (
                    Self::SnapStatus | Self::AudioStream,
                    EntityState::BinaryStatus(_)
                )
        )
    }

    /// Returns `true` for entities that only observe and never command.
    #[must_use]
    pub const fn is_sensor(&self) -> bool {
        matches!(self, Self::SnapStatus | Self::AudioStream)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last known value of one entity.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::state::EntityState;
/// use smart_clock_lib::types::Tab;
///
/// let state = EntityState::TabSelection(Tab::Audio);
/// assert_eq!(state.as_tab(), Some(Tab::Audio));
/// assert_eq!(state.as_brightness(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EntityState {
    /// Canonical 0-100 brightness.
    Brightness(Brightness),
    /// Selected tab.
    TabSelection(Tab),
    /// Status sensor value.
    BinaryStatus(BinaryStatus),
}

impl EntityState {
    /// Returns the variant name, for diagnostics.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Brightness(_) => "brightness",
            Self::TabSelection(_) => "tab_selection",
            Self::BinaryStatus(_) => "binary_status",
        }
    }

    /// Returns the brightness, if this is a brightness state.
    #[must_use]
    pub const fn as_brightness(&self) -> Option<Brightness> {
        match self {
            Self::Brightness(level) => Some(*level),
            _ => None,
        }
    }

    /// Returns the tab, if this is a tab state.
    #[must_use]
    pub const fn as_tab(&self) -> Option<Tab> {
        match self {
            Self::TabSelection(tab) => Some(*tab),
            _ => None,
        }
    }

    /// Returns the status, if this is a status state.
    #[must_use]
    pub const fn as_status(&self) -> Option<BinaryStatus> {
        match self {
            Self::BinaryStatus(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<Brightness> for EntityState {
    fn from(value: Brightness) -> Self {
        Self::Brightness(value)
    }
}

impl From<Tab> for EntityState {
    fn from(value: Tab) -> Self {
        Self::TabSelection(value)
    }
}

impl From<BinaryStatus> for EntityState {
    fn from(value: BinaryStatus) -> Self {
        Self::BinaryStatus(value)
    }
}
