// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display tab selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The page shown on the clock display.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::types::Tab;
///
/// let tab: Tab = "audio".parse().unwrap();
/// assert_eq!(tab, Tab::Audio);
/// assert_eq!(tab.as_str(), "audio");
/// assert_eq!(Tab::default(), Tab::Clock);
/// assert!("radio".parse::<Tab>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Clock face.
    #[default]
    Clock,
    /// Audio player.
    Audio,
    /// Settings page.
    Settings,
    /// Device information page.
    Info,
}

impl Tab {
    /// All tabs, in the order the select entity offers them.
    pub const ALL: [Self; 4] = [Self::Clock, Self::Audio, Self::Settings, Self::Info];

    /// Returns the wire name of the tab.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Audio => "audio",
            Self::Settings => "settings",
            Self::Info => "info",
        }
    }

    /// Returns the option names offered to the host.
    #[must_use]
    pub fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(Self::Clock),
            "audio" => Ok(Self::Audio),
            "settings" => Ok(Self::Settings),
            "info" => Ok(Self::Info),
            _ => Err(ValueError::InvalidTab(s.to_string())),
        }
    }
}
