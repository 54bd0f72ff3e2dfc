// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status sensor values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ValueError};

/// The value reported by a status sensor.
///
/// Status sensors have no intent of their own, so unlike actuators they
/// surface poll failures directly: [`BinaryStatus::Unavailable`] when the
/// device could not be reached, [`BinaryStatus::Error`] when it answered badly.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::types::BinaryStatus;
/// use smart_clock_lib::ClientError;
///
/// assert_eq!(BinaryStatus::from(true), BinaryStatus::Running);
/// assert_eq!(
///     BinaryStatus::from_failure(&ClientError::BadStatus(500)),
///     BinaryStatus::Error
/// );
/// assert_eq!(BinaryStatus::default().as_str(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryStatus {
    /// The watched process is running.
    Running,
    /// The watched process is not running.
    Stopped,
    /// The device answered with an error.
    Error,
    /// The device could not be reached.
    Unavailable,
    /// The stream is active.
    Active,
    /// Nothing observed yet.
    #[default]
    Unknown,
}

impl BinaryStatus {
    /// Returns the state string shown by the host.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
            Self::Unavailable => "unavailable",
            Self::Active => "active",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a failed poll to the status a sensor should report.
    #[must_use]
    pub fn from_failure(err: &ClientError) -> Self {
        if err.is_unavailable() {
            Self::Unavailable
        } else {
            Self::Error
        }
    }

    /// Returns `true` for the two failure states.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::Unavailable)
    }
}

impl From<bool> for BinaryStatus {
    fn from(running: bool) -> Self {
        if running { Self::Running } else { Self::Stopped }
    }
}

impl fmt::Display for BinaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "stopped" => Ok(Self::Stopped),
            "error" => Ok(Self::Error),
            "unavailable" => Ok(Self::Unavailable),
            "active" => Ok(Self::Active),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ValueError::InvalidStatus(s.to_string())),
        }
    }
}
