// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness commands.

use serde_json::json;

use crate::command::{Command, Endpoint};
use crate::types::Brightness;

/// Command to query or set the display brightness.
///
/// The payload always carries the canonical 0-100 value.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::command::{BrightnessCommand, Command, Endpoint};
/// use smart_clock_lib::types::Brightness;
///
/// assert_eq!(BrightnessCommand::Get.endpoint(), Endpoint::GetBrightness);
/// assert!(BrightnessCommand::Get.body().is_none());
///
/// let off = BrightnessCommand::Set(Brightness::OFF);
/// assert_eq!(off.body(), Some(serde_json::json!({"brightness": 0})));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessCommand {
    /// Query the current brightness.
    Get,
    /// Set the brightness.
    Set(Brightness),
}

impl Command for BrightnessCommand {
    fn endpoint(&self) -> Endpoint {
        match self {
            Self::Get => Endpoint::GetBrightness,
            Self::Set(_) => Endpoint::SetBrightness,
        }
    }

    fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::Get => None,
            Self::Set(level) => Some(json!({ "brightness": level.value() })),
        }
    }
}
