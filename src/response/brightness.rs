// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness response parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::types::Brightness;

/// Response from `GET /api/brightness`.
///
/// The device answers `{"brightness": 80}`. A missing or non-numeric field
/// falls back to [`Brightness::MID`]; a value outside 0-100 is clamped.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::response::BrightnessResponse;
///
/// let response: BrightnessResponse = serde_json::from_str(r#"{"brightness": 80}"#).unwrap();
/// assert_eq!(response.brightness().value(), 80);
///
/// let negative: BrightnessResponse = serde_json::from_str(r#"{"brightness": -5}"#).unwrap();
/// assert_eq!(negative.brightness().value(), 0);
///
/// let empty: BrightnessResponse = serde_json::from_str("{}").unwrap();
/// assert_eq!(empty.brightness().value(), 50);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrightnessResponse {
    #[serde(default)]
    brightness: Option<Value>,
}

impl BrightnessResponse {
    /// Returns the reported brightness, or the default if it was missing or
    /// not a number.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        let Some(raw) = self.reported() else {
            tracing::debug!("brightness missing from response, using default");
            return Brightness::default();
        };

        // Floats round to the nearest level
        #[allow(clippy::cast_possible_truncation)]
        let number = raw.as_i64().or_else(|| raw.as_f64().map(|f| f.round() as i64));
        let Some(number) = number else {
            tracing::warn!(%raw, "brightness is not a number, using default");
            return Brightness::default();
        };

        let clamped = number.clamp(0, 100);
        if clamped != number {
            tracing::warn!(raw = number, "brightness out of range, clamping");
        }
        // Safe: clamped to 0..=100
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Brightness::clamped(clamped as u8)
    }

    /// Returns `true` if the device actually reported a value.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.reported().is_some()
    }

    fn reported(&self) -> Option<&Value> {
        self.brightness.as_ref().filter(|v| !v.is_null())
    }
}
