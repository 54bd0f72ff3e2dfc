// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration response parsing.

use serde::Deserialize;

/// Response from `GET /api/config`.
///
/// ```
/// use smart_clock_lib::response::DeviceConfigResponse;
///
/// let response: DeviceConfigResponse =
///     serde_json::from_str(r#"{"timezone": "Europe/Paris"}"#).unwrap();
/// assert_eq!(response.timezone(), "Europe/Paris");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceConfigResponse {
    #[serde(default)]
    timezone: Option<String>,
}

impl DeviceConfigResponse {
    /// Timezone assumed when the device does not report one.
    pub const DEFAULT_TIMEZONE: &'static str = "UTC";

    /// Returns the device timezone.
    #[must_use]
    pub fn timezone(&self) -> &str {
        self.timezone
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .unwrap_or(Self::DEFAULT_TIMEZONE)
    }
}
