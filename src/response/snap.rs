// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapcast client status response parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::types::BinaryStatus;

/// Response from `GET /api/snap/status`.
///
/// The device answers
/// `{"running": true, "message": "Snapclient is running"}`.
///
/// `running` is read by truthiness: `true`, a nonzero number, or a non-empty
/// string, array or object means running. Anything else, including a missing
/// field, means stopped.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::response::SnapStatusResponse;
/// use smart_clock_lib::types::BinaryStatus;
///
/// let json = r#"{"running": false, "message": "Snapclient not running"}"#;
/// let response: SnapStatusResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.status(), BinaryStatus::Stopped);
/// assert_eq!(response.message(), Some("Snapclient not running"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapStatusResponse {
    #[serde(default)]
    running: Value,

    #[serde(default)]
    message: Option<String>,
}

impl SnapStatusResponse {
    /// Returns `true` if the snapcast client is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        is_truthy(&self.running)
    }

    /// Returns the sensor status for this response.
    #[must_use]
    pub fn status(&self) -> BinaryStatus {
        BinaryStatus::from(self.is_running())
    }

    /// Returns the human-readable message, if the device sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
