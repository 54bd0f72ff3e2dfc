// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tab response parsing.

use serde::Deserialize;

use crate::types::Tab;

/// Response from `GET /api/tab`.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::response::TabResponse;
/// use smart_clock_lib::types::Tab;
///
/// let response: TabResponse = serde_json::from_str(r#"{"tab": "audio"}"#).unwrap();
/// assert_eq!(response.tab(), Tab::Audio);
///
/// let empty: TabResponse = serde_json::from_str("{}").unwrap();
/// assert_eq!(empty.tab(), Tab::Clock);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabResponse {
    #[serde(default)]
    tab: Option<String>,
}

impl TabResponse {
    /// Returns the reported tab.
    ///
    /// Falls back to [`Tab::Clock`] when the field is missing or names a tab
    /// this library does not know.
    #[must_use]
    pub fn tab(&self) -> Tab {
        match self.tab.as_deref() {
            None => {
                tracing::debug!("tab missing from response, using default");
                Tab::default()
            }
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!(tab = name, "unknown tab reported, using default");
                Tab::default()
            }),
        }
    }

    /// Returns the raw tab name as reported.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.tab.as_deref()
    }
}
