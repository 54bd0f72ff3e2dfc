// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tab selection commands.

use serde_json::json;

use crate::command::{Command, Endpoint};
use crate::types::Tab;

/// Command to query or change the displayed tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    /// Query the current tab.
    Get,
    /// Switch to a tab.
    Set(Tab),
}

impl Command for TabCommand {
    fn endpoint(&self) -> Endpoint {
        match self {
            Self::Get => Endpoint::GetTab,
            Self::Set(_) => Endpoint::SetTab,
        }
    }

    fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::Get => None,
            Self::Set(tab) => Some(json!({ "tab": tab.as_str() })),
        }
    }
}
