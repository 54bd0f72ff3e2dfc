// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-level commands without parameters.

use crate::command::{Command, Endpoint};

/// Reloads the display on every connected screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshCommand;

impl Command for RefreshCommand {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Refresh
    }
}

/// Queries whether the snapcast client is running on the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapStatusCommand;

impl Command for SnapStatusCommand {
    fn endpoint(&self) -> Endpoint {
        Endpoint::SnapStatus
    }
}

/// Queries the device configuration (timezone).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigCommand;

impl Command for ConfigCommand {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Config
    }
}
