// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Clock command definitions.
//!
//! Every device operation is one request against a fixed REST endpoint.
//! This module provides typed representations of those requests.
//!
//! # Endpoint Table
//!
//! | Command | Method | Path | Body |
//! |---------|--------|------|------|
//! | [`BrightnessCommand::Get`] | GET | `/api/brightness` | - |
//! | [`BrightnessCommand::Set`] | POST | `/api/brightness/set` | `{"brightness": 0-100}` |
//! | [`TabCommand::Get`] | GET | `/api/tab` | - |
//! | [`TabCommand::Set`] | POST | `/api/tab/set` | `{"tab": "..."}` |
//! | [`RefreshCommand`] | POST | `/api/refresh` | - |
//! | [`SnapStatusCommand`] | GET | `/api/snap/status` | - |
//! | [`ConfigCommand`] | GET | `/api/config` | - |
//!
//! # Examples
//!
//! ```
//! use smart_clock_lib::command::{BrightnessCommand, Command, Method};
//! use smart_clock_lib::types::Brightness;
//!
//! let cmd = BrightnessCommand::Set(Brightness::new(80).unwrap());
//! assert_eq!(cmd.endpoint().method(), Method::Post);
//! assert_eq!(cmd.endpoint().path(), "/api/brightness/set");
//! assert_eq!(cmd.body(), Some(serde_json::json!({"brightness": 80})));
//! ```

mod brightness;
mod device;
mod tab;

pub use brightness::BrightnessCommand;
pub use device::{ConfigCommand, RefreshCommand, SnapStatusCommand};
pub use tab::TabCommand;

use std::fmt;

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only query.
    Get,
    /// State change.
    Post,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of REST endpoints exposed by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/brightness`
    GetBrightness,
    /// `POST /api/brightness/set`
    SetBrightness,
    /// `GET /api/tab`
    GetTab,
    /// `POST /api/tab/set`
    SetTab,
    /// `POST /api/refresh`
    Refresh,
    /// `GET /api/snap/status`
    SnapStatus,
    /// `GET /api/config`
    Config,
}

impl Endpoint {
    /// Returns the HTTP method of the endpoint.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::GetBrightness | Self::GetTab | Self::SnapStatus | Self::Config => Method::Get,
            Self::SetBrightness | Self::SetTab | Self::Refresh => Method::Post,
        }
    }

    /// Returns the URL path of the endpoint.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::GetBrightness => "/api/brightness",
            Self::SetBrightness => "/api/brightness/set",
            Self::GetTab => "/api/tab",
            Self::SetTab => "/api/tab/set",
            Self::Refresh => "/api/refresh",
            Self::SnapStatus => "/api/snap/status",
            Self::Config => "/api/config",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// A request that can be sent to a Smart Clock.
pub trait Command {
    /// Returns the endpoint this command targets.
    fn endpoint(&self) -> Endpoint;

    /// Returns the JSON request body, if any.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}
