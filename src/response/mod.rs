// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Smart Clock JSON responses.
//!
//! Missing fields are never an error: every response type fills them with a
//! documented default. Only a body that is not JSON at all fails to parse.
//!
//! | Response | Field | Default |
//! |----------|-------|---------|
//! | [`BrightnessResponse`] | `brightness` | 50 |
//! | [`TabResponse`] | `tab` | `clock` |
//! | [`SnapStatusResponse`] | `running` | `false` |
//! | [`DeviceConfigResponse`] | `timezone` | `UTC` |

mod brightness;
mod config;
mod snap;
mod tab;

pub use brightness::BrightnessResponse;
pub use config::DeviceConfigResponse;
pub use snap::SnapStatusResponse;
pub use tab::TabResponse;
