// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Smart Clock control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so a command can never carry a value the device would reject.
//!
//! # Types
//!
//! - [`Brightness`] - Display brightness on the canonical 0-100 scale
//! - [`HostBrightness`] - Brightness on the 0-255 host scale
//! - [`Tab`] - Displayed page (clock, audio, settings, info)
//! - [`BinaryStatus`] - Status sensor value

mod brightness;
mod status;
mod tab;

pub use brightness::{Brightness, HostBrightness};
pub use status::BinaryStatus;
pub use tab::Tab;
