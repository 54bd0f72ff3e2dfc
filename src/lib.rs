// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Clock Lib - home-automation integration core for the Smart Clock.
//!
//! The Smart Clock is a networked display that exposes a small JSON REST API.
//! This library provides the pieces a home-automation host needs to integrate
//! it: entity registration, one HTTP call per entity operation, host-driven
//! polling, and setup validation.
//!
//! # Entities
//!
//! - **Display light**: brightness on the host's 0-255 scale, on/off
//! - **Tab select**: `clock`, `audio`, `settings`, `info`
//! - **Refresh button**: reloads the display
//! - **Snapclient sensor**: whether the snapcast client runs
//! - **Audio stream sensor**: audio stream status
//!
//! # Quick Start
//!
//! ## Setup
//!
//! ```no_run
//! use smart_clock_lib::setup::{SetupInput, validate_input};
//!
//! #[tokio::main]
//! async fn main() {
//!     let input = SetupInput::new("192.168.1.40");
//!     match validate_input(&input).await {
//!         Ok(info) => println!("found {}", info.title),
//!         Err(err) => println!("setup failed: {}", err.code()),
//!     }
//! }
//! ```
//!
//! ## Entities and Polling
//!
//! ```no_run
//! use smart_clock_lib::{Commandable, EntityCommand, HostBrightness, SmartClock};
//!
//! #[tokio::main]
//! async fn main() -> smart_clock_lib::Result<()> {
//!     let clock = SmartClock::http("192.168.1.40").build().await?;
//!     let entities = clock.entities();
//!
//!     // Host commands never fail; the outcome says what happened
//!     let outcome = entities
//!         .light
//!         .dispatch(EntityCommand::TurnOn {
//!             brightness: Some(HostBrightness::new(204)),
//!         })
//!         .await;
//!     println!("{outcome:?}");
//!
//!     // The host drives polling on its own tick
//!     let report = clock.poll_scheduler().poll_cycle().await;
//!     println!("{} entities changed", report.changed_count());
//!
//!     clock.unload();
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod entity;
pub mod error;
pub mod poll;
pub mod protocol;
pub mod response;
pub mod setup;
pub mod state;
pub mod types;

pub use command::{BrightnessCommand, Command, Endpoint, TabCommand};
pub use device::{SmartClock, SmartClockBuilder};
pub use entity::{
    AudioStreamSensor, ClockLight, CommandOutcome, Commandable, DeviceInfo, Entity,
    EntityCommand, EntityDescriptor, Platform, Pollable, RefreshButton, SmartClockEntities,
    SnapStatusSensor, TabSelect,
};
pub use error::{ClientError, Error, ParseError, Result, SetupError, ValueError};
pub use poll::{PollOutcome, PollReport, PollScheduler};
pub use protocol::{DeviceAddress, HttpClient, HttpConfig};
pub use setup::{ConfigFlow, FlowResult, SetupInfo, SetupInput, validate_input};
pub use state::{EntityKind, EntityState, StateCache};
pub use types::{BinaryStatus, Brightness, HostBrightness, Tab};
