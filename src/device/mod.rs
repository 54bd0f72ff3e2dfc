// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-integration device context.
//!
//! A [`SmartClock`] is created once per configured device and shared by all
//! of its entities through an `Arc`. It owns everything the entities need:
//! the device address, the HTTP client (and with it the connection pool),
//! and the state cache. Entities receive it at construction; nothing is
//! looked up from global state.
//!
//! ```no_run
//! use smart_clock_lib::SmartClock;
//!
//! # async fn example() -> smart_clock_lib::Result<()> {
//! let clock = SmartClock::http("192.168.1.40")
//!     .with_port(8080)
//!     .build()
//!     .await?;
//!
//! let entities = clock.entities();
//! entities.tab.select_option("audio").await;
//! entities.light.turn_off().await;
//!
//! clock.poll_scheduler().poll_cycle().await;
//! println!("{:?}", clock.snapshot());
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::SmartClockBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::entity::{
    AudioStreamSensor, ClockLight, DeviceInfo, RefreshButton, SmartClockEntities,
    SnapStatusSensor, TabSelect,
};
use crate::poll::{InFlight, PollScheduler};
use crate::protocol::{DeviceAddress, HttpClient, HttpConfig};
use crate::setup::SetupInput;
use crate::state::{CacheSnapshot, StateCache};

/// Shared context of one configured Smart Clock.
#[derive(Debug)]
pub struct SmartClock {
    client: HttpClient,
    cache: StateCache,
    in_flight: InFlight,
    snap_message: RwLock<Option<String>>,
    device_info: DeviceInfo,
}

impl SmartClock {
    /// Creates a context around an HTTP client, with every entity state at its
    /// default.
    pub(crate) fn new(client: HttpClient) -> Self {
        let device_info = DeviceInfo::for_address(client.address());
        Self {
            client,
            cache: StateCache::new(),
            in_flight: InFlight::default(),
            snap_message: RwLock::new(None),
            device_info,
        }
    }

    /// Creates a builder for the device at `host` on the default port.
    #[must_use]
    pub fn http(host: impl Into<String>) -> SmartClockBuilder {
        SmartClockBuilder::new(HttpConfig::new(host))
    }

    /// Creates a builder from an `HttpConfig`.
    #[must_use]
    pub fn with_config(config: HttpConfig) -> SmartClockBuilder {
        SmartClockBuilder::new(config)
    }

    /// Creates a builder from a stored setup entry.
    #[must_use]
    pub fn from_setup(input: &SetupInput) -> SmartClockBuilder {
        SmartClockBuilder::new(input.to_config())
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        self.client.address()
    }

    /// Returns the HTTP client.
    #[must_use]
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the state cache.
    #[must_use]
    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    /// Returns the device info shared by every entity.
    #[must_use]
    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Returns the title shown for the integration entry.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Smart Clock ({})", self.address().host())
    }

    pub(crate) fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub(crate) fn snap_message(&self) -> Option<String> {
        self.snap_message.read().clone()
    }

    pub(crate) fn set_snap_message(&self, message: Option<String>) {
        *self.snap_message.write() = message;
    }

    /// Creates the entities to register with the host.
    #[must_use]
    pub fn entities(self: &Arc<Self>) -> SmartClockEntities {
        SmartClockEntities {
            light: ClockLight::new(Arc::clone(self)),
            tab: TabSelect::new(Arc::clone(self)),
            refresh: RefreshButton::new(Arc::clone(self)),
            snap_status: SnapStatusSensor::new(Arc::clone(self)),
            audio_stream: AudioStreamSensor::new(Arc::clone(self)),
        }
    }

    /// Creates a poll scheduler over this device's pollable entities.
    #[must_use]
    pub fn poll_scheduler(self: &Arc<Self>) -> PollScheduler {
        PollScheduler::new(&self.entities())
    }

    /// Returns a copy of every cached entity state.
    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        self.cache.snapshot()
    }

    /// Releases this handle on the integration entry.
    ///
    /// State is destroyed once the host has also dropped every entity.
    /// In-flight requests holding a handle are abandoned with it.
    pub fn unload(self: Arc<Self>) {
        let remaining = Arc::strong_count(&self) - 1;
        tracing::info!(
            device = %self.address(),
            remaining_handles = remaining,
            "Unloading Smart Clock"
        );
    }
}
