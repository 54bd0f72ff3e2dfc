// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status sensors.

use std::sync::Arc;

use serde_json::json;

use crate::device::SmartClock;
use crate::poll::PollOutcome;
use crate::state::EntityKind;
use crate::types::BinaryStatus;

use super::{Entity, EntityDescriptor, Platform, Pollable, record};

/// Reports whether the snapcast client is running on the device.
///
/// Unlike the actuators, a failed poll is surfaced immediately: `error` when
/// the device answered badly, `unavailable` when it could not be reached.
#[derive(Debug, Clone)]
pub struct SnapStatusSensor {
    clock: Arc<SmartClock>,
}

impl SnapStatusSensor {
    pub(crate) fn new(clock: Arc<SmartClock>) -> Self {
        Self { clock }
    }

    /// Returns the cached status.
    #[must_use]
    pub fn state(&self) -> BinaryStatus {
        self.clock.cache().status(EntityKind::SnapStatus)
    }

    /// Returns the message from the last successful poll.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.clock.snap_message()
    }
}

impl Entity for SnapStatusSensor {
    fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(
            &self.clock,
            "snapclient",
            "Smart Clock Snapclient",
            Some("mdi:music"),
            Platform::Sensor,
        )
    }

    fn state_value(&self) -> serde_json::Value {
        json!({
            "state": self.state().as_str(),
            "message": self.message(),
        })
    }
}

impl Pollable for SnapStatusSensor {
    fn kind(&self) -> EntityKind {
        EntityKind::SnapStatus
    }

    async fn update(&self) -> PollOutcome {
        let Some(_guard) = self.clock.in_flight().try_acquire(EntityKind::SnapStatus) else {
            tracing::debug!(device = %self.clock.address(), "Snapclient poll still in flight, skipping");
            return PollOutcome::Skipped;
        };

        match self.clock.client().snap_status().await {
            Ok(response) => {
                self.clock
                    .set_snap_message(response.message().map(str::to_string));
                let changed = record(&self.clock, EntityKind::SnapStatus, response.status().into());
                PollOutcome::Updated { changed }
            }
            Err(err) => {
                let status = BinaryStatus::from_failure(&err);
                tracing::error!(
                    device = %self.clock.address(),
                    error = %err,
                    %status,
                    "Error getting snapclient status"
                );
                record(&self.clock, EntityKind::SnapStatus, status.into());
                PollOutcome::Degraded { status, error: err }
            }
        }
    }
}

/// Reports the audio stream as active.
///
/// The device exposes no audio stream endpoint, so this sensor never
/// contacts it: each poll reports `active`.
#[derive(Debug, Clone)]
pub struct AudioStreamSensor {
    clock: Arc<SmartClock>,
}

impl AudioStreamSensor {
    pub(crate) fn new(clock: Arc<SmartClock>) -> Self {
        Self { clock }
    }

    /// Returns the cached status.
    #[must_use]
    pub fn state(&self) -> BinaryStatus {
        self.clock.cache().status(EntityKind::AudioStream)
    }
}

impl Entity for AudioStreamSensor {
    fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(
            &self.clock,
            "audio_stream",
            "Smart Clock Audio Stream",
            Some("mdi:speaker"),
            Platform::Sensor,
        )
    }

    fn state_value(&self) -> serde_json::Value {
        json!({ "state": self.state().as_str() })
    }
}

impl Pollable for AudioStreamSensor {
    fn kind(&self) -> EntityKind {
        EntityKind::AudioStream
    }

    async fn update(&self) -> PollOutcome {
        let Some(_guard) = self.clock.in_flight().try_acquire(EntityKind::AudioStream) else {
            return PollOutcome::Skipped;
        };
        let changed = record(&self.clock, EntityKind::AudioStream, BinaryStatus::Active.into());
        PollOutcome::Updated { changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HttpConfig;

    fn clock() -> Arc<SmartClock> {
        SmartClock::with_config(HttpConfig::new("10.0.0.5"))
            .build_without_probe()
            .unwrap()
    }

    #[test]
    fn sensors_start_unknown() {
        let entities = clock().entities();
        assert_eq!(entities.snap_status.state(), BinaryStatus::Unknown);
        assert_eq!(entities.audio_stream.state(), BinaryStatus::Unknown);
        assert!(entities.snap_status.message().is_none());
    }

    #[test]
    fn sensor_descriptors() {
        let entities = clock().entities();
        assert_eq!(
            entities.snap_status.descriptor().unique_id,
            "smart_clock_10.0.0.5_8080_snapclient"
        );
        assert_eq!(
            entities.audio_stream.descriptor().unique_id,
            "smart_clock_10.0.0.5_8080_audio_stream"
        );
    }

    #[tokio::test]
    async fn audio_stream_reports_active_without_network() {
        let sensor = clock().entities().audio_stream;
        assert_eq!(sensor.update().await, PollOutcome::Updated { changed: true });
        assert_eq!(sensor.state(), BinaryStatus::Active);
        assert_eq!(sensor.update().await, PollOutcome::Updated { changed: false });
    }
}
