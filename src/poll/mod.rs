// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-driven polling.
//!
//! The host owns the cadence: it calls [`PollScheduler::poll_cycle`] on its
//! own tick and this crate never spawns a background task. A cycle issues at
//! most one request per entity, with the entities polled concurrently.

mod guard;

pub use guard::{InFlight, InFlightGuard};

use std::collections::BTreeMap;
use std::time::Duration;

use crate::entity::{
    AudioStreamSensor, ClockLight, Pollable, SmartClockEntities, SnapStatusSensor, TabSelect,
};
use crate::error::ClientError;
use crate::state::EntityKind;
use crate::types::BinaryStatus;

/// What one entity poll did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The device answered and the cache was overwritten.
    Updated {
        /// Whether the cached value changed.
        changed: bool,
    },
    /// An actuator poll failed; the last known value is kept.
    Stale(ClientError),
    /// A sensor poll failed; the sensor now reports `status`.
    Degraded {
        /// `error` or `unavailable`.
        status: BinaryStatus,
        /// The underlying failure.
        error: ClientError,
    },
    /// A previous poll of this entity has not finished.
    Skipped,
}

impl PollOutcome {
    /// Returns the failure, if the poll failed.
    #[must_use]
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Stale(error) | Self::Degraded { error, .. } => Some(error),
            Self::Updated { .. } | Self::Skipped => None,
        }
    }
}

/// Outcome of one poll cycle, per entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    outcomes: BTreeMap<EntityKind, PollOutcome>,
}

impl PollReport {
    /// Returns the outcome for one entity.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> Option<&PollOutcome> {
        self.outcomes.get(&kind)
    }

    /// Iterates over entities whose poll failed.
    pub fn failures(&self) -> impl Iterator<Item = (EntityKind, &ClientError)> {
        self.outcomes
            .iter()
            .filter_map(|(kind, outcome)| outcome.error().map(|e| (*kind, e)))
    }

    /// Returns `true` if no poll failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Returns the number of entities whose cached value changed.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| matches!(o, PollOutcome::Updated { changed: true }))
            .count()
    }
}

/// Polls every pollable entity of one device.
///
/// # Examples
///
/// ```no_run
/// use smart_clock_lib::SmartClock;
///
/// # async fn example() -> smart_clock_lib::Result<()> {
/// let clock = SmartClock::http("192.168.1.40").build().await?;
/// let scheduler = clock.poll_scheduler();
///
/// let report = scheduler.poll_cycle().await;
/// for (kind, err) in report.failures() {
///     println!("{kind} poll failed: {err}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PollScheduler {
    light: ClockLight,
    tab: TabSelect,
    snap_status: SnapStatusSensor,
    audio_stream: AudioStreamSensor,
}

impl PollScheduler {
    /// Refresh cadence hosts are advised to use.
    pub const SUGGESTED_INTERVAL: Duration = Duration::from_secs(30);

    /// Creates a scheduler over the pollable entities of `entities`.
    #[must_use]
    pub fn new(entities: &SmartClockEntities) -> Self {
        Self {
            light: entities.light.clone(),
            tab: entities.tab.clone(),
            snap_status: entities.snap_status.clone(),
            audio_stream: entities.audio_stream.clone(),
        }
    }

    /// Runs one poll cycle.
    pub async fn poll_cycle(&self) -> PollReport {
        let (light, tab, snap_status, audio_stream) = tokio::join!(
            self.light.update(),
            self.tab.update(),
            self.snap_status.update(),
            self.audio_stream.update(),
        );

        let outcomes = BTreeMap::from([
            (self.light.kind(), light),
            (self.tab.kind(), tab),
            (self.snap_status.kind(), snap_status),
            (self.audio_stream.kind(), audio_stream),
        ]);
        let report = PollReport { outcomes };

        tracing::debug!(
            changed = report.changed_count(),
            failed = report.failures().count(),
            "Poll cycle finished"
        );
        report
    }
}
