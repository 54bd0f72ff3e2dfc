// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-poll-in-flight tracking per entity.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::state::EntityKind;

/// Tracks which entities have a poll in flight.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::poll::InFlight;
/// use smart_clock_lib::state::EntityKind;
///
/// let in_flight = InFlight::default();
/// let guard = in_flight.try_acquire(EntityKind::Tab).unwrap();
/// assert!(in_flight.try_acquire(EntityKind::Tab).is_none());
/// assert!(in_flight.try_acquire(EntityKind::Brightness).is_some());
///
/// drop(guard);
/// assert!(in_flight.try_acquire(EntityKind::Tab).is_some());
/// ```
#[derive(Debug, Default)]
pub struct InFlight {
    flags: [AtomicBool; 4],
}

impl InFlight {
    fn flag(&self, kind: EntityKind) -> &AtomicBool {
        let index = match kind {
            EntityKind::Brightness => 0,
            EntityKind::Tab => 1,
            EntityKind::SnapStatus => 2,
            EntityKind::AudioStream => 3,
        };
        &self.flags[index]
    }

    /// Marks a poll for `kind` as started.
    ///
    /// Returns `None` if one is already running. The flag clears when the
    /// guard is dropped, including when the poll future is cancelled.
    #[must_use]
    pub fn try_acquire(&self, kind: EntityKind) -> Option<InFlightGuard<'_>> {
        let flag = self.flag(kind);
        if flag.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(InFlightGuard { flag })
        }
    }

    /// Returns `true` if a poll for `kind` is running.
    #[must_use]
    pub fn is_in_flight(&self, kind: EntityKind) -> bool {
        self.flag(kind).load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag on drop.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
