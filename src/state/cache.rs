// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory cache of last known entity values.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::Serialize;

use crate::error::ValueError;
use crate::types::{BinaryStatus, Brightness, Tab};

use super::{EntityKind, EntityState};

/// Last known value of every entity of one device.
///
/// Each kind has its own slot behind its own lock, so entities never contend
/// with each other. There is no eviction and no TTL: a value stays until the
/// owning entity overwrites it.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::state::{EntityKind, StateCache};
/// use smart_clock_lib::types::{Brightness, Tab};
///
/// let cache = StateCache::new();
/// assert_eq!(cache.tab(), Tab::Clock);
///
/// let changed = cache.observe(EntityKind::Brightness, Brightness::new(80).unwrap().into()).unwrap();
/// assert!(changed);
/// assert_eq!(cache.brightness().value(), 80);
/// ```
#[derive(Debug)]
pub struct StateCache {
    brightness: RwLock<EntityState>,
    tab: RwLock<EntityState>,
    snap_status: RwLock<EntityState>,
    audio_stream: RwLock<EntityState>,
}

impl StateCache {
    /// Creates a cache with every slot at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            brightness: RwLock::new(EntityKind::Brightness.default_state()),
            tab: RwLock::new(EntityKind::Tab.default_state()),
            snap_status: RwLock::new(EntityKind::SnapStatus.default_state()),
            audio_stream: RwLock::new(EntityKind::AudioStream.default_state()),
        }
    }

    fn slot(&self, kind: EntityKind) -> &RwLock<EntityState> {
        match kind {
            EntityKind::Brightness => &self.brightness,
            EntityKind::Tab => &self.tab,
            EntityKind::SnapStatus => &self.snap_status,
            EntityKind::AudioStream => &self.audio_stream,
        }
    }

    /// Overwrites the value of a slot.
    ///
    /// Returns `true` if the stored value changed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::StateKindMismatch` if `state` does not belong in
    /// the `kind` slot. The slot is left untouched.
    pub fn observe(&self, kind: EntityKind, state: EntityState) -> Result<bool, ValueError> {
        if !kind.accepts(&state) {
            return Err(ValueError::StateKindMismatch {
                kind: kind.as_str(),
                state: state.variant_name(),
            });
        }

        let mut slot = self.slot(kind).write();
        let changed = *slot != state;
        *slot = state;
        drop(slot);

        if changed {
            tracing::trace!(%kind, ?state, "Entity state changed");
        }
        Ok(changed)
    }

    /// Returns the last value of a slot, or its default if never observed.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> EntityState {
        *self.slot(kind).read()
    }

    /// Returns the cached canonical brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.get(EntityKind::Brightness)
            .as_brightness()
            .unwrap_or_default()
    }

    /// Returns the cached tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.get(EntityKind::Tab).as_tab().unwrap_or_default()
    }

    /// Returns the cached status of a sensor slot.
    ///
    /// Non-sensor kinds report [`BinaryStatus::Unknown`].
    #[must_use]
    pub fn status(&self, kind: EntityKind) -> BinaryStatus {
        self.get(kind).as_status().unwrap_or_default()
    }

    /// Returns a copy of every slot.
    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            states: EntityKind::ALL
                .iter()
                .map(|kind| (*kind, self.get(*kind)))
                .collect(),
        }
    }
}

impl Default for StateCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a [`StateCache`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    states: BTreeMap<EntityKind, EntityState>,
}

impl CacheSnapshot {
    /// Returns the value of one slot.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> Option<EntityState> {
        self.states.get(&kind).copied()
    }

    /// Iterates over every slot in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, EntityState)> + '_ {
        self.states.iter().map(|(k, v)| (*k, *v))
    }
}
