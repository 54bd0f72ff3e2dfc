// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity state tracking.
//!
//! The [`StateCache`] holds the last value each entity successfully observed
//! or set. Brightness is always stored on the canonical 0-100 scale; host
//! scale conversion happens in the light entity, never here.
//!
//! # Examples
//!
//! ```
//! use smart_clock_lib::state::{EntityKind, EntityState, StateCache};
//! use smart_clock_lib::types::BinaryStatus;
//!
//! let cache = StateCache::new();
//! cache.observe(EntityKind::SnapStatus, BinaryStatus::Running.into()).unwrap();
//!
//! assert_eq!(
//!     cache.get(EntityKind::SnapStatus),
//!     EntityState::BinaryStatus(BinaryStatus::Running)
//! );
//! ```

mod cache;
mod entity_state;

pub use cache::{CacheSnapshot, StateCache};
pub use entity_state::{EntityKind, EntityState};
