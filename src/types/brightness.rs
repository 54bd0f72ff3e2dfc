// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness types and the conversion between device and host scales.
//!
//! The device speaks a canonical 0-100 scale. Hosts usually present
//! brightness on a 0-255 scale. [`Brightness`] is what gets cached and sent
//! over the wire; [`HostBrightness`] only exists at the light entity boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Display brightness on the canonical 0-100 scale used by the device API.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::types::Brightness;
///
/// let level = Brightness::new(80).unwrap();
/// assert_eq!(level.value(), 80);
/// assert!(level.is_on());
///
/// assert!(!Brightness::OFF.is_on());
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Display off.
    pub const OFF: Self = Self(0);

    /// Mid value, used before the first successful poll and when the device
    /// omits the field.
    pub const MID: Self = Self(50);

    /// Full brightness.
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// ```
    /// use smart_clock_lib::types::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(150).value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the canonical value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the display is lit.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.0 > 0
    }

    /// Converts to the 0-255 host scale, rounding to nearest.
    #[must_use]
    pub fn to_host(self) -> HostBrightness {
        let scaled = (u16::from(self.0) * 255 + 50) / 100;
        // Safe: self.0 <= 100, so scaled <= 255
        #[allow(clippy::cast_possible_truncation)]
        HostBrightness(scaled as u8)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MID
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

/// Brightness on the 0-255 scale most automation hosts present.
///
/// Every `u8` is a valid host brightness, so construction is infallible.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::types::{Brightness, HostBrightness};
///
/// let host = HostBrightness::new(204);
/// assert_eq!(host.to_canonical(), Brightness::new(80).unwrap());
/// assert_eq!(Brightness::new(80).unwrap().to_host(), host);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostBrightness(u8);

impl HostBrightness {
    /// Full brightness on the host scale.
    pub const MAX: Self = Self(255);

    /// Creates a host brightness value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw host value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Converts to the canonical 0-100 scale, rounding to nearest.
    ///
    /// A nonzero host value never maps to 0, so asking for a dim light
    /// does not switch it off.
    #[must_use]
    pub fn to_canonical(self) -> Brightness {
        let scaled = (u16::from(self.0) * 100 + 127) / 255;
        // Safe: self.0 <= 255, so scaled <= 100
        #[allow(clippy::cast_possible_truncation)]
        let scaled = scaled as u8;
        if self.0 > 0 && scaled == 0 {
            Brightness(1)
        } else {
            Brightness(scaled)
        }
    }
}

impl Default for HostBrightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for HostBrightness {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
