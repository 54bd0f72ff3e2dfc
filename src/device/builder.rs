// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Clock context builder.

use std::sync::Arc;
use std::time::Duration;

use crate::device::SmartClock;
use crate::error::{Error, SetupError};
use crate::protocol::HttpConfig;
use crate::setup;

/// Builder for a [`SmartClock`] context.
///
/// # Examples
///
/// ```no_run
/// use smart_clock_lib::SmartClock;
/// use std::time::Duration;
///
/// # async fn example() -> smart_clock_lib::Result<()> {
/// // Checks that the device answers before handing out the context
/// let clock = SmartClock::http("192.168.1.40").build().await?;
///
/// // No network access; use for entries that were validated at setup time
/// let clock = SmartClock::http("192.168.1.40")
///     .with_port(9000)
///     .with_timeout(Duration::from_secs(5))
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SmartClockBuilder {
    config: HttpConfig,
}

impl SmartClockBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the context after checking the device is reachable.
    ///
    /// # Errors
    ///
    /// Returns `Error::Setup` if the address is invalid or the device does not
    /// answer `GET /api/brightness` with a 200.
    pub async fn build(self) -> Result<Arc<SmartClock>, Error> {
        let client = self
            .config
            .into_client()
            .map_err(SetupError::CannotConnect)?;
        setup::check_reachable(&client).await?;
        Ok(Arc::new(SmartClock::new(client)))
    }

    /// Builds the context without contacting the device.
    ///
    /// # Errors
    ///
    /// Returns `Error::Client` if the address is invalid or the HTTP client
    /// cannot be created.
    pub fn build_without_probe(self) -> Result<Arc<SmartClock>, Error> {
        let client = self.config.into_client()?;
        Ok(Arc::new(SmartClock::new(client)))
    }
}
