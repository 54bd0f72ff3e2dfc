// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device network address.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Network location of one Smart Clock.
///
/// The address doubles as the device's identity: entity unique IDs and the
/// device-info identifier are derived from [`identity`](Self::identity).
///
/// # Examples
///
/// ```
/// use smart_clock_lib::protocol::DeviceAddress;
///
/// let address = DeviceAddress::new("192.168.1.40");
/// assert_eq!(address.port(), 8080);
/// assert_eq!(address.identity(), "192.168.1.40_8080");
/// assert_eq!(address.base_url(), "http://192.168.1.40:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceAddress {
    host: String,
    port: u16,
}

impl DeviceAddress {
    /// Port the device server listens on unless told otherwise.
    pub const DEFAULT_PORT: u16 = 8080;

    /// Creates an address on the default port.
    ///
    /// Surrounding whitespace is stripped from the host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim().to_string(),
            port: Self::DEFAULT_PORT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the stable identity key `{host}_{port}`.
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{}_{}", self.host, self.port)
    }

    /// Returns `http://{host}:{port}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Checks that the host can form a URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidAddress` if the host is empty, carries a
    /// scheme, or contains whitespace or other characters that cannot appear
    /// in a hostname.
    pub fn validate(&self) -> Result<(), ClientError> {
        let host = self.host.as_str();
        if host.is_empty() {
            return Err(ClientError::InvalidAddress("host is required".to_string()));
        }
        if host.contains("://") {
            return Err(ClientError::InvalidAddress(format!(
                "host must not include a scheme: {host}"
            )));
        }
        if host.contains(['/', '?', '#', '@']) || host.contains(char::is_whitespace) {
            return Err(ClientError::InvalidAddress(format!(
                "invalid characters in host: {host}"
            )));
        }
        if self.port == 0 {
            return Err(ClientError::InvalidAddress("port must be nonzero".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
