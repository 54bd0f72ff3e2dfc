// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for Smart Clock devices.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::command::{
    BrightnessCommand, Command, ConfigCommand, Endpoint, Method, RefreshCommand,
    SnapStatusCommand, TabCommand,
};
use crate::error::ClientError;
use crate::protocol::{DeviceAddress, DeviceResponse};
use crate::response::{BrightnessResponse, DeviceConfigResponse, SnapStatusResponse, TabResponse};
use crate::types::{Brightness, Tab};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for a Smart Clock HTTP client.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40");
/// assert_eq!(config.address().port(), 8080);
/// assert_eq!(config.timeout(), Duration::from_secs(10));
///
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(9000)
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(config.address().base_url(), "http://192.168.1.40:9000");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    address: DeviceAddress,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the specified host on the default port.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self::from_address(DeviceAddress::new(host))
    }

    /// Creates a configuration for an existing address.
    #[must_use]
    pub fn from_address(address: DeviceAddress) -> Self {
        Self {
            address,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.address = self.address.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ClientError> {
        self.address.validate()?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(HttpClient {
            base_url: self.address.base_url(),
            address: self.address,
            timeout: self.timeout,
            client,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for one Smart Clock.
///
/// Every call is one request with a bounded timeout. Only HTTP 200 counts as
/// success; the body of any other status is ignored. Nothing is retried.
///
/// Cloning is cheap and shares the connection pool.
///
/// # Examples
///
/// ```no_run
/// use smart_clock_lib::protocol::HttpConfig;
/// use smart_clock_lib::types::Tab;
///
/// # async fn example() -> Result<(), smart_clock_lib::ClientError> {
/// let client = HttpConfig::new("192.168.1.40").into_client()?;
/// client.set_tab(Tab::Audio).await?;
/// let level = client.get_brightness().await?;
/// println!("brightness is {level}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    address: DeviceAddress,
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ClientError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL for an endpoint.
    fn build_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Maps a transport failure onto the client error taxonomy.
    fn classify(&self, err: &reqwest::Error) -> ClientError {
        if err.is_timeout() {
            // Safe: timeouts beyond u64::MAX ms are not representable anyway
            #[allow(clippy::cast_possible_truncation)]
            return ClientError::Timeout(self.timeout.as_millis() as u64);
        }
        if err.is_builder() {
            return ClientError::InvalidAddress(err.to_string());
        }
        if err.is_decode() || err.is_body() {
            return ClientError::MalformedResponse(err.to_string());
        }
        ClientError::Network(err.to_string())
    }

    /// Sends a command to the device.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Timeout` if no complete response arrives within
    /// the timeout, `ClientError::BadStatus` for any status other than 200,
    /// and `ClientError::Network` for connection-level failures.
    pub async fn call<C: Command + Sync>(&self, command: &C) -> Result<DeviceResponse, ClientError> {
        let endpoint = command.endpoint();
        let url = self.build_url(endpoint);

        let mut request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = command.body() {
            request = request.json(&body);
        }

        tracing::debug!(url = %url, method = %endpoint.method(), "Sending HTTP request");

        let response = request.send().await.map_err(|e| self.classify(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(url = %url, status = status.as_u16(), "Device rejected request");
            return Err(ClientError::BadStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.classify(&e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(DeviceResponse::new(endpoint, body))
    }

    // ========== Brightness ==========

    /// Queries the display brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn get_brightness(&self) -> Result<Brightness, ClientError> {
        let response = self.call(&BrightnessCommand::Get).await?;
        let parsed: BrightnessResponse = response.parse()?;
        Ok(parsed.brightness())
    }

    /// Sets the display brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_brightness(&self, level: Brightness) -> Result<(), ClientError> {
        self.call(&BrightnessCommand::Set(level)).await.map(drop)
    }

    // ========== Tab ==========

    /// Queries the displayed tab.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn get_tab(&self) -> Result<Tab, ClientError> {
        let response = self.call(&TabCommand::Get).await?;
        let parsed: TabResponse = response.parse()?;
        Ok(parsed.tab())
    }

    /// Switches the displayed tab.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_tab(&self, tab: Tab) -> Result<(), ClientError> {
        self.call(&TabCommand::Set(tab)).await.map(drop)
    }

    // ========== Device ==========

    /// Asks the device to reload its display.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.call(&RefreshCommand).await.map(drop)
    }

    /// Queries the snapcast client status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn snap_status(&self) -> Result<SnapStatusResponse, ClientError> {
        let response = self.call(&SnapStatusCommand).await?;
        Ok(response.parse()?)
    }

    /// Queries the device configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not JSON.
    pub async fn device_config(&self) -> Result<DeviceConfigResponse, ClientError> {
        let response = self.call(&ConfigCommand).await?;
        Ok(response.parse()?)
    }
}
