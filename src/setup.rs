// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration setup.
//!
//! Setup asks the user for a host and port, checks that a Smart Clock answers
//! there, and produces the entry the host stores. Failures come back as
//! structured error codes for the setup form rather than as raised errors.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::command::BrightnessCommand;
use crate::error::{ClientError, SetupError};
use crate::protocol::{DeviceAddress, HttpClient, HttpConfig};

/// User input collected by the setup form.
///
/// # Examples
///
/// ```
/// use smart_clock_lib::setup::SetupInput;
///
/// let input: SetupInput = serde_json::from_str(r#"{"host": "192.168.1.40"}"#).unwrap();
/// assert_eq!(input.port, 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupInput {
    /// Device hostname or IP address.
    pub host: String,
    /// Device HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    DeviceAddress::DEFAULT_PORT
}

impl SetupInput {
    /// Creates setup input for `host` on the default port.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
        }
    }

    /// Sets the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> DeviceAddress {
        DeviceAddress::new(self.host.clone()).with_port(self.port)
    }

    pub(crate) fn to_config(&self) -> HttpConfig {
        HttpConfig::from_address(self.address())
    }
}

/// Information about a validated device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupInfo {
    /// Entry title, `Smart Clock ({host})`.
    pub title: String,
}

/// Checks that a Smart Clock answers at the given address.
///
/// Issues exactly one `GET /api/brightness`.
///
/// # Errors
///
/// Returns `SetupError::CannotConnect` if the address is invalid, the device
/// cannot be reached, or it answers with a status other than 200.
/// Returns `SetupError::Unknown` if it answers 200 with a body that is not
/// JSON.
pub async fn validate_input(input: &SetupInput) -> Result<SetupInfo, SetupError> {
    validate_with(input.to_config()).await?;
    Ok(SetupInfo {
        title: format!("Smart Clock ({})", input.address().host()),
    })
}

async fn validate_with(config: HttpConfig) -> Result<(), SetupError> {
    let client = config.into_client().map_err(SetupError::CannotConnect)?;
    check_reachable(&client).await
}

/// Checks that an existing client reaches a Smart Clock.
///
/// Any JSON body counts as a Smart Clock; its fields are not inspected.
pub(crate) async fn check_reachable(client: &HttpClient) -> Result<(), SetupError> {
    let parsed = client
        .call(&BrightnessCommand::Get)
        .await
        .and_then(|response| Ok(response.parse::<serde_json::Value>()?));

    match parsed {
        Ok(_) => Ok(()),
        Err(ClientError::MalformedResponse(message)) => {
            tracing::error!(
                device = %client.address(),
                %message,
                "Unexpected response while validating Smart Clock"
            );
            Err(SetupError::Unknown(message))
        }
        Err(err) => {
            tracing::warn!(
                device = %client.address(),
                error = %err,
                "Cannot connect to Smart Clock"
            );
            Err(SetupError::CannotConnect(err))
        }
    }
}

/// Result of one setup form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    /// Show the form, with errors keyed by field (`base` for the whole form).
    ShowForm {
        /// Error codes by field.
        errors: BTreeMap<String, String>,
    },
    /// Validation succeeded; the host should store the entry.
    CreateEntry {
        /// Entry title.
        title: String,
        /// Stored entry data.
        data: SetupInput,
    },
}

/// User-driven setup flow.
///
/// # Examples
///
/// ```no_run
/// use smart_clock_lib::setup::{ConfigFlow, FlowResult, SetupInput};
///
/// # async fn example() {
/// let flow = ConfigFlow::new();
///
/// // First step: no input yet, show an empty form
/// assert!(matches!(flow.step_user(None).await, FlowResult::ShowForm { .. }));
///
/// match flow.step_user(Some(SetupInput::new("192.168.1.40"))).await {
///     FlowResult::CreateEntry { title, .. } => println!("created {title}"),
///     FlowResult::ShowForm { errors } => println!("errors: {errors:?}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigFlow {
    timeout: Option<Duration>,
}

impl ConfigFlow {
    /// Creates a flow with the default request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout of the validation request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Handles the user step.
    pub async fn step_user(&self, input: Option<SetupInput>) -> FlowResult {
        let Some(input) = input else {
            return FlowResult::ShowForm {
                errors: BTreeMap::new(),
            };
        };

        let mut config = input.to_config();
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        match validate_with(config).await {
            Ok(()) => FlowResult::CreateEntry {
                title: format!("Smart Clock ({})", input.address().host()),
                data: input,
            },
            Err(err) => FlowResult::ShowForm {
                errors: BTreeMap::from([("base".to_string(), err.code().to_string())]),
            },
        }
    }
}
