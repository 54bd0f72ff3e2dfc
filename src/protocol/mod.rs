// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for communicating with a Smart Clock.
//!
//! - [`DeviceAddress`]: where the device lives
//! - [`HttpConfig`]: address plus request timeout
//! - [`HttpClient`]: sends one request per command and classifies the result
//!
//! HTTP is stateless: each command is an independent, one-shot request with
//! no retry. The underlying connection pool belongs to the `reqwest` client
//! and is shared by every clone of [`HttpClient`].

mod address;
mod http;

pub use address::DeviceAddress;
pub use http::{HttpClient, HttpConfig};

use crate::command::Endpoint;
use crate::error::ParseError;

/// A successful (HTTP 200) response from the device.
#[derive(Debug, Clone)]
pub struct DeviceResponse {
    endpoint: Endpoint,
    body: String,
}

impl DeviceResponse {
    /// Creates a new response for the given endpoint.
    #[must_use]
    pub fn new(endpoint: Endpoint, body: String) -> Self {
        Self { endpoint, body }
    }

    /// Returns the endpoint that produced this response.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not JSON of the expected shape.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}
