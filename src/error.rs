// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Smart Clock library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, device endpoint calls, and integration setup.
//!
//! Only [`SetupError`] is meant to reach a user. Every other failure is caught
//! by the entity that issued the call and turned into a state transition.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Integration setup failed.
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A tab name that the device does not know.
    #[error("invalid tab: {0} (expected one of clock, audio, settings, info)")]
    InvalidTab(String),

    /// A status name that is not part of the status vocabulary.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// A state value was offered to a cache slot of another kind.
    #[error("{state} state cannot be stored in the {kind} slot")]
    StateKindMismatch {
        /// The slot that was written.
        kind: &'static str,
        /// The kind of value that was offered.
        state: &'static str,
    },
}

/// Errors produced by a single device endpoint call.
///
/// Every call is one-shot: none of these errors is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No response arrived within the request timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connection-level failure (refused, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The device answered with a status other than 200.
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    /// The device answered 200 but the body could not be read as JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The device address cannot form a valid URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The underlying HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// Returns `true` if the device could not be reached at all.
    ///
    /// Status sensors report `unavailable` for these errors and `error` for
    /// the rest.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }

    /// Returns the HTTP status code for [`ClientError::BadStatus`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors related to parsing device responses.
///
/// Callers fold these into [`ClientError::MalformedResponse`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParseError> for ClientError {
    fn from(err: ParseError) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// Errors surfaced by integration setup.
///
/// Each variant maps to the structured error code a setup form displays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The device did not answer the reachability check with a 200.
    #[error("cannot connect to device: {0}")]
    CannotConnect(ClientError),

    /// The device answered, but in a way setup did not expect.
    #[error("unexpected error during setup: {0}")]
    Unknown(String),
}

impl SetupError {
    /// Returns the error code shown by the setup form.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CannotConnect(_) => "cannot_connect",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
