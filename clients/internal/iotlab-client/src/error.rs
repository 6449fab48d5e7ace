// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for iotlab-client

use thiserror::Error;

/// Errors returned by the IoT-LAB REST client
#[derive(Error, Debug)]
pub enum Error {
    /// The server rejected the credentials (HTTP 401)
    #[error("Unauthorized: the testbed rejected the supplied credentials")]
    Unauthorized,

    /// The credentials are valid but not allowed to access the resource (HTTP 403)
    #[error("Forbidden: access to {0} was denied")]
    Forbidden(String),

    /// Any other non-success HTTP status
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// Connection, TLS or protocol failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON document
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured API URL cannot be parsed or joined
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The credentials cannot be encoded into an Authorization header
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl Error {
    /// Whether the failure means the caller must (re)register credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::Forbidden(_))
    }
}
