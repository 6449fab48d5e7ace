// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for iotlab-auth

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while looking up or storing credentials
#[derive(Error, Debug)]
pub enum AuthError {
    /// Nothing was given explicitly and no credentials file exists
    #[error("No credentials found in {}", path.display())]
    NoCredentials { path: PathBuf },

    /// The credentials file is not `login:base64(password)`
    #[error("Malformed credentials file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The stored password is not valid base64
    #[error("Failed to decode password stored in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: base64::DecodeError,
    },

    /// Reading the password from the terminal failed
    #[error("Failed to read password: {0}")]
    Prompt(#[source] std::io::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
