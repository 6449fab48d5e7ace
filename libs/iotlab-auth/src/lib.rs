// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IoT-LAB credential storage
//!
//! Credentials are a testbed login and password. They are either passed
//! explicitly or read from the credentials file written by `iotlab-auth`:
//!
//! ```text
//! ~/.iotlabrc  (or $IOTLABRC)
//! login:base64(password)
//! ```
//!
//! # Lookup rules
//!
//! | login given | password given | result                          |
//! |-------------|----------------|---------------------------------|
//! | yes         | yes            | used as is                      |
//! | yes         | no             | password prompted on the tty    |
//! | no          | -              | read from the credentials file  |
//!
//! The password is held in a [`SecretString`] and only exposed when the
//! Authorization header is built.

pub mod error;
pub mod rc_file;

pub use error::AuthError;
pub use rc_file::{RC_FILE_ENV, RcFile, rc_file_path};

use secrecy::{ExposeSecret, SecretString};

/// A testbed login and its password
#[derive(Debug)]
pub struct Credentials {
    /// Testbed login name
    pub username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from a login and a clear-text password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Clear-text password, for building the Authorization header only
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}
