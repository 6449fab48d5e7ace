// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credentials file (`~/.iotlabrc`) handling

use std::io::Write;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{AuthError, Credentials};

/// Environment variable overriding the credentials file location
pub const RC_FILE_ENV: &str = "IOTLABRC";

const RC_FILE_NAME: &str = ".iotlabrc";

/// Reads a password from the terminal, given a prompt
pub type PasswordPrompt = fn(&str) -> std::io::Result<String>;

/// Get the credentials file path
///
/// Priority:
/// 1. IOTLABRC environment variable
/// 2. ~/.iotlabrc
pub fn rc_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(RC_FILE_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(RC_FILE_NAME)
}

fn tty_prompt(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}

/// Credentials file store
#[derive(Clone, Debug)]
pub struct RcFile {
    path: PathBuf,
    prompt: PasswordPrompt,
}

impl RcFile {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            prompt: tty_prompt,
        }
    }

    /// Store backed by [`rc_file_path`]
    pub fn from_env() -> Self {
        Self::new(rc_file_path())
    }

    /// Replace the terminal password prompt
    pub fn with_prompt(mut self, prompt: PasswordPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve credentials from explicit values, the tty, or the file.
    pub fn get_user_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credentials, AuthError> {
        match (username, password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            (Some(username), None) => {
                let password = (self.prompt)(&format!("{}'s password: ", username))
                    .map_err(AuthError::Prompt)?;
                Ok(Credentials::new(username, password))
            }
            (None, password) => {
                if password.is_some() {
                    tracing::warn!("password given without a login, using the credentials file");
                }
                self.read()
            }
        }
    }

    /// Read the stored credentials
    pub fn read(&self) -> Result<Credentials, AuthError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AuthError::NoCredentials {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let line = content.lines().next().unwrap_or("").trim();
        let (username, encoded) = line.split_once(':').ok_or_else(|| AuthError::Malformed {
            path: self.path.clone(),
            reason: "expected 'login:password'".to_string(),
        })?;
        if username.is_empty() {
            return Err(AuthError::Malformed {
                path: self.path.clone(),
                reason: "empty login".to_string(),
            });
        }

        let decoded = STANDARD
            .decode(encoded)
            .map_err(|source| AuthError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let password = String::from_utf8(decoded).map_err(|_| AuthError::Malformed {
            path: self.path.clone(),
            reason: "password is not valid UTF-8".to_string(),
        })?;

        tracing::debug!(path = %self.path.display(), username, "loaded stored credentials");
        Ok(Credentials::new(username, password))
    }

    /// Store credentials, replacing any previous ones
    pub fn write(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let line = format!(
            "{}:{}\n",
            credentials.username,
            STANDARD.encode(credentials.expose_password())
        );

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        // `mode` only applies on creation
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(line.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "stored credentials");
        Ok(())
    }
}
