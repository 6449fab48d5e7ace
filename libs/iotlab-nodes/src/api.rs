// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Collaborators of the node selection
//!
//! Each remote or stateful dependency sits behind a narrow trait so the
//! selection logic can be driven by test doubles:
//!
//! - [`ExperimentApi`]: experiment state/resources and current experiment
//! - [`CredentialStore`]: login and password lookup
//! - [`ClientFactory`]: builds an authenticated [`ExperimentApi`]

use async_trait::async_trait;
use iotlab_api::{ExperimentId, ExperimentState, Resource};
use iotlab_auth::{AuthError, Credentials, RcFile};
use iotlab_client::{Client, DEFAULT_API_URL, Error as ClientError};

/// Read access to experiment records.
#[async_trait]
pub trait ExperimentApi: Send + Sync {
    /// Scheduler state of an experiment
    async fn get_experiment_state(&self, id: ExperimentId) -> Result<ExperimentState, ClientError>;

    /// Nodes reserved by an experiment, in the order the service lists them
    async fn get_experiment_resources(&self, id: ExperimentId)
    -> Result<Vec<Resource>, ClientError>;

    /// The caller's current experiment, if exactly one is running
    async fn get_current_experiment(&self) -> Result<Option<ExperimentId>, ClientError>;
}

/// Source of testbed credentials.
pub trait CredentialStore {
    /// Resolve credentials, falling back to stored ones when not given.
    fn get_user_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credentials, AuthError>;
}

/// Builds an authenticated API client from credentials.
pub trait ClientFactory {
    type Api: ExperimentApi;

    fn build_client(&self, credentials: &Credentials) -> Result<Self::Api, ClientError>;
}

#[async_trait]
impl ExperimentApi for Client {
    async fn get_experiment_state(&self, id: ExperimentId) -> Result<ExperimentState, ClientError> {
        Ok(Client::get_experiment_state(self, id).await?.state)
    }

    async fn get_experiment_resources(
        &self,
        id: ExperimentId,
    ) -> Result<Vec<Resource>, ClientError> {
        Ok(Client::get_experiment_resources(self, id).await?.items)
    }

    async fn get_current_experiment(&self) -> Result<Option<ExperimentId>, ClientError> {
        Client::get_current_experiment(self).await
    }
}

impl CredentialStore for RcFile {
    fn get_user_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credentials, AuthError> {
        RcFile::get_user_credentials(self, username, password)
    }
}

/// Builds [`iotlab_client::Client`]s for a given API URL
#[derive(Clone, Debug)]
pub struct HttpClientFactory {
    pub api_url: String,
}

impl HttpClientFactory {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientFactory for HttpClientFactory {
    type Api = Client;

    fn build_client(&self, credentials: &Credentials) -> Result<Client, ClientError> {
        Client::new(
            &self.api_url,
            &credentials.username,
            credentials.expose_password(),
        )
    }
}
