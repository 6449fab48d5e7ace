// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IoT-LAB REST API Client Library
//!
//! A thin, typed client for the subset of the IoT-LAB experiment API needed
//! to resolve the nodes of an experiment:
//!
//! - Get the scheduler state of an experiment
//! - Get the resources (nodes) reserved by an experiment
//! - Find the caller's currently running experiment
//!
//! Requests are authenticated with HTTP Basic auth. Authentication failures
//! surface as dedicated [`Error::Unauthorized`] / [`Error::Forbidden`]
//! variants so callers can match on them instead of inspecting status codes.
//!
//! ## Usage
//!
//! ```ignore
//! use iotlab_client::{Client, DEFAULT_API_URL};
//!
//! let client = Client::new(DEFAULT_API_URL, "alice", "secret")?;
//! let state = client.get_experiment_state(123).await?;
//! if state.state.is_running() {
//!     let resources = client.get_experiment_resources(123).await?;
//! }
//! ```

pub mod error;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

pub use error::Error;
pub use iotlab_api::{
    ExperimentId, ExperimentList, ExperimentRequest, ExperimentState, ExperimentStateResponse,
    ExperimentSummary, Resource, ResourcesResponse,
};

/// Public IoT-LAB API endpoint
pub const DEFAULT_API_URL: &str = "https://www.iot-lab.info/api/";

const USER_AGENT: &str = concat!("iotlab-nodes/", env!("CARGO_PKG_VERSION"));

/// Authenticated IoT-LAB API client
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client for `base_url` authenticating as `username`.
    ///
    /// No request is sent here; bad credentials only show up on the first call.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, Error> {
        // reqwest is built without a default rustls provider; install ring once
        // per process. A second install attempt is a no-op error we ignore.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        let mut auth_value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| Error::InvalidCredentials(e.to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL every request path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the scheduler state of an experiment
    pub async fn get_experiment_state(
        &self,
        id: ExperimentId,
    ) -> Result<ExperimentStateResponse, Error> {
        self.get_experiment(id, ExperimentRequest::State).await
    }

    /// Fetch the nodes reserved by an experiment
    pub async fn get_experiment_resources(
        &self,
        id: ExperimentId,
    ) -> Result<ResourcesResponse, Error> {
        self.get_experiment(id, ExperimentRequest::Resources).await
    }

    /// Fetch one part of an experiment record, decoded as `T`
    pub async fn get_experiment<T: DeserializeOwned>(
        &self,
        id: ExperimentId,
        request: ExperimentRequest,
    ) -> Result<T, Error> {
        let path = format!("experiments/{}", id);
        let query: &'static str = request.into();
        self.get_json(&path, query).await
    }

    /// List the caller's experiments in the given state
    pub async fn list_experiments(&self, state: ExperimentState) -> Result<ExperimentList, Error> {
        let query = format!("state={}", state);
        self.get_json("experiments", &query).await
    }

    /// Id of the caller's single running experiment.
    ///
    /// Returns `None` when nothing is running, and also when several
    /// experiments are running since no single one can be picked.
    pub async fn get_current_experiment(&self) -> Result<Option<ExperimentId>, Error> {
        let running = self.list_experiments(ExperimentState::Running).await?;
        match running.items.as_slice() {
            [] => {
                tracing::debug!("no running experiment");
                Ok(None)
            }
            [only] => Ok(Some(only.id)),
            several => {
                let ids: Vec<ExperimentId> = several.iter().map(|e| e.id).collect();
                tracing::warn!(?ids, "several running experiments, none selected");
                Ok(None)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, Error> {
        let mut url = self.base_url.join(path).map_err(|source| Error::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            source,
        })?;
        url.set_query(Some(query));

        tracing::debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(Error::Unauthorized),
            StatusCode::FORBIDDEN => return Err(Error::Forbidden(url.path().to_string())),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Status {
                    status: s.as_u16(),
                    url: url.to_string(),
                    body,
                });
            }
            _ => {}
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Parse the API base URL, making sure relative joins keep its last segment.
fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
