// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory test doubles for the collaborator traits

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use iotlab_api::{ExperimentId, ExperimentState, Resource};
use iotlab_client::Error as ClientError;

use crate::api::ExperimentApi;

/// Experiment API serving canned experiments and counting remote calls
#[derive(Default)]
pub(crate) struct FakeApi {
    experiments: HashMap<ExperimentId, (ExperimentState, Vec<Resource>)>,
    current: Option<ExperimentId>,
    unauthorized: bool,
    calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_experiment(
        mut self,
        id: ExperimentId,
        state: ExperimentState,
        hostnames: &[(&str, &str)],
    ) -> Self {
        let resources = hostnames
            .iter()
            .map(|(address, site)| resource(address, site))
            .collect();
        self.experiments.insert(id, (state, resources));
        self
    }

    pub(crate) fn with_current(mut self, id: ExperimentId) -> Self {
        self.current = Some(id);
        self
    }

    /// Every call fails with HTTP 401
    pub(crate) fn unauthorized() -> Self {
        Self {
            unauthorized: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unauthorized {
            return Err(ClientError::Unauthorized);
        }
        Ok(())
    }

    fn lookup(&self, id: ExperimentId) -> Result<&(ExperimentState, Vec<Resource>), ClientError> {
        self.experiments.get(&id).ok_or_else(|| ClientError::Status {
            status: 404,
            url: format!("experiments/{}", id),
            body: String::new(),
        })
    }
}

pub(crate) fn resource(address: &str, site: &str) -> Resource {
    Resource {
        network_address: address.to_string(),
        site: site.to_string(),
        archi: None,
    }
}

#[async_trait]
impl ExperimentApi for FakeApi {
    async fn get_experiment_state(&self, id: ExperimentId) -> Result<ExperimentState, ClientError> {
        self.record()?;
        Ok(self.lookup(id)?.0)
    }

    async fn get_experiment_resources(
        &self,
        id: ExperimentId,
    ) -> Result<Vec<Resource>, ClientError> {
        self.record()?;
        Ok(self.lookup(id)?.1.clone())
    }

    async fn get_current_experiment(&self) -> Result<Option<ExperimentId>, ClientError> {
        self.record()?;
        Ok(self.current)
    }
}
