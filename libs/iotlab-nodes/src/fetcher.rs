// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Experiment node fetching

use iotlab_api::ExperimentId;

use crate::api::ExperimentApi;
use crate::error::NodesError;
use crate::hostname::short_hostname;

/// Short hostnames of the nodes of a running experiment.
///
/// `None` means "no experiment" and yields an empty list without any remote
/// call. Resources outside `site` (when given) are skipped. Hostnames are
/// returned in the order the service lists them, duplicates included.
///
/// # Errors
/// [`NodesError::InactiveExperiment`] when the experiment is not running;
/// API failures are returned as is.
pub async fn get_experiment_nodes<A>(
    api: &A,
    experiment_id: Option<ExperimentId>,
    site: Option<&str>,
) -> Result<Vec<String>, NodesError>
where
    A: ExperimentApi + ?Sized,
{
    let Some(id) = experiment_id else {
        return Ok(Vec::new());
    };

    let state = api.get_experiment_state(id).await?;
    if !state.is_running() {
        return Err(NodesError::InactiveExperiment { id, state });
    }

    let resources = api.get_experiment_resources(id).await?;
    let nodes: Vec<String> = resources
        .iter()
        .filter(|res| site.is_none_or(|site| res.site == site))
        .map(|res| short_hostname(&res.network_address).to_string())
        .collect();

    tracing::debug!(experiment = id, count = nodes.len(), "experiment nodes");
    Ok(nodes)
}
