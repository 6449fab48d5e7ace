// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Node selection merging

use std::collections::BTreeSet;

use iotlab_api::ExperimentId;

use crate::api::ExperimentApi;
use crate::error::NodesError;
use crate::fetcher::get_experiment_nodes;
use crate::hostname::{matches_site, short_hostname};

/// Sorted, de-duplicated short hostnames selected by an experiment and
/// explicit node lists.
///
/// Without `experiment_id` and without explicit lists the user's current
/// experiment is used. Explicit lists alone never consult the testbed.
/// The `site` filter applies to the experiment nodes and to explicit
/// hostnames carrying a different site label.
pub async fn query_nodes<A>(
    api: &A,
    experiment_id: Option<ExperimentId>,
    nodes_list_list: &[Vec<String>],
    site: Option<&str>,
) -> Result<Vec<String>, NodesError>
where
    A: ExperimentApi + ?Sized,
{
    let experiment_id = match experiment_id {
        Some(id) => Some(id),
        None if nodes_list_list.is_empty() => api.get_current_experiment().await?,
        None => None,
    };

    let mut nodes: BTreeSet<String> = get_experiment_nodes(api, experiment_id, site)
        .await?
        .into_iter()
        .collect();

    nodes.extend(
        nodes_list_list
            .iter()
            .flatten()
            .filter(|hostname| matches_site(hostname, site))
            .map(|hostname| short_hostname(hostname).to_string()),
    );

    Ok(nodes.into_iter().collect())
}
