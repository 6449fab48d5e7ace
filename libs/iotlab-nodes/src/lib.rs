// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IoT-LAB node selection
//!
//! Resolves the short hostnames (`m3-1`, `a8-12`, ...) of the nodes a user
//! wants to work with, from any combination of:
//!
//! - an explicit experiment id, or the user's single running experiment
//! - explicit node lists (`grenoble,m3,1-5+9`, see [`nodes_list`])
//! - a site filter
//!
//! # Layers
//!
//! 1. [`fetcher::get_experiment_nodes`] reads one experiment's resources,
//!    refusing experiments that are not running.
//! 2. [`selector::query_nodes`] merges experiment nodes with explicit lists
//!    into a sorted, de-duplicated selection.
//! 3. [`selection::get_nodes_selection`] resolves credentials, builds the
//!    client, and turns authentication failures into operator guidance.
//!
//! The remote service and the credential store are reached through the
//! traits in [`api`], so any layer can run against test doubles.

pub mod api;
pub mod error;
pub mod fetcher;
pub mod hostname;
pub mod nodes_list;
pub mod selection;
pub mod selector;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ClientFactory, CredentialStore, ExperimentApi, HttpClientFactory};
pub use error::NodesError;
pub use fetcher::get_experiment_nodes;
pub use hostname::short_hostname;
pub use iotlab_api::ExperimentId;
pub use selection::{AUTH_GUIDANCE, SelectionRequest, get_nodes_selection};
pub use selector::query_nodes;
