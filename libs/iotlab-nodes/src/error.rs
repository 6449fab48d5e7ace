// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for iotlab-nodes

use iotlab_api::{ExperimentId, ExperimentState};
use thiserror::Error;

use crate::selection::AUTH_GUIDANCE;

/// Errors that can occur while resolving a node selection
#[derive(Error, Debug)]
pub enum NodesError {
    /// The experiment exists but does not own its nodes right now
    #[error("Experiment {id} is not running (state: {state})")]
    InactiveExperiment {
        id: ExperimentId,
        state: ExperimentState,
    },

    /// The testbed API call failed
    #[error(transparent)]
    Api(#[from] iotlab_client::Error),

    /// No usable credentials
    #[error(transparent)]
    Credentials(#[from] iotlab_auth::AuthError),

    /// A `site,archi,ids` node list could not be parsed
    #[error("Invalid nodes list '{spec}': {reason}")]
    InvalidNodesList { spec: String, reason: String },

    /// The testbed rejected the credentials; guidance was already reported
    #[error("Authentication failed. {}", AUTH_GUIDANCE)]
    AuthRequired,
}

impl NodesError {
    /// Whether the failure comes from rejected credentials
    pub fn is_auth_failure(&self) -> bool {
        match self {
            NodesError::AuthRequired => true,
            NodesError::Api(e) => e.is_auth_failure(),
            _ => false,
        }
    }
}
