// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Payload types of the IoT-LAB experiment REST API.
//!
//! Only the subset needed to resolve the nodes of an experiment is modelled:
//!
//! - `GET /experiments/{id}?state` returns an [`ExperimentStateResponse`]
//! - `GET /experiments/{id}?resources` returns a [`ResourcesResponse`]
//! - `GET /experiments?state=Running` returns an [`ExperimentList`]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Numeric experiment identifier as allocated by the testbed scheduler.
pub type ExperimentId = u64;

/// Scheduler state of an experiment.
///
/// States the scheduler may add later deserialize as [`ExperimentState::Unknown`]
/// rather than failing the whole response.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
pub enum ExperimentState {
    Waiting,
    #[serde(rename = "toLaunch")]
    #[strum(serialize = "toLaunch")]
    ToLaunch,
    Launching,
    Running,
    Finishing,
    Terminated,
    Stopped,
    Error,
    #[serde(rename = "toError")]
    #[strum(serialize = "toError")]
    ToError,
    #[serde(rename = "toAckReservation")]
    #[strum(serialize = "toAckReservation")]
    ToAckReservation,
    Hold,
    Suspended,
    Resuming,
    #[serde(other)]
    Unknown,
}

impl ExperimentState {
    /// Whether the experiment currently owns its nodes.
    pub fn is_running(self) -> bool {
        self == ExperimentState::Running
    }
}

/// Which part of an experiment record to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExperimentRequest {
    State,
    Resources,
}

/// Body of `GET /experiments/{id}?state`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentStateResponse {
    pub state: ExperimentState,
}

/// One node reserved by an experiment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Fully qualified node hostname, e.g. `m3-1.grenoble.iot-lab.info`
    pub network_address: String,
    /// Site hosting the node, e.g. `grenoble`
    pub site: String,
    /// Node architecture, e.g. `m3:at86rf231`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archi: Option<String>,
}

/// Body of `GET /experiments/{id}?resources`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesResponse {
    #[serde(default)]
    pub items: Vec<Resource>,
}

/// Summary entry of the experiment listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub id: ExperimentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ExperimentState>,
}

/// Body of `GET /experiments?state=...`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentList {
    #[serde(default)]
    pub items: Vec<ExperimentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_deserialization() {
        let resp: ExperimentStateResponse =
            serde_json::from_str(r#"{"state": "Running"}"#).expect("parse running");
        assert!(resp.state.is_running());

        let resp: ExperimentStateResponse =
            serde_json::from_str(r#"{"state": "toLaunch"}"#).expect("parse toLaunch");
        assert_eq!(resp.state, ExperimentState::ToLaunch);
        assert!(!resp.state.is_running());
    }

    #[test]
    fn test_unknown_state_is_tolerated() {
        let resp: ExperimentStateResponse =
            serde_json::from_str(r#"{"state": "Archived"}"#).expect("parse unknown");
        assert_eq!(resp.state, ExperimentState::Unknown);
    }

    #[test]
    fn test_state_display_matches_wire_name() {
        assert_eq!(ExperimentState::Terminated.to_string(), "Terminated");
        assert_eq!(ExperimentState::ToError.to_string(), "toError");
        assert_eq!(
            "toAckReservation".parse::<ExperimentState>().expect("parse"),
            ExperimentState::ToAckReservation
        );
    }

    #[test]
    fn test_request_query_names() {
        assert_eq!(ExperimentRequest::State.to_string(), "state");
        let name: &'static str = ExperimentRequest::Resources.into();
        assert_eq!(name, "resources");
    }

    #[test]
    fn test_resources_ignore_extra_fields() {
        let json = r#"{"items": [
            {"network_address": "m3-1.grenoble.iot-lab.info", "site": "grenoble",
             "archi": "m3:at86rf231", "state": "Alive", "uid": "b277"}
        ]}"#;
        let resp: ResourcesResponse = serde_json::from_str(json).expect("parse resources");
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].site, "grenoble");
        assert_eq!(resp.items[0].archi.as_deref(), Some("m3:at86rf231"));
    }
}
