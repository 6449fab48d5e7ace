// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authenticated node selection entry point

use std::io::Write;

use iotlab_api::ExperimentId;

use crate::api::{ClientFactory, CredentialStore};
use crate::error::NodesError;
use crate::selector::query_nodes;

/// Operator guidance printed when the testbed rejects the credentials
pub const AUTH_GUIDANCE: &str = "Register your login:password using `iotlab-auth`";

/// Everything a caller may specify to select nodes
#[derive(Clone, Debug, Default)]
pub struct SelectionRequest {
    /// Testbed login; stored credentials are used when absent
    pub username: Option<String>,
    /// Password; prompted for when only the login is given
    pub password: Option<String>,
    /// Experiment to read; the current experiment when absent
    pub experiment_id: Option<ExperimentId>,
    /// Groups of full node hostnames
    pub nodes_list_list: Vec<Vec<String>>,
    /// Site filter shared by the experiment and every group
    pub site: Option<String>,
}

/// Resolve credentials, build a client, and run the node selection.
///
/// When the testbed rejects the credentials (HTTP 401/403), the error and
/// [`AUTH_GUIDANCE`] are written to `diagnostics` and
/// [`NodesError::AuthRequired`] is returned; binaries should exit non-zero
/// on it without printing anything else. All other errors are returned
/// unchanged.
pub async fn get_nodes_selection<S, F, W>(
    store: &S,
    factory: &F,
    request: &SelectionRequest,
    diagnostics: &mut W,
) -> Result<Vec<String>, NodesError>
where
    S: CredentialStore + ?Sized,
    F: ClientFactory + ?Sized,
    W: Write + ?Sized,
{
    let credentials =
        store.get_user_credentials(request.username.as_deref(), request.password.as_deref())?;
    let client = factory.build_client(&credentials);
    drop(credentials);

    let result = match client {
        Ok(api) => {
            query_nodes(
                &api,
                request.experiment_id,
                &request.nodes_list_list,
                request.site.as_deref(),
            )
            .await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Err(NodesError::Api(e)) if e.is_auth_failure() => {
            tracing::debug!(error = %e, "testbed rejected credentials");
            writeln!(diagnostics, "{}\n{}", e, AUTH_GUIDANCE).ok();
            Err(NodesError::AuthRequired)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;
    use iotlab_api::ExperimentState;
    use iotlab_auth::{AuthError, Credentials};
    use iotlab_client::Error as ClientError;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Store returning fixed credentials, or none at all
    struct FakeStore {
        stored: Option<(&'static str, &'static str)>,
    }

    impl CredentialStore for FakeStore {
        fn get_user_credentials(
            &self,
            username: Option<&str>,
            password: Option<&str>,
        ) -> Result<Credentials, AuthError> {
            match (username, password, self.stored) {
                (Some(u), Some(p), _) => Ok(Credentials::new(u, p)),
                (_, _, Some((u, p))) => Ok(Credentials::new(u, p)),
                _ => Err(AuthError::NoCredentials {
                    path: PathBuf::from("/nonexistent/.iotlabrc"),
                }),
            }
        }
    }

    /// Factory handing out a prepared API, recording the login it was built for
    struct FakeFactory {
        unauthorized: bool,
        built_for: Mutex<Vec<String>>,
    }

    impl FakeFactory {
        fn new(unauthorized: bool) -> Self {
            Self {
                unauthorized,
                built_for: Mutex::new(Vec::new()),
            }
        }
    }

    impl ClientFactory for FakeFactory {
        type Api = FakeApi;

        fn build_client(&self, credentials: &Credentials) -> Result<FakeApi, ClientError> {
            self.built_for
                .lock()
                .expect("lock")
                .push(credentials.username.clone());
            if self.unauthorized {
                return Ok(FakeApi::unauthorized());
            }
            Ok(FakeApi::new()
                .with_experiment(
                    234,
                    ExperimentState::Running,
                    &[
                        ("m3-1.grenoble.iot-lab.info", "grenoble"),
                        ("a8-1.grenoble.iot-lab.info", "grenoble"),
                    ],
                )
                .with_current(234))
        }
    }

    /// Factory whose client construction itself is rejected
    struct RejectingFactory;

    impl ClientFactory for RejectingFactory {
        type Api = FakeApi;

        fn build_client(&self, _credentials: &Credentials) -> Result<FakeApi, ClientError> {
            Err(ClientError::Forbidden("/api/".to_string()))
        }
    }

    const STORED: FakeStore = FakeStore {
        stored: Some(("user", "password")),
    };

    #[tokio::test]
    async fn test_stored_credentials_and_current_experiment() {
        let factory = FakeFactory::new(false);
        let mut diagnostics = Vec::new();

        let nodes = get_nodes_selection(
            &STORED,
            &factory,
            &SelectionRequest::default(),
            &mut diagnostics,
        )
        .await
        .expect("selection");

        assert_eq!(nodes, vec!["a8-1", "m3-1"]);
        assert_eq!(*factory.built_for.lock().expect("lock"), vec!["user"]);
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_credentials_win() {
        let factory = FakeFactory::new(false);
        let request = SelectionRequest {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..SelectionRequest::default()
        };

        get_nodes_selection(&STORED, &factory, &request, &mut Vec::new())
            .await
            .expect("selection");
        assert_eq!(*factory.built_for.lock().expect("lock"), vec!["alice"]);
    }

    #[tokio::test]
    async fn test_unauthorized_prints_guidance() {
        let factory = FakeFactory::new(true);
        let mut diagnostics = Vec::new();

        let err = get_nodes_selection(
            &STORED,
            &factory,
            &SelectionRequest::default(),
            &mut diagnostics,
        )
        .await
        .expect_err("unauthorized");

        assert!(matches!(err, NodesError::AuthRequired));
        let printed = String::from_utf8(diagnostics).expect("utf8");
        assert!(printed.contains("Register your login:password using"));
        assert!(printed.contains("Unauthorized"));
    }

    #[tokio::test]
    async fn test_rejected_client_construction_prints_guidance() {
        let mut diagnostics = Vec::new();
        let err = get_nodes_selection(
            &STORED,
            &RejectingFactory,
            &SelectionRequest::default(),
            &mut diagnostics,
        )
        .await
        .expect_err("forbidden");

        assert!(matches!(err, NodesError::AuthRequired));
        assert!(String::from_utf8_lossy(&diagnostics).contains(AUTH_GUIDANCE));
    }

    #[tokio::test]
    async fn test_missing_credentials_propagate_unchanged() {
        let store = FakeStore { stored: None };
        let factory = FakeFactory::new(false);
        let mut diagnostics = Vec::new();

        let err = get_nodes_selection(
            &store,
            &factory,
            &SelectionRequest::default(),
            &mut diagnostics,
        )
        .await
        .expect_err("no credentials");

        assert!(matches!(
            err,
            NodesError::Credentials(AuthError::NoCredentials { .. })
        ));
        assert!(diagnostics.is_empty());
        assert!(factory.built_for.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_other_errors_propagate_unchanged() {
        let factory = FakeFactory::new(false);
        let request = SelectionRequest {
            experiment_id: Some(999),
            ..SelectionRequest::default()
        };
        let mut diagnostics = Vec::new();

        let err = get_nodes_selection(&STORED, &factory, &request, &mut diagnostics)
            .await
            .expect_err("unknown experiment");

        assert!(matches!(
            err,
            NodesError::Api(ClientError::Status { status: 404, .. })
        ));
        assert!(diagnostics.is_empty());
    }
}
