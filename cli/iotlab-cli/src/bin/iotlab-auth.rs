// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! iotlab-auth - register IoT-LAB credentials in the credentials file

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use iotlab_cli::CommonArgs;
use iotlab_client::{Client, ExperimentState};

#[derive(Parser)]
#[command(
    name = "iotlab-auth",
    version,
    about = "Register IoT-LAB credentials",
    long_about = "Store login:password in the credentials file (~/.iotlabrc or $IOTLABRC) \
                  so other tools can authenticate without asking."
)]
struct Cli {
    /// Testbed login
    #[arg(short, long)]
    user: String,

    /// Testbed password (prompted for when absent)
    #[arg(short, long)]
    password: Option<String>,

    /// Check the credentials against the testbed before storing them
    #[arg(long)]
    check: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let store = cli.common.rc_file();
    let credentials = store.get_user_credentials(Some(&cli.user), cli.password.as_deref())?;

    if cli.check {
        let client = Client::new(
            &cli.common.api_url,
            &credentials.username,
            credentials.expose_password(),
        )?;
        match client.list_experiments(ExperimentState::Running).await {
            Ok(_) => tracing::debug!("credentials accepted"),
            Err(e) if e.is_auth_failure() => {
                eprintln!("{}\nCredentials not stored.", e);
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e).context("Failed to check credentials"),
        }
    }

    store
        .write(&credentials)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;
    println!("Written {}", store.path().display());

    Ok(ExitCode::SUCCESS)
}
