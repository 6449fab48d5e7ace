// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! iotlab-nodes - print the IoT-LAB nodes selected by an experiment and
//! explicit node lists

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use iotlab_cli::CommonArgs;
use iotlab_nodes::nodes_list::parse_nodes_list;
use iotlab_nodes::{HttpClientFactory, NodesError, SelectionRequest, get_nodes_selection};

#[derive(Parser)]
#[command(
    name = "iotlab-nodes",
    version,
    about = "Print the IoT-LAB nodes selected by an experiment and node lists",
    long_about = "Print the short hostnames (e.g. m3-1) of the selected nodes, sorted and \
                  without duplicates. Without --id or --list, the single running experiment is used."
)]
struct Cli {
    /// Testbed login (stored credentials are used when absent)
    #[arg(short, long)]
    user: Option<String>,

    /// Testbed password (prompted for when only --user is given)
    #[arg(short, long)]
    password: Option<String>,

    /// Experiment id (defaults to the running experiment when no --list is given)
    #[arg(short = 'i', long = "id")]
    experiment_id: Option<u64>,

    /// Nodes list, may be repeated
    #[arg(short = 'l', long = "list", value_name = "SITE,ARCHI,IDS")]
    nodes_list: Vec<String>,

    /// Only keep nodes of this site
    #[arg(long)]
    site: Option<String>,

    /// Output as a JSON array
    #[arg(short, long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let nodes_list_list = cli
        .nodes_list
        .iter()
        .map(|spec| parse_nodes_list(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let request = SelectionRequest {
        username: cli.user,
        password: cli.password,
        experiment_id: cli.experiment_id,
        nodes_list_list,
        site: cli.site,
    };
    let store = cli.common.rc_file();
    let factory = HttpClientFactory::new(cli.common.api_url.clone());

    let mut stderr = std::io::stderr();
    let nodes = match get_nodes_selection(&store, &factory, &request, &mut stderr).await {
        Ok(nodes) => nodes,
        // Guidance already printed
        Err(NodesError::AuthRequired) => return Ok(ExitCode::FAILURE),
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(count = nodes.len(), "selected nodes");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        for node in &nodes {
            println!("{}", node);
        }
    }

    Ok(ExitCode::SUCCESS)
}
