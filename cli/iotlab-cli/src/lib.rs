// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Options and setup shared by the `iotlab-nodes` and `iotlab-auth` binaries

use std::path::PathBuf;

use clap::Args;
use iotlab_auth::RcFile;
use iotlab_client::DEFAULT_API_URL;

/// Connection options common to every binary
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// IoT-LAB API URL
    #[arg(long, env = "IOTLAB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Credentials file (defaults to ~/.iotlabrc)
    #[arg(long, env = "IOTLABRC")]
    pub rc_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Credentials store selected by the options
    pub fn rc_file(&self) -> RcFile {
        match &self.rc_file {
            Some(path) => RcFile::new(path),
            None => RcFile::from_env(),
        }
    }

    /// Set up logging to stderr; quiet unless `--verbose`
    pub fn init_logging(&self) {
        if self.verbose {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter("iotlab=debug")
                .init();
        }
    }
}
