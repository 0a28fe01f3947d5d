//! Command line flags shared by the `register` and `authenticate` binaries

use clap::Args;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_NAME;

#[derive(Debug, Args)]
pub struct CliArgs {
    /// Path to the JSON user store (overrides config file and environment)
    #[arg(long, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Base name of the config file to read, if present
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CONFIG_NAME)]
    pub config: String,
}
