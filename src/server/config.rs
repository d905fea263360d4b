use std::path::PathBuf;

use clap::{Parser, ValueHint};
use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_DATA_FILE;
use crate::error::{DashError, DashResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Command-line flags, each with an environment fallback.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launch-dash",
    version,
    about = "Serve the launch records dashboard over HTTP"
)]
pub struct DashboardArgs {
    /// Launch records CSV; a missing file falls back to a placeholder table.
    #[arg(long, env = "LAUNCH_DASH_DATA", default_value = DEFAULT_DATA_FILE, value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Interface to bind.
    #[arg(long, env = "LAUNCH_DASH_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "LAUNCH_DASH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Verbose logging (default filter `debug` instead of `info`).
    #[arg(long, env = "LAUNCH_DASH_DEBUG")]
    pub debug: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_args(args: DashboardArgs) -> DashResult<Self> {
        let host = args.host.trim();
        if host.is_empty() {
            return Err(DashError::InvalidData("host must not be empty".to_owned()));
        }
        Ok(Self {
            data_path: args.data,
            host: host.to_owned(),
            port: args.port,
            debug: args.debug,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
