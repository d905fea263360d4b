use clap::Parser;
use launch_dash::api::Dashboard;
use launch_dash::error::DashResult;
use launch_dash::server::{self, DashboardArgs, DashboardConfig};
use launch_dash::telemetry::init_default_tracing;
use tracing::debug;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> DashResult<()> {
    let config = DashboardConfig::from_args(DashboardArgs::parse())?;
    let _ = init_default_tracing(config.log_filter());
    debug!(?config, "starting launch dashboard");

    let dashboard = Dashboard::open(&config.data_path)?;
    server::serve(&config, dashboard).await
}
