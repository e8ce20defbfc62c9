//! Entry point: parse CLI, set up logging and run the interactive session.

use std::time::Duration;

use clap::Parser;
use nba_stats::{
    cli::NbaStats,
    commands::session::{handle_session, SessionParams},
    logging::setup_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaStats::parse();

    let (log_path, _guard) = setup_logging(app.log_file.as_deref(), app.debug)?;
    tracing::debug!(log_path = %log_path.display(), "logging initialized");

    handle_session(SessionParams {
        base_url: app.base_url,
        season: app.season,
        timeout: Duration::from_secs(app.timeout),
        cache_size: app.cache_size,
    })
    .await?;

    Ok(())
}
