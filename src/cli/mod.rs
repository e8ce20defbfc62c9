//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::Season;

/// Interactive NBA player statistics lookup.
///
/// Prompts for a player name, fetches the player's career stats once, and
/// lets you browse season, career, postseason and college totals.
#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA Stat Fetcher", version)]
pub struct NbaStats {
    /// Stats API base URL (or set `NBA_STATS_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Season used when loading the player directory (e.g. 2024-25).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,

    /// Number of players whose stats are kept in memory for this session.
    #[clap(long, default_value_t = 16)]
    pub cache_size: usize,

    /// Write logs to this file instead of the default cache location.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Also print debug logs to stderr.
    #[clap(long)]
    pub debug: bool,
}
