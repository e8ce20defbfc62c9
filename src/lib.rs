//! NBA Stat Fetcher Library
//!
//! Look up an NBA player by name and browse their statistics from the
//! `stats.nba.com` API in a terminal menu.
//!
//! ## Features
//!
//! - **Player Resolution**: Whitespace-normalized full-name lookup against the player directory
//! - **Stats Views**: Current season, last five seasons, regular-season, postseason and college totals
//! - **Readable Tables**: Identifier columns dropped, abbreviated columns relabeled
//! - **Session Cache**: Each player's career stats are fetched once per session
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_stats::nba::types::{StatBundle, StatTable, StatValue};
//! use nba_stats::stats::{extract, ViewSelection};
//!
//! let seasons = StatTable::new(
//!     vec!["PLAYER_ID".into(), "SEASON_ID".into(), "FG_PCT".into()],
//!     vec![vec![StatValue::Int(2544), "2023-24".into(), StatValue::Float(0.54)]],
//! )?;
//! let bundle = StatBundle {
//!     season_rows: seasons.clone(),
//!     career_regular: seasons,
//!     career_postseason: StatTable::default(),
//!     career_college: StatTable::default(),
//! };
//!
//! let view = extract(&bundle, ViewSelection::CurrentSeason);
//! assert_eq!(view.table().unwrap().columns(), ["Season", "FG%"]);
//! # Ok::<(), nba_stats::StatsError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different API host (for example a local mock):
//! ```bash
//! export NBA_STATS_BASE_URL=http://localhost:8080/stats
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod nba;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season};
pub use error::{Result, StatsError};
pub use nba::types::{PlayerRecord, StatBundle, StatTable, StatValue};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
