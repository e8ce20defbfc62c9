//! NBA stats service access: wire types, the HTTP client and the provider seam.

pub mod directory;
pub mod http;
pub mod types;

use crate::{
    cli::types::PlayerId,
    nba::{
        directory::PlayerDirectory,
        types::{PlayerRecord, StatBundle},
    },
    Result,
};

/// Source of player directory lookups and career stats.
///
/// The interactive session only talks to this trait, so it can run against
/// the live service, a cached wrapper, or a fake in tests.
#[allow(async_fn_in_trait)]
pub trait StatsProvider {
    /// Players whose full name matches `name`, in the directory's own order.
    async fn find_players_by_full_name(&mut self, name: &str) -> Result<Vec<PlayerRecord>>;

    /// Career stats for one player.
    async fn career_stats(&mut self, player_id: PlayerId) -> Result<StatBundle>;
}

/// Source of the full player directory, for callers that keep it around.
#[allow(async_fn_in_trait)]
pub trait DirectorySource {
    async fn load_directory(&mut self) -> Result<PlayerDirectory>;
}
