//! Turning free-text input into a single player.

use tracing::{debug, info};

use crate::{
    error::StatsError,
    nba::{types::PlayerRecord, StatsProvider},
    Result,
};

/// Trim the input and collapse internal whitespace runs to single spaces.
///
/// No case folding: matching is left to the directory.
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Look up `name` in the provider's directory and return the first match.
///
/// Issues exactly one directory query. Zero matches yields
/// [`StatsError::PlayerNotFound`]; transport errors propagate unchanged.
pub async fn resolve<P: StatsProvider>(provider: &mut P, name: &str) -> Result<PlayerRecord> {
    let name = normalize(name);
    let matches = provider.find_players_by_full_name(&name).await?;
    debug!(query = %name, matches = matches.len(), "player directory lookup");

    let player = matches
        .into_iter()
        .next()
        .ok_or(StatsError::PlayerNotFound { name })?;

    info!(player_id = %player.id, full_name = %player.full_name, "player resolved");
    Ok(player)
}
