//! The interactive session: search a player, then browse their stats views.
//!
//! One player's career stats are fetched when the player is found and reused
//! for every view until the user searches again. Fetch failures are reported
//! and the session returns to the player prompt.

use std::{
    io::{BufRead, Write},
    time::Duration,
};

use tracing::{info, warn};

use super::{
    menu::{
        Console, PostViewChoice, StatsMenuChoice, BANNER_RULE, FAREWELL, INVALID_POST_VIEW_CHOICE,
        INVALID_STATS_CHOICE, LOADING, PLAYER_NOT_FOUND, PLAYER_PROMPT, QUIT_SENTINEL,
        RESULT_RULE, WELCOME,
    },
    resolve_base_url,
};
use crate::{
    core::CachedProvider,
    error::StatsError,
    nba::{
        http::NbaStatsClient,
        types::{PlayerRecord, StatBundle},
        StatsProvider,
    },
    stats::{extract, resolve},
    Result, Season,
};

/// Settings for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub base_url: Option<String>,
    pub season: Season,
    pub timeout: Duration,
    pub cache_size: usize,
}

/// What to do once the user leaves a player's stats menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    SearchAnother,
    Quit,
}

/// Run the session against the live service on stdin/stdout.
pub async fn handle_session(params: SessionParams) -> Result<()> {
    let base_url = resolve_base_url(params.base_url);
    info!(%base_url, season = %params.season, "starting session");

    let client = NbaStatsClient::new(base_url, params.season, params.timeout)?;
    let mut provider = CachedProvider::new(client, params.cache_size);

    let stdin = std::io::stdin();
    run_session(&mut provider, stdin.lock(), std::io::stdout()).await?;

    let stats = provider.bundle_cache().stats();
    info!(hits = stats.hits, misses = stats.misses, "session finished");
    Ok(())
}

/// Drive the menus over `input`/`output` until the user quits or input ends.
pub async fn run_session<P, R, W>(provider: &mut P, input: R, output: W) -> Result<()>
where
    P: StatsProvider,
    R: BufRead,
    W: Write,
{
    let mut console = Console::new(input, output);
    console.say(WELCOME)?;
    console.say(LOADING)?;
    console.say(BANNER_RULE)?;

    while let Some(line) = console.prompt(PLAYER_PROMPT)? {
        if line.trim().eq_ignore_ascii_case(QUIT_SENTINEL) {
            break;
        }

        let Some(bundle) = load_player(provider, &mut console, &line).await? else {
            continue;
        };

        if browse_player(&mut console, &bundle)? == NextStep::Quit {
            break;
        }
    }

    console.say(FAREWELL)?;
    Ok(())
}

/// Resolve the player and fetch their stats, reporting recoverable failures.
async fn load_player<P, R, W>(
    provider: &mut P,
    console: &mut Console<R, W>,
    name: &str,
) -> Result<Option<StatBundle>>
where
    P: StatsProvider,
    R: BufRead,
    W: Write,
{
    match fetch_player(provider, name).await {
        Ok((player, bundle)) => {
            console.say(format!("Player found: {}", player.full_name))?;
            Ok(Some(bundle))
        }
        Err(StatsError::PlayerNotFound { name }) => {
            info!(%name, "player not found");
            console.say(PLAYER_NOT_FOUND)?;
            Ok(None)
        }
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, "could not load player stats");
            console.say(format!("Could not fetch data: {e}"))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn fetch_player<P: StatsProvider>(
    provider: &mut P,
    name: &str,
) -> Result<(PlayerRecord, StatBundle)> {
    let player = resolve(provider, name).await?;
    let bundle = provider.career_stats(player.id).await?;
    Ok((player, bundle))
}

/// Stats menu loop for one player. End of input counts as quitting.
fn browse_player<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    bundle: &StatBundle,
) -> Result<NextStep> {
    loop {
        let Some(choice) = console.show_stats_menu()? else {
            return Ok(NextStep::Quit);
        };

        match StatsMenuChoice::parse(&choice) {
            Some(StatsMenuChoice::View(view)) => {
                console.say(format!("\n{RESULT_RULE}"))?;
                console.say(extract(bundle, view))?;
                console.say(RESULT_RULE)?;

                match post_view(console)? {
                    PostViewChoice::ViewDifferentStats => continue,
                    PostViewChoice::SearchAnother => return Ok(NextStep::SearchAnother),
                    PostViewChoice::Quit => return Ok(NextStep::Quit),
                }
            }
            Some(StatsMenuChoice::SearchAnother) => return Ok(NextStep::SearchAnother),
            Some(StatsMenuChoice::Quit) => return Ok(NextStep::Quit),
            None => {
                warn!(%choice, "invalid stats menu choice");
                console.say(INVALID_STATS_CHOICE)?;
            }
        }
    }
}

/// Post-view menu; re-prompts until a valid choice or end of input.
fn post_view<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<PostViewChoice> {
    loop {
        let Some(choice) = console.show_post_view_menu()? else {
            return Ok(PostViewChoice::Quit);
        };
        match PostViewChoice::parse(&choice) {
            Some(next) => return Ok(next),
            None => {
                warn!(%choice, "invalid post-view choice");
                console.say(INVALID_POST_VIEW_CHOICE)?;
            }
        }
    }
}
