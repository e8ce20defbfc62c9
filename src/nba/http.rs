use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER},
    Client,
};
use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, Season},
    nba::{
        directory::PlayerDirectory,
        types::{PlayerRecord, ResultSetsEnvelope, StatBundle},
        DirectorySource, StatsProvider,
    },
    Result,
};


/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// League id the service uses for the NBA.
pub const NBA_LEAGUE_ID: &str = "00";

/// The service drops requests that do not look like they come from nba.com.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Headers sent with every stats request.
pub fn get_common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h
}

/// Thin async client for the two endpoints this program reads.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    season: Season,
}

impl NbaStatsClient {
    pub fn new(base_url: impl Into<String>, season: Season, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(get_common_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            season,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `commonallplayers`: every player, historical and current.
    pub async fn get_all_players(&self) -> Result<ResultSetsEnvelope> {
        let season = self.season.to_string();
        let params = [
            ("LeagueID", NBA_LEAGUE_ID),
            ("Season", season.as_str()),
            ("IsOnlyCurrentSeason", "0"),
        ];
        self.get_result_sets("commonallplayers", &params).await
    }

    /// `playercareerstats`: season and career totals for one player.
    pub async fn get_player_career_stats(&self, player_id: PlayerId) -> Result<ResultSetsEnvelope> {
        let id = player_id.to_string();
        let params = [
            ("PlayerID", id.as_str()),
            ("PerMode", "Totals"),
            ("LeagueID", NBA_LEAGUE_ID),
        ];
        self.get_result_sets("playercareerstats", &params).await
    }

    async fn get_result_sets(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ResultSetsEnvelope> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting stats endpoint");

        let body = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let res: ResultSetsEnvelope = serde_json::from_str(&body)?;

        info!(endpoint, result_sets = res.result_sets.len(), "stats endpoint responded");
        Ok(res)
    }
}

impl DirectorySource for NbaStatsClient {
    async fn load_directory(&mut self) -> Result<PlayerDirectory> {
        PlayerDirectory::from_envelope(self.get_all_players().await?)
    }
}

impl StatsProvider for NbaStatsClient {
    async fn find_players_by_full_name(&mut self, name: &str) -> Result<Vec<PlayerRecord>> {
        Ok(self.load_directory().await?.find_by_full_name(name))
    }

    async fn career_stats(&mut self, player_id: PlayerId) -> Result<StatBundle> {
        StatBundle::try_from(self.get_player_career_stats(player_id).await?)
    }
}
