//! In-memory player directory built from `commonallplayers`.

use crate::nba::types::{PlayerRecord, ResultSetsEnvelope, StatTable};
use crate::{error::StatsError, Result};

/// Every player the service knows about, in the service's order.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Build the directory from the first result set of a `commonallplayers` response.
    pub fn from_envelope(envelope: ResultSetsEnvelope) -> Result<Self> {
        let set = envelope
            .result_sets
            .into_iter()
            .next()
            .ok_or_else(|| StatsError::malformed("player directory has no result sets"))?;
        let table = StatTable::try_from(set)?;
        Ok(Self::new(PlayerRecord::from_directory_table(&table)?))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Case-insensitive substring match on full name, preserving directory order.
    ///
    /// An empty query matches nothing.
    pub fn find_by_full_name(&self, name: &str) -> Vec<PlayerRecord> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.players
            .iter()
            .filter(|p| p.full_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;
    use serde_json::json;

    fn directory() -> PlayerDirectory {
        let envelope: ResultSetsEnvelope = serde_json::from_value(json!({
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
                "rowSet": [
                    [2544, "James, LeBron", "LeBron James", 1],
                    [1628404, "Jones, LeBron", "Bronny James", 1],
                    [201939, "Curry, Stephen", "Stephen Curry", 1],
                    [76375, "Johnson, Magic", "Magic Johnson", 0]
                ]
            }]
        }))
        .unwrap();
        PlayerDirectory::from_envelope(envelope).unwrap()
    }

    #[test]
    fn test_from_envelope_reads_all_players() {
        let dir = directory();
        assert_eq!(dir.len(), 4);
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_from_envelope_without_result_sets() {
        let envelope = ResultSetsEnvelope {
            result_sets: vec![],
        };
        assert!(matches!(
            PlayerDirectory::from_envelope(envelope),
            Err(StatsError::MalformedBundle { .. })
        ));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let found = directory().find_by_full_name("stephen curry");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, PlayerId::new(201939));
    }

    #[test]
    fn test_find_keeps_directory_order() {
        let found = directory().find_by_full_name("James");
        let ids: Vec<_> = found.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![2544, 1628404]);
    }

    #[test]
    fn test_find_no_match_and_empty_query() {
        assert!(directory().find_by_full_name("Michael Jordan").is_empty());
        assert!(directory().find_by_full_name("").is_empty());
    }
}
