//! Wire and domain types for the NBA stats API.
//!
//! Every endpoint answers with a list of result sets, each a header row plus
//! a `rowSet` matrix. [`StatTable`] keeps that shape; [`StatBundle`] names the
//! career-stats result sets this client reads.

use crate::{
    cli::types::PlayerId,
    error::{Result, StatsError},
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[cfg(test)]
mod tests;

/// Top-level envelope shared by the stats endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSetsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a stats response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<StatValue>>,
}

/// A single cell of a stats table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl StatValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Int(i) => Some(*i),
            StatValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            StatValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for StatValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StatValue::Null,
            Value::Number(n) => match n.as_i64() {
                Some(i) => StatValue::Int(i),
                None => n.as_f64().map(StatValue::Float).unwrap_or(StatValue::Null),
            },
            Value::String(s) => StatValue::Text(s),
            other => StatValue::Text(other.to_string()),
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(i) => write!(f, "{i}"),
            StatValue::Float(x) => write!(f, "{x}"),
            StatValue::Text(s) => f.write_str(s),
            StatValue::Null => f.write_str("-"),
        }
    }
}

/// Ordered rows sharing one column set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatTable {
    columns: Vec<String>,
    rows: Vec<Vec<StatValue>>,
}

impl StatTable {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<StatValue>>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(StatsError::malformed(format!(
                "row {} has {} values but the table has {} columns",
                idx,
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<StatValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of `column` in row `row`, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&StatValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// The last `n` rows (fewer if the table is shorter), in original order.
    pub fn tail(&self, n: usize) -> StatTable {
        let start = self.rows.len().saturating_sub(n);
        StatTable {
            columns: self.columns.clone(),
            rows: self.rows[start..].to_vec(),
        }
    }
}

impl TryFrom<ResultSet> for StatTable {
    type Error = StatsError;

    fn try_from(set: ResultSet) -> Result<Self> {
        StatTable::new(set.headers, set.row_set).map_err(|e| match e {
            StatsError::MalformedBundle { message } => {
                StatsError::malformed(format!("result set '{}': {}", set.name, message))
            }
            other => other,
        })
    }
}

/// Career-stats result sets the client reads, by their position in the response.
pub mod positions {
    pub const SEASON_TOTALS_REGULAR_SEASON: usize = 0;
    pub const CAREER_TOTALS_REGULAR_SEASON: usize = 1;
    pub const CAREER_TOTALS_POST_SEASON: usize = 3;
    pub const COLLEGE_TOTALS: usize = 6;

    /// A career-stats response must carry at least this many result sets.
    pub const MIN_RESULT_SETS: usize = 7;
}

/// The tables of one `playercareerstats` response that the views need.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBundle {
    /// Per-season regular-season rows, most recent last.
    pub season_rows: StatTable,
    /// Regular-season career aggregate.
    pub career_regular: StatTable,
    /// Postseason career aggregate; empty when the player never made the playoffs.
    pub career_postseason: StatTable,
    /// College aggregate; empty for players who did not play college ball.
    pub career_college: StatTable,
}

impl StatBundle {
    pub fn from_result_sets(result_sets: Vec<ResultSet>) -> Result<Self> {
        if result_sets.len() < positions::MIN_RESULT_SETS {
            return Err(StatsError::malformed(format!(
                "expected at least {} result sets, found {}",
                positions::MIN_RESULT_SETS,
                result_sets.len()
            )));
        }

        // Only the kept sets are validated; the others are never read.
        let mut sets: Vec<Option<ResultSet>> = result_sets.into_iter().map(Some).collect();
        let mut take = |idx: usize| -> Result<StatTable> {
            sets[idx]
                .take()
                .map(StatTable::try_from)
                .unwrap_or_else(|| Ok(StatTable::default()))
        };

        Ok(Self {
            season_rows: take(positions::SEASON_TOTALS_REGULAR_SEASON)?,
            career_regular: take(positions::CAREER_TOTALS_REGULAR_SEASON)?,
            career_postseason: take(positions::CAREER_TOTALS_POST_SEASON)?,
            career_college: take(positions::COLLEGE_TOTALS)?,
        })
    }
}

impl TryFrom<ResultSetsEnvelope> for StatBundle {
    type Error = StatsError;

    fn try_from(envelope: ResultSetsEnvelope) -> Result<Self> {
        StatBundle::from_result_sets(envelope.result_sets)
    }
}

/// Directory entry for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub full_name: String,
    pub is_active: bool,
}

impl PlayerRecord {
    pub const ID_COLUMN: &'static str = "PERSON_ID";
    pub const NAME_COLUMN: &'static str = "DISPLAY_FIRST_LAST";
    pub const ROSTER_STATUS_COLUMN: &'static str = "ROSTERSTATUS";

    /// Read player records from a `commonallplayers` table, keeping its order.
    ///
    /// Rows with a missing id or name are skipped.
    pub fn from_directory_table(table: &StatTable) -> Result<Vec<PlayerRecord>> {
        let id_idx = table
            .column_index(Self::ID_COLUMN)
            .ok_or_else(|| StatsError::MissingColumn {
                column: Self::ID_COLUMN.to_string(),
            })?;
        let name_idx = table
            .column_index(Self::NAME_COLUMN)
            .ok_or_else(|| StatsError::MissingColumn {
                column: Self::NAME_COLUMN.to_string(),
            })?;
        let status_idx = table.column_index(Self::ROSTER_STATUS_COLUMN);

        let records = table
            .rows()
            .iter()
            .filter_map(|row| {
                let id = row[id_idx].as_i64().and_then(|i| u32::try_from(i).ok())?;
                let full_name = row[name_idx].as_str()?.trim().to_string();
                if full_name.is_empty() {
                    return None;
                }
                let is_active = status_idx
                    .and_then(|idx| row[idx].as_i64())
                    .map(|status| status == 1)
                    .unwrap_or(false);
                Some(PlayerRecord {
                    id: PlayerId::new(id),
                    full_name,
                    is_active,
                })
            })
            .collect();

        Ok(records)
    }
}
