//! Selecting and reshaping the rows shown for each stats view.

use std::fmt;

use crate::nba::types::{StatBundle, StatTable};

/// Columns that identify rows but mean nothing to a reader.
pub const EXCLUDED_COLUMNS: [&str; 5] = [
    "LEAGUE_ID",
    "ORGANIZATION_ID",
    "SCHOOL_NAME",
    "TEAM_ID",
    "PLAYER_ID",
];

/// Display labels for abbreviated API column names.
pub const COLUMN_RENAMES: [(&str, &str); 8] = [
    ("SEASON_ID", "Season"),
    ("TEAM_ABBREVIATION", "Team"),
    ("PLAYER_AGE", "Age"),
    ("FG_PCT", "FG%"),
    ("FG3_PCT", "3P%"),
    ("FT_PCT", "FT%"),
    ("FG3M", "3PM"),
    ("FG3A", "3PA"),
];

/// Number of seasons in the [`ViewSelection::LastFiveSeasons`] view.
pub const RECENT_SEASONS: usize = 5;

pub const NO_REGULAR_SEASON_STATS: &str = "This player has no regular season stats";
pub const NO_POSTSEASON_STATS: &str = "This player has no postseason stats";
pub const NO_COLLEGE_STATS: &str = "This player has no college stats";

/// Which slice of a player's stats to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSelection {
    CurrentSeason,
    LastFiveSeasons,
    PostseasonCareer,
    RegularSeasonCareer,
    CollegeTotals,
}

impl ViewSelection {
    pub const ALL: [ViewSelection; 5] = [
        ViewSelection::CurrentSeason,
        ViewSelection::LastFiveSeasons,
        ViewSelection::PostseasonCareer,
        ViewSelection::RegularSeasonCareer,
        ViewSelection::CollegeTotals,
    ];

    /// Menu label for this view.
    pub fn label(self) -> &'static str {
        match self {
            ViewSelection::CurrentSeason => "View current season totals",
            ViewSelection::LastFiveSeasons => "View past 5 seasons totals",
            ViewSelection::PostseasonCareer => "View postseason career totals",
            ViewSelection::RegularSeasonCareer => "View regular season career totals",
            ViewSelection::CollegeTotals => "View college totals",
        }
    }
}

/// A stats table after identifier columns are dropped and labels renamed.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable(StatTable);

impl DisplayTable {
    pub fn table(&self) -> &StatTable {
        &self.0
    }

    pub fn columns(&self) -> &[String] {
        self.0.columns()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a view request: rows to show, or why there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Table(DisplayTable),
    Empty(&'static str),
}

impl Extraction {
    pub fn table(&self) -> Option<&DisplayTable> {
        match self {
            Extraction::Table(t) => Some(t),
            Extraction::Empty(_) => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Extraction::Table(_) => None,
            Extraction::Empty(msg) => Some(msg),
        }
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extraction::Table(t) => write!(f, "{t}"),
            Extraction::Empty(msg) => f.write_str(msg),
        }
    }
}

/// Pick the rows for `selection` out of `bundle` and format them.
pub fn extract(bundle: &StatBundle, selection: ViewSelection) -> Extraction {
    match selection {
        ViewSelection::CurrentSeason => {
            non_empty_or(&bundle.season_rows.tail(1), NO_REGULAR_SEASON_STATS)
        }
        ViewSelection::LastFiveSeasons => {
            Extraction::Table(format(&bundle.season_rows.tail(RECENT_SEASONS)))
        }
        ViewSelection::PostseasonCareer => {
            non_empty_or(&bundle.career_postseason, NO_POSTSEASON_STATS)
        }
        ViewSelection::RegularSeasonCareer => Extraction::Table(format(&bundle.career_regular)),
        ViewSelection::CollegeTotals => non_empty_or(&bundle.career_college, NO_COLLEGE_STATS),
    }
}

fn non_empty_or(table: &StatTable, message: &'static str) -> Extraction {
    if table.is_empty() {
        Extraction::Empty(message)
    } else {
        Extraction::Table(format(table))
    }
}

/// Display label for an API column name.
pub fn display_name(column: &str) -> &str {
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == column)
        .map(|(_, to)| *to)
        .unwrap_or(column)
}

/// Drop [`EXCLUDED_COLUMNS`] and apply [`COLUMN_RENAMES`]; rows and values are untouched.
pub fn format(table: &StatTable) -> DisplayTable {
    let kept: Vec<(usize, String)> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| !EXCLUDED_COLUMNS.contains(&name.as_str()))
        .map(|(idx, name)| (idx, display_name(name).to_string()))
        .collect();

    let columns = kept.iter().map(|(_, name)| name.clone()).collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| kept.iter().map(|(idx, _)| row[*idx].clone()).collect())
        .collect();

    // Widths match by construction: every row is projected onto the same indices.
    DisplayTable(StatTable::new(columns, rows).unwrap_or_default())
}
