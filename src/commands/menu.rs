//! Console menus and the line-oriented I/O they run on.

use std::io::{BufRead, Write};

use crate::{stats::ViewSelection, Result};

/// Rule printed under the welcome banner.
pub const BANNER_RULE: &str = "--------------------------------------------------";
/// Rule printed above and below every stats view.
pub const RESULT_RULE: &str = "==================================================";

pub const PLAYER_PROMPT: &str = "Enter player name (or 'quit' to exit): ";
pub const QUIT_SENTINEL: &str = "quit";

pub const WELCOME: &str = "Welcome to the NBA Stat Fetcher";
pub const LOADING: &str = "Fetching NBA data... (this may take a moment)";
pub const FAREWELL: &str = "Thanks for using NBA Stat Fetcher!";
pub const PLAYER_NOT_FOUND: &str = "Player not found. Please check spelling.";
pub const INVALID_STATS_CHOICE: &str = "Invalid choice. Please enter 1-7.";
pub const INVALID_POST_VIEW_CHOICE: &str = "Invalid choice. Please enter 1-3.";

/// Options on the per-player stats menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMenuChoice {
    View(ViewSelection),
    SearchAnother,
    Quit,
}

impl StatsMenuChoice {
    /// Parse a menu key `1`–`7`; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::View(ViewSelection::CurrentSeason)),
            "2" => Some(Self::View(ViewSelection::LastFiveSeasons)),
            "3" => Some(Self::View(ViewSelection::PostseasonCareer)),
            "4" => Some(Self::View(ViewSelection::RegularSeasonCareer)),
            "5" => Some(Self::View(ViewSelection::CollegeTotals)),
            "6" => Some(Self::SearchAnother),
            "7" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Options shown after a stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostViewChoice {
    ViewDifferentStats,
    SearchAnother,
    Quit,
}

impl PostViewChoice {
    /// Parse a menu key `1`–`3`; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewDifferentStats),
            "2" => Some(Self::SearchAnother),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Line-based console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The trailing line break is stripped.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn show_stats_menu(&mut self) -> Result<Option<String>> {
        self.say("\nPlease select from the following options:")?;
        for (i, view) in ViewSelection::ALL.iter().enumerate() {
            self.say(format!("{}. {}", i + 1, view.label()))?;
        }
        self.say("6. Search another player")?;
        self.say("7. Quit program")?;
        self.prompt("Enter your choice (1-7): ")
    }

    pub fn show_post_view_menu(&mut self) -> Result<Option<String>> {
        self.say("\nWhat would you like to do next?")?;
        self.say("1. View different stats for this player")?;
        self.say("2. Search for a different player")?;
        self.say("3. Quit program")?;
        self.prompt("Enter your choice (1-3): ")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
