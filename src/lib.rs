//! Season match analytics over a delimited results file
//!
//! Loads one season of football match records and answers a fixed battery of
//! aggregate questions over them.

pub mod data;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of a match, seen from the home side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won => write!(f, "WON"),
            Outcome::Lost => write!(f, "LOST"),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// A single match record from the season results file
///
/// Text fields hold the raw source text unmodified: the date and info fields
/// are matched downstream by substring containment, so nothing is trimmed or
/// re-parsed into richer types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Calendar date text in the source's native format
    pub date: String,
    /// Kickoff time text
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Free-text competition tag, e.g. "BUNDESLIGA"
    pub info: String,
}

impl MatchRecord {
    /// Parse one semicolon-delimited line in the fixed column order
    /// `date;time;home;home goals;away goals;away;info`.
    ///
    /// Fails when the field count is not exactly seven or a goal field is not
    /// a non-negative integer. No partial record is ever produced.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != 7 {
            return Err(MatchdayError::MalformedRecord(format!(
                "expected 7 fields, found {}",
                fields.len()
            )));
        }

        Ok(MatchRecord {
            date: fields[0].to_string(),
            time: fields[1].to_string(),
            home_team: fields[2].to_string(),
            home_goals: parse_goals(fields[3], "home goals")?,
            away_goals: parse_goals(fields[4], "away goals")?,
            away_team: fields[5].to_string(),
            info: fields[6].to_string(),
        })
    }

    /// Total goals scored in this match
    pub fn goal_count(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    /// Goal margin (positive = home side ahead)
    pub fn margin(&self) -> i64 {
        self.home_goals as i64 - self.away_goals as i64
    }

    /// Classify the match from the home side's perspective
    pub fn outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Outcome::Won,
            std::cmp::Ordering::Less => Outcome::Lost,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}:{} {} [{}]",
            self.date,
            self.time,
            self.home_team,
            self.home_goals,
            self.away_goals,
            self.away_team,
            self.info
        )
    }
}

fn parse_goals(field: &str, label: &str) -> Result<u32> {
    field.parse().map_err(|_| {
        MatchdayError::MalformedRecord(format!(
            "{} is not a non-negative integer: {:?}",
            label, field
        ))
    })
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum MatchdayError {
    #[error("match data source {path} is unavailable: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed match record: {0}")]
    MalformedRecord(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchdayError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub season: SeasonConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub csv_path: String,
}

/// Fixed marker values the report is written against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Competition tag matched against the info field by containment
    pub competition: String,
    /// Club the home/away and win queries are phrased around
    pub focus_team: String,
    /// Year text matched against the date field by containment
    pub year: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                csv_path: "data/games.csv".to_string(),
            },
            season: SeasonConfig {
                competition: "BUNDESLIGA".to_string(),
                focus_team: "FC Bayern Muenchen".to_string(),
                year: "2019".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchdayError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| MatchdayError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MatchdayError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
