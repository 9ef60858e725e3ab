//! The season query battery
//!
//! Eleven independent questions over a loaded season. Two of them exist in
//! deliberately duplicated form (two averages, two minimum searches); the
//! pairs must agree on every input and tests hold them to that.

use crate::{MatchRecord, Outcome};
use std::collections::{BTreeMap, HashSet};

/// Home/away partition of a season relative to one club
///
/// Every record lands in exactly one group; there is no third bucket. A club
/// that never plays at home yields an empty (not absent) home group.
#[derive(Debug, Clone, Default)]
pub struct HomeAwaySplit {
    /// Games where the club was the home side, in source order
    pub home: Vec<MatchRecord>,
    /// All remaining games, in source order
    pub away: Vec<MatchRecord>,
}

/// Season records grouped by match outcome
///
/// All three groups exist even when empty, so callers can address any
/// outcome without a fallible lookup.
#[derive(Debug, Clone, Default)]
pub struct OutcomeGroups {
    pub won: Vec<MatchRecord>,
    pub lost: Vec<MatchRecord>,
    pub draw: Vec<MatchRecord>,
}

impl OutcomeGroups {
    /// Games that ended with the given outcome, in source order
    pub fn records(&self, outcome: Outcome) -> &[MatchRecord] {
        match outcome {
            Outcome::Won => &self.won,
            Outcome::Lost => &self.lost,
            Outcome::Draw => &self.draw,
        }
    }
}

/// Count games whose info field contains the competition marker
pub fn count_competition_games(games: &[MatchRecord], marker: &str) -> usize {
    games.iter().filter(|g| g.info.contains(marker)).count()
}

/// Partition the season into the club's home games and everything else
pub fn split_home_away(games: &[MatchRecord], team: &str) -> HomeAwaySplit {
    let (home, away) = games.iter().cloned().partition(|g| g.home_team == team);
    HomeAwaySplit { home, away }
}

/// Group the season by outcome, preserving source order within each group
pub fn group_by_outcome(games: &[MatchRecord]) -> OutcomeGroups {
    let mut groups = OutcomeGroups::default();
    for game in games {
        match game.outcome() {
            Outcome::Won => groups.won.push(game.clone()),
            Outcome::Lost => groups.lost.push(game.clone()),
            Outcome::Draw => groups.draw.push(game.clone()),
        }
    }
    groups
}

/// Average goals per game, from an integer goal total divided by game count.
///
/// # Panics
///
/// Panics when `games` is empty: an average over zero games is undefined and
/// must fail loudly rather than produce NaN.
pub fn average_goals_by_total(games: &[MatchRecord]) -> f64 {
    assert!(
        !games.is_empty(),
        "average goals per game is undefined for an empty season"
    );
    let total: u32 = games.iter().map(|g| g.goal_count()).sum();
    total as f64 / games.len() as f64
}

/// Average goals per game, as a directly accumulated floating mean.
///
/// Agrees with [`average_goals_by_total`] within floating rounding on every
/// non-empty input.
///
/// # Panics
///
/// Panics when `games` is empty, like [`average_goals_by_total`].
pub fn mean_goals_per_game(games: &[MatchRecord]) -> f64 {
    assert!(
        !games.is_empty(),
        "average goals per game is undefined for an empty season"
    );
    games.iter().map(|g| g.goal_count() as f64).sum::<f64>() / games.len() as f64
}

/// Count the club's home wins
pub fn home_wins_for(games: &[MatchRecord], team: &str) -> usize {
    games
        .iter()
        .filter(|g| g.home_team == team && g.outcome() == Outcome::Won)
        .count()
}

/// The game with the fewest total goals, found by stable sort.
///
/// Ties resolve to the earliest such game in source order.
pub fn fewest_goals_by_sort(games: &[MatchRecord]) -> Option<&MatchRecord> {
    let mut by_goals: Vec<&MatchRecord> = games.iter().collect();
    by_goals.sort_by_key(|g| g.goal_count());
    by_goals.first().copied()
}

/// The game with the fewest total goals, found by direct minimum search.
///
/// Agrees with [`fewest_goals_by_sort`] on every input, ties included.
pub fn fewest_goals_by_min(games: &[MatchRecord]) -> Option<&MatchRecord> {
    // min_by_key alone keeps the last of equal keys; the index pins the first
    games
        .iter()
        .enumerate()
        .min_by_key(|(idx, g)| (g.goal_count(), *idx))
        .map(|(_, g)| g)
}

/// Distinct kickoff times in first-seen order, joined with ", "
pub fn distinct_kickoff_times(games: &[MatchRecord]) -> String {
    let mut seen = HashSet::new();
    let mut times = Vec::new();
    for game in games {
        if seen.insert(game.time.as_str()) {
            times.push(game.time.as_str());
        }
    }
    times.join(", ")
}

/// Whether the club ever won an away game by at least two goals
pub fn has_away_rout(games: &[MatchRecord], team: &str) -> bool {
    games.iter().any(|g| g.away_team == team && g.margin() <= -2)
}

/// Games from the given year, regrouped by home team and flattened back
/// into one list.
///
/// The result is in grouping-then-concatenation order (clusters in team-name
/// order, source order within each cluster), NOT source order. The regrouping
/// is part of the contract, not an accident to be smoothed over.
pub fn season_games_by_home_team(games: &[MatchRecord], year: &str) -> Vec<MatchRecord> {
    let mut by_home: BTreeMap<&str, Vec<&MatchRecord>> = BTreeMap::new();
    for game in games.iter().filter(|g| g.date.contains(year)) {
        by_home.entry(game.home_team.as_str()).or_default().push(game);
    }
    by_home.into_values().flatten().cloned().collect()
}
