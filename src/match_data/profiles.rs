use crate::error::AppError;
use crate::match_data::json_lines::parse_json_lines;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{info, warn};

/// A fixture to profile. Extra fields in the input row are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
}

/// Precomputed per-team statistics, e.g. first-round season averages.
/// Every field besides `team` is taken as a numeric stat column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamStats {
    pub team: String,
    #[serde(flatten)]
    pub stats: BTreeMap<String, f64>,
}

/// Fixture with both teams' standings and stats joined on.
///
/// Stat columns are named `<stat>_home` and `<stat>_away`. A team missing
/// from the standings or stats table gets `null` values, so every profile
/// carries the same columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchProfile {
    pub home_team: String,
    pub away_team: String,
    pub home_position: Option<u32>,
    pub away_position: Option<u32>,
    #[serde(flatten)]
    pub stats: BTreeMap<String, Option<f64>>,
}

/// Reads a standings file: one team per non-blank line, best team first.
pub fn parse_positions(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_fixtures(input: &str) -> Result<Vec<Fixture>, AppError> {
    parse_json_lines(input)
}

pub fn parse_team_stats(input: &str) -> Result<Vec<TeamStats>, AppError> {
    parse_json_lines(input)
}

/// Joins standings positions (1-based, in `positions` order) and per-team
/// stats onto every fixture, keeping fixture order.
///
/// When a team appears more than once in `positions` or `team_stats`, the
/// first occurrence wins.
pub fn build_match_profiles(
    fixtures: &[Fixture],
    team_stats: &[TeamStats],
    positions: &[String],
) -> Vec<MatchProfile> {
    let mut position_of: HashMap<&str, u32> = HashMap::new();
    for (index, team) in positions.iter().enumerate() {
        position_of.entry(team.as_str()).or_insert(index as u32 + 1);
    }

    let mut stats_of: HashMap<&str, &BTreeMap<String, f64>> = HashMap::new();
    for row in team_stats {
        stats_of.entry(row.team.as_str()).or_insert(&row.stats);
    }

    let columns: BTreeSet<&str> = team_stats
        .iter()
        .flat_map(|row| row.stats.keys().map(String::as_str))
        .collect();

    info!(
        "Building profiles for {} fixtures with {} stat columns",
        fixtures.len(),
        columns.len()
    );

    fixtures
        .iter()
        .map(|fixture| {
            let home_stats = lookup_stats(&stats_of, &fixture.home_team);
            let away_stats = lookup_stats(&stats_of, &fixture.away_team);

            let mut stats = BTreeMap::new();
            for column in &columns {
                stats.insert(
                    format!("{column}_home"),
                    home_stats.and_then(|s| s.get(*column).copied()),
                );
                stats.insert(
                    format!("{column}_away"),
                    away_stats.and_then(|s| s.get(*column).copied()),
                );
            }

            MatchProfile {
                home_team: fixture.home_team.clone(),
                away_team: fixture.away_team.clone(),
                home_position: lookup_position(&position_of, &fixture.home_team),
                away_position: lookup_position(&position_of, &fixture.away_team),
                stats,
            }
        })
        .collect()
}

fn lookup_stats<'a>(
    stats_of: &HashMap<&str, &'a BTreeMap<String, f64>>,
    team: &str,
) -> Option<&'a BTreeMap<String, f64>> {
    let found = stats_of.get(team).copied();
    if found.is_none() {
        warn!("No team stats for '{team}'");
    }
    found
}

fn lookup_position(position_of: &HashMap<&str, u32>, team: &str) -> Option<u32> {
    let found = position_of.get(team).copied();
    if found.is_none() {
        warn!("No standings position for '{team}'");
    }
    found
}
