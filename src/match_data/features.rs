use crate::error::AppError;
use crate::match_data::json_lines::parse_json_lines;
use crate::match_data::lead_changes::count_lead_changes;
use crate::match_data::raw_list::RawList;
use crate::match_data::season::SeasonWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A loosely typed statistic cell. Exports contain integers, floats,
/// percentages and the occasional list literal in the same column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Integer reading of the cell. Missing, `nan` and unreadable values
    /// count as 0, a list literal counts its items.
    pub fn lenient_count(value: Option<&StatValue>) -> u32 {
        match value {
            None => 0,
            Some(StatValue::Int(n)) if *n < 0 => 0,
            Some(StatValue::Int(n)) => u32::try_from(*n).unwrap_or(u32::MAX),
            Some(StatValue::Float(f)) => truncate(*f),
            Some(StatValue::Text(text)) => {
                let text = text.trim();
                if text.starts_with('[') && text.ends_with(']') {
                    return RawList::from_text(text).item_count_lenient();
                }
                match parse_number(text) {
                    Some(f) => truncate(f),
                    None => {
                        if !text.is_empty() {
                            debug!("Treating unreadable count '{text}' as 0");
                        }
                        0
                    }
                }
            }
        }
    }

    /// Float reading of the cell with the same fallbacks as [`Self::lenient_count`].
    pub fn lenient_float(value: Option<&StatValue>) -> f64 {
        match value {
            None => 0.0,
            Some(StatValue::Int(n)) => *n as f64,
            Some(StatValue::Float(f)) if f.is_finite() => *f,
            Some(StatValue::Float(_)) => 0.0,
            Some(StatValue::Text(text)) => parse_number(text.trim()).unwrap_or(0.0),
        }
    }

    /// Possession share such as `"58%"`, as a number of percent.
    pub fn possession_percent(value: Option<&StatValue>) -> f64 {
        match value {
            Some(StatValue::Text(text)) => {
                let stripped = StatValue::Text(text.replace('%', ""));
                Self::lenient_float(Some(&stripped))
            }
            other => Self::lenient_float(other),
        }
    }
}

// f64::from_str accepts "nan" and "inf"; neither is a usable statistic.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn truncate(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u32
    } else {
        0
    }
}

/// One match row of the raw export. Field names follow the export columns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchRecord {
    pub home_team: String,
    pub away_team: String,
    #[serde(rename = "League", default)]
    pub league: Option<String>,
    #[serde(default)]
    pub season_year: Option<String>,
    #[serde(rename = "Date_day")]
    pub date_day: String,
    /// Half-time result such as `"1-0"`
    pub first_half: String,
    /// Second-half result such as `"2-1"`
    pub second_half: String,

    #[serde(default)]
    pub home_team_goals_current_time: RawList,
    #[serde(default)]
    pub away_team_goals_current_time: RawList,
    #[serde(default)]
    pub home_team_goals: RawList,
    #[serde(default)]
    pub away_team_goals: RawList,
    #[serde(default)]
    pub home_team_yellow_card: RawList,
    #[serde(default)]
    pub away_team_yellow_card: RawList,
    #[serde(default)]
    pub home_team_red_card: RawList,
    #[serde(default)]
    pub away_team_red_card: RawList,

    #[serde(rename = "Ball_Possession_Home", default)]
    pub possession_home: Option<StatValue>,
    #[serde(rename = "Ball_Possession_Host", default)]
    pub possession_away: Option<StatValue>,
    #[serde(rename = "Shots_on_Goal_Home", default)]
    pub shots_on_goal_home: Option<StatValue>,
    #[serde(rename = "Shots_on_Goal_Host", default)]
    pub shots_on_goal_away: Option<StatValue>,
    #[serde(rename = "Fouls_Home", default)]
    pub fouls_home: Option<StatValue>,
    #[serde(rename = "Fouls_Host", default)]
    pub fouls_away: Option<StatValue>,
    #[serde(rename = "Corner_Kicks_Home", default)]
    pub corners_home: Option<StatValue>,
    #[serde(rename = "Corner_Kicks_Host", default)]
    pub corners_away: Option<StatValue>,
    #[serde(rename = "Goalkeeper_Saves_Home", default)]
    pub saves_home: Option<StatValue>,
    #[serde(rename = "Goalkeeper_Saves_Host", default)]
    pub saves_away: Option<StatValue>,
}

/// Derived per-match feature row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFeatures {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub first_half_goals: u32,
    pub second_half_goals: u32,
    pub lead_changes: u32,
    pub yellow_cards_total: u32,
    pub red_cards_total: u32,
    pub goals_home: u32,
    pub goals_away: u32,
    pub possession_home: f64,
    pub possession_away: f64,
    pub shots_on_goal_total: u32,
    pub fouls_total: u32,
    pub corners_home: u32,
    pub corners_away: u32,
    pub saves_home: u32,
    pub saves_away: u32,
}

/// Total goals in a half result such as `"2-1"`.
pub fn half_result_total_goals(field: &str, result: &str) -> Result<u32, AppError> {
    let (left, right) = result
        .trim()
        .split_once('-')
        .ok_or_else(|| AppError::stat_parse(field, result))?;
    let left: u32 = left
        .trim()
        .parse()
        .map_err(|_| AppError::stat_parse(field, result))?;
    let right: u32 = right
        .trim()
        .parse()
        .map_err(|_| AppError::stat_parse(field, result))?;
    left.checked_add(right)
        .ok_or_else(|| AppError::stat_parse(field, result))
}

/// Derives the feature row of a single match.
///
/// # Errors
/// * `AppError::DateTimeParse` - `Date_day` is not a valid `DD.MM` in the season
/// * `AppError::StatParse` - a half result is malformed
/// * `AppError::MinuteParse` / `AppError::ListParse` - goal times are malformed
pub fn derive_match_features(
    record: &RawMatchRecord,
    season: &SeasonWindow,
) -> Result<MatchFeatures, AppError> {
    let lead_changes = count_lead_changes(
        &record.home_team_goals_current_time,
        &record.away_team_goals_current_time,
    )?;

    Ok(MatchFeatures {
        home_team: record.home_team.clone(),
        away_team: record.away_team.clone(),
        date: season.resolve_match_date(&record.date_day)?,
        first_half_goals: half_result_total_goals("first_half", &record.first_half)?,
        second_half_goals: half_result_total_goals("second_half", &record.second_half)?,
        lead_changes,
        yellow_cards_total: record
            .home_team_yellow_card
            .item_count_lenient()
            .saturating_add(record.away_team_yellow_card.item_count_lenient()),
        red_cards_total: record
            .home_team_red_card
            .item_count_lenient()
            .saturating_add(record.away_team_red_card.item_count_lenient()),
        goals_home: record.home_team_goals.item_count_lenient(),
        goals_away: record.away_team_goals.item_count_lenient(),
        possession_home: StatValue::possession_percent(record.possession_home.as_ref()),
        possession_away: StatValue::possession_percent(record.possession_away.as_ref()),
        shots_on_goal_total: StatValue::lenient_count(record.shots_on_goal_home.as_ref())
            .saturating_add(StatValue::lenient_count(record.shots_on_goal_away.as_ref())),
        fouls_total: StatValue::lenient_count(record.fouls_home.as_ref())
            .saturating_add(StatValue::lenient_count(record.fouls_away.as_ref())),
        corners_home: StatValue::lenient_count(record.corners_home.as_ref()),
        corners_away: StatValue::lenient_count(record.corners_away.as_ref()),
        saves_home: StatValue::lenient_count(record.saves_home.as_ref()),
        saves_away: StatValue::lenient_count(record.saves_away.as_ref()),
    })
}

/// Optional exact-match filters on league and season label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub league: Option<String>,
    pub season_label: Option<String>,
}

impl MatchFilter {
    pub fn matches(&self, record: &RawMatchRecord) -> bool {
        let league_ok = self
            .league
            .as_ref()
            .is_none_or(|league| record.league.as_ref() == Some(league));
        let season_ok = self
            .season_label
            .as_ref()
            .is_none_or(|label| record.season_year.as_ref() == Some(label));
        league_ok && season_ok
    }
}

/// Filters the records, derives features for each and orders them by date.
/// Matches on the same day keep their input order.
pub fn process_matches(
    records: &[RawMatchRecord],
    filter: &MatchFilter,
    season: &SeasonWindow,
) -> Result<Vec<MatchFeatures>, AppError> {
    info!("Processing {} match records", records.len());

    let selected: Vec<&RawMatchRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    info!("{} matches left after filtering", selected.len());
    if selected.is_empty() {
        warn!("No matches matched league {:?} and season {:?}", filter.league, filter.season_label);
    }

    let mut features = selected
        .into_iter()
        .map(|record| {
            derive_match_features(record, season).inspect_err(|e| {
                warn!(
                    "Failed to derive features for {} vs {}: {e}",
                    record.home_team, record.away_team
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    features.sort_by_key(|f| f.date);
    Ok(features)
}

/// Parses JSON Lines input, one match record per non-blank line.
pub fn parse_records(input: &str) -> Result<Vec<RawMatchRecord>, AppError> {
    parse_json_lines(input)
}

/// Headline averages over a set of processed matches.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub matches: usize,
    pub avg_shots_on_goal: f64,
    pub avg_lead_changes: f64,
    pub avg_cards: f64,
}

impl FeatureSummary {
    pub fn from_features(features: &[MatchFeatures]) -> Self {
        if features.is_empty() {
            return Self {
                matches: 0,
                avg_shots_on_goal: 0.0,
                avg_lead_changes: 0.0,
                avg_cards: 0.0,
            };
        }

        Self {
            matches: features.len(),
            avg_shots_on_goal: mean(features, |f| f.shots_on_goal_total),
            avg_lead_changes: mean(features, |f| f.lead_changes),
            avg_cards: mean(features, |f| f.yellow_cards_total + f.red_cards_total),
        }
    }
}

fn mean(features: &[MatchFeatures], value: impl Fn(&MatchFeatures) -> u32) -> f64 {
    let total: f64 = features.iter().map(|f| f64::from(value(f))).sum();
    total / features.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_half_result_total_goals() {
        assert_eq!(half_result_total_goals("first_half", "1-0").unwrap(), 1);
        assert_eq!(half_result_total_goals("first_half", " 2 - 3 ").unwrap(), 5);
        assert_eq!(half_result_total_goals("first_half", "0-0").unwrap(), 0);
        assert!(matches!(
            half_result_total_goals("second_half", "2:1"),
            Err(AppError::StatParse { .. })
        ));
        assert!(half_result_total_goals("second_half", "a-1").is_err());
    }

    #[test]
    fn test_half_result_overflow_is_stat_error() {
        let result = half_result_total_goals("first_half", "4294967295-1");
        assert!(matches!(result, Err(AppError::StatParse { .. })));
    }

    #[test]
    fn test_lenient_count_out_of_range_values() {
        assert_eq!(
            StatValue::lenient_count(Some(&StatValue::Int(4_294_967_296))),
            u32::MAX
        );
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Int(-3))), 0);
        assert_eq!(
            StatValue::lenient_count(Some(&StatValue::Text("1e10".into()))),
            u32::MAX
        );
    }

    #[test]
    fn test_huge_stat_totals_saturate() {
        let mut record = TestDataBuilder::create_record("Arsenal", "Chelsea", "05.08");
        record.shots_on_goal_home = Some(StatValue::Text("1e10".to_string()));
        record.shots_on_goal_away = Some(StatValue::Int(1));
        record.fouls_home = Some(StatValue::Float(1e12));
        record.fouls_away = Some(StatValue::Int(5));

        let features = derive_match_features(&record, &SeasonWindow::default()).unwrap();
        assert_eq!(features.shots_on_goal_total, u32::MAX);
        assert_eq!(features.fouls_total, u32::MAX);
    }

    #[test]
    fn test_lenient_count() {
        assert_eq!(StatValue::lenient_count(None), 0);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Int(7))), 7);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Float(6.0))), 6);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Text("5".into()))), 5);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Text("4.0".into()))), 4);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Text("nan".into()))), 0);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Text("".into()))), 0);
        assert_eq!(StatValue::lenient_count(Some(&StatValue::Text("n/a".into()))), 0);
        assert_eq!(
            StatValue::lenient_count(Some(&StatValue::Text("['12', '40']".into()))),
            2
        );
    }

    #[test]
    fn test_possession_percent() {
        assert_eq!(StatValue::possession_percent(Some(&StatValue::Text("58%".into()))), 58.0);
        assert_eq!(StatValue::possession_percent(Some(&StatValue::Text(" 41.5 % ".into()))), 41.5);
        assert_eq!(StatValue::possession_percent(Some(&StatValue::Int(60))), 60.0);
        assert_eq!(StatValue::possession_percent(None), 0.0);
    }

    #[test]
    fn test_derive_match_features() {
        let record = TestDataBuilder::create_record("Arsenal", "Chelsea", "12.1");
        let features = derive_match_features(&record, &SeasonWindow::new(2022, 7)).unwrap();

        assert_eq!(features.date, NaiveDate::from_ymd_opt(2022, 10, 12).unwrap());
        assert_eq!(features.first_half_goals, 2);
        assert_eq!(features.second_half_goals, 1);
        assert_eq!(features.lead_changes, 3);
        assert_eq!(features.yellow_cards_total, 3);
        assert_eq!(features.red_cards_total, 0);
        assert_eq!(features.goals_home, 2);
        assert_eq!(features.goals_away, 1);
        assert_eq!(features.possession_home, 55.0);
        assert_eq!(features.possession_away, 45.0);
        assert_eq!(features.shots_on_goal_total, 9);
        assert_eq!(features.fouls_total, 21);
        assert_eq!(features.corners_home, 6);
        assert_eq!(features.corners_away, 3);
        assert_eq!(features.saves_home, 2);
        assert_eq!(features.saves_away, 4);
    }

    #[test]
    fn test_derive_fails_on_bad_goal_minute() {
        let mut record = TestDataBuilder::create_record("Arsenal", "Chelsea", "05.08");
        record.home_team_goals_current_time = RawList::from_text("['23', 'late']");
        let result = derive_match_features(&record, &SeasonWindow::default());
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_filter() {
        let record = TestDataBuilder::create_record("Arsenal", "Chelsea", "05.08");
        assert!(MatchFilter::default().matches(&record));

        let filter = MatchFilter {
            league: Some("Premier-league".to_string()),
            season_label: Some("2022/2023".to_string()),
        };
        assert!(filter.matches(&record));

        let other_season = MatchFilter {
            league: None,
            season_label: Some("2021/2022".to_string()),
        };
        assert!(!other_season.matches(&record));
    }

    #[test]
    fn test_process_matches_sorts_by_date() {
        let records = vec![
            TestDataBuilder::create_record("Spurs", "Leeds", "04.02"),
            TestDataBuilder::create_record("Arsenal", "Chelsea", "05.08"),
            TestDataBuilder::create_record("Fulham", "Everton", "12.1"),
        ];
        let features =
            process_matches(&records, &MatchFilter::default(), &SeasonWindow::new(2022, 7))
                .unwrap();
        let order: Vec<&str> = features.iter().map(|f| f.home_team.as_str()).collect();
        assert_eq!(order, vec!["Arsenal", "Fulham", "Spurs"]);
    }

    #[test]
    fn test_parse_records_reports_line() {
        let input = "\n{\"home_team\": \"A\"}\n";
        let error = parse_records(input).unwrap_err();
        assert!(matches!(error, AppError::RecordParse { line: 2, .. }));
    }

    #[test]
    fn test_summary() {
        let records = vec![
            TestDataBuilder::create_record("Arsenal", "Chelsea", "05.08"),
            TestDataBuilder::create_goalless_record("Fulham", "Everton", "06.08"),
        ];
        let features =
            process_matches(&records, &MatchFilter::default(), &SeasonWindow::default()).unwrap();
        let summary = FeatureSummary::from_features(&features);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.avg_lead_changes, 1.5);
        assert_eq!(summary.avg_shots_on_goal, 4.5);
        assert_eq!(summary.avg_cards, 1.5);

        assert_eq!(FeatureSummary::from_features(&[]).matches, 0);
    }
}
