use crate::match_data::{RawList, RawMatchRecord, StatValue};

/// Test utilities for creating mock match records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a 2-1 home win with goals at 10' (away), 23' and 67' (home),
    /// three yellow cards and full statistics
    pub fn create_record(home_team: &str, away_team: &str, date_day: &str) -> RawMatchRecord {
        RawMatchRecord {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            league: Some("Premier-league".to_string()),
            season_year: Some("2022/2023".to_string()),
            date_day: date_day.to_string(),
            first_half: "1-1".to_string(),
            second_half: "1-0".to_string(),
            home_team_goals_current_time: RawList::from_text("['23', '67']"),
            away_team_goals_current_time: RawList::from_text("['10']"),
            home_team_goals: RawList::from_text("['23', '67']"),
            away_team_goals: RawList::from_text("['10']"),
            home_team_yellow_card: RawList::from_text("['12', '40']"),
            away_team_yellow_card: RawList::from_text("['55']"),
            home_team_red_card: RawList::from_text("[]"),
            away_team_red_card: RawList::Absent,
            possession_home: Some(StatValue::Text("55%".to_string())),
            possession_away: Some(StatValue::Text("45%".to_string())),
            shots_on_goal_home: Some(StatValue::Int(5)),
            shots_on_goal_away: Some(StatValue::Text("4".to_string())),
            fouls_home: Some(StatValue::Int(10)),
            fouls_away: Some(StatValue::Float(11.0)),
            corners_home: Some(StatValue::Int(6)),
            corners_away: Some(StatValue::Int(3)),
            saves_home: Some(StatValue::Int(2)),
            saves_away: Some(StatValue::Int(4)),
        }
    }

    /// Creates a 0-0 draw with no events and no statistics
    pub fn create_goalless_record(
        home_team: &str,
        away_team: &str,
        date_day: &str,
    ) -> RawMatchRecord {
        RawMatchRecord {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            league: Some("Premier-league".to_string()),
            season_year: Some("2022/2023".to_string()),
            date_day: date_day.to_string(),
            first_half: "0-0".to_string(),
            second_half: "0-0".to_string(),
            ..Default::default()
        }
    }
}
