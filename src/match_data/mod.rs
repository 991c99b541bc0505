pub mod features;
pub mod json_lines;
pub mod lead_changes;
pub mod minute;
pub mod profiles;
pub mod raw_list;
pub mod season;
pub mod timeline;

pub use features::{
    FeatureSummary, MatchFeatures, MatchFilter, RawMatchRecord, StatValue, derive_match_features,
    half_result_total_goals, parse_records, process_matches,
};
pub use json_lines::{parse_json_lines, to_json_lines};
pub use lead_changes::{count_close_transitions, count_lead_changes, is_close};
pub use minute::{Half, MatchMinute};
pub use profiles::{
    Fixture, MatchProfile, TeamStats, build_match_profiles, parse_fixtures, parse_positions,
    parse_team_stats,
};
pub use raw_list::{MinuteToken, RawList};
pub use season::SeasonWindow;
pub use timeline::{GoalEvent, GoalTimeline, Side};
