use crate::constants::CLOSE_DIFFERENTIAL;
use crate::error::AppError;
use crate::match_data::raw_list::{MinuteToken, RawList};
use crate::match_data::timeline::{GoalEvent, GoalTimeline};
use tracing::trace;

/// Counts how many goals of a match kept it close or brought it back to
/// close, i.e. goals where the differential before and after both lie
/// within one goal of level.
///
/// # Arguments
/// * `home` - Raw goal minutes of the home side
/// * `away` - Raw goal minutes of the away side
///
/// # Returns
/// * `Ok(u32)` - Number of close-state transitions
/// * `Err(AppError)` - A list or minute token could not be parsed
///
/// # Example
/// ```
/// use match_profiles::match_data::{RawList, count_lead_changes};
///
/// let home = RawList::from_text("['23', '67']");
/// let away = RawList::from_text("['10']");
/// assert_eq!(count_lead_changes(&home, &away).unwrap(), 3);
/// ```
pub fn count_lead_changes(home: &RawList, away: &RawList) -> Result<u32, AppError> {
    let home_tokens = home.tokens()?;
    let away_tokens = away.tokens()?;

    if home_tokens.is_empty() && away_tokens.is_empty() {
        return Ok(0);
    }

    let home_minutes = home_tokens
        .iter()
        .map(MinuteToken::to_minute)
        .collect::<Result<Vec<_>, _>>()?;
    let away_minutes = away_tokens
        .iter()
        .map(MinuteToken::to_minute)
        .collect::<Result<Vec<_>, _>>()?;

    let timeline = GoalTimeline::from_minutes(&home_minutes, &away_minutes);
    Ok(count_close_transitions(timeline.events()))
}

/// Single pass over chronologically ordered goals. The differential is
/// tracked exactly even when it leaves the close window.
pub fn count_close_transitions(events: &[GoalEvent]) -> u32 {
    let mut diff = 0i32;
    let mut changes = 0u32;

    for event in events {
        let previous = diff;
        diff += event.side.differential_step();

        if is_close(previous) && is_close(diff) {
            changes += 1;
            trace!("{} goal at {} counts ({previous} -> {diff})", event.side, event.when);
        }
    }

    changes
}

/// Whether a differential is within one goal of level.
pub fn is_close(diff: i32) -> bool {
    diff.abs() <= CLOSE_DIFFERENTIAL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(home: &str, away: &str) -> u32 {
        count_lead_changes(&RawList::from_text(home), &RawList::from_text(away)).unwrap()
    }

    #[test]
    fn test_back_and_forth_game() {
        // away@10 (0 -> -1), home@23 (-1 -> 0), home@67 (0 -> 1)
        assert_eq!(count("['23', '67']", "['10']"), 3);
    }

    #[test]
    fn test_runaway_home_win() {
        assert_eq!(count("['1', '2', '3']", "[]"), 1);
    }

    #[test]
    fn test_goalless_inputs() {
        assert_eq!(count("[]", "[]"), 0);
        assert_eq!(count("", "nan"), 0);
        assert_eq!(
            count_lead_changes(&RawList::Absent, &RawList::EmptyList).unwrap(),
            0
        );
    }

    #[test]
    fn test_stoppage_time_tie_break() {
        // away@90+3 (0 -> -1), home@90+5 (-1 -> 0)
        assert_eq!(count("['90+5']", "['90+3']"), 2);
    }

    #[test]
    fn test_single_goal_always_counts() {
        assert_eq!(count("['77']", "[]"), 1);
        assert_eq!(count("[]", "['4']"), 1);
        assert_eq!(count("[]", "['45+6']"), 1);
    }

    #[test]
    fn test_order_within_side_does_not_matter() {
        assert_eq!(count("['45', '10']", "[]"), count("['10', '45']", "[]"));
        assert_eq!(count("['80', '20']", "['50']"), count("['20', '80']", "['50']"));
    }

    #[test]
    fn test_comeback_from_two_down() {
        // away, away (-1 -> -2 no), home (-2 -> -1 no), home (-1 -> 0), home (0 -> 1)
        assert_eq!(count("['60', '70', '80']", "['5', '15']"), 3);
    }

    #[test]
    fn test_large_margin_is_tracked_exactly() {
        // Home leads 5-0, then away scores four: only 1 -> 0 brings it back
        assert_eq!(
            count("['1', '2', '3', '4', '5']", "['60', '61', '62', '63', '64']"),
            2
        );
    }

    #[test]
    fn test_parse_errors_propagate() {
        let result = count_lead_changes(&RawList::from_text("['12', 'abc']"), &RawList::Absent);
        assert!(matches!(result, Err(AppError::MinuteParse { .. })));

        let result = count_lead_changes(&RawList::Absent, &RawList::from_text("[12"));
        assert!(matches!(result, Err(AppError::ListParse { .. })));
    }

    #[test]
    fn test_is_close_window() {
        assert!(is_close(-1));
        assert!(is_close(0));
        assert!(is_close(1));
        assert!(!is_close(2));
        assert!(!is_close(-2));
    }
}
