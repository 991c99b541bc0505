use crate::error::AppError;
use crate::match_data::minute::MatchMinute;
use crate::match_data::raw_list::RawList;
use std::fmt;

/// The team that scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Effect of a goal on the home-minus-away differential.
    pub fn differential_step(&self) -> i32 {
        match self {
            Side::Home => 1,
            Side::Away => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalEvent {
    pub when: MatchMinute,
    pub side: Side,
}

/// All goals of one match in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalTimeline {
    events: Vec<GoalEvent>,
}

impl GoalTimeline {
    /// Builds the timeline from parsed minutes of both sides.
    ///
    /// Away goals are laid down before home goals and the sort is stable, so
    /// goals sharing the exact same minute always come out in the same order.
    pub fn from_minutes(home: &[MatchMinute], away: &[MatchMinute]) -> Self {
        let mut events: Vec<GoalEvent> = away
            .iter()
            .map(|&when| GoalEvent {
                when,
                side: Side::Away,
            })
            .chain(home.iter().map(|&when| GoalEvent {
                when,
                side: Side::Home,
            }))
            .collect();
        events.sort_by_key(|event| event.when);
        Self { events }
    }

    /// Normalizes both raw sides and builds the timeline.
    pub fn from_raw(home: &RawList, away: &RawList) -> Result<Self, AppError> {
        let home = home.minutes()?;
        let away = away.minutes()?;
        Ok(Self::from_minutes(&home, &away))
    }

    pub fn events(&self) -> &[GoalEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Goals scored as `(home, away)`.
    pub fn final_score(&self) -> (u32, u32) {
        self.events
            .iter()
            .fold((0, 0), |(home, away), event| match event.side {
                Side::Home => (home + 1, away),
                Side::Away => (home, away + 1),
            })
    }

    /// Home-minus-away differential after each goal.
    pub fn running_differentials(&self) -> impl Iterator<Item = i32> + '_ {
        self.events.iter().scan(0, |diff, event| {
            *diff += event.side.differential_step();
            Some(*diff)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(raw: &[&str]) -> Vec<MatchMinute> {
        raw.iter().map(|m| m.parse().unwrap()).collect()
    }

    #[test]
    fn test_events_are_chronological() {
        let timeline = GoalTimeline::from_minutes(&minutes(&["23", "67"]), &minutes(&["10"]));
        let order: Vec<(String, Side)> = timeline
            .events()
            .iter()
            .map(|e| (e.when.to_string(), e.side))
            .collect();
        assert_eq!(
            order,
            vec![
                ("10".to_string(), Side::Away),
                ("23".to_string(), Side::Home),
                ("67".to_string(), Side::Home),
            ]
        );
    }

    #[test]
    fn test_length_matches_input() {
        let timeline =
            GoalTimeline::from_minutes(&minutes(&["5", "5", "88"]), &minutes(&["5", "90+4"]));
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline.final_score(), (3, 2));
    }

    #[test]
    fn test_same_minute_order_is_deterministic() {
        let home = minutes(&["30"]);
        let away = minutes(&["30"]);
        let first = GoalTimeline::from_minutes(&home, &away);
        let second = GoalTimeline::from_minutes(&home, &away);
        assert_eq!(first, second);
        assert_eq!(first.events()[0].side, Side::Away);
        assert_eq!(first.events()[1].side, Side::Home);
    }

    #[test]
    fn test_stoppage_time_ordering() {
        let timeline = GoalTimeline::from_minutes(&minutes(&["46", "45"]), &minutes(&["45+2"]));
        let order: Vec<String> = timeline.events().iter().map(|e| e.when.to_string()).collect();
        assert_eq!(order, vec!["45", "45+2", "46"]);
    }

    #[test]
    fn test_running_differentials() {
        let timeline = GoalTimeline::from_minutes(&minutes(&["1", "2", "3"]), &minutes(&["80"]));
        let diffs: Vec<i32> = timeline.running_differentials().collect();
        assert_eq!(diffs, vec![1, 2, 3, 2]);
    }

    #[test]
    fn test_from_raw_propagates_parse_errors() {
        let result = GoalTimeline::from_raw(&RawList::from_text("['12', 'x']"), &RawList::Absent);
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = GoalTimeline::from_raw(&RawList::Absent, &RawList::EmptyList).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(timeline.final_score(), (0, 0));
    }
}
