use crate::constants::FIRST_HALF_LAST_MINUTE;
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Half of a match in which an event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    First,
    Second,
}

/// Position of an event within a match, e.g. `23` or `45+2`.
///
/// Values order by base minute first; the stoppage offset only breaks ties
/// between events sharing the same base minute. The derived ordering relies
/// on the field order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchMinute {
    base_minute: u32,
    stoppage_offset: u32,
}

impl MatchMinute {
    pub fn new(base_minute: u32, stoppage_offset: u32) -> Self {
        Self {
            base_minute,
            stoppage_offset,
        }
    }

    pub fn base_minute(&self) -> u32 {
        self.base_minute
    }

    pub fn stoppage_offset(&self) -> u32 {
        self.stoppage_offset
    }

    /// First-half stoppage time (`45+2`) still belongs to the first half.
    pub fn half(&self) -> Half {
        if self.base_minute <= FIRST_HALF_LAST_MINUTE {
            Half::First
        } else {
            Half::Second
        }
    }
}

impl From<u32> for MatchMinute {
    fn from(base_minute: u32) -> Self {
        Self::new(base_minute, 0)
    }
}

impl FromStr for MatchMinute {
    type Err = AppError;

    /// Parses `"<int>"` or `"<int>+<int>"`. Quote characters anywhere in the
    /// token and surrounding whitespace are ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned = raw.replace(['\'', '"'], "");
        let token = cleaned.trim();

        if token.is_empty() {
            return Err(AppError::minute_parse(raw, "empty minute"));
        }

        let (base, offset) = match token.split_once('+') {
            Some((base, offset)) => (base, Some(offset)),
            None => (token, None),
        };

        let base_minute = parse_part(raw, base, "minute")?;
        let stoppage_offset = match offset {
            Some(offset) => parse_part(raw, offset, "stoppage offset")?,
            None => 0,
        };

        Ok(Self::new(base_minute, stoppage_offset))
    }
}

fn parse_part(raw: &str, part: &str, what: &str) -> Result<u32, AppError> {
    let part = part.trim();
    // u32::from_str would accept a leading '+', which is never valid here
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::minute_parse(
            raw,
            format!("{what} is not a non-negative number"),
        ));
    }
    part.parse::<u32>()
        .map_err(|e| AppError::minute_parse(raw, format!("{what} out of range: {e}")))
}

impl fmt::Display for MatchMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stoppage_offset > 0 {
            write!(f, "{}+{}", self.base_minute, self.stoppage_offset)
        } else {
            write!(f, "{}", self.base_minute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute(raw: &str) -> MatchMinute {
        raw.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_minute() {
        let parsed = minute("23");
        assert_eq!(parsed.base_minute(), 23);
        assert_eq!(parsed.stoppage_offset(), 0);
    }

    #[test]
    fn test_parse_stoppage_minute() {
        let parsed = minute("90+5");
        assert_eq!(parsed, MatchMinute::new(90, 5));
    }

    #[test]
    fn test_parse_strips_quotes_and_whitespace() {
        assert_eq!(minute("'45+2'"), MatchMinute::new(45, 2));
        assert_eq!(minute("  \"67\" "), MatchMinute::new(67, 0));
        assert_eq!(minute(" 45 + 1 "), MatchMinute::new(45, 1));
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for bad in ["", "  ", "abc", "45+", "+3", "45+2+1", "-5", "12.5", "45+x"] {
            let result = bad.parse::<MatchMinute>();
            assert!(
                matches!(result, Err(AppError::MinuteParse { .. })),
                "expected parse failure for {bad:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_half_boundary() {
        assert_eq!(minute("1").half(), Half::First);
        assert_eq!(minute("45").half(), Half::First);
        assert_eq!(minute("45+3").half(), Half::First);
        assert_eq!(minute("46").half(), Half::Second);
        assert_eq!(minute("90+7").half(), Half::Second);
    }

    #[test]
    fn test_stoppage_time_sorts_between_minutes() {
        assert!(minute("45") < minute("45+2"));
        assert!(minute("45+2") < minute("46"));
        assert!(minute("90+3") < minute("90+5"));
        assert!(minute("44+9") < minute("45"));
    }

    #[test]
    fn test_display() {
        assert_eq!(minute("45+2").to_string(), "45+2");
        assert_eq!(minute("12").to_string(), "12");
        assert_eq!(MatchMinute::from(88).to_string(), "88");
    }
}
