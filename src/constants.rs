//! Application-wide constants and configuration values
//!
//! Keeps the match-time limits, season defaults and file names in one place.

/// Last nominal minute of the first half. Stoppage time keeps the same half.
pub const FIRST_HALF_LAST_MINUTE: u32 = 45;

/// Largest absolute goal differential still considered a close game
pub const CLOSE_DIFFERENTIAL: i32 = 1;

/// Application name used for config and log directories
pub const APP_NAME: &str = "match_profiles";

/// Default log file name
pub const LOG_FILE_NAME: &str = "match_profiles.log";

/// Default tracing directive
pub const DEFAULT_LOG_DIRECTIVE: &str = "match_profiles=info";

/// Season defaults for the bundled Premier League 2022/2023 export
pub mod season {
    /// Calendar year in which the season starts
    pub const DEFAULT_START_YEAR: i32 = 2022;

    /// First month (inclusive) that belongs to the starting year
    pub const DEFAULT_START_MONTH: u32 = 7;
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const LOG_FILE: &str = "MATCH_PROFILES_LOG_FILE";
    pub const SEASON_START_YEAR: &str = "MATCH_PROFILES_SEASON_START_YEAR";
    pub const LEAGUE: &str = "MATCH_PROFILES_LEAGUE";
}
