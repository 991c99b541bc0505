//! Football match statistics library
//!
//! Models goal timelines, counts lead changes and derives per-match features
//! from raw match exports.
//!
//! # Examples
//!
//! ```rust
//! use match_profiles::match_data::{RawList, count_lead_changes};
//! use match_profiles::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let home = RawList::from_text("['90+5']");
//!     let away = RawList::from_text("['90+3']");
//!
//!     // away@90+3 (0 -> -1), home@90+5 (-1 -> 0)
//!     assert_eq!(count_lead_changes(&home, &away)?, 2);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod match_data;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use match_data::{
    GoalEvent, GoalTimeline, MatchFeatures, MatchMinute, RawList, RawMatchRecord, SeasonWindow,
    Side, count_lead_changes, derive_match_features,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
