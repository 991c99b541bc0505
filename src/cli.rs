use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when any configuration flag was given
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_season_start_year.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Football match statistics toolkit
///
/// Counts lead changes from goal minutes, prints goal timelines and turns raw
/// match exports (JSON Lines, one match per line) into per-match feature rows.
///
/// Goal lists are given the way exports store them, for example
/// "['23', '45+2']". Missing lists can be passed as "" or "[]".
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update the calendar year in which the processed season starts.
    #[arg(long = "set-season-start-year", help_heading = "Configuration")]
    pub new_season_start_year: Option<i32>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Also write debug logs to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the number of goals that kept the match within one goal
    LeadChanges(GoalListArgs),

    /// Print every goal in order with the running score
    Timeline(GoalListArgs),

    /// Derive per-match features from a JSON Lines export
    Features(FeaturesArgs),

    /// Join standings positions and per-team stats onto fixtures
    Profiles(ProfilesArgs),
}

#[derive(clap::Args, Debug)]
pub struct GoalListArgs {
    /// Home goal minutes, e.g. "['23', '67']"
    #[arg(long, default_value = "[]")]
    pub home: String,

    /// Away goal minutes, e.g. "['10', '90+3']"
    #[arg(long, default_value = "[]")]
    pub away: String,
}

#[derive(clap::Args, Debug)]
pub struct FeaturesArgs {
    /// JSON Lines file with one raw match record per line
    #[arg(short, long)]
    pub input: String,

    /// Write feature rows here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only keep matches of this league (overrides config)
    #[arg(long)]
    pub league: Option<String>,

    /// Only keep matches with this season label, e.g. 2022/2023 (overrides config)
    #[arg(long)]
    pub season: Option<String>,

    /// Season start year used to resolve match dates (overrides config)
    #[arg(long)]
    pub season_start_year: Option<i32>,
}

#[derive(clap::Args, Debug)]
pub struct ProfilesArgs {
    /// JSON Lines file of fixtures with home_team and away_team
    #[arg(long)]
    pub fixtures: String,

    /// JSON Lines file of per-team stats, one team per line with a "team" field
    #[arg(long)]
    pub team_stats: String,

    /// Standings file with one team name per line, best team first
    #[arg(long)]
    pub positions: String,

    /// Write match profiles here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
