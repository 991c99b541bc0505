use crate::cli::{Args, FeaturesArgs, GoalListArgs, ProfilesArgs};
use match_profiles::config::Config;
use match_profiles::error::AppError;
use match_profiles::match_data::{
    FeatureSummary, GoalTimeline, MatchProfile, RawList, Side, build_match_profiles,
    count_lead_changes, is_close, parse_fixtures, parse_positions, parse_records,
    parse_team_stats, process_matches, to_json_lines,
};
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-season-start-year, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(year) = args.new_season_start_year {
        config.season_start_year = year;
        println!("Season start year updated to: {year}");
    }

    if let Some(new_log_file) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_file.clone());
        println!("Log file path updated to: {new_log_file}");
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    Ok(())
}

pub fn handle_lead_changes_command(lists: &GoalListArgs) -> Result<u32, AppError> {
    let home = RawList::from_text(&lists.home);
    let away = RawList::from_text(&lists.away);
    let changes = count_lead_changes(&home, &away)?;
    info!("Lead changes for home={} away={}: {changes}", lists.home, lists.away);
    println!("{changes}");
    Ok(changes)
}

pub fn handle_timeline_command(lists: &GoalListArgs) -> Result<(), AppError> {
    let timeline = GoalTimeline::from_raw(
        &RawList::from_text(&lists.home),
        &RawList::from_text(&lists.away),
    )?;

    if timeline.is_empty() {
        println!("No goals");
        return Ok(());
    }

    for line in format_timeline(&timeline) {
        println!("{line}");
    }
    Ok(())
}

/// One line per goal: minute, scoring side, running score and a `*` when
/// the goal counts as a lead change.
pub fn format_timeline(timeline: &GoalTimeline) -> Vec<String> {
    let (mut home, mut away) = (0u32, 0u32);
    let mut previous = 0i32;

    timeline
        .events()
        .iter()
        .zip(timeline.running_differentials())
        .map(|(event, diff)| {
            match event.side {
                Side::Home => home += 1,
                Side::Away => away += 1,
            }
            let marker = if is_close(previous) && is_close(diff) {
                "  *"
            } else {
                ""
            };
            previous = diff;
            format!(
                "{:>6}'  {:<4}  {home}-{away}{marker}",
                event.when.to_string(),
                event.side.to_string()
            )
        })
        .collect()
}

/// Handles the features subcommand: reads raw records, derives feature rows
/// and writes them as JSON Lines.
pub async fn handle_features_command(
    args: &FeaturesArgs,
    config: &Config,
) -> Result<FeatureSummary, AppError> {
    let input = tokio::fs::read_to_string(&args.input).await?;
    let records = parse_records(&input)?;

    let mut filter = config.match_filter();
    if let Some(league) = &args.league {
        filter.league = Some(league.clone());
    }
    if let Some(season) = &args.season {
        filter.season_label = Some(season.clone());
    }

    let mut season = config.season_window();
    if let Some(year) = args.season_start_year {
        season.start_year = year;
    }

    let features = process_matches(&records, &filter, &season)?;
    let output = to_json_lines(&features)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, output).await?;
            info!("Processed data saved to {path}");
        }
        None => print!("{output}"),
    }

    let summary = FeatureSummary::from_features(&features);
    eprintln!("Processed {} matches", summary.matches);
    eprintln!(
        "Average shots on goal per match: {:.2}",
        summary.avg_shots_on_goal
    );
    eprintln!(
        "Average lead changes per match: {:.2}",
        summary.avg_lead_changes
    );
    eprintln!("Average total cards per match: {:.2}", summary.avg_cards);

    Ok(summary)
}

/// Handles the profiles subcommand: joins standings and team stats onto
/// each fixture and writes the profiles as JSON Lines.
pub async fn handle_profiles_command(args: &ProfilesArgs) -> Result<Vec<MatchProfile>, AppError> {
    let fixtures = parse_fixtures(&tokio::fs::read_to_string(&args.fixtures).await?)?;
    let team_stats = parse_team_stats(&tokio::fs::read_to_string(&args.team_stats).await?)?;
    let positions = parse_positions(&tokio::fs::read_to_string(&args.positions).await?);

    let profiles = build_match_profiles(&fixtures, &team_stats, &positions);
    let output = to_json_lines(&profiles)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, output).await?;
            info!("Match profiles saved to {path}");
        }
        None => print!("{output}"),
    }

    eprintln!("Built {} match profiles", profiles.len());
    Ok(profiles)
}
