mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Command, is_config_command};
use commands::{
    handle_config_update_command, handle_features_command, handle_lead_changes_command,
    handle_list_config_command, handle_profiles_command, handle_timeline_command, validate_args,
};
use logging::setup_logging;
use match_profiles::config::Config;
use match_profiles::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // Config errors are reported by the commands that need it; logging
    // falls back to defaults so a broken config file still gets logged.
    let config = Config::load().await;
    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return handle_config_update_command(&args).await;
    }

    match &args.command {
        Some(Command::LeadChanges(lists)) => {
            handle_lead_changes_command(lists)?;
        }
        Some(Command::Timeline(lists)) => {
            handle_timeline_command(lists)?;
        }
        Some(Command::Features(features)) => {
            let config = config?;
            handle_features_command(features, &config).await?;
        }
        Some(Command::Profiles(profiles)) => {
            handle_profiles_command(profiles).await?;
        }
        None => {
            println!("No command given. Run with --help for usage.");
        }
    }

    Ok(())
}
