use crate::cli::Args;
use crate::config::Config;
use crate::constants::DEFAULT_DAYS_AHEAD;
use crate::data_fetcher::api::{
    consecutive_dates, determine_target_date, fetch_fixtures, parse_target_date,
};
use crate::error::AppError;
use tracing::info;

/// Validates command line argument combinations.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.days == 0 {
        return Err(AppError::config_error("--days must be at least 1"));
    }
    if let Some(date) = &args.date {
        parse_target_date(date)?;
    }
    if args.max_events == Some(0) {
        return Err(AppError::config_error("--max-events must be at least 1"));
    }
    Ok(())
}

/// Applies command line overrides on top of the loaded config.
pub fn apply_arg_overrides(config: &mut Config, args: &Args) {
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(max_events) = args.max_events {
        config.max_events = max_events;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.event_delay_ms = delay_ms;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
}

/// Dates to fetch: `--days` consecutive days from `--date`, or from tomorrow.
pub fn resolve_dates(args: &Args) -> Result<Vec<String>, AppError> {
    let start = match &args.date {
        Some(date) => parse_target_date(date)?,
        None => determine_target_date(DEFAULT_DAYS_AHEAD),
    };
    Ok(consecutive_dates(start, args.days))
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the default command: fetch, enrich and write each requested date.
pub async fn handle_fetch_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dates = resolve_dates(args)?;
    info!("Fetching fixtures for {}", dates.join(", "));

    let summaries = fetch_fixtures(config, &dates).await?;

    for summary in &summaries {
        println!(
            "DONE: {}: saved {} matches to {} ({} listed, {} skipped)",
            summary.date,
            summary.written,
            summary.output_path.display(),
            summary.listed,
            summary.skipped
        );
    }

    Ok(())
}
