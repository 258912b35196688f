// src/data_fetcher/api/orchestrator.rs - drives list -> enrich -> write for each target date

use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::MatchRecord;
use crate::error::AppError;
use crate::output::write_match_records;

use super::event_lister::list_events;
use super::http_client::create_http_client_with_timeout;
use super::match_enricher::enrich_match;

/// What one date's run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub date: String,
    pub output_path: PathBuf,
    /// Events returned by the listing, before the cap
    pub listed: usize,
    /// Records written to the output file
    pub written: usize,
    /// Capped events whose enrichment was unavailable
    pub skipped: usize,
}

/// Runs the pipeline for one date and writes `<output_dir>/<YYYYMMDD>.json`.
///
/// Only the first `config.max_events` listed events are enriched, in listing
/// order, with `config.event_delay_ms` between successive events. Events that
/// cannot be enriched are skipped. Upstream failures never make this return
/// an error; only writing the output file can.
#[instrument(skip(client, config))]
pub async fn run_for_date(
    client: &Client,
    config: &Config,
    date: &str,
) -> Result<RunSummary, AppError> {
    info!("Fetching matches for {date}");
    let events = list_events(client, config, date).await;
    let listed = events.len();

    if listed > config.max_events {
        info!(
            "Listing has {listed} events, enriching the first {}",
            config.max_events
        );
    }

    let capped: Vec<_> = events.into_iter().take(config.max_events).collect();
    let total = capped.len();
    let delay = Duration::from_millis(config.event_delay_ms);

    let mut records: Vec<MatchRecord> = Vec::with_capacity(total);
    let mut skipped = 0;

    for (idx, event) in capped.iter().enumerate() {
        if idx > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        info!("Processing {}/{}: {}", idx + 1, total, event.label());
        match enrich_match(client, config, event.id).await {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping event {}: {e}", event.id);
                skipped += 1;
            }
        }
    }

    let output_path = write_match_records(Path::new(&config.output_dir), date, &records).await?;

    Ok(RunSummary {
        date: date.to_string(),
        output_path,
        listed,
        written: records.len(),
        skipped,
    })
}

/// Main entry point: runs the pipeline for each date in order, pausing
/// `config.event_delay_ms` between dates.
///
/// # Example
/// ```rust,no_run
/// use fixture_tv::config::Config;
/// use fixture_tv::data_fetcher::api::{consecutive_dates, determine_target_date, fetch_fixtures};
///
/// #[tokio::main]
/// async fn main() -> Result<(), fixture_tv::AppError> {
///     let dates = consecutive_dates(determine_target_date(1), 1);
///     let summaries = fetch_fixtures(&Config::default(), &dates).await?;
///     println!("{} records", summaries[0].written);
///     Ok(())
/// }
/// ```
pub async fn fetch_fixtures(
    config: &Config,
    dates: &[String],
) -> Result<Vec<RunSummary>, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let delay = Duration::from_millis(config.event_delay_ms);

    let mut summaries = Vec::with_capacity(dates.len());
    for (idx, date) in dates.iter().enumerate() {
        if idx > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        summaries.push(run_for_date(&client, config, date).await?);
    }

    Ok(summaries)
}
