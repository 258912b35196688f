//! Lists the events scheduled for a date

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::{ScheduledEvent, ScheduledEventsResponse};

use super::fetch_utils::fetch_json;
use super::urls::{build_inverse_events_url, build_scheduled_events_url};

/// Returns the events scheduled for `date` (`YYYY-MM-DD`), in listing order.
///
/// Falls back to the inverse feed when the primary listing fails or is empty.
/// When neither is usable the result is empty; listing problems never abort
/// the run.
#[instrument(skip(client, config))]
pub async fn list_events(client: &Client, config: &Config, date: &str) -> Vec<ScheduledEvent> {
    let primary_url = build_scheduled_events_url(&config.api_base_url, date);
    match fetch_json::<ScheduledEventsResponse>(client, &primary_url, None).await {
        Ok(response) if !response.events.is_empty() => {
            info!("Found {} events for {date}", response.events.len());
            return response.events;
        }
        Ok(_) => info!("Primary listing for {date} is empty, trying inverse feed"),
        Err(e) => warn!("Primary listing for {date} failed ({e}), trying inverse feed"),
    }

    let inverse_url = build_inverse_events_url(&config.api_base_url, date);
    match fetch_json::<ScheduledEventsResponse>(client, &inverse_url, None).await {
        Ok(response) => {
            info!(
                "Found {} events for {date} in inverse feed",
                response.events.len()
            );
            response.events
        }
        Err(e) => {
            warn!("Inverse listing for {date} failed: {e}");
            Vec::new()
        }
    }
}
