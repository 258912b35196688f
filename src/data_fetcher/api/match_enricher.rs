//! Turns a listed event id into a `MatchRecord`

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::constants::broadcast::UNKNOWN_LEAGUE;
use crate::data_fetcher::models::{
    CountryBroadcast, CountryChannelsResponse, EventDetail, EventDetailResponse, MatchRecord,
};
use crate::error::AppError;

use super::channel_resolver::resolve_country_channels;
use super::fetch_utils::fetch_json;
use super::urls::{build_country_channels_url, build_event_url};

/// Builds the output record from a detail payload and resolved broadcasters.
pub fn build_match_record(event: EventDetail, tv_channels: Vec<CountryBroadcast>) -> MatchRecord {
    let league = event
        .tournament
        .map(|t| t.name)
        .unwrap_or_else(|| UNKNOWN_LEAGUE.to_string());

    MatchRecord {
        match_id: event.id,
        kickoff: event.start_timestamp,
        fixture: format!("{} vs {}", event.home_team.name, event.away_team.name),
        league,
        tv_channels,
    }
}

/// Fetches detail and broadcasters for one event.
///
/// The detail and country-channel requests are independent and run together.
/// A failed detail request makes the whole event unavailable; a failed
/// country-channel request only means no known broadcasters.
#[instrument(skip(client, config))]
pub async fn enrich_match(
    client: &Client,
    config: &Config,
    event_id: u64,
) -> Result<MatchRecord, AppError> {
    let detail_url = build_event_url(&config.api_base_url, event_id);
    let channels_url = build_country_channels_url(&config.api_base_url, event_id);

    let (detail, channels) = tokio::join!(
        fetch_json::<EventDetailResponse>(client, &detail_url, None),
        fetch_json::<CountryChannelsResponse>(client, &channels_url, None),
    );

    let event = detail
        .map_err(|e| AppError::event_unavailable(event_id, e.to_string()))?
        .event;

    let tv_channels = match channels {
        Ok(CountryChannelsResponse {
            country_channels: Some(map),
        }) => resolve_country_channels(client, config, &map).await,
        Ok(_) => {
            debug!("Event {event_id} has no country channel map");
            Vec::new()
        }
        Err(e) => {
            warn!("Country channels for event {event_id} unavailable: {e}");
            Vec::new()
        }
    };

    Ok(build_match_record(event, tv_channels))
}
