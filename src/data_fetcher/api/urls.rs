//! URL building utilities for API endpoints

use crate::constants::SPORT;
use crate::data_fetcher::models::ChannelId;

/// Builds the primary scheduled-events listing URL for a date.
///
/// # Example
/// ```
/// use fixture_tv::data_fetcher::api::build_scheduled_events_url;
///
/// let url = build_scheduled_events_url("https://api.example.com/api/v1", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/api/v1/sport/football/scheduled-events/2024-01-15");
/// ```
pub fn build_scheduled_events_url(api_base_url: &str, date: &str) -> String {
    format!("{api_base_url}/sport/{SPORT}/scheduled-events/{date}")
}

/// Builds the "inverse" listing URL, used when the primary listing is empty.
///
/// # Example
/// ```
/// use fixture_tv::data_fetcher::api::build_inverse_events_url;
///
/// let url = build_inverse_events_url("https://api.example.com/api/v1", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/api/v1/sport/football/scheduled-events/2024-01-15/inverse");
/// ```
pub fn build_inverse_events_url(api_base_url: &str, date: &str) -> String {
    format!("{api_base_url}/sport/{SPORT}/scheduled-events/{date}/inverse")
}

/// Builds the match detail URL.
///
/// # Example
/// ```
/// use fixture_tv::data_fetcher::api::build_event_url;
///
/// assert_eq!(build_event_url("https://api.example.com", 42), "https://api.example.com/event/42");
/// ```
pub fn build_event_url(api_base_url: &str, event_id: u64) -> String {
    format!("{api_base_url}/event/{event_id}")
}

/// Builds the per-country broadcaster map URL for a match.
pub fn build_country_channels_url(api_base_url: &str, event_id: u64) -> String {
    format!("{api_base_url}/tv/event/{event_id}/country-channels")
}

/// Builds the channel schedule URL, which also carries the channel name.
pub fn build_channel_schedule_url(api_base_url: &str, channel_id: &ChannelId) -> String {
    format!("{api_base_url}/tv/channel/{channel_id}/schedule")
}
