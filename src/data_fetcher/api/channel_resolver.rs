//! Resolves broadcaster channel ids to display names

use futures::future::join_all;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::constants::broadcast::{TBA, UNKNOWN_CHANNEL};
use crate::data_fetcher::models::{
    ChannelId, ChannelScheduleResponse, CountryBroadcast, CountryChannelMap, ResolvedChannel,
};

use super::fetch_utils::fetch_json;
use super::urls::build_channel_schedule_url;

/// Looks up one channel's display name. Any failure yields `Unresolved` and
/// affects no other lookup.
pub async fn resolve_channel_name(
    client: &Client,
    config: &Config,
    channel_id: &ChannelId,
) -> ResolvedChannel {
    let url = build_channel_schedule_url(&config.api_base_url, channel_id);
    let timeout = Duration::from_secs(config.channel_timeout_seconds);

    match fetch_json::<ChannelScheduleResponse>(client, &url, Some(timeout)).await {
        Ok(response) => match response.channel_name() {
            Some(name) => ResolvedChannel::Named(name.to_string()),
            None => {
                debug!("Channel {channel_id} has no name in its schedule payload");
                ResolvedChannel::Unresolved
            }
        },
        Err(e) if e.is_not_found() => {
            debug!("Channel {channel_id} not found");
            ResolvedChannel::Unresolved
        }
        Err(e) => {
            warn!("Channel {channel_id} lookup failed: {e}");
            ResolvedChannel::Unresolved
        }
    }
}

/// Turns one country's lookup results into the emitted channel list:
/// unresolved entries and upstream names equal to "Unknown Channel" are
/// dropped, duplicates removed keeping the first occurrence, and `["TBA"]`
/// used when nothing is left. Never returns an empty list.
pub fn finalize_channel_names(resolved: Vec<ResolvedChannel>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = resolved
        .into_iter()
        .filter_map(|channel| match channel {
            ResolvedChannel::Named(name) if name != UNKNOWN_CHANNEL => Some(name),
            _ => None,
        })
        .filter(|name| seen.insert(name.clone()))
        .collect();

    if names.is_empty() {
        names.push(TBA.to_string());
    }
    names
}

/// Resolves every country's channel ids.
///
/// Countries are handled one at a time in map order; the lookups of a single
/// country are issued together. `join_all` keeps results in input-id order,
/// so the deduplicated list is deterministic.
#[instrument(skip(client, config, country_channels), fields(countries = country_channels.len()))]
pub async fn resolve_country_channels(
    client: &Client,
    config: &Config,
    country_channels: &CountryChannelMap,
) -> Vec<CountryBroadcast> {
    let mut broadcasts = Vec::with_capacity(country_channels.len());

    for (country, channel_ids) in country_channels {
        let lookups = channel_ids
            .iter()
            .map(|id| resolve_channel_name(client, config, id));
        let resolved = join_all(lookups).await;

        let channels = finalize_channel_names(resolved);
        debug!("{country}: {channels:?}");

        broadcasts.push(CountryBroadcast {
            country: country.clone(),
            channels,
        });
    }

    broadcasts
}
