use crate::constants::broadcast::UNKNOWN_CHANNEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Channel identifier. The API sends integers, but string ids show up too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelId::Numeric(id) => write!(f, "{id}"),
            ChannelId::Text(id) => f.write_str(id),
        }
    }
}

/// Country code -> channel ids. Ordered by country code.
pub type CountryChannelMap = BTreeMap<String, Vec<ChannelId>>;

/// Response of `/tv/event/{id}/country-channels`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CountryChannelsResponse {
    #[serde(rename = "countryChannels", default)]
    pub country_channels: Option<CountryChannelMap>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `/tv/channel/{id}/schedule`. Only the channel name is used.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelScheduleResponse {
    #[serde(default)]
    pub channel: Option<ChannelInfo>,
}

impl ChannelScheduleResponse {
    /// Non-blank channel name, if the payload carries one
    pub fn channel_name(&self) -> Option<&str> {
        self.channel
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Outcome of a single channel-name lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedChannel {
    Named(String),
    Unresolved,
}

impl fmt::Display for ResolvedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedChannel::Named(name) => f.write_str(name),
            ResolvedChannel::Unresolved => f.write_str(UNKNOWN_CHANNEL),
        }
    }
}
