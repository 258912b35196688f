use serde::{Deserialize, Serialize};

/// Channels available in one country. `channels` is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryBroadcast {
    pub country: String,
    pub channels: Vec<String>,
}

/// One enriched match as persisted in the output file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_id: u64,
    pub kickoff: i64,
    pub fixture: String,
    pub league: String,
    pub tv_channels: Vec<CountryBroadcast>,
}
