use serde::{Deserialize, Serialize};

/// Team reference as embedded in event payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRef {
    pub name: String,
}

/// Tournament reference as embedded in event payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentRef {
    pub name: String,
}

/// One entry of the scheduled-events listing.
///
/// Only `id` is needed to drive enrichment, so the rest is optional and a
/// sparse listing entry still gets enriched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledEvent {
    pub id: u64,
    #[serde(rename = "startTimestamp", default)]
    pub start_timestamp: Option<i64>,
    #[serde(rename = "homeTeam", default)]
    pub home_team: Option<TeamRef>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Option<TeamRef>,
    #[serde(default)]
    pub tournament: Option<TournamentRef>,
}

impl ScheduledEvent {
    /// "Home vs Away" when both team names are listed, for progress output
    pub fn label(&self) -> String {
        match (&self.home_team, &self.away_team) {
            (Some(home), Some(away)) => format!("{} vs {}", home.name, away.name),
            _ => format!("event {}", self.id),
        }
    }
}

/// Response of `/sport/football/scheduled-events/{date}` and its `/inverse` twin
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduledEventsResponse {
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

/// Full event payload from `/event/{id}`.
///
/// Team names and the kickoff are required: a detail response without them
/// cannot produce a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDetail {
    pub id: u64,
    #[serde(rename = "startTimestamp")]
    pub start_timestamp: i64,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamRef,
    #[serde(default)]
    pub tournament: Option<TournamentRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetailResponse {
    pub event: EventDetail,
}
