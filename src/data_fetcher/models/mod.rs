pub mod channels;
pub mod events;
pub mod records;

pub use channels::{
    ChannelId, ChannelInfo, ChannelScheduleResponse, CountryChannelMap, CountryChannelsResponse,
    ResolvedChannel,
};
pub use events::{
    EventDetail, EventDetailResponse, ScheduledEvent, ScheduledEventsResponse, TeamRef,
    TournamentRef,
};
pub use records::{CountryBroadcast, MatchRecord};
