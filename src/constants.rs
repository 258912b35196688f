//! Application-wide constants and default configuration values
//!
//! Everything the pipeline treats as "hardcoded" lives here so the config layer
//! can fall back to it and tests can refer to the same values.

/// Base URL of the upstream sports-data API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sofascore.com/api/v1";

/// Directory (relative to the working directory) that receives the dated JSON files
pub const DEFAULT_OUTPUT_DIR: &str = "date";

/// Default timeout for listing, detail and channel-map requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Timeout for a single channel-name lookup in seconds
pub const DEFAULT_CHANNEL_TIMEOUT_SECONDS: u64 = 5;

/// Maximum number of listed events that get enriched per date
pub const DEFAULT_MAX_EVENTS: usize = 50;

/// Pause between successive events (and between dates) in milliseconds
pub const DEFAULT_EVENT_DELAY_MS: u64 = 1000;

/// How many days after today the default target date lies
pub const DEFAULT_DAYS_AHEAD: i64 = 1;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Sport segment used in the listing endpoints
pub const SPORT: &str = "football";

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "fixture_tv.log";

/// Broadcaster output values
pub mod broadcast {
    /// Display form of a channel whose name could not be resolved.
    /// Never written to the output file.
    pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

    /// Placeholder emitted when none of a country's channels resolved
    pub const TBA: &str = "TBA";

    /// League name used when the detail payload carries no tournament
    pub const UNKNOWN_LEAGUE: &str = "Unknown";
}

/// Browser identity presented to the upstream API
pub mod identity {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    pub const REFERER: &str = "https://www.sofascore.com/";
    pub const ORIGIN: &str = "https://www.sofascore.com";
    pub const ACCEPT: &str = "application/json, text/plain, */*";
    pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_URL: &str = "FIXTURE_TV_API_URL";
    pub const OUTPUT_DIR: &str = "FIXTURE_TV_OUTPUT_DIR";
    pub const LOG_FILE: &str = "FIXTURE_TV_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FIXTURE_TV_HTTP_TIMEOUT";
    pub const MAX_EVENTS: &str = "FIXTURE_TV_MAX_EVENTS";
    pub const EVENT_DELAY_MS: &str = "FIXTURE_TV_EVENT_DELAY_MS";
}
