pub mod channel_resolver;
pub mod date_logic;
pub mod event_lister;
pub mod http_client;
pub mod match_enricher;
pub mod orchestrator;
pub mod urls;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::{create_http_client_with_timeout, identity_headers};
// Re-export pipeline stages
pub use channel_resolver::{finalize_channel_names, resolve_channel_name, resolve_country_channels};
pub use date_logic::{
    consecutive_dates, determine_target_date, output_file_name, parse_target_date,
    target_date_from,
};
pub use event_lister::list_events;
pub use match_enricher::{build_match_record, enrich_match};
pub use orchestrator::{fetch_fixtures, run_for_date, RunSummary};
