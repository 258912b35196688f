pub mod api;
pub mod models;

pub use api::{fetch_fixtures, run_for_date, RunSummary};
pub use models::{CountryBroadcast, MatchRecord};
