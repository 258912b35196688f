//! Football fixtures and TV broadcasters fetcher
//!
//! Lists the football matches scheduled for a date, enriches each one with
//! its per-country TV channels and writes the result as a dated JSON file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fixture_tv::config::Config;
//! use fixture_tv::data_fetcher::api::{create_http_client_with_timeout, run_for_date};
//! use fixture_tv::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let summary = run_for_date(&client, &config, "2024-01-16").await?;
//!     println!("{} matches in {}", summary.written, summary.output_path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{fetch_fixtures, run_for_date};
pub use data_fetcher::models::{CountryBroadcast, MatchRecord};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
