use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football fixtures and TV listings fetcher
///
/// Lists tomorrow's football matches, looks up which TV channels carry each
/// match in each country, and writes the result to `<output dir>/YYYYMMDD.json`.
///
/// Runs once and exits. Upstream API failures never abort the run: unavailable
/// matches are skipped and the output file is always written.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch fixtures for this date (YYYY-MM-DD) instead of tomorrow.
    #[arg(long = "date", short = 'd', help_heading = "Fetch Options")]
    pub date: Option<String>,

    /// Number of consecutive days to fetch, starting at the target date.
    /// Each day is written to its own file.
    #[arg(
        long = "days",
        short = 'n',
        default_value_t = 1,
        help_heading = "Fetch Options"
    )]
    pub days: u32,

    /// Directory for the output files. Overrides the config file.
    #[arg(long = "output-dir", short = 'o', help_heading = "Fetch Options")]
    pub output_dir: Option<String>,

    /// Maximum number of listed matches to enrich per day. Overrides the config file.
    #[arg(long = "max-events", help_heading = "Fetch Options")]
    pub max_events: Option<usize>,

    /// Pause between matches in milliseconds. Overrides the config file.
    #[arg(long = "delay-ms", help_heading = "Fetch Options")]
    pub delay_ms: Option<u64>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug-level logging (per-request details).
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
