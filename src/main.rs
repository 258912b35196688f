// src/main.rs
use clap::Parser;
use fixture_tv::cli::Args;
use fixture_tv::commands::{
    apply_arg_overrides, handle_fetch_command, handle_list_config_command, validate_args,
};
use fixture_tv::config::Config;
use fixture_tv::error::AppError;
use fixture_tv::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    if args.list_config {
        return handle_list_config_command().await;
    }

    let mut config = Config::load().await?;
    apply_arg_overrides(&mut config, &args);
    config.validate()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_fetch_command(&args, &config).await
}
