use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must be an http(s) URL
/// - Output directory cannot be empty
/// - Timeouts must be positive
/// - At least one event must be allowed per run
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    output_dir: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    channel_timeout_seconds: u64,
    max_events: usize,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if http_timeout_seconds == 0 || channel_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeouts must be at least 1 second"));
    }

    if max_events == 0 {
        return Err(AppError::config_error("max_events must be at least 1"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
