use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// Falls back to the current directory if the platform config directory is
/// unavailable.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fixture_tv")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fixture_tv")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
