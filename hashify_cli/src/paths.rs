//! Centralized path management for the hashify CLI
//!
//! Every place that needs the data or config directory goes through here so
//! the history file and the config file never drift apart.

use std::path::PathBuf;

/// The name of the application directory used across all platforms
const APP_DIR: &str = "hashify";

/// The name of the history file
const HISTORY_FILE: &str = "history.json";

/// The name of the configuration file
const CONFIG_FILE: &str = "config.toml";

/// Returns the base data directory for the application
///
/// On Linux this honours `XDG_DATA_HOME` and otherwise resolves to
/// `~/.local/share/hashify`. On Windows it is `%APPDATA%/hashify`.
///
/// If the standard directories cannot be determined, falls back to `.hashify`
/// in the current directory.
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".hashify"))
}

/// Returns the path to the persisted hash history
pub fn get_history_path() -> PathBuf {
    get_data_dir().join(HISTORY_FILE)
}

/// Returns the path to the configuration file
///
/// `XDG_CONFIG_HOME` wins when set (Linux/macOS), then the platform default:
/// - Linux: `~/.config/hashify/config.toml`
/// - macOS: `~/Library/Application Support/hashify/config.toml`
/// - Windows: `%APPDATA%\hashify\config.toml`
pub fn get_config_path() -> PathBuf {
    #[cfg(not(target_os = "windows"))]
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config).join(APP_DIR).join(CONFIG_FILE);
    }

    #[cfg(target_os = "linux")]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    #[cfg(not(target_os = "linux"))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }
}

/// Default file name for an exported history snapshot
///
/// `hash_history_<timestamp>.json`, with `:` and `.` replaced so the name is
/// valid on every platform.
pub fn history_export_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("hash_history_{stamp}.json")
}
