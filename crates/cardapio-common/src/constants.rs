//! Route paths, REST endpoints, and default locations.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Path of the menu-item list screen.
pub const LIST_PATH: &str = "/item-cardapio";

/// Path segment appended to a detail path to reach the edit screen.
pub const EDIT_SEGMENT: &str = "edit";

/// Path segment appended to a detail path to reach the delete dialog.
pub const DELETE_SEGMENT: &str = "delete";

/// REST resource path for menu items, relative to the API base URL.
pub const API_RESOURCE_PATH: &str = "/api/item-cardapios";

/// Default base URL of the backing REST API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "CARDAPIO_API_URL";

/// Default base directory for cardapio data on Linux with root access.
pub const SYSTEM_DATA_DIR: &str = "/var/lib/cardapio";

/// Application name used in headings and log files.
pub const APP_NAME: &str = "cardapio";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "cardapio";

/// Returns the data directory, preferring `$HOME/.cardapio` and falling back
/// to `/var/lib/cardapio`.
fn resolve_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        let user_dir = PathBuf::from(home).join(".cardapio");
        if std::fs::create_dir_all(&user_dir).is_ok() {
            return user_dir;
        }
    }
    PathBuf::from(SYSTEM_DATA_DIR)
}

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved data directory for this session.
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(resolve_data_dir)
}

/// Returns the default client configuration file path.
pub fn default_config_file() -> PathBuf {
    data_dir().join("config.json")
}

/// Returns the default log file path.
pub fn default_log_file() -> PathBuf {
    data_dir().join("cardapio.log")
}
