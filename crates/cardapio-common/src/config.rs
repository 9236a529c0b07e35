//! Client configuration model.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardapioError, Result};
use crate::types::ItemCardapioId;

/// Configuration of the REST client backing the menu-item screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Resource path of the menu-item endpoint.
    pub resource_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
            timeout_secs: crate::constants::DEFAULT_TIMEOUT_SECS,
            resource_path: crate::constants::API_RESOURCE_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads a configuration from a JSON file. Missing keys take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardapioError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the base URL is an HTTP(S) URL and the timeout is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `CardapioError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CardapioError::Config {
                message: format!("base_url must be an http(s) URL, got {:?}", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(CardapioError::Config {
                message: "timeout_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the collection endpoint.
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource_path.trim_start_matches('/')
        )
    }

    /// URL of a single menu item.
    #[must_use]
    pub fn entity_url(&self, id: &ItemCardapioId) -> String {
        format!("{}/{id}", self.resource_url())
    }
}
