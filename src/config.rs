use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// On-disk configuration. Both URLs are optional; with neither set the app
/// runs entirely off the bundled sample catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub assistant_url: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dramabox").join("config.json"))
}

impl Config {
    /// Load from the platform config directory, with the `DRAMABOX_API_URL`
    /// environment variable taking precedence for the catalog URL.
    pub fn load() -> Self {
        let mut config = match config_path() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("Ignoring malformed config {}: {e}", path.display());
                        Config::default()
                    }
                },
                Err(_) => {
                    info!("No config at {}, using defaults", path.display());
                    Config::default()
                }
            },
            None => Config::default(),
        };

        if let Ok(url) = std::env::var("DRAMABOX_API_URL") {
            if !url.is_empty() {
                config.api_base_url = Some(url);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_none() {
        let c: Config = serde_json::from_str("{}").unwrap();
        assert!(c.api_base_url.is_none());
        assert!(c.assistant_url.is_none());
    }

    #[test]
    fn full_config_round_trips() {
        let c = Config {
            api_base_url: Some("http://localhost:8080".to_string()),
            assistant_url: Some("http://localhost:8080/assist".to_string()),
        };
        let raw = serde_json::to_string(&c).unwrap();
        let back: Config = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.api_base_url, c.api_base_url);
        assert_eq!(back.assistant_url, c.assistant_url);
    }
}
