use serde::Deserialize;
use std::path::PathBuf;

use homeroom_llm::config::API_KEY_ENV;

/// Optional config file at `~/.homeroom/config.json`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".homeroom").join("config.json"))
}

/// Load the config file; a missing or unreadable file is just defaults.
pub fn load() -> AppConfig {
    config_path()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

/// Credential precedence: config file, then environment. A `None` here
/// sends the user to the interactive key-entry screen.
pub fn resolve_api_key(config: &AppConfig) -> Option<String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_key_wins_over_environment() {
        let config = AppConfig {
            api_key: Some("from-file".to_string()),
            model: None,
        };
        assert_eq!(resolve_api_key(&config).as_deref(), Some("from-file"));
    }

    #[test]
    fn blank_file_key_falls_through() {
        let config = AppConfig {
            api_key: Some("   ".to_string()),
            model: None,
        };
        // may still pick up a real env key on a developer machine; only
        // assert the blank file value itself was not chosen
        assert_ne!(resolve_api_key(&config).as_deref(), Some("   "));
    }
}
