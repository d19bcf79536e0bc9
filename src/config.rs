use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::github;
use crate::languages;

/// Runtime settings. Everything has a coded default; an optional user config
/// file (and a local `reporoulette.toml` in the working directory) can
/// override the endpoints, e.g. for a GitHub Enterprise host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api_url: String,
    pub languages_url: String,
    pub per_page: u32,
    pub max_page: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let user_config_path = get_user_config_path();

        let s = Config::builder()
            .set_default("api_url", github::SEARCH_URL)?
            .set_default("languages_url", languages::LANGUAGES_URL)?
            .set_default("per_page", github::PER_PAGE as i64)?
            .set_default("max_page", github::MAX_PAGE as i64)?
            // Merge user's global config, if present.
            .add_source(File::from(user_config_path).required(false))
            // Merge local reporoulette.toml from CWD. Optional override.
            .add_source(File::with_name("reporoulette").required(false))
            .build()?;

        s.try_deserialize()
    }
}

pub fn get_user_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("reporoulette");
    path.push("reporoulette.toml");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_github() {
        let settings = Settings::new().unwrap();
        assert!(settings.api_url.contains("api.github.com"));
        assert_eq!(settings.per_page, 100);
        assert_eq!(settings.max_page, 10);
    }
}
