use crate::app::AppConfig;
use crate::error::Result;
use doc_search::SearchConfig;
use serde::Deserialize;
use std::path::PathBuf;
use config::{AppStrategy, create_strategy, resolve_dir};

pub use config::constants;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub search: SearchConfig,

    // === System state ===
    pub config_path: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    app: AppConfig,
    search: SearchConfig,
}

impl Config {
    fn from_raw(raw: RawConfig, config_path: PathBuf) -> Self {
        Self {
            app: raw.app,
            search: raw.search,
            config_path,
        }
    }

    fn resolve_config_path() -> Result<PathBuf> {
        let strategy = create_strategy()
            .map_err(|e| crate::error::error!("home directory not found: {e}"))?;

        Ok(
            resolve_dir("CONFIG_DIRECTORY", &strategy, |s| Some(s.config_dir()))
                .join(constants::GUI_CONFIG_FILE_NAME),
        )
    }

    pub fn load() -> Result<Config> {
        let config_path = Self::resolve_config_path()?;

        let raw_config: RawConfig = match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_raw(raw_config, config_path))
    }

    pub fn load_str(config_str: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        let config_path = Self::resolve_config_path()?;

        Ok(Self::from_raw(raw, config_path))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let default_app = AppConfig::default();
        assert_eq!(default_app.width, 480.0);
        assert_eq!(default_app.height, 240.0);
    }

    #[test]
    fn test_load_config_values() {
        const USER_CONFIG: &'static str = r#"
        [app]
        width = 200.0

        [search]
        corpus-dir = "/srv/library"
        "#;

        let cfg = Config::load_str(USER_CONFIG).expect("Failed to load config");

        assert_eq!(cfg.app.width, 200.0);
        assert_eq!(cfg.app.height, 240.0);
        assert_eq!(cfg.search.corpus_dir, PathBuf::from("/srv/library"));
    }

    #[test]
    fn test_default_corpus_dir() {
        let cfg = Config::load_str("").expect("Failed to load config");
        assert_eq!(cfg.search.corpus_dir, PathBuf::from("./docs"));
    }

    #[test]
    fn test_load_config_unknown_field() {
        const USER_CONFIG: &'static str = r#"
        [app]
        not-a-setting = true
        "#;

        let cfg = Config::load_str(USER_CONFIG);
        let err = cfg.unwrap_err();
        assert!(err.to_string().contains("unknown field `not-a-setting`"));
    }
}
