use crate::error::Result;
use config::{AppStrategy, create_strategy};
use doc_search::DEFAULT_CORPUS_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for .txt documents
    pub corpus_dir: PathBuf,
}

fn default_config() -> Config {
    Config {
        corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = strategy
            .config_dir()
            .join(config::constants::CLI_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First run: leave a commented example behind
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &PathBuf) -> Result<()> {
        use std::io::Write;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# docseek CLI configuration
#
# This file was created automatically on first run.

# Directory scanned for .txt documents
# corpus-dir = "./docs"
"#;

        let mut file = std::fs::File::create(config_path)?;
        file.write_all(example_config.as_bytes())?;

        eprintln!("Created configuration file: {config_path:?}");
        eprintln!("Edit it to point corpus-dir at your document folder.");

        Ok(())
    }
}
