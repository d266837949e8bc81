pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "docseek";
pub const APP_NAME: &str = "docseek";

pub const GUI_CONFIG_FILE_NAME: &str = "gui.toml";
pub const CLI_CONFIG_FILE_NAME: &str = "cli.toml";
