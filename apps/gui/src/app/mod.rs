mod main;
mod config;

pub use main::{App, SearchOutcome};
pub use config::AppConfig;
