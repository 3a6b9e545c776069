mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod wizard_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use wizard_config::WizardConfig;

const CONFIG_DIR_ENV: &str = "PW_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pw";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_STRICT_TAB_GUARD: bool = false;
