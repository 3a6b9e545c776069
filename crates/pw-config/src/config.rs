use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, ServerConfig, WizardConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub wizard: WizardConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PW_CONFIG_DIR env var, else use ./.pw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(Self::config_dir()?)
    }

    /// Load config from an explicit directory (steps 2-4 of `load`).
    pub fn load_from(config_dir: PathBuf) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PW_CONFIG_DIR env var > ./.pw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.wizard.validate()?;
        Ok(())
    }

    /// Log configuration summary (never logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (timeout {}s)",
            self.server.url, self.server.timeout_secs
        );
        info!(
            "  auth: {}",
            if self.auth.has_token() {
                "token"
            } else {
                "none"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  wizard: strict_tab_guard={}, draft_title_prefix='{}'",
            self.wizard.strict_tab_guard, self.wizard.draft_title_prefix
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PW_SERVER_URL", &mut self.server.url);
        Self::apply_env_parse("PW_SERVER_TIMEOUT_SECS", &mut self.server.timeout_secs);

        // Auth
        Self::apply_env_option_string("PW_AUTH_TOKEN", &mut self.auth.token);

        // Logging
        Self::apply_env_parse("PW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PW_LOG_FILE", &mut self.logging.file);

        // Wizard
        Self::apply_env_bool(
            "PW_WIZARD_STRICT_TAB_GUARD",
            &mut self.wizard.strict_tab_guard,
        );
        Self::apply_env_string(
            "PW_WIZARD_DEFAULT_LABEL_CONFIG",
            &mut self.wizard.default_label_config,
        );
        Self::apply_env_string(
            "PW_WIZARD_DRAFT_TITLE_PREFIX",
            &mut self.wizard.draft_title_prefix,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
