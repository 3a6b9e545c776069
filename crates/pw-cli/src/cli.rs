use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pw")]
#[command(about = "Interactive project setup wizard")]
#[command(version)]
pub struct Cli {
    /// Server URL (overrides [server] url)
    #[arg(long)]
    pub server: Option<String>,

    /// API token (overrides [auth] token)
    #[arg(long)]
    pub token: Option<String>,

    /// Directory holding config.toml (default: $PW_CONFIG_DIR or ./.pw)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Enforce disabled step tabs instead of only marking them
    #[arg(long)]
    pub strict_tabs: bool,
}

impl Cli {
    /// Load config from `--config-dir` (or the default location) and apply flag overrides
    pub fn load_config(&self) -> pw_config::ConfigErrorResult<pw_config::Config> {
        let mut config = match self.config_dir {
            Some(ref dir) => pw_config::Config::load_from(dir.clone())?,
            None => pw_config::Config::load()?,
        };

        if let Some(ref url) = self.server {
            config.server.url = url.clone();
        }
        if let Some(ref token) = self.token {
            config.auth.token = Some(token.clone());
        }
        if self.strict_tabs {
            config.wizard.strict_tab_guard = true;
        }

        config.validate()?;
        Ok(config)
    }
}
