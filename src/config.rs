use crate::error::{AppError, Result};
use clap::Args;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const RPC_PATH: &str = "jsonrpc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection and logging flags. The environment variable names are the ones
/// the menu-bar host exports for plugin variables.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Kodi remote control HTTP URL, e.g. http://localhost:8080/
    #[arg(long, global = true, env = "VAR_URL")]
    pub url: Option<String>,

    /// Remote control username
    #[arg(long, global = true, env = "VAR_USERNAME", default_value = "")]
    pub username: String,

    /// Remote control password
    #[arg(long, global = true, env = "VAR_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Also write logs to this file
    #[arg(long, global = true, env = "VAR_LOG_FILENAME")]
    pub log_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VAR_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Clone)]
pub struct Config {
    pub url: String,
    pub username: String,
    pub password: String,
    pub log_file: Option<PathBuf>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let url = args
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Config("URL must be set".to_string()))?;

        // An empty VAR_LOG_FILENAME means no log file
        let log_file = args.log_file.filter(|p| !p.as_os_str().is_empty());

        Ok(Config {
            url,
            username: args.username,
            password: args.password,
            log_file,
            timeout: Duration::from_secs(args.timeout),
        })
    }

    /// Endpoint the JSON-RPC requests are posted to.
    pub fn rpc_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), RPC_PATH)
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("log_file", &self.log_file)
            .field("timeout", &self.timeout)
            .finish()
    }
}
