use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use std::time::Duration;

// Re-export Environment for use in other modules
pub use core_config::Environment;

const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Start with the demo users instead of an empty store
    pub seed_demo_users: bool,
    /// Budget for cleanup once shutdown has started
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=localhost, PORT=8080
        let seed_demo_users = env_parse_or("SEED_DEMO_USERS", true)?;
        let shutdown_timeout = Duration::from_secs(env_parse_or(
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_demo_users,
            shutdown_timeout,
        })
    }
}
