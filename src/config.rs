use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    sync::LazyLock,
};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// Env: `LISTEN_ADDR`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// Env: `LISTEN_PORT`. Default: `5555`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Database URL for SQLite.
    /// Env: `DATABASE_URL`. Default: `sqlite://app.db`.
    #[serde(default)]
    pub database_url: String,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// Env: `LOGLEVEL`. Default: `info`.
    #[serde(default)]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: "sqlite://app.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults, an optional `config.toml`, and
    /// environment variables. Raw env mapping, so field names map to env vars
    /// in UPPER_SNAKE_CASE.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::raw())
    }

    /// Loads configuration from the environment (with defaults and the
    /// optional `config.toml`).
    pub fn from_env() -> Self {
        Self::figment()
            .extract()
            .unwrap_or_else(|err| panic!("failed to extract configuration via Figment: {err}"))
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Default IP address for the HTTP server listen address.
pub fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the HTTP server.
pub fn default_listen_port() -> u16 {
    5555
}
