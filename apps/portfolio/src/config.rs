use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_CV_FILENAME: &str = "Maheswaren_CV.txt";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub rust_log: String,
    pub static_dir: PathBuf,
    /// JSON content file. `None` serves the built-in content.
    pub data_path: Option<PathBuf>,
    pub cv_filename: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "127.0.0.1")
                .parse::<IpAddr>()
                .context("HOST must be a valid IP address")?,
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static")),
            data_path: optional_env("PORTFOLIO_DATA").map(PathBuf::from),
            cv_filename: env_or("CV_FILENAME", DEFAULT_CV_FILENAME),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            rust_log: "info".to_string(),
            static_dir: PathBuf::from("static"),
            data_path: None,
            cv_filename: DEFAULT_CV_FILENAME.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
