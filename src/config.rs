// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use url::Url;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8080";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend that owns tests, questions and results.
    pub upstream_url: Url,
    pub jwt_secret: String,
    pub upstream_timeout_secs: u64,
    pub listen_addr: SocketAddr,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let upstream_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_url = parse_upstream_url(&upstream_url)
            .expect("UPSTREAM_URL must be a valid http(s) URL");

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .expect("LISTEN_ADDR must be a socket address like 0.0.0.0:3000");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            upstream_url,
            jwt_secret,
            upstream_timeout_secs,
            listen_addr,
            rust_log,
        }
    }
}

/// Parses the upstream base URL, normalizing it to end with a slash so that
/// relative paths join underneath it instead of replacing the last segment.
pub fn parse_upstream_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
