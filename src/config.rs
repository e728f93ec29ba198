use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Base URL of the scheduling backend. Submissions are only kept in
    /// memory when unset.
    pub scheduling_api_url: Option<String>,
    pub backend_timeout: Duration,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparsable values fall back to
    /// the defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let bind_address = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .unwrap_or_else(|_| {
                tracing::warn!("Invalid HOST '{}', binding to {}", host, DEFAULT_HOST);
                SocketAddr::from(([0, 0, 0, 0], port))
            });

        let scheduling_api_url = lookup("SCHEDULING_API_URL").filter(|url| !url.trim().is_empty());

        let timeout_secs = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid BACKEND_TIMEOUT_SECS '{}', using {}",
                    raw,
                    DEFAULT_BACKEND_TIMEOUT_SECS
                );
                DEFAULT_BACKEND_TIMEOUT_SECS
            }),
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        Self {
            bind_address,
            scheduling_api_url,
            backend_timeout: Duration::from_secs(timeout_secs),
            static_dir,
        }
    }
}
