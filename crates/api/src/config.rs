use std::path::PathBuf;

use shipdesk_core::types::DbId;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public base URL of the shop, used for carrier logo links.
    pub base_url: String,
    /// Base URI path appended to `base_url` (default: `/`).
    pub base_uri: String,
    /// Id of the shop this process serves (default: `1`).
    pub shop_id: DbId,
    /// Host platform version; gates the override-registry upgrade step.
    pub platform_version: String,
    /// Vendor controller file carrying the injected override block, if any.
    pub override_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BASE_URL`             | `http://localhost`         |
    /// | `BASE_URI`             | `/`                        |
    /// | `SHOP_ID`              | `1`                        |
    /// | `PLATFORM_VERSION`     | `1.7`                      |
    /// | `OVERRIDE_FILE`        | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost".into());
        let base_uri = std::env::var("BASE_URI").unwrap_or_else(|_| "/".into());

        let shop_id: DbId = std::env::var("SHOP_ID")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("SHOP_ID must be a valid integer");

        let platform_version =
            std::env::var("PLATFORM_VERSION").unwrap_or_else(|_| "1.7".into());

        let override_file = std::env::var("OVERRIDE_FILE").ok().map(PathBuf::from);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            base_url,
            base_uri,
            shop_id,
            platform_version,
            override_file,
        }
    }
}
