use std::env;
use std::time::Duration;

/// Environment lookup used to build configuration sections.
///
/// `from_env()` reads the process environment; tests pass a closure over a map.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Configuration for the item store binary
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Configuration for the greeting binary
#[derive(Debug, Clone)]
pub struct GreetingConfig {
    pub app: AppConfig,
    /// Name used in the `Hello, <name>!` greeting
    pub name: String,
}

/// Load `.env` if present. Missing file is fine.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }
}

fn parse_or<T, S>(source: &S, key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
    S: ConfigSource + ?Sized,
{
    source
        .get(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}

impl Config {
    pub const DEFAULT_PORT: u16 = 5000;

    pub fn from_env() -> Result<Self, String> {
        load_dotenv();
        Self::from_source(&process_env)
    }

    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_source(source, "PORT", Self::DEFAULT_PORT)?,
            database: DatabaseConfig::from_source(source)?,
            swagger: SwaggerConfig::from_source(source),
        })
    }
}

impl GreetingConfig {
    pub const DEFAULT_PORT: u16 = 8000;
    const DEFAULT_NAME: &'static str = "World";

    pub fn from_env() -> Result<Self, String> {
        load_dotenv();
        Self::from_source(&process_env)
    }

    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, String> {
        let name = source
            .get("GREETING_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string());

        Ok(Self {
            app: AppConfig::from_source(source, "GREETING_PORT", Self::DEFAULT_PORT)?,
            name,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    /// `port_key` names the variable holding this binary's port, so both
    /// binaries can share one `.env` without binding the same port.
    pub fn from_source<S: ConfigSource + ?Sized>(
        source: &S,
        port_key: &str,
        default_port: u16,
    ) -> Result<Self, String> {
        let host = source
            .get("HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = source
            .get(port_key)
            .unwrap_or_else(|| default_port.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid {}: {}", port_key, e))?;

        // Comma-separated list, "*" allows any origin
        let cors_allowed_origins = source
            .get("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = parse_or(
            source,
            "MAX_REQUEST_BODY_SIZE",
            Self::DEFAULT_MAX_REQUEST_BODY_SIZE,
        )?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Local file next to the working directory, created on first start
    pub const DEFAULT_URL: &'static str = "sqlite://data.db";

    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, String> {
        let url = source
            .get("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_URL.to_string());

        Ok(Self {
            url,
            max_connections: parse_or(source, "DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_or(source, "DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_or(
                source,
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_or(
                source,
                "DB_IDLE_TIMEOUT_SECS",
                Self::DEFAULT_IDLE_TIMEOUT_SECS,
            )?,
            max_lifetime_secs: parse_or(
                source,
                "DB_MAX_LIFETIME_SECS",
                Self::DEFAULT_MAX_LIFETIME_SECS,
            )?,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

impl SwaggerConfig {
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Self {
        // Only use credentials if they are non-empty
        let username = source.get("SWAGGER_USERNAME").filter(|s| !s.is_empty());
        let password = source.get("SWAGGER_PASSWORD").filter(|s| !s.is_empty());
        let title = source
            .get("SWAGGER_TITLE")
            .unwrap_or_else(|| "Item Store API".to_string());
        let version = source
            .get("SWAGGER_VERSION")
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
        let description = source
            .get("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|| "CRUD API for items".to_string());

        Self {
            username,
            password,
            title,
            version,
            description,
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
