use serde::Serialize;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "noteful.sqlite";
pub const DEFAULT_TEST_DATABASE_URL: &str = ":memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub environment: Environment,
    pub database_url: String,
    pub max_body_bytes: usize,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_body_bytes: 16 * 1024,
            cors_allowed_origins: Vec::new(),
            log_json: true,
        }
    }
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    lookup(name)
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn lookup_parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, String> {
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("invalid value for {name}: {raw}")),
        _ => Ok(default),
    }
}

fn lookup_list(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Vec<String> {
    lookup(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. `TEST_DATABASE_URL`
    /// replaces `DATABASE_URL` when the environment is `test`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();
        let environment = lookup_parsed(&lookup, "NOTEFUL_ENV", defaults.environment)?;
        let database_url = if environment == Environment::Test {
            lookup("TEST_DATABASE_URL").unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.to_string())
        } else {
            lookup("DATABASE_URL").unwrap_or(defaults.database_url)
        };
        Ok(Self {
            bind_host: lookup("NOTEFUL_BIND_HOST").unwrap_or(defaults.bind_host),
            port: lookup_parsed(&lookup, "PORT", defaults.port)?,
            environment,
            database_url,
            max_body_bytes: lookup_parsed(
                &lookup,
                "NOTEFUL_MAX_BODY_BYTES",
                defaults.max_body_bytes,
            )?,
            cors_allowed_origins: lookup_list(&lookup, "NOTEFUL_CORS_ALLOWED_ORIGINS"),
            log_json: lookup_bool(&lookup, "NOTEFUL_LOG_JSON", defaults.log_json),
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.port)
        } else {
            format!("{}:{}", self.bind_host, self.port)
        }
    }
}

pub fn validate_startup_config(cfg: &ServerConfig) -> Result<(), String> {
    if cfg.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if cfg.database_url.trim().is_empty() {
        return Err("database url must not be empty".to_string());
    }
    if cfg.environment.is_production() && cfg.port == 0 {
        return Err("production requires an explicit non-zero port".to_string());
    }
    Ok(())
}
