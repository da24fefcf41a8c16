use std::net::{IpAddr, SocketAddr};

use time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 24 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// | Env Var                    | Required                  | Default      |
/// |----------------------------|---------------------------|--------------|
/// | `HOST`                     | no                        | `0.0.0.0`    |
/// | `PORT`                     | no                        | `8080`       |
/// | `DATABASE_URL`             | no                        | in-memory    |
/// | `DATABASE_MAX_CONNECTIONS` | no                        | `10`         |
/// | `JWT_SECRET`               | when `REQUIRE_AUTH` holds | --           |
/// | `JWT_TTL_MINUTES`          | no                        | `1440`       |
/// | `REQUIRE_AUTH`             | no                        | `true`       |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Postgres connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub require_auth: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&get, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;
        let database_url = get("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let database_max_connections =
            parse_or(&get, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let ttl_minutes: i64 = parse_or(&get, "JWT_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_TTL_MINUTES",
                value: ttl_minutes.to_string(),
            });
        }

        let require_auth = match get("REQUIRE_AUTH") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "REQUIRE_AUTH",
                value,
            })?,
        };

        let jwt_secret = get("JWT_SECRET").unwrap_or_default();
        if require_auth && jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            jwt_secret,
            token_ttl: Duration::minutes(ttl_minutes),
            require_auth,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
