use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRES_IN: i64 = 3600;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expires_in: i64,

    pub bind_address: String,
    pub cors_origin: String,

    /// Populates empty tables with demo data on startup.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_in: match optional("JWT_EXPIRES_IN") {
                Some(value) => parse_seconds("JWT_EXPIRES_IN", &value)?,
                None => DEFAULT_JWT_EXPIRES_IN,
            },
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: optional("CORS_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            seed_database: match optional("SEED_DATABASE") {
                Some(value) => parse_bool("SEED_DATABASE", &value)?,
                None => true,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_seconds(name: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|seconds| *seconds > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
