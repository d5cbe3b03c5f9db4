use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    /// Days of inactivity before a session expires
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_expiry_days: match std::env::var("SESSION_EXPIRY_DAYS") {
                Ok(value) => parse_expiry_days(&value)?,
                Err(_) => DEFAULT_SESSION_EXPIRY_DAYS,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_expiry_days(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        Ok(days) => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS".to_string(),
            reason: format!("expected a positive number of days, got {}", days),
        }),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS".to_string(),
            reason: e.to_string(),
        }),
    }
}
