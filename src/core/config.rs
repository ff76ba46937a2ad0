use std::env;
use std::str::FromStr;

/// Runtime configuration assembled from environment variables.
/// `DATABASE_URL` is the only mandatory one; everything else has a default
/// suited to local development. The `.env` file is loaded by `main` before
/// this runs.
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

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("{} is not a valid value: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        // Comma-separated origin list; "*" anywhere in it opens CORS up
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT", 3000)?,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            idle_timeout_secs: env_parse("DB_IDLE_TIMEOUT_SECS", 600)?,
            max_lifetime_secs: env_parse("DB_MAX_LIFETIME_SECS", 1800)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            username: env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty()),
            password: env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty()),
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Wisely API".to_string()),
            version: env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "API documentation for Wisely".to_string()),
        })
    }

    /// "username:password" when both are configured; otherwise the Swagger UI
    /// stays unprotected
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
