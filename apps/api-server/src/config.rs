//! Application configuration loaded from environment variables.

use std::env;

use blogger_infra::{JwtConfig, MongoConfig};

/// The single credential pair accepted by HTTP Basic auth on admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub login: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            login: "admin".to_string(),
            password: "qwerty".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on the in-memory repositories.
    pub mongo: Option<MongoConfig>,
    pub admin: AdminCredentials,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongo = env::var("MONGO_URL").ok().map(|url| MongoConfig {
            url,
            db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "blogger".to_string()),
        });

        let defaults = AdminCredentials::default();
        let admin = AdminCredentials {
            login: env::var("ADMIN_LOGIN").unwrap_or(defaults.login),
            password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo,
            admin,
            jwt: JwtConfig::from_env(),
        }
    }
}
