use acct_shared::config::{
    AttachmentConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, LoggingConfig,
    ServerConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub attachment: AttachmentConfig,
    pub environment: Environment,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Config {
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            server: ServerConfig::from_env(),
            attachment: AttachmentConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
            environment,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Session cookies are marked `Secure` everywhere but local development
    pub fn secure_cookies(&self) -> bool {
        self.auth.session.secure || !self.is_development()
    }
}
