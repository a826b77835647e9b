use poem::middleware::Cors;

use super::{
    cors_config, error::ConfigError, server_config::ServerConfig, store_config::StoreConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store: StoreConfig::from_env()?,
        })
    }
}
