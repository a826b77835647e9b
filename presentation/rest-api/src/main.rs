use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod live;
    pub mod security;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod invitation {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod list {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod suggestion {
        pub mod dto;
        pub mod routes;
    }
    pub mod user {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod error;
    pub mod firebase_config;
    pub mod server_config;
    pub mod store_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

fn log_filter(variable: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_env(variable)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// REST API entry point
///
/// - config/: environment configuration (server, CORS, store, identity provider)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG may come from .env, so it is read before the subscriber exists
    let dotenv_result = dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(tracing_subscriber::EnvFilter::DEFAULT_ENV))
        .init();

    match dotenv_result {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) => tracing::debug!("No .env file loaded: {err}"),
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        store = config.store.backend.as_str(),
        list_delete_policy = %config.store.list_delete_policy,
        "Starting shopping list service"
    );

    let container = DependencyContainer::new(&config.store).await?;
    Server::run(config, container).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_log_filter_loaded_from_env_file() {
        dotenvy::from_read("SHOPPING_LIST_TEST_LOG=warn\n".as_bytes()).unwrap();

        assert_eq!(log_filter("SHOPPING_LIST_TEST_LOG").to_string(), "warn");
    }

    #[test]
    fn should_default_log_filter_to_info() {
        assert_eq!(log_filter("SHOPPING_LIST_TEST_LOG_UNSET").to_string(), "info");
    }
}
