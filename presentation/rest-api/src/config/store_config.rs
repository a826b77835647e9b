use std::env;
use std::str::FromStr;

use business::domain::list::policy::ListDeletionPolicy;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Which document store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Storage configuration
///
/// Environment variables:
/// - STORE_BACKEND: `postgres` (default) or `memory`
/// - DATABASE_URL: PostgreSQL connection string (required for `postgres`)
/// - MIGRATIONS_PATH: directory of sqlx migrations
///   (default: "infrastructure/persistence/migrations")
/// - LIST_DELETE_POLICY: `keep_children` (default) or `cascade`
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub migrations_path: String,
    pub list_delete_policy: ListDeletionPolicy,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::default(),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let list_delete_policy = match lookup("LIST_DELETE_POLICY") {
            Some(raw) => ListDeletionPolicy::from_str(raw.trim()).map_err(|_| {
                ConfigError::Invalid {
                    name: "LIST_DELETE_POLICY",
                    value: raw,
                }
            })?,
            None => ListDeletionPolicy::default(),
        };

        Ok(Self {
            backend,
            database_url,
            migrations_path: lookup("MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
            list_delete_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn should_default_to_postgres_with_observed_delete_policy() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/shopping")]).unwrap();

        assert_eq!(config.backend, StoreBackend::Postgres);
        assert_eq!(config.list_delete_policy, ListDeletionPolicy::KeepChildren);
        assert_eq!(config.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_require_database_url_when_backend_is_postgres() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn should_not_require_database_url_when_backend_is_memory() {
        let config = config_from(&[("STORE_BACKEND", "Memory")]).unwrap();

        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn should_reject_unknown_backend() {
        assert!(matches!(
            config_from(&[("STORE_BACKEND", "mongo")]),
            Err(ConfigError::Invalid { name: "STORE_BACKEND", .. })
        ));
    }

    #[test]
    fn should_parse_cascade_policy() {
        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("LIST_DELETE_POLICY", "cascade"),
        ])
        .unwrap();

        assert_eq!(config.list_delete_policy, ListDeletionPolicy::Cascade);
    }

    #[test]
    fn should_reject_unknown_delete_policy() {
        assert!(matches!(
            config_from(&[("STORE_BACKEND", "memory"), ("LIST_DELETE_POLICY", "never")]),
            Err(ConfigError::Invalid { name: "LIST_DELETE_POLICY", .. })
        ));
    }
}
