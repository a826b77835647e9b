use super::error::ConfigError;

/// Identity provider project whose ID tokens are accepted.
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id = std::env::var("FIREBASE_PROJECT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::Missing("FIREBASE_PROJECT_ID"))?;
        Ok(Self { project_id })
    }
}
