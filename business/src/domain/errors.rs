/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// Transport or backend failure; carries the readable message surfaced to callers.
    #[error("repository.unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn unavailable(message: impl std::fmt::Display) -> Self {
        RepositoryError::Unavailable(message.to_string())
    }
}
