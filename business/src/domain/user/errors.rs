#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.email_empty")]
    EmailEmpty,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
