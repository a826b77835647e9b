#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list.title_empty")]
    TitleEmpty,
    #[error("list.not_found")]
    NotFound,
    #[error("list.not_authenticated")]
    NotAuthenticated,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
