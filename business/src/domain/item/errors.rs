#[derive(Debug, thiserror::Error)]
pub enum ListItemError {
    #[error("list_item.name_empty")]
    NameEmpty,
    #[error("list_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
