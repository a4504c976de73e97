/// Failures reported by the document store adapters.
/// Variants display as code-style identifiers, never as user-facing text.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique key (product code, user email) is already taken.
    #[error("repository.duplicated")]
    Duplicated,
    /// The stored revision no longer matches the one the caller read.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error")]
    DatabaseError,
}
