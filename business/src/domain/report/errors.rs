#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report.rendering_failed")]
    Rendering(String),
    #[error("report.photo_unavailable")]
    PhotoUnavailable(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
