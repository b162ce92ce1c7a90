use domain::DomainError;
use repository::RepositoryError;
use thiserror::Error;

/// Outcome of a failed use case: either a domain-declared error or an
/// infrastructure fault the use-case layer does not interpret.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(DomainError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<DomainError> for UseCaseError {
    fn from(e: DomainError) -> Self {
        UseCaseError::Domain(e)
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Domain(e) => UseCaseError::Domain(e),
            other => UseCaseError::Repository(other),
        }
    }
}
