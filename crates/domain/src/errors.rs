use thiserror::Error;

/// Errors the domain declares and the view layer translates into statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} does not exist!")]
    EntityNotFound { entity: &'static str, key: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        DomainError::EntityNotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::EntityNotFound { .. })
    }
}
