use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Rejections a visitor can fix by resubmitting the form.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DomainError::ValidationError(_) | DomainError::Conflict(_))
    }

    /// The message without the variant prefix, suitable for showing to a visitor.
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::ValidationError(msg)
            | DomainError::Conflict(msg)
            | DomainError::Internal(msg) => msg,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
