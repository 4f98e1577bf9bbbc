use thiserror::Error;

/// Failure kinds raised by the assignment engine. All of them surface at the
/// point of violation and propagate unchanged; nothing is retried internally.
#[derive(Error, Debug)]
pub enum DomainError {
    /// An argument lacks a role the operation requires.
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    /// An advocate candidate also holds a disqualifying role.
    #[error("Role conflict: {0}")]
    RoleConflict(String),
    /// Structurally wrong input shape.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Record not found".to_string()),
            other => DomainError::Internal(format!("Database error: {}", other)),
        }
    }
}
