use thiserror::Error;

/// Git access error type that provides detailed context about the error
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl GitError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GitError::RepositoryError(msg) => format!("Repository error: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;
