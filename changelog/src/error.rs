use thiserror::Error;

/// Errors that can occur while generating a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to read config file: {0}")]
    Config(String),

    #[error("History query failed: {0}")]
    History(String),

    #[error("Cannot resolve '{0}' to a unique commit")]
    AmbiguousRevision(String),

    #[error("No entry hash found in the existing changelog")]
    MissingOldRevision,

    #[error("Not inside a git work tree")]
    NotInWorkTree,
}

impl ChangelogError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::Config(msg) => format!("Config file error: {msg}"),
            Self::History(msg) => format!("History query failed: {msg}"),
            Self::AmbiguousRevision(rev) => {
                format!("'{rev}' does not resolve to a unique commit")
            }
            Self::MissingOldRevision => {
                "Could not find an entry hash in the existing changelog to continue from"
                    .to_string()
            }
            Self::NotInWorkTree => "This command must be run inside a git work tree".to_string(),
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
