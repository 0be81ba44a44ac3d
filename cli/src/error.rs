use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Git error: {0}")]
    Git(#[from] git::GitError),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Changelog(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
