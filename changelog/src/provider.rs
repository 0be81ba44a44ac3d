use crate::error::Result;

/// Per-commit metadata as returned by the history provider.
#[derive(Debug, Clone)]
pub struct CommitMetadata {
    pub author: String,
    pub email: String,
    /// Author date, `YYYY-MM-DD`
    pub date: String,
    pub subject: String,
}

/// The revision-history queries the generation run depends on.
///
/// Implementations may wrap a git library, shell out to a command-line
/// tool or serve fixtures from memory; every call is a single attempt
/// with no retry, and any failure aborts the whole run.
pub trait HistoryProvider {
    /// Whether the current directory belongs to a work tree.
    /// Generation refuses to run when it does not.
    fn is_inside_work_tree(&self) -> bool;

    /// Full hashes of the commits strictly after `old` up to and
    /// including `new`, newest first. `None` for `old` means the full
    /// history up to `new`.
    fn commits_between(&self, old: Option<&str>, new: &str) -> Result<Vec<String>>;

    fn commit_metadata(&self, hash: &str) -> Result<CommitMetadata>;

    /// Paths touched by the commit, in the provider's own order; the
    /// core sorts them before rendering.
    fn changed_files(&self, hash: &str) -> Result<Vec<String>>;

    /// Resolve a hash prefix to the full hash of exactly one existing
    /// commit. Ambiguity and absence are both errors.
    fn resolve_unique(&self, prefix: &str) -> Result<String>;
}
