use chrono::DateTime;
use git2::{Repository as GitRepository, Sort};

use changelog::{ChangelogError, CommitMetadata, HistoryProvider};

use crate::error::{GitError, Result};

/// `HistoryProvider` backed by a local repository via git2. All
/// queries are read-only.
pub struct GitHistory {
    repo: GitRepository,
}

impl GitHistory {
    /// Discover and open the repository containing the current
    /// directory.
    ///
    /// # Errors
    /// Returns an error when no repository is found.
    pub fn open() -> Result<Self> {
        let repo = GitRepository::discover(".").map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {}", e))
        })?;
        Ok(Self { repo })
    }

    /// Open the repository at an explicit path.
    ///
    /// # Errors
    /// Returns an error when the path is not a repository.
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let repo = GitRepository::discover(path).map_err(|e| {
            GitError::RepositoryError(format!(
                "Failed to discover git repository at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { repo })
    }

    fn find_commit(&self, rev: &str) -> changelog::Result<git2::Commit<'_>> {
        let obj = self.repo.revparse_single(rev).map_err(query_failed)?;
        obj.peel_to_commit().map_err(query_failed)
    }
}

fn query_failed(e: git2::Error) -> ChangelogError {
    ChangelogError::History(e.message().to_string())
}

impl HistoryProvider for GitHistory {
    fn is_inside_work_tree(&self) -> bool {
        self.repo.workdir().is_some()
    }

    fn commits_between(&self, old: Option<&str>, new: &str) -> changelog::Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk().map_err(query_failed)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(query_failed)?;
        revwalk.push(self.find_commit(new)?.id()).map_err(query_failed)?;
        if let Some(old) = old {
            revwalk.hide(self.find_commit(old)?.id()).map_err(query_failed)?;
        }

        let mut hashes = Vec::new();
        for oid in revwalk {
            hashes.push(oid.map_err(query_failed)?.to_string());
        }
        Ok(hashes)
    }

    fn commit_metadata(&self, hash: &str) -> changelog::Result<CommitMetadata> {
        let commit = self.find_commit(hash)?;
        let author = commit.author();
        let when = author.when();
        // Author-local calendar date
        let seconds = when.seconds() + i64::from(when.offset_minutes()) * 60;
        let date = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| {
                ChangelogError::History(format!("commit {hash} has an out-of-range timestamp"))
            })?
            .format("%Y-%m-%d")
            .to_string();

        Ok(CommitMetadata {
            author: author.name().unwrap_or("Unknown").to_string(),
            email: author.email().unwrap_or("").to_string(),
            date,
            subject: commit.summary().unwrap_or("").to_string(),
        })
    }

    fn changed_files(&self, hash: &str) -> changelog::Result<Vec<String>> {
        let commit = self.find_commit(hash)?;
        let tree = commit.tree().map_err(query_failed)?;
        // First parent only; merge file lists are taken from the
        // mainline side, as git log does by default.
        let parent_tree = if commit.parent_count() > 0 {
            Some(
                commit
                    .parent(0)
                    .map_err(query_failed)?
                    .tree()
                    .map_err(query_failed)?,
            )
        } else {
            None
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .map_err(query_failed)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            files.push(path);
        }
        Ok(files)
    }

    fn resolve_unique(&self, prefix: &str) -> changelog::Result<String> {
        let obj = self
            .repo
            .revparse_single(prefix)
            .map_err(|_| ChangelogError::AmbiguousRevision(prefix.to_string()))?;
        let commit = obj
            .peel_to_commit()
            .map_err(|_| ChangelogError::AmbiguousRevision(prefix.to_string()))?;
        Ok(commit.id().to_string())
    }
}
