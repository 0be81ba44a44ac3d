use crate::builder::ChangelogBuilder;
use crate::config::Config;
use crate::error::{ChangelogError, Result};
use crate::merge::{FirstStanza, Merger};
use crate::provider::HistoryProvider;
use crate::revision;
use crate::types::Commit;

/// What a generation run did, for reporting by the caller.
#[derive(Debug)]
pub struct GenerationSummary {
    /// Number of entries written
    pub entries: usize,
    /// Whether new entries were merged into the previous top stanza
    pub merged: bool,
    /// Whether this was an initial import covering the full history
    pub initial: bool,
    /// The old-revision boundary that was used, if any
    pub old_rev: Option<String>,
}

/// Regenerate the changelog for the range `old_rev..new_rev`.
///
/// When `old_rev` is absent the boundary is inferred from the first
/// entry hash of the existing changelog and validated against the
/// provider; with no existing changelog the run is an initial import
/// over the full history.
///
/// # Errors
/// Any failed history query, an old revision that does not resolve to
/// a unique commit, and any file I/O failure are all fatal. The
/// previous changelog survives a mid-run abort as `<file>.gen`.
pub fn generate(
    provider: &dyn HistoryProvider,
    config: &Config,
    new_rev: &str,
    old_rev: Option<&str>,
) -> Result<GenerationSummary> {
    if !provider.is_inside_work_tree() {
        return Err(ChangelogError::NotInWorkTree);
    }

    let merger = Merger::prepare(&config.changelog_path)?;

    let old = match old_rev {
        Some(rev) => Some(rev.to_string()),
        None => match merger.previous() {
            Some(previous) => {
                let candidate = revision::infer_old_revision(previous)
                    .ok_or(ChangelogError::MissingOldRevision)?;
                let full = provider.resolve_unique(candidate)?;
                if config.verbose {
                    println!("Continuing from {candidate} ({full})");
                }
                Some(full)
            }
            None => None,
        },
    };

    let hashes = provider.commits_between(old.as_deref(), new_rev)?;
    if config.verbose {
        println!("{} commit(s) in range", hashes.len());
    }

    let mut commits = Vec::with_capacity(hashes.len());
    for hash in hashes {
        let meta = provider.commit_metadata(&hash)?;
        let mut files = provider.changed_files(&hash)?;
        files.sort();
        commits.push(Commit {
            hash,
            author: meta.author,
            email: meta.email,
            date: meta.date,
            subject: meta.subject,
            changed_files: files,
        });
    }

    let first = if config.preload_top_stanza {
        merger.previous().and_then(FirstStanza::capture)
    } else {
        None
    };

    let builder = ChangelogBuilder::new(config.clone());
    let generated = builder.generate(&commits, first.as_ref());

    let summary = GenerationSummary {
        entries: commits.len(),
        merged: generated.used_first,
        initial: old.is_none(),
        old_rev: old,
    };

    merger.finish(&generated.text, generated.used_first)?;
    Ok(summary)
}
