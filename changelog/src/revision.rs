use crate::utils::ENTRY_HASH_PATTERN;

/// Scan an existing changelog top to bottom for the first entry hash,
/// the candidate old-revision boundary for an incremental run. The
/// caller must still validate that the prefix resolves to a unique
/// commit.
#[must_use]
pub fn infer_old_revision(contents: &str) -> Option<&str> {
    for line in contents.lines() {
        if let Some(caps) = ENTRY_HASH_PATTERN.captures(line) {
            return Some(caps.get(1)?.as_str());
        }
    }
    None
}
