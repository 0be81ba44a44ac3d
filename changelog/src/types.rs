/// One commit as fetched from the history provider, owned by the
/// builder for the duration of a single generation run.
#[derive(Debug, Clone)]
pub struct Commit {
    /// Full hash, unique within the repository
    pub hash: String,
    pub author: String,
    pub email: String,
    /// `YYYY-MM-DD` (or a locale date when the provider supplies one)
    pub date: String,
    /// First line of the commit message
    pub subject: String,
    /// Changed paths, sorted lexicographically; duplicates pass through
    pub changed_files: Vec<String>,
}

/// The grouping key for consecutive changelog entries. Two commits share
/// a stanza iff author, email and date all equal the immediately
/// preceding stanza's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub author: String,
    pub email: String,
    pub date: String,
}

impl Stanza {
    #[must_use]
    pub fn new(
        author: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            email: email.into(),
            date: date.into(),
        }
    }
}
