use once_cell::sync::Lazy;
use regex::Regex;

/// X-Seq patch-series tags recognized at the start of a commit subject:
/// `unposted:`, `users/<n>:`, or a bare `<n>:`.
pub static XSEQ_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(unposted|users/\d+|\d+):$").expect("Failed to compile X-Seq regex")
});

/// The hash field of a rendered entry, used to find the newest commit
/// recorded in an existing changelog.
pub static ENTRY_HASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t\* ([0-9a-f]+):").expect("Failed to compile entry hash regex"));

/// A stanza header line: `DATE  AUTHOR  <EMAIL>`, fields joined by two spaces.
pub static STANZA_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)  (.+?)  <(.*)>$").expect("Failed to compile header regex"));
