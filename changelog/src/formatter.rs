use crate::config::Config;
use crate::types::{Commit, Stanza};
use crate::utils::XSEQ_PATTERN;

/// Render a stanza header line followed by its separating blank line.
#[must_use]
pub fn stanza_header(stanza: &Stanza) -> String {
    format!(
        "{}  {}  <{}>\n\n",
        stanza.date, stanza.author, stanza.email
    )
}

/// Render one commit as a changelog entry, terminated by a blank line.
///
/// The file list and the subject words are wrapped as one continuous
/// line-fill pass: the running length left over from the file list
/// seeds the subject wrap.
#[must_use]
pub fn format_entry(commit: &Commit, config: &Config) -> String {
    let (xseq, subject_words) = split_xseq(&commit.subject, config);
    let field = hash_field(&commit.hash, xseq, config);

    let mut out = String::from("\t");
    out.push_str(&field);

    let mut len = field.len() + config.tab_width;
    let files: Vec<&str> = commit.changed_files.iter().map(String::as_str).collect();
    len = wrap_words(&mut out, &files, ",", ":", len, config);
    wrap_words(&mut out, &subject_words, "", "", len, config);

    out.push_str("\n\n");
    out
}

/// Extract an X-Seq tag from the front of the subject when the feature
/// is enabled. Returns the tag (without its colon) and the remaining
/// subject words.
fn split_xseq<'a>(subject: &'a str, config: &Config) -> (Option<&'a str>, Vec<&'a str>) {
    let mut words: Vec<&str> = subject.split_whitespace().collect();
    if config.use_xseq_prefix {
        if let Some(&first) = words.first() {
            if XSEQ_PATTERN.is_match(first) {
                words.remove(0);
                return (Some(&first[..first.len() - 1]), words);
            }
        }
    }
    (None, words)
}

/// The leading `* ...` field of an entry. Truncated hash prefixes are
/// not re-validated for uniqueness.
fn hash_field(hash: &str, xseq: Option<&str>, config: &Config) -> String {
    let prefix = &hash[..config.hash_length.min(hash.len())];
    match (config.disable_hash, xseq) {
        (false, Some(tag)) => format!("* {tag}, {prefix}:"),
        (false, None) => format!("* {prefix}:"),
        (true, Some(tag)) => format!("* {tag}:"),
        (true, None) => "*".to_string(),
    }
}

/// Greedy line-fill over `words`. All but the last word carry
/// `separator`, the last carries `terminator`; the suffix counts toward
/// the word's length. A word that would push the running length past
/// `line_length` opens a tab-prefixed continuation line instead.
/// Returns the running length after the final word.
fn wrap_words(
    out: &mut String,
    words: &[&str],
    separator: &str,
    terminator: &str,
    mut len: usize,
    config: &Config,
) -> usize {
    let last = words.len().saturating_sub(1);
    for (i, word) in words.iter().enumerate() {
        let suffix = if i == last { terminator } else { separator };
        let rendered = format!("{word}{suffix}");
        if len + 1 + rendered.len() > config.line_length {
            out.push_str("\n\t");
            out.push_str(&rendered);
            len = config.tab_width + rendered.len();
        } else {
            out.push(' ');
            out.push_str(&rendered);
            len += 1 + rendered.len();
        }
    }
    len
}
