use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Stanza;
use crate::utils::STANZA_HEADER_PATTERN;

/// The first stanza of a previous changelog file, captured verbatim so
/// a new commit with a matching author and date can be merged into it
/// instead of opening a duplicate stanza.
#[derive(Debug, Clone)]
pub struct FirstStanza {
    pub stanza: Stanza,
    /// Header line plus every following line up to the next stanza header
    pub lines: Vec<String>,
}

impl FirstStanza {
    /// Capture the top stanza of `previous`. Returns `None` when the
    /// file is empty or its first line is not a stanza header.
    ///
    /// The buffer always ends with a blank line, so emitting it
    /// verbatim ahead of a new entry keeps the entries separated. A
    /// file written by a fresh run ends directly on its last entry
    /// line, so that blank is not guaranteed to be in the input.
    #[must_use]
    pub fn capture(previous: &str) -> Option<Self> {
        let mut lines = previous.lines();
        let header = lines.next()?;
        let caps = STANZA_HEADER_PATTERN.captures(header)?;
        let stanza = Stanza::new(&caps[2], &caps[3], &caps[1]);

        let mut buffer = vec![header.to_string()];
        for line in lines {
            if starts_with_digit(line) {
                break;
            }
            buffer.push(line.to_string());
        }
        if buffer.last().is_some_and(|line| !line.is_empty()) {
            buffer.push(String::new());
        }
        Some(Self {
            stanza,
            lines: buffer,
        })
    }
}

/// The portion of the old file to append after the generated text.
///
/// When the preload buffer was consumed the old top stanza has already
/// been emitted, so the first line is dropped unconditionally and
/// everything up to the next stanza header is skipped with it.
#[must_use]
pub fn splice_remainder(previous: &str, used_first: bool) -> String {
    let mut out = String::new();
    let mut skipping = used_first;
    for (i, line) in previous.lines().enumerate() {
        if skipping {
            if i == 0 || !starts_with_digit(line) {
                continue;
            }
            skipping = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Moves the previous changelog aside, then writes the new entries
/// followed by the non-overlapping remainder of the old file.
///
/// The rename happens before any generation work, so a crash mid-run
/// leaves the `.gen` backup intact for manual recovery.
pub struct Merger {
    path: PathBuf,
    gen_path: PathBuf,
    previous: Option<String>,
}

impl Merger {
    /// Rename an existing changelog to `<file>.gen` and remember its
    /// contents. A missing file means this is the very first run.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or renamed.
    pub fn prepare(path: &Path) -> Result<Self> {
        let gen_path = PathBuf::from(format!("{}.gen", path.display()));
        let previous = match fs::read_to_string(path) {
            Ok(contents) => {
                fs::rename(path, &gen_path)?;
                Some(contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            gen_path,
            previous,
        })
    }

    /// Contents of the previous changelog, if one existed.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Write the final changelog and delete the `.gen` backup. On a
    /// fresh first run the single trailing blank line left by entry
    /// generation is trimmed instead.
    ///
    /// # Errors
    /// Returns an error if the changelog cannot be written or the
    /// backup cannot be removed.
    pub fn finish(self, generated: &str, used_first: bool) -> Result<()> {
        let mut text = generated.to_string();
        match &self.previous {
            Some(previous) => text.push_str(&splice_remainder(previous, used_first)),
            None => {
                if text.ends_with("\n\n") {
                    text.pop();
                }
            }
        }
        fs::write(&self.path, &text)?;
        if self.previous.is_some() {
            fs::remove_file(&self.gen_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PREVIOUS: &str = "2024-03-02  Alice Example  <alice@example.org>\n\
                            \n\
                            \t* 22222222: src/lib.rs: Tweak feature\n\
                            \n\
                            2024-03-01  Bob Builder  <bob@example.org>\n\
                            \n\
                            \t* 33333333: src/bug.rs: Fix bug\n";

    #[test]
    fn capture_stops_at_next_stanza_header() {
        let first = FirstStanza::capture(PREVIOUS).unwrap();
        assert_eq!(
            first.stanza,
            Stanza::new("Alice Example", "alice@example.org", "2024-03-02")
        );
        assert_eq!(
            first.lines,
            vec![
                "2024-03-02  Alice Example  <alice@example.org>",
                "",
                "\t* 22222222: src/lib.rs: Tweak feature",
                "",
            ]
        );
    }

    #[test]
    fn capture_of_single_stanza_takes_whole_file() {
        let single = "2024-03-01  Bob Builder  <bob@example.org>\n\
                      \n\
                      \t* 33333333: src/bug.rs: Fix bug\n";
        let first = FirstStanza::capture(single).unwrap();
        assert_eq!(
            first.lines,
            vec![
                "2024-03-01  Bob Builder  <bob@example.org>",
                "",
                "\t* 33333333: src/bug.rs: Fix bug",
                "",
            ]
        );
    }

    #[test]
    fn capture_terminates_a_trailing_entry_with_a_blank_line() {
        // A fresh first run trims the trailing blank line, so the top
        // stanza of such a file ends directly on its entry line.
        let trimmed = "2024-03-01  Bob Builder  <bob@example.org>\n\
                       \n\
                       \t* 33333333: src/bug.rs: Fix bug";
        let first = FirstStanza::capture(trimmed).unwrap();
        assert_eq!(first.lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn capture_rejects_non_header_first_line() {
        assert!(FirstStanza::capture("").is_none());
        assert!(FirstStanza::capture("\t* 33333333: src/bug.rs: Fix bug\n").is_none());
    }

    #[test]
    fn splice_copies_everything_when_preload_unused() {
        assert_eq!(splice_remainder(PREVIOUS, false), PREVIOUS);
    }

    #[test]
    fn splice_drops_first_stanza_when_preload_used() {
        assert_eq!(
            splice_remainder(PREVIOUS, true),
            "2024-03-01  Bob Builder  <bob@example.org>\n\
             \n\
             \t* 33333333: src/bug.rs: Fix bug\n"
        );
    }

    #[test]
    fn splice_of_single_stanza_with_preload_is_empty() {
        let single = "2024-03-01  Bob Builder  <bob@example.org>\n\
                      \n\
                      \t* 33333333: src/bug.rs: Fix bug\n";
        assert_eq!(splice_remainder(single, true), "");
    }

    #[test]
    fn fresh_run_trims_one_trailing_blank_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ChangeLog");
        let merger = Merger::prepare(&path).unwrap();
        assert!(merger.previous().is_none());
        merger.finish("2024-03-01  Bob  <bob@example.org>\n\n\t* 33333333: a: B\n\n", false).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("\t* 33333333: a: B\n"));
        assert!(!path.with_extension("gen").exists());
    }

    #[test]
    fn move_run_appends_remainder_and_removes_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ChangeLog");
        fs::write(&path, PREVIOUS).unwrap();

        let merger = Merger::prepare(&path).unwrap();
        let gen_path = dir.path().join("ChangeLog.gen");
        assert!(gen_path.exists(), "old file is renamed aside first");
        assert_eq!(merger.previous(), Some(PREVIOUS));

        let fresh = "2024-03-03  Carol  <carol@example.org>\n\n\t* 11111111: x: New\n\n";
        merger.finish(fresh, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{fresh}{PREVIOUS}"));
        assert!(!gen_path.exists(), "backup is deleted after appending");
    }
}
