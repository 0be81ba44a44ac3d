use chrono::Local;

use crate::config::Config;
use crate::formatter::{format_entry, stanza_header};
use crate::merge::FirstStanza;
use crate::types::{Commit, Stanza};

/// The text produced by one generation run.
#[derive(Debug)]
pub struct Generated {
    pub text: String,
    /// Whether the preloaded top stanza was spliced into the output
    pub used_first: bool,
}

/// Renders an ordered commit list (newest first) into changelog text.
pub struct ChangelogBuilder {
    config: Config,
    today: String,
}

impl ChangelogBuilder {
    #[must_use]
    pub fn new(config: Config) -> Self {
        // "Today" is fixed once per run so every date-overridden entry
        // lands in the same stanza even across midnight.
        let today = Local::now().format("%Y-%m-%d").to_string();
        Self::with_today(config, today)
    }

    #[must_use]
    pub fn with_today(config: Config, today: String) -> Self {
        Self { config, today }
    }

    /// Render `commits` into grouped stanzas.
    ///
    /// The stanza decision only ever compares against the immediately
    /// preceding stanza, so the same author and date can reappear
    /// non-adjacently as two stanzas. When `first` is supplied and the
    /// newest commit matches its stanza, the preloaded lines are
    /// emitted verbatim in place of a fresh header and `used_first` is
    /// reported back for the old-file splice.
    #[must_use]
    pub fn generate(&self, commits: &[Commit], first: Option<&FirstStanza>) -> Generated {
        let mut text = String::new();
        let mut last: Option<Stanza> = first.map(|f| f.stanza.clone());
        let mut used_first = false;

        for (i, commit) in commits.iter().enumerate() {
            let date = if self.config.use_local_date {
                self.today.clone()
            } else {
                commit.date.clone()
            };
            let stanza = Stanza::new(commit.author.clone(), commit.email.clone(), date);

            if last.as_ref() != Some(&stanza) {
                text.push_str(&stanza_header(&stanza));
            } else if i == 0 {
                if let Some(first) = first {
                    for line in &first.lines {
                        text.push_str(line);
                        text.push('\n');
                    }
                    used_first = true;
                }
            }
            last = Some(stanza);

            text.push_str(&format_entry(commit, &self.config));
        }

        Generated { text, used_first }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(hash: &str, author: &str, date: &str, subject: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            author: author.to_string(),
            email: format!("{}@example.org", author.to_lowercase()),
            date: date.to_string(),
            subject: subject.to_string(),
            changed_files: vec!["src/main.c".to_string()],
        }
    }

    fn builder() -> ChangelogBuilder {
        ChangelogBuilder::with_today(Config::default(), "2024-06-01".to_string())
    }

    fn header_count(text: &str) -> usize {
        text.lines()
            .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .count()
    }

    #[test]
    fn distinct_stanzas_get_one_header_each() {
        let commits = vec![
            commit("1111111111111111", "Alice", "2024-03-03", "Third"),
            commit("2222222222222222", "Bob", "2024-03-02", "Second"),
            commit("3333333333333333", "Carol", "2024-03-01", "First"),
        ];
        let generated = builder().generate(&commits, None);
        assert_eq!(header_count(&generated.text), 3);
        assert!(!generated.used_first);
    }

    #[test]
    fn consecutive_matching_commits_share_a_stanza() {
        let commits = vec![
            commit("1111111111111111", "Alice", "2024-03-02", "Second"),
            commit("2222222222222222", "Alice", "2024-03-02", "First"),
        ];
        let generated = builder().generate(&commits, None);
        assert_eq!(header_count(&generated.text), 1);
        let first = generated.text.find("11111111").unwrap();
        let second = generated.text.find("22222222").unwrap();
        assert!(first < second, "entries keep their original order");
    }

    #[test]
    fn same_author_reappearing_later_opens_a_new_stanza() {
        let commits = vec![
            commit("1111111111111111", "Alice", "2024-03-02", "Third"),
            commit("2222222222222222", "Bob", "2024-03-02", "Second"),
            commit("3333333333333333", "Alice", "2024-03-02", "First"),
        ];
        let generated = builder().generate(&commits, None);
        assert_eq!(header_count(&generated.text), 3);
    }

    #[test]
    fn date_override_groups_everything_under_today() {
        let config = Config {
            use_local_date: true,
            ..Config::default()
        };
        let builder = ChangelogBuilder::with_today(config, "2024-06-01".to_string());
        let commits = vec![
            commit("1111111111111111", "Alice", "2024-03-02", "Second"),
            commit("2222222222222222", "Alice", "2023-11-20", "First"),
        ];
        let generated = builder.generate(&commits, None);
        assert_eq!(header_count(&generated.text), 1);
        assert!(generated.text.starts_with("2024-06-01  Alice"));
    }

    #[test]
    fn preload_replaces_matching_first_header() {
        let previous = "2024-03-02  Alice  <alice@example.org>\n\
                        \n\
                        \t* 99999999: src/old.c: Earlier work\n";
        let first = FirstStanza::capture(previous).unwrap();
        let commits = vec![commit("1111111111111111", "Alice", "2024-03-02", "Now")];
        let generated = builder().generate(&commits, Some(&first));
        assert!(generated.used_first);
        assert_eq!(header_count(&generated.text), 1);
        let old = generated.text.find("99999999").unwrap();
        let new = generated.text.find("11111111").unwrap();
        assert!(old < new, "preloaded entries come before the new entry");
    }

    #[test]
    fn preload_of_trimmed_single_stanza_keeps_entries_separated() {
        // A fresh first run leaves no blank line after its last entry;
        // the merged output must still put one between the preloaded
        // entry and the new one.
        let previous = "2024-03-02  Alice  <alice@example.org>\n\
                        \n\
                        \t* 99999999: src/old.c: Earlier work";
        let first = FirstStanza::capture(previous).unwrap();
        let commits = vec![commit("1111111111111111", "Alice", "2024-03-02", "Now")];
        let generated = builder().generate(&commits, Some(&first));
        assert!(generated.used_first);
        assert!(
            generated
                .text
                .contains("\t* 99999999: src/old.c: Earlier work\n\n\t* 11111111:")
        );
    }

    #[test]
    fn preload_is_ignored_when_first_commit_differs() {
        let previous = "2024-03-01  Bob  <bob@example.org>\n\
                        \n\
                        \t* 99999999: src/old.c: Earlier work\n";
        let first = FirstStanza::capture(previous).unwrap();
        let commits = vec![commit("1111111111111111", "Alice", "2024-03-02", "Now")];
        let generated = builder().generate(&commits, Some(&first));
        assert!(!generated.used_first);
        assert!(!generated.text.contains("99999999"));
        assert!(generated.text.starts_with("2024-03-02  Alice"));
    }

    #[test]
    fn empty_commit_list_produces_no_text() {
        let generated = builder().generate(&[], None);
        assert!(generated.text.is_empty());
        assert!(!generated.used_first);
    }
}
