use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Configuration options for changelog formatting and behavior.
/// Loaded once before generation and immutable during a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the changelog file to generate
    pub changelog_path: PathBuf,
    /// Truncation length for commit hashes in entries
    pub hash_length: usize,
    /// Wrap width for entry lines
    pub line_length: usize,
    /// Display width of the leading tab, used in wrap arithmetic
    pub tab_width: usize,
    /// Omit the commit hash field from entries
    pub disable_hash: bool,
    /// Merge new entries into the existing top stanza when author and date match
    pub preload_top_stanza: bool,
    /// Date entries with today's date instead of the commit date
    pub use_local_date: bool,
    /// Recognize X-Seq patch-series prefixes in commit subjects
    pub use_xseq_prefix: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelog_path: PathBuf::from("ChangeLog"),
            hash_length: 8,
            line_length: 74,
            tab_width: 8,
            disable_hash: false,
            preload_top_stanza: false,
            use_local_date: false,
            use_xseq_prefix: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Apply option values from a `key = value` config file on top of
    /// the current settings.
    ///
    /// # Errors
    /// Returns `ChangelogError::Config` if the file cannot be read.
    /// Unknown keys and malformed lines are warnings, not errors.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .map_err(|e| ChangelogError::Config(format!("{}: {e}", path.display())))?;
        self.apply_str(&text);
        Ok(())
    }

    /// Apply option lines from an already-read config file.
    pub fn apply_str(&mut self, text: &str) {
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                eprintln!("Warning: skipping malformed config line {}", lineno + 1);
                continue;
            };
            self.apply_option(key.trim(), value.trim());
        }
    }

    fn apply_option(&mut self, key: &str, value: &str) {
        match key {
            "change-log" => self.changelog_path = PathBuf::from(value),
            "hash-length" => Self::set_number(&mut self.hash_length, key, value),
            "line-length" => Self::set_number(&mut self.line_length, key, value),
            "tab-width" => Self::set_number(&mut self.tab_width, key, value),
            "disable-hash" => Self::set_flag(&mut self.disable_hash, key, value),
            "pre-load" => Self::set_flag(&mut self.preload_top_stanza, key, value),
            "local-time" => Self::set_flag(&mut self.use_local_date, key, value),
            "use-x-seq" => Self::set_flag(&mut self.use_xseq_prefix, key, value),
            _ => eprintln!("Warning: unknown config key '{key}'"),
        }
    }

    fn set_number(slot: &mut usize, key: &str, value: &str) {
        match value.parse() {
            Ok(n) => *slot = n,
            Err(_) => eprintln!("Warning: invalid value '{value}' for '{key}'"),
        }
    }

    fn set_flag(slot: &mut bool, key: &str, value: &str) {
        match value {
            "true" | "yes" | "on" | "1" => *slot = true,
            "false" | "no" | "off" | "0" => *slot = false,
            _ => eprintln!("Warning: invalid value '{value}' for '{key}'"),
        }
    }
}
