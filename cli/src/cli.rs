use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitclog")]
#[command(
    author,
    version,
    about = "Generate a classic ChangeLog file from git history"
)]
pub struct Cli {
    /// Newest revision to include
    #[clap(default_value = "HEAD")]
    pub new_rev: String,

    /// Oldest revision boundary, exclusive (auto-detected from the
    /// existing ChangeLog when omitted)
    pub old_rev: Option<String>,

    /// Path of the changelog file to generate
    #[clap(short = 'f', long = "change-log")]
    pub change_log: Option<PathBuf>,

    /// Omit the commit hash field from entries
    #[clap(long = "disable-hash", default_value_t = false)]
    pub disable_hash: bool,

    /// Truncation length for commit hashes
    #[clap(long = "hash-length")]
    pub hash_length: Option<usize>,

    /// Wrap width for entry lines
    #[clap(long = "line-length")]
    pub line_length: Option<usize>,

    /// Date entries with today's date instead of the commit date
    #[clap(long = "local-time", default_value_t = false)]
    pub local_time: bool,

    /// Merge new entries into the existing top stanza when author and date match
    #[clap(long = "pre-load", default_value_t = false)]
    pub pre_load: bool,

    /// Tab display width used in wrap arithmetic
    #[clap(long = "tab-width")]
    pub tab_width: Option<usize>,

    /// Recognize X-Seq patch-series prefixes in commit subjects
    #[clap(long = "use-x-seq", default_value_t = false)]
    pub use_x_seq: bool,

    /// Configuration file with default option values
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
