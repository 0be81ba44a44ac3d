//! Classic changelog generation from version-control history.
//!
//! Converts an ordered commit range into tab-wrapped, hash-prefixed
//! changelog stanzas and splices the result with a previously
//! generated file. History access goes through the [`HistoryProvider`]
//! trait so the core stays independent of any particular git binding.

pub mod builder;
pub mod config;
pub mod error;
pub mod formatter;
pub mod generation;
pub mod merge;
pub mod provider;
pub mod revision;
pub mod types;
pub mod utils;

pub use builder::{ChangelogBuilder, Generated};
pub use config::Config;
pub use error::{ChangelogError, Result};
pub use generation::{GenerationSummary, generate};
pub use merge::{FirstStanza, Merger};
pub use provider::{CommitMetadata, HistoryProvider};
pub use types::{Commit, Stanza};
