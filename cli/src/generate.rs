use std::path::Path;

use changelog::Config;
use git::GitHistory;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::ui;

const DEFAULT_CONFIG_FILE: &str = ".changelogrc";

pub fn execute(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;

    let history = GitHistory::open()
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;

    if config.verbose {
        println!(
            "Generating {} up to '{}'",
            config.changelog_path.display(),
            cli.new_rev
        );
    }

    let summary = changelog::generate(&history, &config, &cli.new_rev, cli.old_rev.as_deref())?;

    if summary.initial {
        ui::info_message("No previous changelog found, importing full history");
    }
    if summary.merged {
        ui::info_message("Merged new entries into the existing top stanza");
    }
    ui::success_message(&format!(
        "{} updated with {} entries",
        config.changelog_path.display(),
        summary.entries
    ));

    Ok(())
}

/// Defaults, overlaid by the config file, overlaid by command line flags.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::default();

    match &cli.config {
        // An explicitly named file must be readable
        Some(path) => config.apply_file(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                config.apply_file(default)?;
            }
        }
    }

    if let Some(path) = &cli.change_log {
        config.changelog_path = path.clone();
    }
    if let Some(n) = cli.hash_length {
        config.hash_length = n;
    }
    if let Some(n) = cli.line_length {
        config.line_length = n;
    }
    if let Some(n) = cli.tab_width {
        config.tab_width = n;
    }
    if cli.disable_hash {
        config.disable_hash = true;
    }
    if cli.pre_load {
        config.preload_top_stanza = true;
    }
    if cli.local_time {
        config.use_local_date = true;
    }
    if cli.use_x_seq {
        config.use_xseq_prefix = true;
    }
    config.verbose = cli.verbose;

    Ok(config)
}
