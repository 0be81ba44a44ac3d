mod cli;
mod error;
mod generate;
mod ui;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = generate::execute(cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
