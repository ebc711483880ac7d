use std::path::PathBuf;

use clap::Parser;

/// Dockyard: restore a dock session into an in-memory panel engine, apply
/// a few operations, and print the resulting layout.
#[derive(Parser, Debug)]
#[command(name = "dockyard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `dockyard=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Session JSON to restore. Defaults to a built-in workbench layout.
    #[arg(short = 'l', long)]
    pub layout: Option<PathBuf>,

    /// Activate the widget with this id after restoring.
    #[arg(short = 'a', long)]
    pub activate: Option<String>,

    /// Close the widget with this id after restoring. Repeatable.
    #[arg(short = 'c', long)]
    pub close: Vec<String>,

    /// Write the final layout here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
