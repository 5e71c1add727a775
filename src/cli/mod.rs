//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use clap::{Parser, Subcommand};

pub mod commands;

/// Turn a GitHub repo into a pastebin
#[derive(Parser, Debug)]
#[command(name = "ghbin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a file or clipboard content to GitHub
    #[command(visible_alias = "u")]
    Upload(commands::upload::UploadArgs),

    /// Download a file or directory from GitHub
    #[command(visible_alias = "dl")]
    Download(commands::download::DownloadArgs),
}
