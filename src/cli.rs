//! Command-line interface for showcase.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Showcase - pagination and hangman from the terminal
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Pagination engine and hangman game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play hangman on stdin/stdout
    Hangman {
        /// Random-word endpoint (overrides config)
        #[arg(long)]
        word_url: Option<String>,

        /// Use the configured offline word list instead of the endpoint
        #[arg(long)]
        offline: bool,
    },

    /// Print one page of the lines of a file (or stdin)
    Paginate {
        /// Lines per page (overrides config)
        #[arg(short = 's', long)]
        page_size: Option<usize>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// File to read; stdin if omitted
        file: Option<PathBuf>,
    },
}
