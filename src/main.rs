//! Showcase - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use showcase::showcase_pagination::Paginator;
use showcase::{play, render_page, HangmanSession, HttpWordSource, ShowcaseConfig, StaticWordSource, WordSource};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ShowcaseConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Hangman { word_url, offline } => run_hangman(config, word_url, offline).await,
        Command::Paginate { page_size, page, file } => run_paginate(config, page_size, page, file).await,
    }
}

/// Play hangman interactively
#[instrument(skip(config))]
async fn run_hangman(mut config: ShowcaseConfig, word_url: Option<String>, offline: bool) -> Result<()> {
    if let Some(url) = word_url {
        config.set_word_url(url);
    }

    let source: Arc<dyn WordSource> = if offline {
        info!("Playing offline");
        Arc::new(StaticWordSource::new(config.offline_words())?)
    } else {
        info!(word_url = %config.word_url(), "Playing with remote words");
        Arc::new(HttpWordSource::new(config.word_url(), config.fetch_timeout())?)
    };

    let session = HangmanSession::new(source).with_fetch_timeout(config.fetch_timeout());
    play(&session, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Print one page of a file's lines
#[instrument(skip(config))]
async fn run_paginate(
    config: ShowcaseConfig,
    page_size: Option<usize>,
    page: usize,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match &file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };
    let lines: Vec<&str> = text.lines().collect();

    let mut pager = Paginator::new(&lines, page_size.unwrap_or(*config.page_size()))?;
    if page == 0 {
        bail!("Pages are numbered from 1");
    }
    if !lines.is_empty() {
        pager.go_to(page - 1)?;
    }

    print!("{}", render_page(&pager));
    Ok(())
}
