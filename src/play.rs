//! Line-oriented hangman game loop.

use crate::session::HangmanSession;
use anyhow::Result;
use showcase_hangman::{Guess, GuessError, HangmanView, Status, MAX_WRONG_GUESSES};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

const HELP: &str = "Type a letter to guess, 'new' for a new word, 'restart' to clear, 'quit' to exit.";

/// Command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess a letter.
    Guess(Guess),
    /// Clear the round and fetch a new word.
    New,
    /// Clear the round without fetching.
    Restart,
    /// Retry a failed word request.
    Retry,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, GuessError> {
        match line.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Command::New),
            "restart" => Ok(Command::Restart),
            "retry" => Ok(Command::Retry),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Guess),
        }
    }
}

/// Renders the game state as a few lines of text.
pub fn render(view: &HangmanView) -> String {
    match view.status {
        Status::Idle => "No word yet. Type 'new' to start.".to_string(),
        Status::Loading => "Fetching a word...".to_string(),
        Status::Error => "Could not fetch a word. Type 'retry' to try again.".to_string(),
        Status::Playing | Status::Won | Status::Lost => {
            let masked = view.masked_word.as_deref().unwrap_or_default();
            let misses: String = view.wrong_letters.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
            let mut out = format!(
                "Word: {}\nMisses: [{}] {}/{}",
                masked,
                misses,
                view.wrong_letters.len(),
                MAX_WRONG_GUESSES
            );
            match view.status {
                Status::Won => out.push_str("\nYou won! Type 'new' to play again."),
                Status::Lost => {
                    let word = view.word.as_deref().unwrap_or_default();
                    out.push_str(&format!("\nYou lost. The word was '{}'. Type 'new' to play again.", word));
                }
                _ => {}
            }
            out
        }
    }
}

/// Runs the game loop until `quit` or end of input.
#[instrument(skip_all)]
pub async fn play<R, W>(session: &HangmanSession, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    session.fetch_word().await;
    write_line(&mut output, HELP).await?;
    write_line(&mut output, &render(&session.view())).await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                write_line(&mut output, &e.to_string()).await?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Help => {
                write_line(&mut output, HELP).await?;
                continue;
            }
            Command::New => {
                session.new_round().await;
            }
            Command::Retry => {
                session.fetch_word().await;
            }
            Command::Restart => session.restart(),
            Command::Guess(guess) => {
                if let Err(e) = session.guess_letter(guess) {
                    write_line(&mut output, &e.to_string()).await?;
                }
            }
        }
        write_line(&mut output, &render(&session.view())).await?;
    }

    output.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
