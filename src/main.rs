use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use rand::rngs::OsRng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use roshambo::{
    GameConfig, MoveSet, Outcome, Prompt, RoundResult, Session, SessionEvent,
};

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(about = "N-way rock-paper-scissors against a provably fair opponent")]
#[command(version)]
struct Cli {
    /// Move labels in circular order: an odd number of unique labels,
    /// at least three (e.g. rock paper scissors)
    #[arg(required = true, num_args = 3..)]
    moves: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let moves = MoveSet::new(cli.moves).context("invalid move list")?;
    let session = Session::new(moves, config.clone(), OsRng)?;

    run_repl(session, &config)
}

fn run_repl(mut session: Session<OsRng>, config: &GameConfig) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        let _ = editor.load_history(history);
    }

    display_welcome(config);

    loop {
        // Scope the prompt borrow so the session can be driven below.
        match session.prompt() {
            Some(prompt) => display_prompt(&prompt, config),
            None => break,
        }

        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        match session.handle_line(&line)? {
            SessionEvent::Help { matrix } => display_matrix(session.move_set(), &matrix),
            SessionEvent::Resolved(result) => display_result(&result),
            SessionEvent::InvalidInput { .. } => {
                eprintln!("{}", "Invalid move!".red());
            }
            SessionEvent::Exited => break,
        }
    }

    if let Some(history) = &config.history_file {
        let _ = editor.save_history(history);
    }

    println!("Goodbye!");
    Ok(())
}

fn display_welcome(config: &GameConfig) {
    println!("{}", "Welcome to roshambo!".bright_blue().bold());
    println!(
        "{}",
        "The opponent commits to its move before you choose and reveals the key afterwards."
            .cyan()
    );
    println!(
        "{}",
        format!(
            "Pick a move by number, '{}' for the outcome table, '{}' to quit",
            config.help_token, config.quit_token
        )
        .dimmed()
    );
    println!();
}

fn display_prompt(prompt: &Prompt<'_>, config: &GameConfig) {
    println!("HMAC: {}", prompt.digest.dimmed());
    println!("Available moves:");
    for (i, mv) in prompt.moves.iter().enumerate() {
        println!("{} - {}", i + 1, mv);
    }
    println!("{} - exit", config.quit_token);
    println!("{} - help", config.help_token);
}

fn display_result(result: &RoundResult) {
    println!("Your move: {}", result.human_move);
    println!("Opponent move: {}", result.opponent_move);
    let verdict = match result.outcome {
        Outcome::Win => "You win!".green().bold(),
        Outcome::Lose => "You lose!".red().bold(),
        Outcome::Draw => "Draw!".yellow().bold(),
    };
    println!("{verdict}");
    println!("HMAC key: {}", result.revealed_key.dimmed());
    println!();
}

/// Render the pairwise outcome table; each cell is the row move's result
/// against the column move
fn display_matrix(moves: &MoveSet, matrix: &[Vec<Outcome>]) {
    let corner = "you \\ opponent";
    let label_width = moves
        .iter()
        .map(|mv| mv.as_str().len())
        .max()
        .unwrap_or(0)
        .max(corner.len());
    let cell_width = moves
        .iter()
        .map(|mv| mv.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Draw".len());

    // Pad before coloring: ANSI escapes would otherwise break alignment.
    print!("{}", format!("{corner:<label_width$}").dimmed());
    for mv in moves {
        print!(" | {:<cell_width$}", mv.as_str());
    }
    println!();

    for (r, row) in matrix.iter().enumerate() {
        let label = moves.get(r).map(|m| m.as_str()).unwrap_or("?");
        print!("{label:<label_width$}");
        for outcome in row {
            let cell = format!("{outcome:<cell_width$}");
            let cell = match outcome {
                Outcome::Win => cell.green(),
                Outcome::Lose => cell.red(),
                Outcome::Draw => cell.yellow(),
            };
            print!(" | {cell}");
        }
        println!();
    }
    println!();
}
