//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use super::round::{HintResult, Round, describe};
use crate::config::Settings;
use crate::core::Letter;
use crate::engine::calendar::today;
use crate::engine::{EndlessPool, GuessOutcome};
use crate::output::{print_board, print_game_summary, print_stats, print_stored_result};
use crate::storage::{JsonFileStore, ResultStore, StatsStore, StoredStats};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Hint,
    Share,
    Letters(Vec<Letter>),
    Invalid(char),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "exit" | ":q" => return Input::Quit,
        "?" | "ipucu" | "hint" => return Input::Hint,
        "!" | "share" | "paylaş" => return Input::Share,
        _ => {}
    }

    let mut letters = Vec::new();
    for c in line.chars().filter(|c| !c.is_whitespace()) {
        match Letter::parse(c) {
            Some(letter) => letters.push(letter),
            None => return Input::Invalid(c),
        }
    }
    Input::Letters(letters)
}

/// How a round ended
enum RoundEnd {
    Finished,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Plays today's puzzle, or endless puzzles from `endless` until the player
/// stops.
///
/// # Errors
///
/// Returns an error if reading input fails, the catalog cannot be loaded, or
/// the result store is unusable.
pub fn run_simple(settings: &Settings, endless: Option<EndlessPool>) -> Result<()> {
    let mut store = settings.open_store()?;
    let catalog = settings.daily_catalog()?;
    let tracker = settings.tracker();
    let mut rng = rand::rng();
    let date = today();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    🔺 Piramit - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Every letter hides behind a number. Guess letters to open the boxes.");
    println!("Six rows, one shared pool of 30 lives.\n");
    println!("  - Type a letter (or several) and press Enter");
    println!("  - '?' uses a hint (3 per game), '!' prints share text");
    println!("  - 'quit' to exit\n");

    if endless.is_none()
        && let Some(result) = store.read_result(date)?
    {
        print_stored_result(&result);
        print_stats(&stats_or_default(&store));
        tracker.end_session();
        return Ok(());
    }

    loop {
        let mut round = match endless {
            Some(pool) => Round::endless(pool, &mut rng, date, &tracker),
            None => Round::daily(&catalog, date, &tracker),
        };

        match play_round(&mut round, &mut rng)? {
            RoundEnd::Quit => break,
            RoundEnd::Finished => {}
        }

        print_board(round.state());
        print_game_summary(round.state());
        println!("\n{}\n", round.share());

        if round.is_daily() {
            if let Some(stats) = round.record(&mut store)? {
                print_stats(&stats);
            }
            break;
        }

        let answer = get_user_input("Play again? (yes/no)")?.map(|s| s.to_lowercase());
        match answer.as_deref() {
            Some("yes" | "y" | "evet" | "e") => println!("\n🔄 New pyramid!\n"),
            _ => break,
        }
    }

    println!("\n👋 Görüşürüz!\n");
    tracker.end_session();
    Ok(())
}

fn play_round<R: rand::Rng>(round: &mut Round<'_>, rng: &mut R) -> Result<RoundEnd> {
    while !round.state().is_complete() {
        print_board(round.state());
        println!(
            "  Hints: {}",
            "💡".repeat(round.hints_remaining() as usize)
        );

        let Some(line) = get_user_input("\nHarf")? else {
            return Ok(RoundEnd::Quit);
        };

        match parse_input(&line) {
            Input::Quit => return Ok(RoundEnd::Quit),
            Input::Share => println!("\n{}\n", round.share()),
            Input::Invalid(c) => {
                println!("{}", format!("❌ '{c}' is not a Turkish letter").red());
            }
            Input::Hint => match round.hint(rng) {
                HintResult::NoneLeft => println!("{}", "No hints left".yellow()),
                HintResult::NothingToReveal => {
                    println!("{}", "Nothing left to reveal on this row".yellow());
                }
                HintResult::Used { letter, outcome } => {
                    println!("💡 Hint: {}", letter.to_string().bright_yellow().bold());
                    print_outcome(letter, &outcome);
                }
            },
            Input::Letters(letters) => {
                for letter in letters {
                    let outcome = round.guess(letter);
                    print_outcome(letter, &outcome);
                    if outcome.ends_game() {
                        break;
                    }
                }
            }
        }
    }
    Ok(RoundEnd::Finished)
}

fn print_outcome(letter: Letter, outcome: &GuessOutcome) {
    let text = describe(letter, outcome);
    let styled = match outcome {
        GuessOutcome::Correct { .. } => text.green(),
        GuessOutcome::RowComplete { .. } | GuessOutcome::GameComplete { .. } => {
            text.bright_green().bold()
        }
        GuessOutcome::Wrong { .. } => text.red(),
        GuessOutcome::GameOverNoLives { .. } => text.red().bold(),
        GuessOutcome::None | GuessOutcome::AlreadyGuessed => text.yellow(),
    };
    println!("{styled}");
}

/// Stats for display; a broken stats file should not end the session
fn stats_or_default(store: &JsonFileStore) -> StoredStats {
    store.read_stats().unwrap_or_else(|e| {
        warn!(error = %e, "could not read stats");
        StoredStats::default()
    })
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::parse(c).unwrap()).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" ? "), Input::Hint);
        assert_eq!(parse_input("HINT"), Input::Hint);
        assert_eq!(parse_input("!"), Input::Share);
    }

    #[test]
    fn parses_turkish_letters() {
        assert_eq!(parse_input("i"), Input::Letters(letters("İ")));
        assert_eq!(parse_input("ı"), Input::Letters(letters("I")));
        assert_eq!(parse_input("ş ğ"), Input::Letters(letters("ŞĞ")));
    }

    #[test]
    fn rejects_letters_outside_alphabet() {
        assert_eq!(parse_input("aqb"), Input::Invalid('q'));
        assert_eq!(parse_input("7"), Input::Invalid('7'));
    }

    #[test]
    fn empty_line_guesses_nothing() {
        assert_eq!(parse_input(""), Input::Letters(Vec::new()));
    }
}
