//! Display functions for command results

use super::formatters::{box_label, lives_bar, row_indent, share_text_from_scores};
use crate::commands::{BUCKET_COUNT, BUCKET_WIDTH, RevealReport, SimulationResult};
use crate::engine::{GameState, MAX_SCORE, RevealKind, RowStatus};
use crate::storage::{StoredResult, StoredStats};
use colored::Colorize;

/// Width of one box on the board, including spacing
const CELL_WIDTH: usize = 5;

/// Print the pyramid with numbers for hidden boxes and letters for revealed ones
pub fn print_board(state: &GameState) {
    let title = if state.mode_label().is_empty() {
        format!("Piramit #{}", state.day_number())
    } else {
        state.mode_label().to_string()
    };
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for (i, row) in state.rows().iter().enumerate() {
        let mut line = " ".repeat(row_indent(i, CELL_WIDTH));
        for letter_box in row.boxes() {
            let label = format!("[{:^3}]", box_label(letter_box));
            let styled = match (letter_box.revealed, letter_box.reveal) {
                (true, RevealKind::Fail) => label.red().bold(),
                (true, _) => label.bright_green().bold(),
                (false, _) if row.status() == RowStatus::Active => label.bright_white(),
                (false, _) => label.bright_black(),
            };
            line.push_str(&styled.to_string());
        }
        let marker = match row.status() {
            RowStatus::Active => " ◀".yellow().to_string(),
            RowStatus::Completed => format!(" {}", state.row_scores()[i]).green().to_string(),
            RowStatus::Failed => " ✗".red().to_string(),
            RowStatus::Pending => String::new(),
        };
        println!("{line}{marker}");
    }

    println!(
        "\n  Can:  [{}] {}/{}",
        lives_bar(state, 20).red(),
        state.lives_remaining(),
        state.total_lives()
    );
    println!(
        "  Skor: {}",
        state.total_score().to_string().bright_yellow().bold()
    );

    let tried = state.active_row().guessed_letters();
    if !tried.is_empty() && !state.is_complete() {
        let letters: Vec<String> = tried
            .iter()
            .map(|&l| {
                if state.active_row().word().has_letter(l) {
                    l.to_string().green().to_string()
                } else {
                    l.to_string().red().strikethrough().to_string()
                }
            })
            .collect();
        println!("  Tried: {}", letters.join(" "));
    }
}

/// Print the score breakdown of a finished game
pub fn print_game_summary(state: &GameState) {
    let Some(score) = state.final_score() else {
        return;
    };

    println!("\n{}", "═".repeat(40).bright_cyan());
    if score.is_perfect() {
        println!("{}", "  🏆 Kusursuz! Perfect pyramid!".bright_green().bold());
    } else if state.rows().iter().all(|r| r.status() == RowStatus::Completed) {
        println!("{}", "  🎉 Tebrikler! Pyramid complete".bright_green().bold());
    } else {
        println!("{}", "  💔 Out of lives".red().bold());
    }
    println!("{}", "═".repeat(40).bright_cyan());

    println!("\n  Rows:             {}", score.base);
    if score.completion_bonus > 0 {
        println!("  Completion bonus: +{}", score.completion_bonus);
    }
    if score.lives_bonus > 0 {
        println!("  Lives bonus:      +{}", score.lives_bonus);
    }
    println!("  Wrong guesses:    {}", score.total_errors);
    println!(
        "  Total:            {}",
        format!("{}/{MAX_SCORE}", score.total).bright_yellow().bold()
    );
}

/// Print aggregate statistics
pub fn print_stats(stats: &StoredStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "İSTATİSTİKLER".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if stats.games_played == 0 {
        println!("\n  No daily games recorded yet.");
        return;
    }

    println!("\n  Games played:    {}", stats.games_played);
    println!("  Total points:    {}", stats.total_points);
    println!(
        "  Average score:   {}",
        format!("{:.1}", stats.average_score).bright_yellow().bold()
    );
    println!(
        "  Current streak:  {}",
        stats.current_streak.to_string().green()
    );
    println!("  Best streak:     {}", stats.max_streak);
}

/// Print a stored daily result and its share text
pub fn print_stored_result(result: &StoredResult) {
    println!(
        "\nAlready played Piramit #{} on {}.",
        result.day_number, result.date
    );
    println!(
        "{}\n",
        share_text_from_scores(result.day_number, result.total_score, &result.row_scores)
    );
}

/// Print the words and mapping behind a puzzle
pub fn print_reveal(report: &RevealReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {}",
        report.label.bright_cyan().bold(),
        format!("(seed {}, set #{})", report.seed, report.set_index + 1).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, word) in report.words.iter().enumerate() {
        let numbers: Vec<String> = word
            .letters()
            .iter()
            .map(|&l| report.mapping.number_of(l).to_string())
            .collect();
        println!(
            "  {}. {} {}",
            i + 1,
            format!("{:<8}", word.text()).bright_yellow().bold(),
            numbers.join(" ").bright_black()
        );
    }

    println!("\n  Mapping:");
    let pairs: Vec<String> = report
        .mapping
        .pairs()
        .map(|(letter, number)| format!("{letter}={number:<2}"))
        .collect();
    for chunk in pairs.chunks(10) {
        println!("    {}", chunk.join("  "));
    }
}

/// Print the outcome of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pool:             {}", result.pool.label());
    println!("   Games played:     {}", result.games);
    println!(
        "   Pyramids solved:  {} ({:.1}%)",
        result.completed,
        result.completed as f64 / result.games.max(1) as f64 * 100.0
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!("   Average rows:     {:.2}", result.average_rows);
    println!(
        "   Best / worst:     {} / {}",
        result.max_score.to_string().green(),
        result.min_score.to_string().red()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    let max_count = result.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in result.distribution.iter().enumerate() {
        let low = i as u32 * BUCKET_WIDTH;
        let high = if i == BUCKET_COUNT - 1 {
            MAX_SCORE
        } else {
            low + BUCKET_WIDTH - 1
        };
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let pct = count as f64 / result.games.max(1) as f64 * 100.0;
        println!(
            "   {low:>3}-{high:<3} {}{} {count:5} ({pct:5.1}%)",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
    }
}
