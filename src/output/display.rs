//! Display functions for command results

use super::formatters::{board_width, progress_bar, render_board, render_keyboard};
use crate::commands::{AuditReport, ChallengeReport};
use crate::game::{GameState, Session};
use colored::Colorize;

/// Board, keyboard and hint of the session's current game
#[must_use]
pub fn render_session(session: &Session<'_>) -> String {
    let game = session.game();
    let rule = "─".repeat(board_width(game.word_length()).max(30)).cyan();
    let hint = match game.state() {
        GameState::Won => game.hint().green().bold(),
        GameState::Lost => game.hint().red().bold(),
        GameState::Playing => game.hint().bright_yellow(),
    };
    format!(
        "{rule}\n{}\n{rule}\n{}\n\n{}\n{hint}\n",
        session.status_line().bright_cyan(),
        render_board(game),
        render_keyboard(game),
    )
}

/// Print the result of creating or inspecting a challenge
pub fn print_challenge_report(report: &ChallengeReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Challenge: {}",
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("   Token:        {}", report.token);
    println!("   Tier:         {}", report.tier);
    match report.lowest_tier {
        Some(tier) => println!("   Playable at:  tier {tier} and up"),
        None => println!("   Playable at:  {}", "no tier".red()),
    }
    println!("   Link:         {}", report.link.bright_white());
    match &report.problem {
        None => println!("\n{}", "✅ Playable".green().bold()),
        Some(problem) => println!("\n{}", format!("❌ {problem}").red().bold()),
    }
}

/// Print the per-tier eligibility table and data checks
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "WORD DATA AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!(
        "\n📚 {} target entries, {} valid guesses",
        report.target_entries, report.dictionary_words
    );

    let widest = report
        .rows
        .iter()
        .flat_map(|row| row.counts.iter().copied())
        .max()
        .unwrap_or(0);

    println!("\n📈 {}", "Targets per tier (3 / 4 / 5 letters):".bright_cyan().bold());
    for row in &report.rows {
        let counts = row
            .counts
            .iter()
            .map(|&n| {
                let text = format!("{n:4}");
                if n == 0 { text.red().bold() } else { text.normal() }
            })
            .map(|text| text.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let total: usize = row.counts.iter().sum();
        println!(
            "   {:>2} {:<34} {counts}  {}",
            row.tier,
            row.label,
            progress_bar(total, widest * row.counts.len(), 20).green()
        );
        println!("      {}", row.letters.to_string().bright_black());
    }

    println!("\n🔎 {}", "Checks:".bright_cyan().bold());
    print_check("every length playable at every tier", report.all_covered());
    print_check("letters and words grow with tier", report.monotonic);
    print_check(
        &format!("{} challenge tokens round-trip", report.round_trips),
        report.codec_failures.is_empty(),
    );
    for word in &report.codec_failures {
        println!("      {}", word.red());
    }
}

fn print_check(label: &str, passed: bool) {
    if passed {
        println!("   {} {label}", "✓".green().bold());
    } else {
        println!("   {} {label}", "✗".red().bold());
    }
}
