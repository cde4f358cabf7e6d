//! Display functions for command results

use super::formatters::{create_progress_bar, figure};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{MAX_ATTEMPTS, SecretWord};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.hit { "✓".green() } else { "✗".red() };
        println!(
            "\nTurn {}: {} {}  {}  {}",
            i + 1,
            step.letter.to_string().bold(),
            mark,
            step.revealed,
            figure(step.remaining_attempts)
        );

        if verbose {
            println!("  Candidates: {}", step.candidates_before);
            println!("  Attempts:   {}/{}", step.remaining_attempts, MAX_ATTEMPTS);
        }
    }

    println!();
    if result.success() {
        let summary = format!(
            "✅ Solved in {} guesses with {} misses!",
            result.steps.len(),
            result.misses
        );
        println!("{}", summary.green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len()).red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Wins / losses:    {} / {}",
        format!("{}", result.wins).green(),
        format!("{}", result.losses).red()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for (&misses, &count) in &result.miss_distribution {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {misses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the active word list
pub fn print_word_list(words: &[SecretWord]) {
    println!("{} ({} words)", "Word list".bright_cyan().bold(), words.len());
    for word in words {
        println!("  • {} ({} letters)", word.text(), word.len());
    }
}
