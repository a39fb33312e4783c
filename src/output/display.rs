//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SummaryStatistics;
use crate::core::DieSet;
use colored::Colorize;

/// Print word list statistics with colored formatting
pub fn print_summary(stats: &SummaryStatistics, dice: &DieSet) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD DICE SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Dice:             {}", dice.len());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Spellable:        {} {}",
        stats.spellable,
        format!("({:.1}%)", stats.success_rate()).green()
    );
    if stats.unspellable > 0 {
        println!(
            "   Unspellable:      {}",
            stats.unspellable.to_string().red()
        );
        for (shortfall, count) in &stats.shortfalls {
            println!("     {:<24} {count}", shortfall.describe());
        }
    }
    if let Some(word) = &stats.longest_spellable {
        println!("   Longest word:     {}", word.bright_yellow().bold());
    }
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.length_distribution.is_empty() {
        println!("\n📈 {}", "By length:".bright_cyan().bold());
        for (length, &(spellable, total)) in &stats.length_distribution {
            let bar = create_progress_bar(spellable as f64, total as f64, 30);
            println!("   {length:3}: {} {spellable:5}/{total:<5}", bar.green());
        }
    }

    if !dice.is_empty() && stats.spellable > 0 {
        println!("\n🎲 {}", "Dice usage:".bright_cyan().bold());
        let max_usage = stats.dice_usage.iter().copied().max().unwrap_or(0);
        for (die, &count) in dice.iter().zip(&stats.dice_usage) {
            let bar = create_progress_bar(count as f64, max_usage as f64, 30);
            let label = if count == 0 {
                die.faces().bright_black()
            } else {
                die.faces().normal()
            };
            println!(
                "   {:3} {label:<12} {} {count:5}",
                die.index(),
                bar.green()
            );
        }
    }
}
