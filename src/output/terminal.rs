// Colored terminal output for analysis reports and keyword tables.
//
// This module handles all terminal-specific formatting: colors, tables,
// frequency bars. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::keywords::KeywordFrequency;
use crate::pipeline::analysis::{AnalysisReport, CleaningPolicy};
use crate::stats::ReductionStats;

/// Display a full analysis report: policy, stats, cleaned preview,
/// keyword table.
pub fn display_report(report: &AnalysisReport) {
    println!("\n{}", "=== Analysis Report ===".bold());
    println!("  Cleaning policy: {}", colorize_policy(report.policy));
    println!();

    display_stats(&report.stats);

    if !report.cleaned_text.is_empty() {
        let preview = super::truncate_chars(&report.cleaned_text, 200);
        println!("  Cleaned text: {}", preview.dimmed());
        println!();
    }

    if report.keywords.is_empty() {
        println!("  No keywords to show (no tokens survived cleaning).");
    } else {
        display_keywords(&report.keywords);
    }
}

/// Display reduction statistics as a compact block.
pub fn display_stats(stats: &ReductionStats) {
    println!(
        "  Words: {} -> {}  ({}% removed)",
        stats.original_word_count,
        stats.cleaned_word_count,
        format_pct(stats.word_reduction_pct)
    );
    println!(
        "  Chars: {} -> {}  ({}% removed)",
        stats.original_char_count,
        stats.cleaned_char_count,
        format_pct(stats.char_reduction_pct)
    );
    println!();
}

/// Display a keyword frequency table with count bars scaled to the most
/// frequent entry.
pub fn display_keywords(keywords: &[KeywordFrequency]) {
    if keywords.is_empty() {
        println!("  No keywords.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top Keywords ({} entries) ===", keywords.len()).bold()
    );
    println!();

    let bar_width: usize = 20;
    let max_count = keywords[0].count.max(1);

    for (i, entry) in keywords.iter().enumerate() {
        let filled = (entry.count * bar_width).div_ceil(max_count);
        let filled = filled.min(bar_width);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));

        let colored_bar = if entry.count == max_count {
            bar.bright_green()
        } else if entry.count * 2 >= max_count {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<24} {} {}",
            i + 1,
            entry.keyword.bold(),
            colored_bar,
            entry.count
        );
    }
    println!();
}

/// Display a document similarity score with a qualitative band.
pub fn display_similarity(score: f64) {
    let band = if score >= 0.7 {
        "high overlap".bright_green()
    } else if score >= 0.3 {
        "moderate overlap".bright_yellow()
    } else {
        "low overlap".bright_blue()
    };
    println!("\n  Cosine similarity: {score:.3}  ({band})");
}

/// Colorize a cleaning policy tag.
fn colorize_policy(policy: CleaningPolicy) -> colored::ColoredString {
    match policy {
        CleaningPolicy::Strict => "strict".green(),
        CleaningPolicy::Fallback => "fallback".yellow(),
        CleaningPolicy::BestEffort => "best-effort".red(),
    }
}

fn format_pct(pct: f64) -> String {
    // Trailing-zero trimming keeps "25%" over "25.00%" while preserving
    // configured precision for non-integral values.
    if pct.fract() == 0.0 {
        format!("{pct:.0}")
    } else {
        format!("{pct}")
    }
}
