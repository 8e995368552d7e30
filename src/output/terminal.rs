// Colored terminal output for keyword rankings and failures.

use colored::Colorize;

use super::truncate_chars;
use crate::error::AnalyzeError;
use crate::keywords::models::Keyword;

const BAR_WIDTH: usize = 30;
const TITLE_MAX_CHARS: usize = 70;

/// Render a weight in [0, 1] as a fixed-width bar.
pub fn weight_bar(weight: f64, width: usize) -> String {
    let filled = ((weight.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}

/// Display a ranked keyword list as a bar chart.
pub fn display_keywords(title: &str, words: &[Keyword]) {
    println!(
        "\n{}",
        format!(
            "=== Top {} words: {} ===",
            words.len(),
            truncate_chars(title, TITLE_MAX_CHARS)
        )
        .bold()
    );
    println!();

    for (i, keyword) in words.iter().enumerate() {
        let bar = weight_bar(keyword.weight, BAR_WIDTH);
        let colored_bar = if keyword.weight >= 0.75 {
            bar.bright_green()
        } else if keyword.weight >= 0.40 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<20} {} {:.3}",
            i + 1,
            keyword.word.bold(),
            colored_bar,
            keyword.weight
        );
    }
    println!();
}

/// Display a classified failure with a hint for what to try next.
pub fn display_failure(url: &str, err: &AnalyzeError) {
    eprintln!("{} {}", "Could not analyze".red().bold(), url);
    eprintln!("  {}", err);
    eprintln!("  {}", err.kind().hint().dimmed());
}
