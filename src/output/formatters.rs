//! Formatting utilities for terminal output

use crate::solver::Path;
use colored::Colorize;

/// Uppercase `next`, highlighting positions that differ from `previous`
#[must_use]
pub fn highlight_change(previous: &str, next: &str) -> String {
    let mut before = previous.chars();
    let mut result = String::with_capacity(next.len());

    for ch in next.chars() {
        let letter = ch.to_uppercase().to_string();
        if before.next() == Some(ch) {
            result.push_str(&letter);
        } else {
            result.push_str(&letter.bright_yellow().bold().to_string());
        }
    }

    result
}

/// Format a path as an uppercase ladder with each changed letter highlighted
#[must_use]
pub fn format_ladder(path: &Path) -> String {
    let words = path.words();
    let Some(first) = words.first() else {
        return String::new();
    };

    let mut steps = vec![first.text().to_uppercase()];
    steps.extend(
        words
            .windows(2)
            .map(|pair| highlight_change(pair[0].text(), pair[1].text())),
    );
    steps.join(" -> ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
