//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder};
use crate::commands::{BenchmarkResult, NeighborsResult, PathResult};
use colored::Colorize;

/// Print the result of a path search
pub fn print_path_result(result: &PathResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.source.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.path {
        Ok(path) => {
            println!("\n{}", format_ladder(path));
            println!(
                "\n{}",
                format!(
                    "✅ {} {} ({:.2}ms)",
                    path.moves(),
                    if path.moves() == 1 { "move" } else { "moves" },
                    result.duration.as_secs_f64() * 1000.0
                )
                .green()
                .bold()
            );
        }
        Err(reason) => {
            println!("\n{}", format!("❌ {reason}").red().bold());
        }
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!(
        "\n{} {} ({} neighbors)",
        "Neighbors of".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold(),
        result.neighbors.len()
    );

    if result.neighbors.is_empty() {
        println!("  {}", "(isolated word, no moves possible)".bright_black());
        return;
    }

    for chunk in result.neighbors.chunks(10) {
        let row: Vec<String> = chunk.iter().map(|w| w.text().to_uppercase()).collect();
        println!("  {}", row.join("  "));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Solvable:         {}",
        format!("{}", result.solvable).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average moves:    {}",
        format!("{:.2}", result.average_moves)
            .bright_yellow()
            .bold()
    );
    if let Some((source, target)) = &result.longest {
        println!(
            "   Longest ladder:   {} ({} → {})",
            result.max_moves,
            source.text().to_uppercase(),
            target.text().to_uppercase()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.solvable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();
    for (moves, &count) in lengths {
        let pct = (count as f64 / result.solvable as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {moves:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
