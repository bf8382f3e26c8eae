//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, word_columns};
use crate::commands::{BenchmarkResult, LookupResult, SolveMode, SolveResult};
use crate::core::{Grid, capitalize};
use crate::dictionary::LoadReport;
use crate::solver::Collection;
use colored::Colorize;

const LINE_WIDTH: usize = 60;

/// Print a board with one row per line
pub fn print_board(grid: &Grid) {
    let width = grid.iter_rows().flatten().map(String::len).max().unwrap_or(1) + 1;
    let border = "─".repeat(grid.cols() * (width + 1) + 1);

    println!("┌{}┐", border.cyan());
    for row in grid.iter_rows() {
        let cells: String = row
            .iter()
            .map(|tile| format!(" {:<width$}", capitalize(tile)))
            .collect();
        println!("│{} │", cells.bright_yellow().bold());
    }
    println!("└{}┘", border.cyan());
}

/// Report a loaded dictionary on stderr
pub fn print_load_report(source: &str, report: &LoadReport) {
    let skipped = if report.skipped > 0 {
        format!(" ({} malformed lines skipped)", report.skipped)
    } else {
        String::new()
    };
    eprintln!(
        "{}",
        format!("Loaded {} words from {source}{skipped}", report.words).dimmed()
    );
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let solution = &result.solution;

    println!("\n{}", "─".repeat(LINE_WIDTH).cyan());
    print_board(&result.grid);
    println!("{}", "─".repeat(LINE_WIDTH).cyan());

    if solution.is_empty() {
        println!("\n{}", "No words found".red().bold());
    } else {
        println!(
            "\n{}",
            format!("Found {} words:", solution.len()).green().bold()
        );
        for (len, words) in solution.by_length().iter().rev() {
            println!("\n{}", format!("{len} letters ({})", words.len()).bright_cyan());
            for line in word_columns(words, LINE_WIDTH) {
                println!("  {line}");
            }
        }
    }

    println!(
        "\nSolving took: {}",
        format_duration(solution.elapsed()).bright_yellow()
    );

    if verbose {
        let mode = match result.mode {
            SolveMode::Sequential => "sequential",
            SolveMode::Parallel(Collection::Merge) => "parallel (merged per-task sets)",
            SolveMode::Parallel(Collection::Shared) => "parallel (shared set)",
        };
        println!("  Mode:      {mode}");
        println!("  Threads:   {}", result.threads);
        println!("  Cells:     {}", solution.cells_searched());
        if let Some(longest) = solution.longest() {
            println!("  Longest:   {}", longest.to_uppercase());
        }
    }
}

/// Print the result of a word lookup
pub fn print_lookup_result(result: &LookupResult) {
    let mark = |ok: bool| if ok { "yes".green() } else { "no".red() };

    println!("\n{}", "═".repeat(LINE_WIDTH).cyan());
    println!(
        " {} {} ",
        "LOOKUP:".bright_cyan().bold(),
        result.normalized.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(LINE_WIDTH).cyan());

    if result.query != result.normalized {
        println!("\n   Query:        {:?}", result.query);
    }
    println!("\n   In dictionary: {}", mark(result.is_word));
    println!("   Playable:      {}", mark(result.playable));
    println!("   Extends:       {}", mark(result.has_continuation));

    if !result.completions.is_empty() {
        let words: Vec<&str> = result.completions.iter().map(String::as_str).collect();
        println!("\n   {}", "Completions:".bright_cyan());
        for line in word_columns(&words, LINE_WIDTH - 3) {
            println!("   {line}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(LINE_WIDTH).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(LINE_WIDTH).cyan());

    println!("\n📊 {}", "Words:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest:           {}", result.min_words.to_string().yellow());
    println!("   Most:             {}", result.max_words.to_string().green());

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Parallel:         {}",
        format_duration(result.parallel_duration)
    );
    println!(
        "   Sequential:       {}",
        format_duration(result.sequential_duration)
    );
    println!(
        "   Speedup:          {}",
        format!("{:.2}x", result.speedup).bright_yellow().bold()
    );
    if result.mismatches > 0 {
        println!(
            "   {}",
            format!("{} boards differed between modes", result.mismatches)
                .red()
                .bold()
        );
    }

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
        let max = result.distribution.values().copied().max().unwrap_or(0);
        for (len, &count) in &result.distribution {
            let bar = create_progress_bar(count as f64, max as f64, 40);
            println!("   {len:2}: {} {count:5}", bar.green());
        }
    }

    if let Some((grid, words)) = &result.best_board {
        println!("\n🏆 {}", format!("Best board ({words} words):").bright_cyan().bold());
        print_board(grid);
    }
}
