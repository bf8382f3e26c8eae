//! Formatting utilities for terminal output

use std::time::Duration;

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

/// Human-readable duration with a unit that suits its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else if secs >= 0.001 {
        format!("{:.2}ms", secs * 1_000.0)
    } else {
        format!("{}µs", duration.as_micros())
    }
}

/// Lay words out in columns no wider than `width` characters
///
/// Words are uppercased and left-aligned; an empty slice gives no lines.
#[must_use]
pub fn word_columns(words: &[&str], width: usize) -> Vec<String> {
    let Some(longest) = words.iter().map(|w| w.len()).max() else {
        return Vec::new();
    };
    let cell = longest + 2;
    let per_line = (width / cell).max(1);

    words
        .chunks(per_line)
        .map(|chunk| {
            chunk
                .iter()
                .map(|word| format!("{:<cell$}", word.to_uppercase()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
