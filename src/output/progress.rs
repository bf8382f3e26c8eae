//! Progress bars for long-running commands

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over `len` items, labelled with `unit`
///
/// # Panics
/// Will not panic - the template is a valid constant.
#[must_use]
pub fn progress_bar(len: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {unit} ({{percent}}%) | {{msg}}"
            ))
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb
}
