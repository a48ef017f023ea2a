//! Progress bar setup shared by the renderer

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{prefix:.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} rows (eta {eta})";

/// Returns a stderr progress bar counting up to `len`.
pub fn get_progressbar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(len).with_style(style)
}
