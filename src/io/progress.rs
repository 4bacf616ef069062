//! Progress display for uniform refinement rounds

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} rounds, {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks refinement rounds and the size of the chain after each one
pub struct RefinementProgress {
    bar: ProgressBar,
}

impl RefinementProgress {
    /// Create a bar for `rounds` rounds labelled with `name`
    pub fn new(name: &str, rounds: usize) -> Self {
        let bar = ProgressBar::new(rounds as u64);
        bar.set_style(ROUND_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Report a finished round and the number of segments now in the chain
    pub fn update(&self, round: usize, segments: usize) {
        self.bar.set_position(round as u64);
        self.bar.set_message(format!("{segments} segments"));
    }

    /// Rounds reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
