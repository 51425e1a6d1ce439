//! Solver attempt progress for one-shot generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the solver's attempt budget
///
/// Hidden when constructed quiet, so callers never need to branch on it.
pub struct AttemptProgress {
    bar: ProgressBar,
}

impl AttemptProgress {
    /// Create a bar for `max_attempts` attempts
    pub fn new(max_attempts: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(max_attempts as u64)
        };
        bar.set_style(ATTEMPT_STYLE.clone());
        Self { bar }
    }

    /// Record the start of a 1-based attempt
    pub fn start_attempt(&self, attempt: usize) {
        self.bar.set_position(attempt as u64);
    }

    /// Current attempt number shown by the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once solving is finished
    pub fn finish(&self, complete: bool) {
        let message = if complete { "solved" } else { "unsolved" };
        self.bar.finish_with_message(message);
    }
}
