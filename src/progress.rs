// ABOUTME: Progress reporting trait and indicatif-backed console sink
// ABOUTME: Decouples chunk-level progress from any presentation layer

use indicatif::{ProgressBar, ProgressStyle};

/// Receives batch progress as a fraction in [0, 1] plus a human-readable
/// message naming the current file and its position in the batch.
pub trait ProgressSink {
    fn report(&self, fraction: f64, message: &str);
    fn clear(&self);
}

const BAR_SCALE: u64 = 1000;

pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(BAR_SCALE);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] {percent:>3}% {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        ConsoleProgress { bar }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, fraction: f64, message: &str) {
        let pos = (fraction.clamp(0.0, 1.0) * BAR_SCALE as f64) as u64;
        self.bar.set_position(pos);
        self.bar.set_message(message.to_string());
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}
