//! Progress tracking shared by the workers.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})";

/// Atomic completion counter with an optional terminal progress bar.
///
/// Cloning is cheap; all clones share the same counter and bar.
#[derive(Clone)]
pub struct Progress {
    completed: Arc<AtomicUsize>,
    bar: ProgressBar,
}

impl Progress {
    /// Creates a tracker for `total` items. The bar is drawn only when stderr
    /// is a terminal.
    pub fn new(total: usize, message: &str) -> Self {
        let bar = if std::io::stderr().is_terminal() {
            create_progress_bar(total as u64, message)
        } else {
            ProgressBar::hidden()
        };
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            bar,
        }
    }

    /// Marks one more item as done.
    pub fn advance(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::debug!("Invalid progress bar template: {}", e),
    }
    pb.set_message(message.to_string());
    pb
}
