//! Spinner shown while a CSV file is imported.

use std::cell::Cell;
use std::path::Path;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use flixdb_lib::{ImportProgress, ImportStats, UpsertOutcome};

/// Import progress drawn as a single spinner line.
///
/// Keeps the committed [`ImportStats`] so the caller can summarize them.
pub(crate) struct ImportSpinner {
    pb: ProgressBar,
    stats: Cell<Option<ImportStats>>,
}

impl ImportSpinner {
    /// When `quiet` is true the spinner is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        pb.set_style(style);
        Self {
            pb,
            stats: Cell::new(None),
        }
    }

    /// Counts from the committed import, if it finished.
    pub(crate) fn stats(&self) -> Option<ImportStats> {
        self.stats.get()
    }
}

impl ImportProgress for ImportSpinner {
    fn on_start(&self, source: &Path, records: usize) {
        self.pb
            .enable_steady_tick(std::time::Duration::from_millis(100));
        self.pb
            .set_message(format!("Writing {records} titles from {}", source.display()));
    }

    fn on_title(&self, position: usize, total: usize, title: &str, outcome: UpsertOutcome) {
        let verb = match outcome {
            UpsertOutcome::Inserted => "added",
            UpsertOutcome::Replaced => "replaced",
        };
        self.pb
            .set_message(format!("[{position}/{total}] {verb} {title}"));
    }

    fn on_finish(&self, stats: &ImportStats) {
        self.stats.set(Some(*stats));
        self.pb.finish_and_clear();
    }
}

impl Drop for ImportSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
