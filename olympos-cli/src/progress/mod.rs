//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while the source document downloads
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner for a download
    pub fn start_fetch(&mut self, source: &str) {
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("Fetching {source}"));
        spinner.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(spinner);
    }

    /// Report a completed download
    pub fn fetch_completed(&self, bytes: usize) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_with_message(format!("Fetched {bytes} bytes"));
        }
    }

    /// Stop the spinner after a failed download
    pub fn fetch_failed(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.abandon_with_message("Fetch failed");
        }
    }

    /// True when a spinner is active
    pub fn is_active(&self) -> bool {
        self.spinner.is_some()
    }
}
