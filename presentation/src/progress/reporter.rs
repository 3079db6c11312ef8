//! Progress reporting for suggestion requests

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use wardrobe_application::SuggestionProgress;

/// Spinner shown while the stylist is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionProgress for ProgressReporter {
    fn on_request_start(&self, image_count: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "Mixing and matching {} item{}...",
            image_count,
            if image_count == 1 { "" } else { "s" }
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_request_complete(&self, success: bool) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{}", "Styling request failed".red()));
            }
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl SuggestionProgress for SimpleProgress {
    fn on_request_start(&self, image_count: usize) {
        eprintln!(
            "{} {} ({} items)",
            "->".cyan(),
            "Mixing and matching...".bold(),
            image_count
        );
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}
