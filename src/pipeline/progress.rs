//! Progress reporting for long runs
//!
//! The pipeline never talks to a terminal directly; it reports through a
//! [`ProgressReporter`] handed to it by the caller.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress fractions and status messages from the pipeline
pub trait ProgressReporter: Send + Sync {
    /// Reports overall completion in `0.0..=1.0`
    fn report(&self, fraction: f64);

    /// Reports a human-readable status or warning line
    fn message(&self, text: &str);
}

/// Reporter that forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, fraction: f64) {
        tracing::info!("Progress: {:.1}%", fraction * 100.0);
    }

    fn message(&self, text: &str) {
        tracing::info!("{}", text);
    }
}

/// Resolution of the bar; fractions are mapped onto this many steps
const BAR_STEPS: u64 = 1000;

/// Terminal progress bar reporter
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    /// Creates a bar with the default template
    pub fn new() -> Result<Self, indicatif::style::TemplateError> {
        let bar = ProgressBar::new(BAR_STEPS);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% | {msg}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }

    /// Completes the bar with a final message
    pub fn finish(&self, text: &str) {
        self.bar.finish_with_message(text.to_string());
    }
}

impl ProgressReporter for BarReporter {
    fn report(&self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * BAR_STEPS as f64).round() as u64;
        self.bar.set_position(position);
    }

    fn message(&self, text: &str) {
        tracing::debug!("{}", text);
        self.bar.set_message(text.to_string());
    }
}
