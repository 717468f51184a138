//! Progress reporting for cascade execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use relay_application::CascadeProgressNotifier;
use relay_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a cascade with a spinner
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
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeProgressNotifier for ProgressReporter {
    fn on_model_start(&self, model: &Model, index: usize, total: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("[{}/{}] {}", index + 1, total, model));
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_attempt(&self, _model: &Model, attempt: u32) {
        self.with_spinner(|pb| pb.set_message(format!("attempt {}", attempt)));
    }

    fn on_retry_scheduled(&self, _model: &Model, attempt: u32, delay: Duration) {
        self.with_spinner(|pb| {
            pb.set_message(format!(
                "{} attempt {} failed, retrying in {}ms",
                "!".yellow(),
                attempt,
                delay.as_millis()
            ))
        });
    }

    fn on_model_failed(&self, model: &Model, detail: &str) {
        self.finish(format!("{} {} ({})", "x".red(), model, detail));
    }

    fn on_success(&self, model: &Model) {
        self.finish(format!("{} {}", "v".green(), model));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CascadeProgressNotifier for SimpleProgress {
    fn on_model_start(&self, model: &Model, index: usize, total: usize) {
        eprintln!(
            "{} {} ({}/{})",
            "->".cyan(),
            model.to_string().bold(),
            index + 1,
            total
        );
    }

    fn on_retry_scheduled(&self, _model: &Model, attempt: u32, delay: Duration) {
        eprintln!(
            "  {} attempt {} failed, retrying in {}ms",
            "!".yellow(),
            attempt,
            delay.as_millis()
        );
    }

    fn on_model_failed(&self, _model: &Model, detail: &str) {
        eprintln!("  {} {}", "x".red(), detail);
    }

    fn on_success(&self, model: &Model) {
        eprintln!("  {} {}", "v".green(), model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_survives_full_lifecycle() {
        let reporter = ProgressReporter::new();
        let model = Model::Gemini25Flash;

        reporter.on_model_start(&model, 0, 2);
        reporter.on_attempt(&model, 1);
        reporter.on_retry_scheduled(&model, 1, Duration::from_millis(800));
        reporter.on_model_failed(&model, "gemini-2.5-flash: 400 bad request");
        assert!(reporter.spinner.lock().unwrap().is_none());

        reporter.on_model_start(&Model::Gemini25Pro, 1, 2);
        reporter.on_success(&Model::Gemini25Pro);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_new_model_replaces_spinner() {
        let reporter = ProgressReporter::default();
        reporter.on_model_start(&Model::Gemini25Flash, 0, 2);
        reporter.on_model_start(&Model::Gemini25Pro, 1, 2);
        assert!(reporter.spinner.lock().unwrap().is_some());
    }
}
