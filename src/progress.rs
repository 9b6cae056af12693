use indicatif::{ProgressBar, ProgressStyle};

/// Per-trial progress hook, decoupled from the sweep's control flow.
///
/// Reporting is an observability nicety: swapping in `Silent` must never
/// change what the sweep computes or writes.
pub trait Reporter {
    fn point_started(&mut self, label: &str, trials: u64);
    fn trial_finished(&mut self);
    fn point_finished(&mut self);
}

/// Reporter that does nothing (`--quiet`, and most tests).
pub struct Silent;

impl Reporter for Silent {
    fn point_started(&mut self, _label: &str, _trials: u64) {}
    fn trial_finished(&mut self) {}
    fn point_finished(&mut self) {}
}

/// Terminal progress bar, one per configuration point.
#[derive(Default)]
pub struct BarReporter {
    bar: Option<ProgressBar>,
}

impl BarReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for BarReporter {
    fn point_started(&mut self, label: &str, trials: u64) {
        let pb = ProgressBar::new(trials);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:>8} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(label.to_string());
        self.bar = Some(pb);
    }

    fn trial_finished(&mut self) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    fn point_finished(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish();
        }
    }
}
