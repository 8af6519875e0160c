//! Terminal progress bars, one per render worker.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use halo_renderer::ProgressReporter;

const BAR_TEMPLATE: &str = "Thread {prefix} [{bar:32.cyan/blue}] {pos}/{len} samples {elapsed}";

/// Draws a bar per worker on stderr through `indicatif`.
pub struct TerminalProgress {
    multi: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            bars: Vec::new(),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#> ")
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalProgress {
    fn start(&mut self, targets: &[u32]) {
        let style = Self::style();
        self.bars = targets
            .iter()
            .enumerate()
            .map(|(i, &target)| {
                let bar = self.multi.add(ProgressBar::new(target as u64));
                bar.set_style(style.clone());
                bar.set_prefix(format!("{:2}", i + 1));
                bar
            })
            .collect();
    }

    fn update(&mut self, completed: &[u32]) {
        for (bar, &count) in self.bars.iter().zip(completed) {
            bar.set_position(count as u64);
        }
    }

    fn finish(&mut self) {
        for bar in &self.bars {
            bar.finish();
        }
    }
}
