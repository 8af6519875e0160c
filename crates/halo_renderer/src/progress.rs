//! Render progress reporting.
//!
//! Workers only bump their own atomic counter. The driving thread polls the
//! counters every `PROGRESS_POLL_INTERVAL` and forwards a snapshot to a
//! `ProgressReporter`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// How often the driving thread samples worker progress.
pub const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Receives progress snapshots from the render driver.
///
/// All methods are called from the driving thread only.
pub trait ProgressReporter {
    /// Called once before polling starts, with each worker's sample target.
    fn start(&mut self, _targets: &[u32]) {}

    /// Called on every poll with each worker's completed sample count.
    ///
    /// Values never decrease between calls but may lag the workers.
    fn update(&mut self, completed: &[u32]);

    /// Called once after every worker has reached its target.
    fn finish(&mut self) {}
}

/// Reporter that ignores all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn update(&mut self, _completed: &[u32]) {}
}

/// Reporter that writes one text bar per worker to the `log` facade at
/// debug level whenever progress changes.
#[derive(Debug, Default, Clone)]
pub struct LogProgress {
    targets: Vec<u32>,
    last_logged: u32,
}

const LOG_BAR_WIDTH: usize = 32;

impl ProgressReporter for LogProgress {
    fn start(&mut self, targets: &[u32]) {
        self.targets = targets.to_vec();
        self.last_logged = 0;
    }

    fn update(&mut self, completed: &[u32]) {
        let done: u32 = completed.iter().sum();
        if done == self.last_logged {
            return;
        }
        self.last_logged = done;

        for (i, (&count, &target)) in completed.iter().zip(&self.targets).enumerate() {
            log::debug!(
                "Thread {:2}: [{}] {}/{}",
                i + 1,
                progress_bar(count, target, LOG_BAR_WIDTH),
                count,
                target
            );
        }
    }
}

/// One worker's (completed, target) pair.
#[derive(Debug)]
pub(crate) struct WorkerStatus {
    completed: AtomicU32,
    target: u32,
}

impl WorkerStatus {
    pub(crate) fn new(target: u32) -> Self {
        Self {
            completed: AtomicU32::new(0),
            target,
        }
    }

    /// Record one more finished sample. Called by the owning worker only.
    #[inline]
    pub(crate) fn complete_sample(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn completed(&self) -> u32 {
        self.completed.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn target(&self) -> u32 {
        self.target
    }

    pub(crate) fn is_done(&self) -> bool {
        self.completed() >= self.target
    }
}

/// Draw a fixed-width text bar, `#` for done and space for remaining.
pub fn progress_bar(completed: u32, target: u32, width: usize) -> String {
    let progress = if target == 0 {
        1.0
    } else {
        completed as f32 / target as f32
    };

    (1..=width)
        .map(|x| if x as f32 / width as f32 <= progress { '#' } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_status() {
        let status = WorkerStatus::new(2);
        assert!(!status.is_done());

        status.complete_sample();
        assert_eq!(status.completed(), 1);
        assert!(!status.is_done());

        status.complete_sample();
        assert!(status.is_done());
        assert_eq!(status.target(), 2);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4, 8), "        ");
        assert_eq!(progress_bar(2, 4, 8), "####    ");
        assert_eq!(progress_bar(4, 4, 8), "########");
        assert_eq!(progress_bar(0, 0, 4), "####");
    }

    #[test]
    fn test_log_progress_tracks_completion() {
        let mut reporter = LogProgress::default();
        reporter.start(&[3, 2]);
        reporter.update(&[1, 1]);
        reporter.update(&[3, 2]);
        reporter.finish();

        assert_eq!(reporter.targets, vec![3, 2]);
        assert_eq!(reporter.last_logged, 5);
    }
}
