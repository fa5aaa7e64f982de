//! # Progress — Atomic Leaf-Tick Counters for the CLI
//!
//! Thread-safe progress tracking shared between the evaluator's worker
//! threads and a background status reporter. Implements `bsplit::ProgressSink`
//! so it can be handed straight to `compute_pi_with_progress`/
//! `compute_pi_parallel`; the counters themselves are atomics (lock-free
//! from parallel Rayon workers), with a dedicated thread printing status to
//! stderr on a fixed interval.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::bsplit::ProgressSink;

pub struct Progress {
    done: AtomicU64,
    total: AtomicU64,
    start: Instant,
    shutdown: AtomicBool,
}

impl Progress {
    pub fn new() -> Arc<Self> {
        Arc::new(Progress {
            done: AtomicU64::new(0),
            total: AtomicU64::new(0),
            start: Instant::now(),
            shutdown: AtomicBool::new(false),
        })
    }

    pub fn start_reporter(self: &Arc<Self>) -> thread::JoinHandle<()> {
        let progress = Arc::clone(self);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(500));
            if progress.shutdown.load(Ordering::Relaxed) {
                break;
            }
            progress.print_status();
        })
    }

    pub fn print_status(&self) {
        let done = self.done.load(Ordering::Relaxed);
        let total = self.total.load(Ordering::Relaxed);
        let elapsed = self.start.elapsed().as_secs_f64();
        let pct = if total > 0 { done as f64 / total as f64 * 100.0 } else { 0.0 };
        eprintln!("[{elapsed:7.1}s] terms: {done}/{total} ({pct:5.1}%)");
    }

    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl ProgressSink for Progress {
    fn leaf_done(&self, done: u64, total: u64) {
        self.total.store(total, Ordering::Relaxed);
        self.done.store(done, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let p = Progress::new();
        assert_eq!(p.done.load(Ordering::Relaxed), 0);
        assert_eq!(p.total.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn leaf_done_updates_counters() {
        let p = Progress::new();
        p.leaf_done(3, 10);
        assert_eq!(p.done.load(Ordering::Relaxed), 3);
        assert_eq!(p.total.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn stop_sets_shutdown_flag() {
        let p = Progress::new();
        assert!(!p.shutdown.load(Ordering::Relaxed));
        p.stop();
        assert!(p.shutdown.load(Ordering::Relaxed));
    }

    #[test]
    fn print_status_does_not_panic() {
        let p = Progress::new();
        p.leaf_done(5, 20);
        p.print_status();
    }

    #[test]
    fn concurrent_ticks_are_accurate() {
        let p = Progress::new();
        let threads: Vec<_> = (0..8)
            .map(|i| {
                let p = Arc::clone(&p);
                thread::spawn(move || {
                    p.leaf_done(i, 8);
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(p.total.load(Ordering::Relaxed), 8);
    }
}
