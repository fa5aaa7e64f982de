//! # Binary-Splitting Evaluator
//!
//! Classic divide-and-conquer evaluation of the Chudnovsky series over a
//! half-open index range `[a, b)`: the base case is a single term leaf
//! (`term::leaf`), the recursive case splits at the floor midpoint and
//! combines the two halves (`Triplet::combine`).
//!
//! Balanced divide-and-conquer is the point, not an optimization detail:
//! every multiplication in the combine step happens between operands of
//! comparable size, which is the regime where GMP's subquadratic
//! multiplication actually pays off. Linear accumulation would always
//! multiply a huge running product by one small term and degrade to
//! quadratic overall cost.
//!
//! ## Progress
//!
//! `ProgressSink::leaf_done` is called exactly once per leaf, with a
//! monotonically increasing `done` counter (backed by a shared atomic, so it
//! stays monotonic even when leaves complete out of order across worker
//! threads) against the known `total` term count. The sink must be cheap and
//! non-blocking — it runs inside the evaluator's hot path.
//!
//! ## Parallel variant
//!
//! `evaluate_parallel` spawns the left and right subtrees concurrently via
//! `rayon::join` only while the subtree's index range is wider than `chunk`;
//! below that threshold it falls back to the sequential recursion in the
//! caller's frame, so a pool of `W` workers isn't swamped with more tasks
//! than it can amortize. The merge step is identical either way, so the
//! result is bit-identical to the sequential traversal — splitting changes
//! only which frame performs which multiplication, never the arithmetic.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::term;
use crate::triplet::Triplet;

/// Notified once per leaf visited during evaluation.
pub trait ProgressSink: Send + Sync {
    fn leaf_done(&self, done: u64, total: u64);
}

/// A sink that does nothing; used when the caller doesn't want progress.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn leaf_done(&self, _done: u64, _total: u64) {}
}

impl<F: Fn(u64, u64) + Send + Sync> ProgressSink for F {
    fn leaf_done(&self, done: u64, total: u64) {
        self(done, total)
    }
}

/// Sequential binary-splitting evaluation of `[a, b)`.
pub fn evaluate(a: u64, b: u64, total: u64, counter: &AtomicU64, sink: &dyn ProgressSink) -> Triplet {
    if b - a == 1 {
        let leaf = term::leaf(a);
        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        sink.leaf_done(done, total);
        return leaf;
    }
    let m = a + (b - a) / 2;
    let left = evaluate(a, m, total, counter, sink);
    let right = evaluate(m, b, total, counter, sink);
    Triplet::combine(left, right)
}

/// Parallel binary-splitting evaluation of `[a, b)`. Spawns both subtrees
/// concurrently via `rayon::join` while the range is wider than `chunk`;
/// below that, recurses sequentially in the caller's frame. Must be called
/// from inside a `rayon::ThreadPool::install` to run on a sized pool rather
/// than rayon's global default.
pub fn evaluate_parallel(
    a: u64,
    b: u64,
    total: u64,
    counter: &AtomicU64,
    sink: &dyn ProgressSink,
    chunk: u64,
) -> Triplet {
    if b - a == 1 {
        let leaf = term::leaf(a);
        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        sink.leaf_done(done, total);
        return leaf;
    }
    let m = a + (b - a) / 2;
    if b - a > chunk {
        let (left, right) = rayon::join(
            || evaluate_parallel(a, m, total, counter, sink, chunk),
            || evaluate_parallel(m, b, total, counter, sink, chunk),
        );
        Triplet::combine(left, right)
    } else {
        let left = evaluate(a, m, total, counter, sink);
        let right = evaluate(m, b, total, counter, sink);
        Triplet::combine(left, right)
    }
}
