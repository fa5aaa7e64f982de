//! # pi-splitter — Binary-Split Chudnovsky π Engine
//!
//! Computes the decimal or hexadecimal expansion of π to an arbitrary
//! user-specified number of fractional digits `N`, returning a fixed-point
//! string whose fractional part is exactly `N` digits long. This is a batch,
//! CPU-bound numeric engine: a caller specifies `N`, the engine returns a
//! string — there is no incremental digit streaming and no series besides
//! Chudnovsky's.
//!
//! ## Pipeline
//!
//! ```text
//! (N, base) -> plan::Plan -> bsplit::evaluate([0, terms)) -> Triplet
//!           -> assemble::assemble -> pi_hat -> format::format_fixed -> string
//! ```
//!
//! `selftest::self_test` closes the loop: it compares the engine's own
//! output against `rug`'s independently-computed `Constant::Pi` at the same
//! precision, run through the same formatter.
//!
//! ## Module map
//!
//! - [`base`] — output radix (`Base::Decimal` / `Base::Hex`).
//! - [`plan`] — precision planner: digit count -> (bit precision, term count).
//! - [`term`] — single Chudnovsky term leaf.
//! - [`triplet`] — binary-splitting combination state and the pluggable
//!   `IntMultiplier` extension point.
//! - [`bsplit`] — the divide-and-conquer evaluator, sequential and parallel.
//! - [`assemble`] — root triplet -> high-precision π float.
//! - [`format`] — π float -> fixed-point digit string.
//! - [`selftest`] — correctness oracle against an independent π reference.
//! - [`progress`] — atomic leaf-tick counters for the CLI's status line.
//! - [`error`] — the `PiError` taxonomy.

pub mod assemble;
pub mod base;
pub mod bsplit;
pub mod error;
pub mod format;
pub mod plan;
pub mod progress;
pub mod selftest;
pub mod term;
pub mod triplet;

use std::sync::atomic::AtomicU64;

use base::Base;
use bsplit::{NullSink, ProgressSink};
use error::PiError;
use plan::Plan;

/// Compute π to `n` decimal fractional digits. Equivalent to
/// `compute_pi_base(n, Base::Decimal)`.
pub fn compute_pi(n: u64) -> Result<String, PiError> {
    compute_pi_base(n, Base::Decimal)
}

/// Compute π to `n` fractional digits in the given base, sequentially.
pub fn compute_pi_base(n: u64, base: Base) -> Result<String, PiError> {
    compute_pi_with_progress(n, base, &NullSink)
}

/// Compute π to `n` fractional digits in the given base, sequentially,
/// notifying `sink` once per Chudnovsky term evaluated.
pub fn compute_pi_with_progress(n: u64, base: Base, sink: &dyn ProgressSink) -> Result<String, PiError> {
    let plan = Plan::new(n, base)?;
    let counter = AtomicU64::new(0);
    let root = bsplit::evaluate(0, plan.terms, plan.terms, &counter, sink);
    let pi_hat = assemble::assemble(&root, plan.bits);
    Ok(format::format_fixed(&pi_hat, n, base))
}

/// Compute π to `n` fractional digits in the given base using a dedicated
/// `workers`-thread pool. `workers == 1` is equivalent to the sequential
/// path. The pool is built per call rather than mutating Rayon's global
/// pool, so this is safe to call from a library context.
pub fn compute_pi_parallel(
    n: u64,
    base: Base,
    workers: usize,
    sink: Option<&dyn ProgressSink>,
) -> Result<String, PiError> {
    if workers == 0 {
        return Err(PiError::InvalidThreadCount);
    }

    let plan = Plan::new(n, base)?;
    let null = NullSink;
    let sink = sink.unwrap_or(&null);
    let counter = AtomicU64::new(0);

    let root = if workers == 1 {
        bsplit::evaluate(0, plan.terms, plan.terms, &counter, sink)
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| PiError::Worker(e.to_string()))?;
        // Spawn parallel work only while a subtree's index range exceeds this
        // chunk size, so the pool isn't handed more tasks than it can amortize.
        let chunk = (plan.terms / workers as u64).max(1);
        pool.install(|| bsplit::evaluate_parallel(0, plan.terms, plan.terms, &counter, sink, chunk))
    };

    let pi_hat = assemble::assemble(&root, plan.bits);
    Ok(format::format_fixed(&pi_hat, n, base))
}
