//! # Error — Typed Failure Modes for the π Engine
//!
//! Mirrors the error taxonomy of the engine's design: argument errors (bad
//! digit count, bad base, bad thread count), worker errors (thread pool build
//! or join failure), and I/O errors (writing the output file). Allocation
//! failure is deliberately not a variant here: `rug`/GMP abort the process on
//! out-of-memory rather than returning a `Result`, so there is nothing for a
//! `PiError::Allocation` to ever be constructed from.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PiError {
    #[error("digit count must be at least 1")]
    InvalidDigitCount,

    #[error("invalid base \"{0}\" (expected \"dec\" or \"hex\")")]
    InvalidBase(String),

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("worker pool error: {0}")]
    Worker(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
