//! # Main — CLI Entry Point
//!
//! Parses flags, configures logging, and dispatches to [`cli::run`]. Kept
//! deliberately thin — argument validation, digit-count parsing, and the
//! exit-code mapping of the error taxonomy all live in `cli.rs`.
//!
//! ## Flags
//!
//! - `--digits`/`-n`: fractional digit count. Decimal integer or scientific
//!   form (`1e6`). Required unless `--self-test` is given.
//! - `--out`/`-o`: output file (default stdout).
//! - `--base`/`-b`: `dec` or `hex` (default `dec`).
//! - `--threads`/`-t`: Rayon worker count for the parallel evaluator (default 1).
//! - `--quiet`/`-q`: suppress the banner and elapsed-time line.
//! - `--progress`/`-p`: print a periodic term-completion status line to stderr.
//! - `--self-test`/`-T`: run the correctness oracle instead of computing digits.
//! - `--version`/`-V`: print the crate version and exit (clap-synthesized).
//! - `--help`/`-h`: print usage (clap-synthesized).
//!
//! ## Exit codes
//!
//! 0 success; 1 argument error; 2 runtime error (I/O, worker pool); 3
//! self-test failure.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "pi-splitter",
    version,
    about = "Compute pi to N fractional digits via binary-split Chudnovsky evaluation"
)]
pub struct Cli {
    /// Number of fractional digits to compute. Decimal integer or
    /// scientific form (e.g. "1e6"). Required unless --self-test is given.
    #[arg(short = 'n', long = "digits", value_name = "N")]
    digits: Option<String>,

    /// Write digits to FILE instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Output base: "dec" or "hex".
    #[arg(short = 'b', long = "base", default_value = "dec")]
    base: String,

    /// Number of worker threads for the parallel evaluator.
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,

    /// Suppress the startup banner and elapsed-time line.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print a periodic term-completion status line to stderr.
    #[arg(short = 'p', long = "progress")]
    progress: bool,

    /// Run the correctness self-test instead of computing digits.
    #[arg(short = 'T', long = "self-test")]
    self_test: bool,
}

fn main() -> ExitCode {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run(cli)
}
