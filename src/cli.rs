//! # CLI Execution
//!
//! Argument validation, digit-count parsing, compute/self-test dispatch, and
//! the error-taxonomy-to-exit-code mapping (§7). Split out of `main.rs` to
//! keep the entry point a thin wrapper around flag parsing and logging setup.

use std::process::ExitCode;
use std::str::FromStr;

use pi_splitter::base::Base;
use pi_splitter::progress::Progress;

use super::Cli;

const DEFAULT_SELF_TEST_DIGITS: u64 = 1000;

pub fn run(cli: Cli) -> ExitCode {
    let base = match Base::from_str(&cli.base) {
        Ok(b) => b,
        Err(e) => return argument_error(&e.to_string()),
    };

    if cli.threads == 0 {
        return argument_error("--threads must be at least 1");
    }

    if cli.self_test {
        return run_self_test(&cli);
    }

    let digits_spec = match &cli.digits {
        Some(spec) => spec.clone(),
        None => return argument_error("--digits is required unless --self-test is given"),
    };

    let n = match parse_digit_count(&digits_spec) {
        Ok(n) if n >= 1 => n,
        Ok(_) => return argument_error("--digits must be at least 1"),
        Err(e) => return argument_error(&e),
    };

    run_compute(&cli, n, base)
}

fn run_compute(cli: &Cli, n: u64, base: Base) -> ExitCode {
    if !cli.quiet {
        eprintln!(
            "pi-splitter {}: {n} fractional digits ({base}, {} thread{})",
            env!("CARGO_PKG_VERSION"),
            cli.threads,
            if cli.threads == 1 { "" } else { "s" }
        );
    }

    let progress = Progress::new();
    let reporter = if cli.progress { Some(progress.start_reporter()) } else { None };

    let start = std::time::Instant::now();
    let result = if cli.threads == 1 {
        pi_splitter::compute_pi_with_progress(n, base, progress.as_ref())
    } else {
        pi_splitter::compute_pi_parallel(n, base, cli.threads, Some(progress.as_ref()))
    };

    if let Some(handle) = reporter {
        progress.stop();
        let _ = handle.join();
    }

    let digits = match result {
        Ok(s) => s,
        Err(e) => return runtime_error(&e.to_string()),
    };

    if !cli.quiet {
        eprintln!(
            "computed {n} fractional digits ({base}) in {:.3}s",
            start.elapsed().as_secs_f64()
        );
    }

    match write_output(&cli.out, &digits) {
        Ok(()) => ExitCode::from(0),
        Err(e) => runtime_error(&format!("{e:#}")),
    }
}

/// Writes the computed digit string to `path`, or stdout if `None`.
fn write_output(path: &Option<std::path::PathBuf>, digits: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            use anyhow::Context;
            std::fs::write(path, format!("{digits}\n"))
                .with_context(|| format!("failed to write output to {}", path.display()))?;
        }
        None => println!("{digits}"),
    }
    Ok(())
}

fn run_self_test(cli: &Cli) -> ExitCode {
    let n = match &cli.digits {
        Some(spec) => match parse_digit_count(spec) {
            Ok(n) if n >= 1 => n,
            Ok(_) => return argument_error("--digits must be at least 1"),
            Err(e) => return argument_error(&e),
        },
        None => DEFAULT_SELF_TEST_DIGITS,
    };

    match pi_splitter::selftest::self_test(n) {
        Ok((ok, verdict)) => {
            eprintln!("self-test: {verdict}");
            if ok {
                ExitCode::from(0)
            } else {
                ExitCode::from(3)
            }
        }
        Err(e) => runtime_error(&e.to_string()),
    }
}

fn argument_error(reason: &str) -> ExitCode {
    eprintln!("argument error: {reason}");
    ExitCode::from(1)
}

fn runtime_error(reason: &str) -> ExitCode {
    eprintln!("runtime error: {reason}");
    ExitCode::from(2)
}

/// Parse a digit-count specification: a plain decimal integer, or
/// scientific notation "<mantissa>e<exponent>" (e.g. "1e6"), per the CLI's
/// digit-spec grammar.
fn parse_digit_count(spec: &str) -> Result<u64, String> {
    let s = spec.trim();
    if s.is_empty() {
        return Err("empty digit count".to_string());
    }

    match s.find(|c| c == 'e' || c == 'E') {
        Some(pos) => {
            let (mantissa_str, rest) = s.split_at(pos);
            let exp_str = &rest[1..];
            if mantissa_str.is_empty() || exp_str.is_empty() {
                return Err(format!("invalid scientific notation \"{spec}\""));
            }
            let mantissa: u64 = mantissa_str
                .parse()
                .map_err(|_| format!("invalid mantissa in \"{spec}\""))?;
            let exponent: u32 = exp_str
                .parse()
                .map_err(|_| format!("invalid exponent in \"{spec}\""))?;
            let multiplier = 10u64
                .checked_pow(exponent)
                .ok_or_else(|| format!("exponent too large in \"{spec}\""))?;
            mantissa
                .checked_mul(multiplier)
                .ok_or_else(|| format!("digit count overflow in \"{spec}\""))
        }
        None => s.parse::<u64>().map_err(|_| format!("invalid digit count \"{spec}\"")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_digit_count("1000").unwrap(), 1000);
        assert_eq!(parse_digit_count("1").unwrap(), 1);
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_digit_count("1e6").unwrap(), 1_000_000);
        assert_eq!(parse_digit_count("3E2").unwrap(), 300);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(parse_digit_count("").is_err());
        assert!(parse_digit_count("abc").is_err());
        assert!(parse_digit_count("1e").is_err());
        assert!(parse_digit_count("e6").is_err());
    }

    #[test]
    fn rejects_overflowing_exponent() {
        assert!(parse_digit_count("1e100").is_err());
    }
}
