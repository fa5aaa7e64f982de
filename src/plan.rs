//! # Precision Planner
//!
//! Converts a requested fractional-digit count `N` and output base into a
//! working bit precision `P` and Chudnovsky term count `n` (§4.1).

use crate::base::Base;
use crate::error::PiError;

/// Decimal digits gained per Chudnovsky term (empirical constant).
pub const DPT: f64 = 14.181647462725477;

/// Guard bits held beyond the informational minimum so the formatter's
/// rounding at the last output digit is reliable.
pub const GUARD_BITS: u32 = 64;

#[derive(Clone, Copy, Debug)]
pub struct Plan {
    pub digits: u64,
    pub base: Base,
    /// Working bit precision for the final `rug::Float` assembly.
    pub bits: u32,
    /// Number of Chudnovsky terms to binary-split over, i.e. the evaluator
    /// runs over the index range `[0, terms)`.
    pub terms: u64,
}

impl Plan {
    /// Build a plan for `digits` fractional digits in `base`. `digits` must
    /// be at least 1; the planner does not otherwise bound the request —
    /// an unreasonably large `digits` surfaces as a `rug` allocation abort,
    /// not a `Plan::new` error.
    pub fn new(digits: u64, base: Base) -> Result<Self, PiError> {
        if digits == 0 {
            return Err(PiError::InvalidDigitCount);
        }

        let bits = (digits as f64 * base.log2()).floor() as u32 + GUARD_BITS;
        let terms = (digits as f64 / DPT).ceil() as u64 + 1;

        Ok(Plan { digits, base, bits, terms })
    }
}
