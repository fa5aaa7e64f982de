//! # Base — Output Radix Selection
//!
//! The engine emits fixed-point digits in decimal or hexadecimal. `Base`
//! is the small enum threaded through the planner, formatter, and CLI to
//! keep "which radix" a type rather than a string compared in three places.

use std::fmt;
use std::str::FromStr;

use crate::error::PiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Decimal,
    Hex,
}

impl Base {
    /// Radix as consumed by `rug`'s string conversions (10 or 16).
    pub fn radix(self) -> i32 {
        match self {
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }

    /// log2(base), the planner's bits-per-digit constant (§4.1).
    pub fn log2(self) -> f64 {
        match self {
            Base::Decimal => 3.32192809488736,
            Base::Hex => 4.0,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Base::Decimal => "dec",
            Base::Hex => "hex",
        })
    }
}

impl FromStr for Base {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, PiError> {
        match s {
            "dec" | "decimal" | "10" => Ok(Base::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hex),
            other => Err(PiError::InvalidBase(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spellings() {
        assert_eq!("dec".parse::<Base>().unwrap(), Base::Decimal);
        assert_eq!("decimal".parse::<Base>().unwrap(), Base::Decimal);
        assert_eq!("hex".parse::<Base>().unwrap(), Base::Hex);
        assert_eq!("hexadecimal".parse::<Base>().unwrap(), Base::Hex);
    }

    #[test]
    fn rejects_unknown_base() {
        assert!(matches!(
            "oct".parse::<Base>(),
            Err(PiError::InvalidBase(s)) if s == "oct"
        ));
    }

    #[test]
    fn radix_matches_spec() {
        assert_eq!(Base::Decimal.radix(), 10);
        assert_eq!(Base::Hex.radix(), 16);
    }
}
