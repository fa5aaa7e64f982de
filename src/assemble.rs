//! # Final Assembler
//!
//! Turns the root triplet `(P_root, Q_root, T_root)` of `[0, n)` into a
//! high-precision `rug::Float` value for π, via
//!
//! ```text
//! π = 426880 · √10005 · Q_root / |T_root|
//! ```
//!
//! `P_root` is unused here — it's an artifact of the combination rule, not
//! of the formula. Every temporary lives at the plan's bit precision `P`;
//! no narrowing is permitted, and the signed `T_root` is taken in absolute
//! value because the alternating series sign is already folded into the
//! magnitude formulation (using the signed value here would flip the sign
//! of the result for odd term counts).

use rug::Float;

use crate::triplet::Triplet;

pub fn assemble(root: &Triplet, bits: u32) -> Float {
    let sqrt_10005 = Float::with_val(bits, 10005).sqrt();
    let q = Float::with_val(bits, &root.q);
    let t_abs = Float::with_val(bits, root.t.clone().abs());

    let mut pi_hat = sqrt_10005 * 426880;
    pi_hat *= q;
    pi_hat /= t_abs;
    pi_hat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bsplit, plan::Plan, base::Base};
    use std::sync::atomic::AtomicU64;

    #[test]
    fn assembled_value_is_close_to_pi() {
        let plan = Plan::new(30, Base::Decimal).unwrap();
        let counter = AtomicU64::new(0);
        let root = bsplit::evaluate(0, plan.terms, plan.terms, &counter, &bsplit::NullSink);
        let pi_hat = assemble(&root, plan.bits);

        let reference = Float::with_val(plan.bits, rug::float::Constant::Pi);
        let diff = Float::with_val(plan.bits, &pi_hat - &reference).abs();
        let epsilon = Float::with_val(plan.bits, 1) >> (plan.bits - 8);
        assert!(diff < epsilon, "assembled pi strayed too far from MPFR's constant");
    }

    #[test]
    fn assembled_value_is_positive() {
        let plan = Plan::new(10, Base::Decimal).unwrap();
        let counter = AtomicU64::new(0);
        let root = bsplit::evaluate(0, plan.terms, plan.terms, &counter, &bsplit::NullSink);
        let pi_hat = assemble(&root, plan.bits);
        assert!(pi_hat > 0);
    }
}
