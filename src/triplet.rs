//! # Triplet — Binary-Splitting State
//!
//! A `Triplet` carries the `(P, Q, T)` partial-sum state of the Chudnovsky
//! binary-splitting recursion over some half-open index range `[a, b)`.
//! `P` and `Q` are always positive; `T` may be negative (the series sign is
//! folded in at the leaf, see `term::leaf`).
//!
//! Combination is associative but not commutative: merging the left triplet
//! over `[a, m)` with the right triplet over `[m, b)` yields
//! `(P1·P2, Q1·Q2, T1·Q2 + P1·T2)`.
//!
//! ## Pluggable multiplication
//!
//! The combine step depends on the `IntMultiplier` trait rather than calling
//! `rug`'s multiplication directly. This is the extension point the design
//! gestures at ("pluggable large-integer multiplication") without committing
//! to a second backend: `GmpMultiplier` is the only implementation, and it
//! just delegates to `rug::Integer`.

use rug::Integer;

/// A single-step large-integer multiplication the evaluator can depend on
/// abstractly. The reference implementation delegates to `rug`/GMP; an
/// asymptotically faster backend (e.g. an NTT-based multiplier) could
/// implement this trait without the evaluator changing at all.
pub trait IntMultiplier: Send + Sync {
    fn mul(&self, a: &Integer, b: &Integer) -> Integer;
}

/// Reference multiplier: delegates straight to GMP via `rug`.
pub struct GmpMultiplier;

impl IntMultiplier for GmpMultiplier {
    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a * b)
    }
}

#[derive(Clone, Debug)]
pub struct Triplet {
    pub p: Integer,
    pub q: Integer,
    pub t: Integer,
}

impl Triplet {
    /// Combine two triplets using the reference (GMP) multiplier.
    pub fn combine(left: Triplet, right: Triplet) -> Triplet {
        Triplet::combine_with(&GmpMultiplier, left, right)
    }

    /// Combine two triplets over adjacent ranges `[a, m)` and `[m, b)`
    /// using the given multiplier.
    pub fn combine_with(mul: &dyn IntMultiplier, left: Triplet, right: Triplet) -> Triplet {
        let Triplet { p: p1, q: q1, t: t1 } = left;
        let Triplet { p: p2, q: q2, t: t2 } = right;

        let t = mul.mul(&t1, &q2) + mul.mul(&p1, &t2);
        let p = mul.mul(&p1, &p2);
        let q = mul.mul(&q1, &q2);

        Triplet { p, q, t }
    }
}
