//! # Term Leaf — Single Chudnovsky Series Term
//!
//! Computes the base-case triplet for a single index `k` of the Chudnovsky
//! series for `1/π`:
//!
//! ```text
//! 1/π = 12 · Σ_{k=0}^∞ (-1)^k (6k)! (A + Bk) / ((3k)! (k!)^3 C^(3k+3/2))
//! ```
//!
//! expressed in binary-splitting form as the triplet `(P_k, Q_k, T_k)` with
//! `A = 13591409`, `B = 545140134`, `C³/24 = 10939058860032000`.
//!
//! All arithmetic is exact `rug::Integer` arbitrary precision, so — unlike a
//! mixed machine-int/bignum implementation — there is no separate promotion
//! step needed once `k` grows past 64-bit range; every intermediate is
//! already a bignum.

use rug::ops::Pow;
use rug::Integer;

use crate::triplet::Triplet;

const A: i64 = 13591409;
const B: i64 = 545140134;
/// 640320³ / 24
const C3_24: u64 = 10939058860032000;

/// Compute the triplet for the single-term range `[k, k+1)`.
pub fn leaf(k: u64) -> Triplet {
    if k == 0 {
        return Triplet {
            p: Integer::from(1),
            q: Integer::from(1),
            t: Integer::from(A),
        };
    }

    let k_int = Integer::from(k);

    // P_k = (6k - 5)(2k - 1)(6k - 1)
    let six_k = Integer::from(&k_int * 6);
    let two_k = Integer::from(&k_int * 2);
    let p_k = (Integer::from(&six_k - 5) * Integer::from(&two_k - 1)) * Integer::from(&six_k - 1);

    // Q_k = k³ · C³/24
    let q_k = k_int.clone().pow(3) * Integer::from(C3_24);

    // T_k = P_k · (A + B·k), negated when k is odd
    let mut t_k = (Integer::from(B) * &k_int + A) * &p_k;
    if k % 2 == 1 {
        t_k = -t_k;
    }

    Triplet { p: p_k, q: q_k, t: t_k }
}
