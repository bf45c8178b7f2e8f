//! Inverse circular functions.
//!
//! `atan` folds its argument into [0, tan π/8] through two algebraic
//! identities — `atan(x) = π/2 − atan(1/x)` and
//! `atan(x) = π/4 + atan((x−1)/(x+1))` — then evaluates one odd fit. The
//! regime offsets carry split low parts so the fold costs nothing in the
//! last bits. `atan2`, `asin` and `acos` are algebraic rearrangements on
//! top.

use crate::kernel::bits::{abs, copysign};
use crate::kernel::poly::rational;
use crate::kernel::{c, is_nan, k};
use crate::lane::Lane;
use crate::precision::Precision;

// tan(3π/8), the boundary of the reciprocal fold.
const T3P8: f64 = 2.414213562373095048802;

/// atan(x), branchless over the three regimes.
#[inline(always)]
pub fn atan<L: Lane>(x: L) -> L {
    let one = k::<L>(1.0);
    let ax = abs(x);

    let big = ax.cmp_gt(k(T3P8));
    let mid = ax.cmp_gt(c(<L::Elem as Precision>::ATAN_MID));

    // Fold argument per regime; the big/mid lanes of the unused expressions
    // are finite garbage that the selects discard.
    let arg = L::select(
        big,
        -one / ax,
        L::select(mid, (ax - one) / (ax + one), ax),
    );

    let z = arg * arg;
    let p = z * rational(
        z,
        <L::Elem as Precision>::ATAN_P,
        <L::Elem as Precision>::ATAN_Q,
    );
    let y = arg.mul_add(p, arg);

    // low parts first, while y is still small, then the big offset
    let zero = k(0.0);
    let lo = L::select(
        big,
        c(<L::Elem as Precision>::PIO2_LO),
        L::select(mid, c(<L::Elem as Precision>::PIO4_LO), zero),
    );
    let hi = L::select(
        big,
        k(std::f64::consts::FRAC_PI_2),
        L::select(mid, k(std::f64::consts::FRAC_PI_4), zero),
    );
    let y = (y + lo) + hi;

    // the folded result is ≥ 0; restore the argument's sign bit
    y.or(x.and(k(-0.0)))
}

/// atan2(y, x): the angle of the point (x, y), in (−π, π].
///
/// Almost everything falls out of `atan(y/x)` plus a ±π correction in the
/// left half-plane — IEEE division produces the right signed infinities
/// and zeros for the axis cases. Only 0/0 and ∞/∞ need patching.
#[inline(always)]
pub fn atan2<L: Lane>(y: L, x: L) -> L {
    let zero = k(0.0);
    let pi = k(std::f64::consts::PI);
    let inf = k(f64::INFINITY);

    let w = L::select(x.cmp_lt(zero), copysign(pi, y), zero);
    let r = atan(y / x) + w;

    // 0/0: ±0 for x ≥ +0, ±π when x carries a negative sign bit
    let sm = k::<L>(-0.0);
    let x_neg_bit = L::int_eq_mask(x.and(sm).to_bits(), sm.to_bits());
    let both_zero = y.cmp_eq(zero).and(x.cmp_eq(zero));
    let zero_case = L::select(x_neg_bit, copysign(pi, y), copysign(zero, y));
    let r = L::select(both_zero, zero_case, r);

    // ∞/∞: ±π/4 in the right half-plane, ±3π/4 in the left
    let both_inf = abs(x).cmp_eq(inf).and(abs(y).cmp_eq(inf));
    let quarter = L::select(
        x.cmp_lt(zero),
        k(3.0 * std::f64::consts::FRAC_PI_4),
        k(std::f64::consts::FRAC_PI_4),
    );
    let r = L::select(both_inf, copysign(quarter, y), r);

    L::select(is_nan(x).or(is_nan(y)), k(f64::NAN), r)
}

/// asin(x) = atan(x / √(1 − x²)). NaN outside [−1, 1].
///
/// The fused `1 − x²` keeps the conditioning near ±1; division by the
/// zero at |x| = 1 lands on atan(±∞) = ±π/2 exactly as it should.
#[inline(always)]
pub fn asin<L: Lane>(x: L) -> L {
    let s = (-x).mul_add(x, k(1.0)).sqrt();
    atan(x / s)
}

/// acos(x) = π/2 − asin(x). NaN outside [−1, 1].
#[inline(always)]
pub fn acos<L: Lane>(x: L) -> L {
    k::<L>(std::f64::consts::FRAC_PI_2) - asin(x)
}
