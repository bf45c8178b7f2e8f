//! Error function and its complement.
//!
//! Three regimes share two rational families: a direct odd fit in x² for
//! |x| ≤ 1, and two rationals in x scaled by exp(−x²) for the tail,
//! splitting at x = 8. The exp(−x²) factor underflows to zero exactly
//! where erfc does, so the far tail needs no explicit clamp; the negative
//! side folds through erfc(−x) = 2 − erfc(x).

use crate::kernel::bits::{abs, copysign};
use crate::kernel::exp::exp;
use crate::kernel::poly::rational;
use crate::kernel::k;
use crate::lane::Lane;
use crate::precision::Precision;

/// erfc(ax) for ax ≥ 1: exp(−ax²) · R(ax), regime split at 8.
#[inline(always)]
fn erfc_tail<L: Lane>(ax: L) -> L {
    let ez = exp(-(ax * ax));
    // exp(−ax²) is already 0 well before 30; clamping the rational argument
    // keeps infinite lanes from producing Inf/Inf instead of 0·finite
    let axc = ax.min(k(30.0));
    let near = rational(
        axc,
        <L::Elem as Precision>::ERFC_P,
        <L::Elem as Precision>::ERFC_Q,
    );
    let far = rational(
        axc,
        <L::Elem as Precision>::ERFC_R,
        <L::Elem as Precision>::ERFC_S,
    );
    ez * L::select(ax.cmp_lt(k(8.0)), near, far)
}

/// Direct fit x·R(x²) for |x| ≤ 1.
#[inline(always)]
fn erf_core<L: Lane>(x: L) -> L {
    let z = x * x;
    x * rational(
        z,
        <L::Elem as Precision>::ERF_P,
        <L::Elem as Precision>::ERF_Q,
    )
}

/// erf(x), odd, saturating to ±1.
#[inline(always)]
pub fn erf<L: Lane>(x: L) -> L {
    let ax = abs(x);
    let small = ax.cmp_le(k(1.0));
    let tail = copysign(k::<L>(1.0) - erfc_tail(ax), x);
    L::select(small, erf_core(x), tail)
}

/// erfc(x) = 1 − erf(x), keeping relative accuracy in the positive tail
/// where erf rounds to 1. Saturates to 0 (or 2 on the negative side) once
/// x² exceeds [`Precision::MAXLOG`].
#[inline(always)]
pub fn erfc<L: Lane>(x: L) -> L {
    let zero = k(0.0);
    let ax = abs(x);
    let small = ax.cmp_lt(k(1.0));

    let near_one = k::<L>(1.0) - erf_core(x);
    let core = erfc_tail(ax);
    let tail = L::select(x.cmp_lt(zero), k::<L>(2.0) - core, core);

    L::select(small, near_one, tail)
}
