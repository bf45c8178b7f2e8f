//! Cube root.
//!
//! frexp splits off the binary exponent, a low-degree fit seeds cbrt of
//! the mantissa, the exponent is divided by three with the remainder
//! folded in as a constant factor, and two Newton iterations polish the
//! seed to full precision. All in float lanes, no integer division.

use crate::kernel::bits::{abs, apply_exp2, frexp};
use crate::kernel::poly::polevl;
use crate::kernel::{is_nan, k};
use crate::lane::Lane;
use crate::precision::Precision;

// cbrt(2) and cbrt(4), the remainder factors.
const CBRT2: f64 = 1.2599210498948731648;
const CBRT4: f64 = 1.5874010519681994748;

/// cbrt(x), odd over the full range including ±0 and ±Inf.
#[inline(always)]
pub fn cbrt<L: Lane>(x: L) -> L {
    let one = k(1.0);
    let ax = abs(x);
    let (m, e) = frexp(ax);
    let ef = L::from_int(e);

    // seed ≈ cbrt(m) on [0.5, 1)
    let w = polevl(m, <L::Elem as Precision>::CBRT_P);

    // e = 3·e3 + r with r ∈ {0, 1, 2}: floor division done in floats. The
    // half bias keeps 1/3's rounding from pulling exact multiples down.
    let e3 = ((ef + k(0.5)) * k(1.0 / 3.0)).floor();
    let r = e3.mul_add(k(-3.0), ef);
    let scale = L::select(
        r.cmp_eq(k(2.0)),
        k(CBRT4),
        L::select(r.cmp_eq(one), k(CBRT2), one),
    );
    let mut y = apply_exp2(w * scale, e3);

    // two Newton steps: y ← y − (y − ax/y²)/3
    for _ in 0..2 {
        y = y - (y - ax / (y * y)) * k(1.0 / 3.0);
    }

    let y = y.or(x.and(k(-0.0)));
    let y = L::select(x.cmp_eq(k(0.0)), x, y);
    L::select(abs(x).cmp_eq(k(f64::INFINITY)).or(is_nan(x)), x, y)
}
