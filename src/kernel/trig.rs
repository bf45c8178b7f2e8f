//! Circular functions via quadrant reduction.
//!
//! The argument is reduced by the nearest multiple of π/2, subtracted in
//! the three Cody–Waite parts of [`Precision::PIO2_SPLIT`], leaving a
//! residual in [−π/4, π/4] where the sine/cosine fits are a few terms. The
//! quadrant index then picks the right fit and sign per lane — two mask
//! selects instead of the classic switch.
//!
//! Past [`Precision::TRIG_MAX`] the split no longer has enough bits to
//! name the quadrant, and the kernels return NaN rather than a plausible
//! value in the wrong quadrant.

use crate::kernel::bits::abs;
use crate::kernel::poly::{polevl, rational};
use crate::kernel::{c, is_nan, k};
use crate::lane::{IntLane, Lane};
use crate::precision::Precision;

/// Nearest-π/2 reduction: returns the residual and the quadrant index.
#[inline(always)]
fn reduce<L: Lane>(x: L) -> (L, L::Int) {
    let q = (x * k(std::f64::consts::FRAC_2_PI)).round();
    let mut y = x;
    for &p in <L::Elem as Precision>::PIO2_SPLIT {
        y = q.mul_add(L::splat(-p), y);
    }
    (y, q.to_int_round())
}

/// Sine fit on the residual: y + y³·P(y²).
#[inline(always)]
fn sin_fit<L: Lane>(y: L, z: L) -> L {
    (y * z).mul_add(polevl(z, <L::Elem as Precision>::SIN_P), y)
}

/// Cosine fit on the residual: 1 − y²/2 + y⁴·P(y²).
#[inline(always)]
fn cos_fit<L: Lane>(z: L) -> L {
    (z * z).mul_add(
        polevl(z, <L::Elem as Precision>::COS_P),
        z.mul_add(k(-0.5), k(1.0)),
    )
}

/// NaN out the lanes the reduction cannot handle.
#[inline(always)]
fn guard<L: Lane>(x: L, r: L) -> L {
    let bad = abs(x)
        .cmp_gt(c(<L::Elem as Precision>::TRIG_MAX))
        .or(is_nan(x));
    L::select(bad, k(f64::NAN), r)
}

/// sin(x). NaN for |x| > [`Precision::TRIG_MAX`].
#[inline(always)]
pub fn sin<L: Lane>(x: L) -> L {
    let (y, j) = reduce(x);
    let z = y * y;
    let ps = sin_fit(y, z);
    let pc = cos_fit(z);
    // odd quadrants swap to the cosine fit; quadrants 2, 3 negate
    let even = L::int_eq_mask(j.and(L::Int::splat(1)), L::Int::splat(0));
    let r = L::select(even, ps, pc);
    let keep = L::int_eq_mask(j.and(L::Int::splat(2)), L::Int::splat(0));
    let r = L::select(keep, r, -r);
    // the fused reduction turns −0 into +0
    let r = L::select(x.cmp_eq(k(0.0)), x, r);
    guard(x, r)
}

/// cos(x). NaN for |x| > [`Precision::TRIG_MAX`].
#[inline(always)]
pub fn cos<L: Lane>(x: L) -> L {
    let (y, j) = reduce(x);
    let z = y * y;
    let ps = sin_fit(y, z);
    let pc = cos_fit(z);
    // cos(x) = sin(x + π/2): same selects with the quadrant shifted by one
    let even = L::int_eq_mask(j.and(L::Int::splat(1)), L::Int::splat(0));
    let r = L::select(even, pc, ps);
    let jc = j.add(L::Int::splat(1));
    let keep = L::int_eq_mask(jc.and(L::Int::splat(2)), L::Int::splat(0));
    let r = L::select(keep, r, -r);
    guard(x, r)
}

/// tan(x). NaN for |x| > [`Precision::TRIG_MAX`].
#[inline(always)]
pub fn tan<L: Lane>(x: L) -> L {
    let (y, j) = reduce(x);
    let z = y * y;
    let t = (y * z).mul_add(
        rational(
            z,
            <L::Elem as Precision>::TAN_P,
            <L::Elem as Precision>::TAN_Q,
        ),
        y,
    );
    // odd quadrants continue the tangent as −1/t
    let even = L::int_eq_mask(j.and(L::Int::splat(1)), L::Int::splat(0));
    let r = L::select(even, t, -k::<L>(1.0) / t);
    let r = L::select(x.cmp_eq(k(0.0)), x, r);
    guard(x, r)
}
