//! Sign-bit and exponent-field primitives.
//!
//! These are the leaves everything else stands on: frexp/ldexp decompose
//! and rebuild the binary exponent with pure integer-lane arithmetic, and
//! the small sign helpers keep the transcendental kernels free of
//! float-compare sign tests.

use crate::kernel::{c, is_nan, k};
use crate::lane::{IntLane, Lane};
use crate::precision::Precision;

/// |x|, clearing the sign bit.
#[inline(always)]
pub fn abs<L: Lane>(x: L) -> L {
    k::<L>(-0.0).andnot(x)
}

/// Magnitude of `mag` with the sign bit of `sgn`.
#[inline(always)]
pub fn copysign<L: Lane>(mag: L, sgn: L) -> L {
    let sm = k::<L>(-0.0);
    sm.andnot(mag).or(sgn.and(sm))
}

/// ±1 carrying the sign bit of `x` (so `sign(-0.0) == -1.0` and NaN yields
/// a unit with NaN's stored sign).
#[inline(always)]
pub fn sign<L: Lane>(x: L) -> L {
    copysign(k(1.0), x)
}

/// Splits `x` into `(m, e)` with `x == m · 2^e` and `|m| ∈ [0.5, 1)`.
///
/// Subnormals are prescaled into the normal range so the exponent field is
/// meaningful; the shift is taken back out of the reported exponent. Zeros,
/// infinities and NaN come back unchanged with an exponent of 0.
#[inline(always)]
pub fn frexp<L: Lane>(x: L) -> (L, L::Int) {
    let mant_bits = <L::Elem as Precision>::MANT_BITS;
    let bias = <L::Elem as Precision>::EXP_BIAS;

    let ax = abs(x);
    let special = x
        .cmp_eq(k(0.0))
        .or(ax.cmp_ge(k(f64::INFINITY)))
        .or(is_nan(x));

    let tiny = ax.cmp_lt(c(<L::Elem as Precision>::MIN_NORMAL));
    let pre = L::from_bits(L::Int::splat((mant_bits as i64 + bias) << mant_bits));
    let xs = L::select(tiny, x * pre, x);

    let bits = xs.to_bits();
    let raw = bits
        .shr(mant_bits)
        .and(L::Int::splat(<L::Elem as Precision>::EXP_FIELD_MASK));
    let e = raw.sub(L::Int::splat(bias - 1));
    let e = L::select_int(tiny, e.sub(L::Int::splat(mant_bits as i64)), e);

    // Pin the exponent field at bias−1 so the mantissa lands in [0.5, 1).
    // The field is zeroed first, so the add cannot carry.
    let keep = !(<L::Elem as Precision>::EXP_FIELD_MASK << mant_bits);
    let half_exp = (bias - 1) << mant_bits;
    let m = L::from_bits(bits.and(L::Int::splat(keep)).add(L::Int::splat(half_exp)));

    (
        L::select(special, x, m),
        L::select_int(special, L::Int::splat(0), e),
    )
}

/// 2^n for integral `n` inside the normal exponent range, built directly in
/// the exponent field.
#[inline(always)]
fn pow2<L: Lane>(n: L) -> L {
    let bits = n
        .to_int_round()
        .add(L::Int::splat(<L::Elem as Precision>::EXP_BIAS))
        .shl(<L::Elem as Precision>::MANT_BITS);
    L::from_bits(bits)
}

/// `m · 2^n` for integral `n`, saturating to 0/Inf past the format's range.
///
/// The scale is applied in two halves so each half is a normal power of two
/// even when `n` itself would be out of range; the sequential products then
/// overflow or underflow exactly where the true result would.
#[inline(always)]
pub(crate) fn apply_exp2<L: Lane>(m: L, n: L) -> L {
    let clamp = c::<L>(<L::Elem as Precision>::SCALE_CLAMP);
    let n = n.min(clamp).max(-clamp);
    let n1 = (n * k(0.5)).trunc();
    let n2 = n - n1;
    (m * pow2(n1)) * pow2(n2)
}

/// `m · 2^e` with saturation, the inverse of [`frexp`].
#[inline(always)]
pub fn ldexp<L: Lane>(m: L, e: L::Int) -> L {
    apply_exp2(m, L::from_int(e))
}

/// √(x² + y²) without intermediate overflow or underflow.
///
/// The larger magnitude is factored out so the squared ratio stays in
/// [0, 1]. An infinite leg dominates even a NaN in the other, per IEEE.
#[inline(always)]
pub fn hypot<L: Lane>(x: L, y: L) -> L {
    let zero = k(0.0);
    let inf = k(f64::INFINITY);

    let ax = abs(x);
    let ay = abs(y);
    let hi = ax.max(ay);
    let lo = ax.min(ay);

    let r = lo / hi;
    let h = hi * r.mul_add(r, k(1.0)).sqrt();

    let h = L::select(hi.cmp_eq(zero), zero, h);
    let h = L::select(is_nan(x).or(is_nan(y)), k(f64::NAN), h);
    L::select(ax.cmp_eq(inf).or(ay.cmp_eq(inf)), inf, h)
}

/// Floating-point remainder `x − trunc(x/y)·y`, sign following `x`.
///
/// Once |x/y| exceeds 1/ε the quotient has no fractional bits left and the
/// subtraction carries no information; those lanes are pinned to half the
/// divisor magnitude instead of returning noise.
#[inline(always)]
pub fn fmod<L: Lane>(x: L, y: L) -> L {
    let inf = k::<L>(f64::INFINITY);
    let q = x / y;
    let r = (-q.trunc()).mul_add(y, x);
    // 1/ε = 2^mant: past it the quotient has no fractional bits. An
    // infinite quotient (x infinite or y zero) must stay NaN, so the pin
    // applies to finite lanes only.
    let no_frac = k::<L>((1_u64 << <L::Elem as Precision>::MANT_BITS) as f64);
    let huge = abs(q).cmp_gt(no_frac).and(abs(q).cmp_lt(inf));
    let r = L::select(huge, copysign(k::<L>(0.5) * abs(y), x), r);
    // finite x mod ±Inf is x; the fused 0·Inf above would say NaN
    let y_inf = abs(y).cmp_eq(inf);
    L::select(y_inf.and(abs(x).cmp_lt(inf)), x, r)
}
