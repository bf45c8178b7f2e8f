//! Base-2 exponential and everything derived from it.
//!
//! `exp2` is the primary kernel: its range reduction is exact (the reduced
//! argument is `x - round(x)`), so every other exponential is a rescaled
//! argument away. The final scaling goes through
//! [`crate::kernel::bits::apply_exp2`], which saturates to 0/Inf in the
//! right places without any branching.

use crate::kernel::bits::{abs, apply_exp2};
use crate::kernel::log::log2;
use crate::kernel::poly::{p1evl, polevl};
use crate::kernel::{c, is_nan, k};
use crate::lane::Lane;
use crate::precision::Precision;

/// 2^x. Exact on integers; overflows to Inf above
/// [`Precision::EXP2_MAX`], underflows to 0 below [`Precision::EXP2_MIN`].
#[inline(always)]
pub fn exp2<L: Lane>(x: L) -> L {
    let one = k(1.0);
    // Clamp just past the saturation thresholds so the reduced argument
    // stays sane on lanes that are going to 0/Inf anyway.
    let xc = x
        .min(c::<L>(<L::Elem as Precision>::EXP2_MAX) + one)
        .max(c::<L>(<L::Elem as Precision>::EXP2_MIN) - one);
    let n = xc.round();
    let f = xc - n;

    let p = <L::Elem as Precision>::EXP2_P;
    let q = <L::Elem as Precision>::EXP2_Q;
    let r0 = if q.is_empty() {
        f.mul_add(polevl(f, p), one)
    } else {
        // Rational form 1 + 2u/(v − u) keeps the fit symmetric in f.
        let z = f * f;
        let u = f * polevl(z, p);
        let v = p1evl(z, q);
        (k::<L>(2.0) * u / (v - u)) + one
    };

    let r = apply_exp2(r0, n);
    L::select(is_nan(x), x, r)
}

/// e^x via `exp2(x · log2 e)`.
#[inline(always)]
pub fn exp<L: Lane>(x: L) -> L {
    exp2(x * k(std::f64::consts::LOG2_E))
}

/// 10^x via `exp2(x · log2 10)`.
#[inline(always)]
pub fn exp10<L: Lane>(x: L) -> L {
    exp2(x * k(std::f64::consts::LOG2_10))
}

/// e^x − 1, accurate down to the last ulp for tiny x where `exp(x) - 1.0`
/// would lose everything to cancellation.
#[inline(always)]
pub fn expm1<L: Lane>(x: L) -> L {
    let one = k(1.0);
    // Below roughly −55·ln2 the answer is −1 to the last bit; the clamp
    // keeps the scale construction in range on those lanes.
    let xc = x.min(c::<L>(<L::Elem as Precision>::MAXLOG)).max(k(-80.0));

    let n = (xc * k(std::f64::consts::LOG2_E)).round();
    let f = n.mul_add(-c::<L>(<L::Elem as Precision>::LN2_HI), xc);
    let f = n.mul_add(-c::<L>(<L::Elem as Precision>::LN2_LO), f);

    let f2 = f * f;
    let w = (f2 * f).mul_add(
        polevl(f, <L::Elem as Precision>::EXPM1_P),
        f2.mul_add(k(0.5), f),
    );

    // expm1(x) = 2^n · w + (2^n − 1), which keeps the small part exact.
    // In the top sliver 2^n alone is already Inf while e^x is still
    // finite, so those lanes fold the +1 into the scaled product instead;
    // no cancellation there, the result is astronomically larger than 1.
    let split = apply_exp2(w, n) + (apply_exp2(one, n) - one);
    let folded = apply_exp2(w + one, n) - one;
    let top = xc.cmp_gt(c::<L>(<L::Elem as Precision>::MAXLOG) - one);
    let r = L::select(top, folded, split);
    // past MAXLOG the clamp froze xc, but e^x itself has overflowed
    let r = L::select(
        x.cmp_gt(c::<L>(<L::Elem as Precision>::MAXLOG)),
        k(f64::INFINITY),
        r,
    );
    let r = L::select(x.cmp_eq(k(0.0)), x, r); // keeps −0 signed
    let r = L::select(x.cmp_eq(k(f64::INFINITY)), x, r);
    L::select(is_nan(x), x, r)
}

/// x^y via `exp2(y · log2 |x|)` with IEEE edge handling.
///
/// Negative bases require an integer exponent (odd ones flip the sign);
/// anything else is NaN. `pow(x, 0)` and `pow(1, y)` are 1 for every x and
/// y, NaN included.
#[inline(always)]
pub fn pow<L: Lane>(x: L, y: L) -> L {
    let zero = k(0.0);
    let one = k(1.0);

    let r = exp2(y * log2(abs(x)));

    let y_int = y.trunc().cmp_eq(y);
    let yh = y * k(0.5);
    let y_odd = y_int.and(yh.trunc().cmp_ne(yh));
    let signed = L::select(y_odd, -r, r);

    let r = L::select(x.cmp_lt(zero), L::select(y_int, signed, k(f64::NAN)), r);
    let r = L::select(y.cmp_eq(zero), one, r);
    L::select(x.cmp_eq(one), one, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::testutil::{assert_ulp_f32, assert_ulp_f64};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn exp2_exact_on_integers() {
        for e in -1022..=1023_i32 {
            let got = exp2::<f64>(e as f64);
            assert_eq!(got, 2.0_f64.powi(e), "exp2({e})");
        }
        for e in -126..=127_i32 {
            let got = exp2::<f32>(e as f32);
            assert_eq!(got, 2.0_f32.powi(e), "exp2f({e})");
        }
    }

    #[test]
    fn exp2_saturation() {
        assert_eq!(exp2::<f64>(1025.0), f64::INFINITY);
        assert_eq!(exp2::<f64>(-1100.0), 0.0);
        assert_eq!(exp2::<f64>(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp2::<f64>(f64::NEG_INFINITY), 0.0);
        assert!(exp2::<f64>(f64::NAN).is_nan());
        assert_eq!(exp2::<f32>(129.0), f32::INFINITY);
        assert_eq!(exp2::<f32>(-151.0), 0.0);
    }

    #[test]
    fn exp_matches_std() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-700.0..700.0);
            // the argument rescaling costs up to ~1.5·|x| ulp on top of
            // the fit (rounding of x·log2e, scaled back by ln 2)
            let tol = 4 + 2 * (x.abs() as u64);
            assert_ulp_f64(exp::<f64>(x), x.exp(), tol, &format!("exp({x})"));
        }
        for _ in 0..2000 {
            let x: f32 = rng.random_range(-80.0..80.0);
            let tol = 4 + 2 * (x.abs() as u32);
            assert_ulp_f32(exp::<f32>(x), x.exp(), tol, &format!("expf({x})"));
        }
    }

    #[test]
    fn exp10_spot_values() {
        assert_ulp_f64(exp10::<f64>(3.0), 1000.0, 8, "exp10(3)");
        assert_ulp_f64(exp10::<f64>(-5.0), 1.0e-5, 8, "exp10(-5)");
        assert_eq!(exp10::<f64>(400.0), f64::INFINITY);
        assert_eq!(exp10::<f64>(-400.0), 0.0);
    }

    #[test]
    fn expm1_small_arguments() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-0.5..0.5);
            assert_ulp_f64(expm1::<f64>(x), x.exp_m1(), 2, &format!("expm1({x})"));
        }
        // where exp(x) - 1 would cancel completely
        assert_eq!(expm1::<f64>(1.0e-300), 1.0e-300);
        assert_eq!(expm1::<f64>(0.0), 0.0);
        assert_eq!(expm1::<f64>(-0.0).to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn expm1_wide_range() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..2000 {
            let x: f64 = rng.random_range(-50.0..700.0);
            let tol = 8 + 2 * (x.abs() as u64);
            assert_ulp_f64(expm1::<f64>(x), x.exp_m1(), tol, &format!("expm1({x})"));
        }
        // finite arguments past the overflow threshold
        assert_eq!(expm1::<f64>(710.0), f64::INFINITY);
        assert_eq!(expm1::<f64>(800.0), f64::INFINITY);
        assert_eq!(expm1::<f64>(f64::MAX), f64::INFINITY);
        assert_eq!(expm1::<f32>(89.0), f32::INFINITY);
        assert_eq!(expm1::<f64>(-1000.0), -1.0);
        assert_eq!(expm1::<f64>(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1::<f64>(f64::INFINITY), f64::INFINITY);
        assert!(expm1::<f64>(f64::NAN).is_nan());
    }

    #[test]
    fn pow_integer_cases() {
        assert_eq!(pow::<f64>(2.0, 10.0), 1024.0);
        assert_eq!(pow::<f64>(-2.0, 3.0), -8.0);
        assert_eq!(pow::<f64>(-2.0, 4.0), 16.0);
        assert_eq!(pow::<f64>(-3.0, 0.0), 1.0);
    }

    #[test]
    fn pow_ieee_edges() {
        assert_eq!(pow::<f64>(f64::NAN, 0.0), 1.0);
        assert_eq!(pow::<f64>(1.0, f64::NAN), 1.0);
        assert!(pow::<f64>(-2.0, 0.5).is_nan());
        assert_eq!(pow::<f64>(0.0, 3.0), 0.0);
        assert_eq!(pow::<f64>(0.0, -2.0), f64::INFINITY);
        assert_eq!(pow::<f64>(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(pow::<f64>(0.5, f64::INFINITY), 0.0);
        assert_eq!(pow::<f64>(2.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn pow_matches_std_on_positive_bases() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(0.01..100.0);
            let y: f64 = rng.random_range(-20.0..20.0);
            let want = x.powf(y);
            if !want.is_finite() {
                continue;
            }
            // error compounds through log2 then exp2
            let tol = 16 + (y * x.log2()).abs() as u64 * 2;
            assert_ulp_f64(pow::<f64>(x, y), want, tol, &format!("pow({x}, {y})"));
        }
    }
}
