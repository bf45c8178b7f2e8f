//! Hyperbolic functions and their inverses.
//!
//! All six ride on `expm1`/`exp` and `log1p`/`log` through the standard
//! identities, each arranged so the cancellation-prone region (small
//! arguments) goes through the `m1`/`1p` forms and never subtracts nearly
//! equal exponentials.

use crate::kernel::bits::{abs, copysign};
use crate::kernel::exp::{exp, expm1};
use crate::kernel::log::{log, log1p};
use crate::kernel::{c, k};
use crate::lane::Lane;
use crate::precision::Precision;

// Above this, asinh/acosh switch to log(x) + ln 2; the dropped 1/x² term
// is far below either precision's epsilon there.
const LOG_REGIME: f64 = 1.0e8;

/// sinh(x) = (t + t/(t+1))/2 with t = expm1(|x|).
///
/// The top sliver where `expm1` alone would overflow is computed as
/// exp(|x| − ln 2) instead.
#[inline(always)]
pub fn sinh<L: Lane>(x: L) -> L {
    let one = k(1.0);
    let ax = abs(x);
    let t = expm1(ax);
    let r = k::<L>(0.5) * (t + t / (t + one));

    let near_top = ax.cmp_gt(c::<L>(<L::Elem as Precision>::MAXLOG) - one);
    let r = L::select(near_top, exp(ax - k(std::f64::consts::LN_2)), r);

    copysign(r, x)
}

/// cosh(x) = (t + 1/t)/2 with t = exp(|x|).
#[inline(always)]
pub fn cosh<L: Lane>(x: L) -> L {
    let one = k::<L>(1.0);
    let ax = abs(x);
    let t = exp(ax);
    let r = k::<L>(0.5) * (t + one / t);

    let near_top = ax.cmp_gt(c::<L>(<L::Elem as Precision>::MAXLOG) - one);
    L::select(near_top, exp(ax - k(std::f64::consts::LN_2)), r)
}

/// tanh(x) = −t/(t + 2) with t = expm1(−2|x|); saturates to ±1 exactly.
#[inline(always)]
pub fn tanh<L: Lane>(x: L) -> L {
    let t = expm1(k::<L>(-2.0) * abs(x));
    let r = -t / (t + k(2.0));
    copysign(r, x)
}

/// asinh(x) = log1p(|x| + x²/(1 + √(1 + x²))), sign restored.
#[inline(always)]
pub fn asinh<L: Lane>(x: L) -> L {
    let one = k(1.0);
    let ax = abs(x);
    let a2 = ax * ax;
    let s = (a2 + one).sqrt();
    let r = log1p(ax + a2 / (one + s));

    // past the squaring range: asinh(x) ≈ ln(2x)
    let big = ax.cmp_gt(k(LOG_REGIME));
    let r = L::select(big, log(ax) + k(std::f64::consts::LN_2), r);

    copysign(r, x)
}

/// acosh(x) = log1p(t + √(t² + 2t)) with t = x − 1. NaN below 1.
#[inline(always)]
pub fn acosh<L: Lane>(x: L) -> L {
    let t = x - k(1.0);
    let r = log1p(t + (t * (t + k(2.0))).sqrt());

    let big = x.cmp_gt(k(LOG_REGIME));
    L::select(big, log(x) + k(std::f64::consts::LN_2), r)
}

/// atanh(x) = log1p(2x/(1 − x))/2. ±Inf at ±1, NaN outside.
#[inline(always)]
pub fn atanh<L: Lane>(x: L) -> L {
    k::<L>(0.5) * log1p((x + x) / (k::<L>(1.0) - x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::testutil::assert_ulp_f64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sinh_matches_std() {
        let mut rng = StdRng::seed_from_u64(89);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-700.0..700.0);
            let want = x.sinh();
            if !want.is_finite() {
                continue;
            }
            // expm1's rescaling costs up to ~1.5·|x| ulp
            let tol = 8 + 2 * (x.abs() as u64);
            assert_ulp_f64(sinh::<f64>(x), want, tol, &format!("sinh({x})"));
        }
        assert_eq!(sinh::<f64>(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(sinh::<f64>(-0.0).to_bits(), (-0.0_f64).to_bits());
        assert_eq!(sinh::<f64>(f64::INFINITY), f64::INFINITY);
        assert_eq!(sinh::<f64>(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(sinh::<f64>(1000.0), f64::INFINITY);
        assert!(sinh::<f64>(f64::NAN).is_nan());
    }

    #[test]
    fn sinh_small_keeps_precision() {
        let mut rng = StdRng::seed_from_u64(97);
        for _ in 0..2000 {
            let x: f64 = rng.random_range(-1.0e-3..1.0e-3);
            assert_ulp_f64(sinh::<f64>(x), x.sinh(), 2, &format!("sinh({x})"));
        }
        assert_eq!(sinh::<f64>(1.0e-300), 1.0e-300);
    }

    #[test]
    fn cosh_matches_std() {
        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-700.0..700.0);
            let want = x.cosh();
            if !want.is_finite() {
                continue;
            }
            let tol = 8 + 2 * (x.abs() as u64);
            assert_ulp_f64(cosh::<f64>(x), want, tol, &format!("cosh({x})"));
        }
        assert_eq!(cosh::<f64>(0.0), 1.0);
        assert_eq!(cosh::<f64>(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(cosh::<f64>(-1000.0), f64::INFINITY);
    }

    #[test]
    fn tanh_matches_std() {
        let mut rng = StdRng::seed_from_u64(103);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-25.0..25.0);
            assert_ulp_f64(tanh::<f64>(x), x.tanh(), 4, &format!("tanh({x})"));
        }
        assert_eq!(tanh::<f64>(100.0), 1.0);
        assert_eq!(tanh::<f64>(-100.0), -1.0);
        assert_eq!(tanh::<f64>(f64::INFINITY), 1.0);
        assert_eq!(tanh::<f64>(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(tanh::<f64>(-0.0).to_bits(), (-0.0_f64).to_bits());
        assert!(tanh::<f64>(f64::NAN).is_nan());
    }

    #[test]
    fn asinh_matches_std() {
        let mut rng = StdRng::seed_from_u64(107);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-1.0e6..1.0e6);
            assert_ulp_f64(asinh::<f64>(x), x.asinh(), 6, &format!("asinh({x})"));
        }
        // both sides of the log-regime switch
        for x in [9.0e7, 1.0e8, 1.1e8, 1.0e300] {
            assert_ulp_f64(asinh::<f64>(x), x.asinh(), 6, &format!("asinh({x})"));
        }
        assert_eq!(asinh::<f64>(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(asinh::<f64>(-0.0).to_bits(), (-0.0_f64).to_bits());
        assert_eq!(asinh::<f64>(f64::INFINITY), f64::INFINITY);
        assert_eq!(asinh::<f64>(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn acosh_matches_std() {
        let mut rng = StdRng::seed_from_u64(109);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(1.0..1.0e6);
            assert_ulp_f64(acosh::<f64>(x), x.acosh(), 6, &format!("acosh({x})"));
        }
        for x in [1.5, 1.0e300] {
            assert_ulp_f64(acosh::<f64>(x), x.acosh(), 6, &format!("acosh({x})"));
        }
        // near 1 the log1p form beats std's ln-based acosh, so compare
        // against the series acosh(1+t) = √(2t)·(1 − t/12 + O(t²)), with
        // t taken from the rounded argument
        let x = 1.0 + 1.0e-12_f64;
        let t = x - 1.0;
        let want = (2.0 * t).sqrt() * (1.0 - t / 12.0);
        assert_ulp_f64(acosh::<f64>(x), want, 4, "acosh near 1");
        assert_eq!(acosh::<f64>(1.0), 0.0);
        assert!(acosh::<f64>(0.5).is_nan());
        assert!(acosh::<f64>(-2.0).is_nan());
        assert_eq!(acosh::<f64>(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn atanh_matches_std() {
        let mut rng = StdRng::seed_from_u64(113);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(-0.999..0.999);
            assert_ulp_f64(atanh::<f64>(x), x.atanh(), 6, &format!("atanh({x})"));
        }
        assert_eq!(atanh::<f64>(1.0), f64::INFINITY);
        assert_eq!(atanh::<f64>(-1.0), f64::NEG_INFINITY);
        assert!(atanh::<f64>(1.5).is_nan());
        assert!(atanh::<f64>(-1.01).is_nan());
        assert_eq!(atanh::<f64>(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(atanh::<f64>(-0.0).to_bits(), (-0.0_f64).to_bits());
    }
}
