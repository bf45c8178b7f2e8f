//! Base-2 logarithm and everything derived from it.
//!
//! `log2` is the primary kernel: [`crate::kernel::bits::frexp`] peels the
//! exponent off exactly, the mantissa is folded into [√½, √2) so the fit
//! argument `m − 1` is small and well conditioned, and the exponent comes
//! back as an exact integer add. Natural and decimal logs are constant
//! multiples; `log1p` shares the same core fit evaluated directly on the
//! offset, dodging the `1 + u` rounding for small `u`.

use crate::kernel::bits::{abs, frexp};
use crate::kernel::poly::rational;
use crate::kernel::{c, k};
use crate::lane::Lane;
use crate::precision::Precision;

/// ln(1 + u) for |u| inside the fold interval: u − u²/2 + u³·R(u).
#[inline(always)]
fn log_core<L: Lane>(u: L) -> L {
    let u2 = u * u;
    let r = u2
        * u
        * rational(
            u,
            <L::Elem as Precision>::LOG_P,
            <L::Elem as Precision>::LOG_Q,
        );
    u2.mul_add(k(-0.5), r) + u
}

/// log₂(x). Negative arguments are NaN, `log2(0)` is −Inf.
#[inline(always)]
pub fn log2<L: Lane>(x: L) -> L {
    let one = k(1.0);
    let (m, e) = frexp(x);
    let ef = L::from_int(e);

    // Fold [0.5, 1) into [√½, √2) so the fit argument straddles zero.
    let small = m.cmp_lt(k(std::f64::consts::FRAC_1_SQRT_2));
    let m = L::select(small, m + m, m);
    let ef = L::select(small, ef - one, ef);

    let w = log_core(m - one);
    // log2(m) = w·log2(e) = w + w·(log2(e) − 1); adding the exact integer
    // exponent last keeps it from absorbing the small part.
    let r = w.mul_add(c(<L::Elem as Precision>::LOG2EA), w) + ef;

    let r = L::select(x.cmp_eq(k(0.0)), k(f64::NEG_INFINITY), r);
    let r = L::select(x.cmp_lt(k(0.0)), k(f64::NAN), r);
    L::select(x.cmp_eq(k(f64::INFINITY)), x, r)
}

/// Natural log, `log2(x) · ln 2` with the constant split hi/lo.
#[inline(always)]
pub fn log<L: Lane>(x: L) -> L {
    let y = log2(x);
    let r = y.mul_add(
        c(<L::Elem as Precision>::LN2_HI),
        y * c(<L::Elem as Precision>::LN2_LO),
    );
    // the hi/lo recombination turns ±Inf into NaN; restore them
    let r = L::select(x.cmp_eq(k(0.0)), k(f64::NEG_INFINITY), r);
    L::select(x.cmp_eq(k(f64::INFINITY)), x, r)
}

/// log₁₀(x).
#[inline(always)]
pub fn log10<L: Lane>(x: L) -> L {
    log2(x) * k(std::f64::consts::LOG10_2)
}

/// ln(1 + u) without forming 1 + u for small u.
///
/// Inside |u| < 1 − √½ the core fit applies directly; outside, `1 + u` is
/// far enough from 1 that the general log loses nothing.
#[inline(always)]
pub fn log1p<L: Lane>(u: L) -> L {
    let direct = log_core(u);
    let general = log(k::<L>(1.0) + u);
    L::select(abs(u).cmp_lt(k(0.2928932188134525)), direct, general)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::testutil::{assert_ulp_f32, assert_ulp_f64};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn log2_exact_on_powers_of_two() {
        for e in -1022..=1023_i32 {
            let x = 2.0_f64.powi(e);
            assert_eq!(log2::<f64>(x), e as f64, "log2(2^{e})");
        }
        assert_eq!(log2::<f64>(1.0), 0.0);
    }

    #[test]
    fn log2_matches_std() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(1.0e-300_f64..1.0e300);
            assert_ulp_f64(log2::<f64>(x), x.log2(), 4, &format!("log2({x:e})"));
        }
        for _ in 0..2000 {
            let x: f32 = rng.random_range(1.0e-30_f32..1.0e30);
            assert_ulp_f32(log2::<f32>(x), x.log2(), 4, &format!("log2f({x:e})"));
        }
    }

    #[test]
    fn log2_specials() {
        assert_eq!(log2::<f64>(0.0), f64::NEG_INFINITY);
        assert_eq!(log2::<f64>(-0.0), f64::NEG_INFINITY);
        assert!(log2::<f64>(-1.0).is_nan());
        assert_eq!(log2::<f64>(f64::INFINITY), f64::INFINITY);
        assert!(log2::<f64>(f64::NAN).is_nan());
        // subnormal arguments still report the true exponent
        assert_eq!(log2::<f64>(f64::from_bits(1)), -1074.0);
    }

    #[test]
    fn log_matches_std() {
        let mut rng = StdRng::seed_from_u64(37);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(1.0e-10_f64..1.0e10);
            assert_ulp_f64(log::<f64>(x), x.ln(), 6, &format!("log({x:e})"));
        }
        assert_eq!(log::<f64>(0.0), f64::NEG_INFINITY);
        assert_eq!(log::<f64>(f64::INFINITY), f64::INFINITY);
        assert!(log::<f64>(-1.0).is_nan());
        assert_eq!(log::<f64>(1.0), 0.0);
    }

    #[test]
    fn log10_matches_std() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..4000 {
            let x: f64 = rng.random_range(1.0e-10_f64..1.0e10);
            assert_ulp_f64(log10::<f64>(x), x.log10(), 6, &format!("log10({x:e})"));
        }
        assert_ulp_f64(log10::<f64>(1000.0), 3.0, 2, "log10(1000)");
    }

    #[test]
    fn log1p_small_arguments() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..4000 {
            let u: f64 = rng.random_range(-0.28..0.28);
            assert_ulp_f64(log1p::<f64>(u), u.ln_1p(), 2, &format!("log1p({u})"));
        }
        assert_eq!(log1p::<f64>(1.0e-300), 1.0e-300);
        assert_eq!(log1p::<f64>(0.0), 0.0);
    }

    #[test]
    fn log1p_general_and_edges() {
        let mut rng = StdRng::seed_from_u64(47);
        for _ in 0..2000 {
            let u: f64 = rng.random_range(-0.99..1.0e6);
            assert_ulp_f64(log1p::<f64>(u), u.ln_1p(), 8, &format!("log1p({u})"));
        }
        assert_eq!(log1p::<f64>(-1.0), f64::NEG_INFINITY);
        assert!(log1p::<f64>(-1.5).is_nan());
        assert_eq!(log1p::<f64>(f64::INFINITY), f64::INFINITY);
    }
}
