//! Polynomial and rational evaluation over lanes.
//!
//! Coefficients are stored highest degree first. [`polevl`] is the plain
//! fused-Horner ladder; [`p1evl`] assumes an implicit leading coefficient of
//! one, as the denominator tables do; [`estrin`] is an interchangeable
//! evaluation strategy that trades a few extra multiplies for a shorter
//! dependency chain on wide lanes.

use crate::kernel::k;
use crate::lane::Lane;

/// Evaluates `coeffs[0]·x^(n-1) + … + coeffs[n-1]` by Horner's rule with
/// fused multiply-adds.
///
/// # Panics
///
/// Panics if `coeffs` is empty.
#[inline(always)]
pub fn polevl<L: Lane>(x: L, coeffs: &[L::Elem]) -> L {
    let mut acc = L::splat(coeffs[0]);
    for &c in &coeffs[1..] {
        acc = acc.mul_add(x, L::splat(c));
    }
    acc
}

/// Like [`polevl`] with an implicit leading coefficient of 1, so
/// `p1evl(x, &[])` is the constant 1. Rational fits that degenerate to a
/// plain polynomial in one precision publish an empty denominator and fall
/// through this identity.
#[inline(always)]
pub fn p1evl<L: Lane>(x: L, coeffs: &[L::Elem]) -> L {
    let mut acc = k::<L>(1.0);
    for &c in coeffs {
        acc = acc.mul_add(x, L::splat(c));
    }
    acc
}

/// `polevl(x, p) / p1evl(x, q)`, with the empty-`q` case skipping the
/// division entirely.
#[inline(always)]
pub fn rational<L: Lane>(x: L, p: &[L::Elem], q: &[L::Elem]) -> L {
    let num = polevl(x, p);
    if q.is_empty() {
        num
    } else {
        num / p1evl(x, q)
    }
}

/// Estrin's scheme over the same highest-first coefficient layout as
/// [`polevl`]. Mathematically identical, shorter critical path; results can
/// differ from Horner in the last ulp, so the shipped kernels pick one
/// strategy per function and stay with it.
///
/// # Panics
///
/// Panics if `coeffs` is empty or longer than 16.
#[inline(always)]
pub fn estrin<L: Lane>(x: L, coeffs: &[L::Elem]) -> L {
    assert!(!coeffs.is_empty() && coeffs.len() <= 16);
    let mut terms = [k::<L>(0.0); 16];
    for (t, &c) in terms.iter_mut().zip(coeffs.iter().rev()) {
        *t = L::splat(c);
    }
    let mut n = coeffs.len();
    let mut pw = x;
    while n > 1 {
        let half = n / 2;
        for i in 0..half {
            terms[i] = terms[2 * i + 1].mul_add(pw, terms[2 * i]);
        }
        if n % 2 == 1 {
            terms[half] = terms[n - 1];
        }
        n = half + n % 2;
        pw = pw * pw;
    }
    terms[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::testutil::assert_ulp_f64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn polevl_matches_direct_horner() {
        let coeffs = [3.0_f64, -2.0, 0.5, 7.0];
        let x = 1.25_f64;
        let direct = ((3.0 * x - 2.0) * x + 0.5) * x + 7.0;
        // mul_add vs separate multiply-add may differ in the last ulp
        assert_ulp_f64(polevl::<f64>(x, &coeffs), direct, 1, "polevl");
    }

    #[test]
    fn p1evl_prepends_unit_coefficient() {
        let coeffs = [4.0_f64, -1.0];
        let x = 0.75_f64;
        let want = (x + 4.0) * x - 1.0;
        assert_ulp_f64(p1evl::<f64>(x, &coeffs), want, 1, "p1evl");
    }

    #[test]
    fn p1evl_empty_is_one() {
        assert_eq!(p1evl::<f64>(123.456, &[]), 1.0);
    }

    #[test]
    fn rational_with_empty_denominator_is_polynomial() {
        let p = [2.0_f64, 1.0];
        let x = 3.0_f64;
        assert_eq!(rational::<f64>(x, &p, &[]), polevl::<f64>(x, &p));
    }

    #[test]
    fn estrin_agrees_with_horner() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=13 {
            let coeffs: Vec<f64> = (0..len).map(|_| rng.random_range(-2.0..2.0)).collect();
            for _ in 0..50 {
                let x: f64 = rng.random_range(-1.5..1.5);
                let h = polevl::<f64>(x, &coeffs);
                let e = estrin::<f64>(x, &coeffs);
                // both schemes are accurate relative to the largest term,
                // not to the (possibly heavily cancelled) sum
                let scale = coeffs
                    .iter()
                    .rev()
                    .enumerate()
                    .map(|(i, c)| (c * x.powi(i as i32)).abs())
                    .fold(1.0_f64, f64::max);
                assert!(
                    (e - h).abs() <= 4.0e-14 * scale,
                    "estrin deg {} at {x}: {e} vs {h}",
                    len - 1
                );
            }
        }
    }
}
