//! Parallel reductions built on the kernels: quadrature, slice extrema,
//! and ordered merging.
//!
//! Parallel paths accumulate per worker and combine at the end — no shared
//! mutable state, no locks. Extrema ignore NaN lanes the way IEEE
//! min/max do, so a stray NaN poisons nothing.

use rayon::prelude::*;

use crate::precision::Precision;

// 16-point Gauss–Legendre rule on [−1, 1], positive nodes and weights;
// the rule is symmetric, so each node is evaluated on both sides.
const GL_NODES: [f64; 8] = [
    0.0950125098376374,
    0.2816035507792589,
    0.4580167776572274,
    0.6178762444026438,
    0.7554044083550030,
    0.8656312023878318,
    0.9445750230732326,
    0.9894009349916499,
];
const GL_WEIGHTS: [f64; 8] = [
    0.1894506104550685,
    0.1826034150449236,
    0.1691565193950025,
    0.1495959888165767,
    0.1246289712555339,
    0.0951585116824928,
    0.0622535239386479,
    0.0271524594117541,
];

/// ∫ₐᵇ f, by composite 16-point Gauss–Legendre over `panels` equal panels,
/// panels evaluated across the rayon pool.
///
/// Exact (to rounding) for polynomials up to degree 31 per panel; zero
/// panels or an empty interval integrate to 0.
pub fn integrate<F>(f: F, a: f64, b: f64, panels: usize) -> f64
where
    F: Fn(f64) -> f64 + Sync,
{
    if panels == 0 || a == b {
        return 0.0;
    }
    let h = (b - a) / panels as f64;
    (0..panels)
        .into_par_iter()
        .map(|i| {
            let lo = a + h * i as f64;
            panel(&f, lo, lo + h)
        })
        .sum()
}

fn panel<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let mid = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let mut acc = 0.0;
    for (&t, &w) in GL_NODES.iter().zip(&GL_WEIGHTS) {
        acc += w * (f(mid - half * t) + f(mid + half * t));
    }
    half * acc
}

/// Smallest element, NaN lanes skipped. `None` on an empty slice.
pub fn min<P: Precision>(xs: &[P]) -> Option<P> {
    if xs.is_empty() {
        return None;
    }
    Some(
        xs.par_iter()
            .copied()
            .fold(
                || P::infinity(),
                |acc, x| if x < acc { x } else { acc },
            )
            .reduce(|| P::infinity(), |a, b| if b < a { b } else { a }),
    )
}

/// Largest element, NaN lanes skipped. `None` on an empty slice.
pub fn max<P: Precision>(xs: &[P]) -> Option<P> {
    if xs.is_empty() {
        return None;
    }
    Some(
        xs.par_iter()
            .copied()
            .fold(
                || P::neg_infinity(),
                |acc, x| if x > acc { x } else { acc },
            )
            .reduce(|| P::neg_infinity(), |a, b| if b > a { b } else { a }),
    )
}

/// Merges two ascending slices into one ascending vector. NaNs compare
/// false against everything, so they end up trailing whichever input
/// carried them.
pub fn merge_sorted<P: Precision>(a: &[P], b: &[P]) -> Vec<P> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if b[j] < a[i] {
            out.push(b[j]);
            j += 1;
        } else {
            out.push(a[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
