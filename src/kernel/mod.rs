//! Approximation kernels, written once and generic over [`Lane`].
//!
//! Every function here follows the same branch-light recipe: clamp or fold
//! the argument onto the fit interval, evaluate a minimax polynomial or
//! rational from [`crate::precision`], reconstruct, then patch the special
//! lanes (NaN, infinities, signed zero) with a final mask select. Data
//! branches are avoided entirely; the only `if`s are on table shapes, which
//! are compile-time constants per precision.
//!
//! Because the kernels never branch on lane values, instantiating them at
//! width 1 or width 8 produces bitwise-identical results lane for lane.

pub mod atan;
pub mod bits;
pub mod cbrt;
pub mod erf;
pub mod exp;
pub mod hyp;
pub mod log;
pub mod poly;
pub mod trig;

use crate::lane::Lane;
use crate::precision::Precision;

/// Splats an f64 constant, narrowing losslessly-enough when the lane is
/// single precision.
#[inline(always)]
pub(crate) fn k<L: Lane>(v: f64) -> L {
    L::splat(<L::Elem as Precision>::from_f64(v))
}

/// Splats a precision-specific constant.
#[inline(always)]
pub(crate) fn c<L: Lane>(v: L::Elem) -> L {
    L::splat(v)
}

/// All-ones lanes where `x` is NaN (the unordered self-compare).
#[inline(always)]
pub(crate) fn is_nan<L: Lane>(x: L) -> L {
    x.cmp_ne(x)
}
