//! Lane-operations capability shared by scalars and SIMD vectors.
//!
//! Every approximation kernel in this crate is written exactly once, generic
//! over [`Lane`]. A lane type is `WIDTH` same-precision floats processed
//! together with no cross-lane dependency: plain `f32`/`f64` are the
//! width-1 instantiation, and the backend modules provide 256-bit AVX2 and
//! 128-bit NEON instantiations behind the build-script cfg flags. Because
//! all widths execute the identical generic code, every lane of a vector
//! call produces the same bits as the scalar call.
//!
//! The trait surface mirrors what the kernels actually need and nothing
//! more: splat/load/store, arithmetic with fused multiply-add, rounding,
//! bitwise operations on the lane bit patterns, mask-producing comparisons
//! with branchless select, and a small integer companion ([`IntLane`]) for
//! exponent-field manipulation.
//!
//! Masks are represented in the lane type itself (all-ones or all-zero bit
//! patterns per lane), matching how the hardware compare instructions work;
//! a mask must only ever be consumed by `select`/`select_int` or combined
//! with the bitwise ops.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::precision::Precision;

mod scalar;

#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

/// Integer lanes matching a float lane type's width and element size.
///
/// Only the operations the bit-decomposition kernels need: shifts are by a
/// uniform runtime count, `shr` is logical (every use masks the result, so
/// sign extension is irrelevant), and arithmetic wraps.
pub trait IntLane: Copy {
    fn splat(v: i64) -> Self;
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn and(self, rhs: Self) -> Self;
    fn shl(self, n: u32) -> Self;
    fn shr(self, n: u32) -> Self;
}

/// `WIDTH` floats of one precision processed together.
pub trait Lane:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Element precision (`f32` or `f64`).
    type Elem: Precision;
    /// Same-width integer lanes for exponent/bit work.
    type Int: IntLane;
    /// Number of lanes.
    const WIDTH: usize;

    fn splat(v: Self::Elem) -> Self;

    /// Loads `WIDTH` elements from the front of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() < WIDTH`.
    fn load(src: &[Self::Elem]) -> Self;

    /// Stores `WIDTH` elements to the front of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst.len() < WIDTH`.
    fn store(self, dst: &mut [Self::Elem]);

    /// Fused `self * m + a`, a single rounding.
    fn mul_add(self, m: Self, a: Self) -> Self;
    fn sqrt(self) -> Self;
    /// Round to nearest, ties to even (the hardware default).
    fn round(self) -> Self;
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;

    // Bitwise on the float bit patterns.
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    /// `!self & rhs`, the andnot of the x86 intrinsics.
    fn andnot(self, rhs: Self) -> Self;

    // Comparisons yield all-ones/all-zero lane masks. NaN compares false
    // except through `cmp_ne`, which is the unordered not-equal.
    fn cmp_eq(self, rhs: Self) -> Self;
    fn cmp_ne(self, rhs: Self) -> Self;
    fn cmp_lt(self, rhs: Self) -> Self;
    fn cmp_le(self, rhs: Self) -> Self;
    fn cmp_gt(self, rhs: Self) -> Self;
    fn cmp_ge(self, rhs: Self) -> Self;

    /// Per-lane `mask ? t : f`.
    fn select(mask: Self, t: Self, f: Self) -> Self;
    /// Per-lane `mask ? t : f` on the integer companion.
    fn select_int(mask: Self, t: Self::Int, f: Self::Int) -> Self::Int;
    /// All-ones lanes where the integer lanes are equal.
    fn int_eq_mask(a: Self::Int, b: Self::Int) -> Self;

    /// Reinterpret the float bit patterns as integer lanes.
    fn to_bits(self) -> Self::Int;
    /// Reinterpret integer lanes as float bit patterns.
    fn from_bits(bits: Self::Int) -> Self;
    /// Convert to integers, rounding to nearest even.
    ///
    /// Defined for magnitudes well inside the integer range; the kernels
    /// only convert clamped exponents and quadrant indices.
    fn to_int_round(self) -> Self::Int;
    /// Convert integer lanes to floats.
    fn from_int(i: Self::Int) -> Self;
}
