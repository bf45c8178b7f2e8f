//! NEON lane backend: 4×f32 and 2×f64 (AArch64).
//!
//! Same shape as the AVX2 backend, narrower registers. AArch64 has native
//! i64↔f64 converts and round-to-nearest instructions, so no bit tricks are
//! needed here. Masks come back from the compare intrinsics as unsigned
//! integer vectors; they are reinterpreted into the float lane type so the
//! generic kernels can combine them with the bitwise ops.

use std::arch::aarch64::*;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::lane::{IntLane, Lane};

/// 4 packed f32 lanes in a 128-bit register.
#[derive(Copy, Clone, Debug)]
pub struct F32x4(pub(crate) float32x4_t);

/// 4 packed i32 lanes.
#[derive(Copy, Clone, Debug)]
pub struct I32x4(pub(crate) int32x4_t);

/// 2 packed f64 lanes in a 128-bit register.
#[derive(Copy, Clone, Debug)]
pub struct F64x2(pub(crate) float64x2_t);

/// 2 packed i64 lanes.
#[derive(Copy, Clone, Debug)]
pub struct I64x2(pub(crate) int64x2_t);

impl IntLane for I32x4 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        Self(unsafe { vdupq_n_s32(v as i32) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { vandq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(n as i32)) })
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(unsafe {
            vreinterpretq_s32_u32(vshlq_u32(
                vreinterpretq_u32_s32(self.0),
                vdupq_n_s32(-(n as i32)),
            ))
        })
    }
}

impl IntLane for I64x2 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        Self(unsafe { vdupq_n_s64(v) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_s64_u64(vandq_u64(
                vreinterpretq_u64_s64(self.0),
                vreinterpretq_u64_s64(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(n as i64)) })
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(unsafe {
            vreinterpretq_s64_u64(vshlq_u64(
                vreinterpretq_u64_s64(self.0),
                vdupq_n_s64(-(n as i64)),
            ))
        })
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f32(self.0, rhs.0) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f32(self.0, rhs.0) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f32(self.0, rhs.0) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f32(self.0, rhs.0) })
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { vnegq_f32(self.0) })
    }
}

impl Lane for F32x4 {
    type Elem = f32;
    type Int = I32x4;
    const WIDTH: usize = 4;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        Self(unsafe { vdupq_n_f32(v) })
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        assert!(src.len() >= Self::WIDTH);
        Self(unsafe { vld1q_f32(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        assert!(dst.len() >= Self::WIDTH);
        unsafe { vst1q_f32(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        Self(unsafe { vfmaq_f32(a.0, self.0, m.0) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(unsafe { vsqrtq_f32(self.0) })
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self(unsafe { vrndnq_f32(self.0) })
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self(unsafe { vrndmq_f32(self.0) })
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self(unsafe { vrndq_f32(self.0) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { vminq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f32_u32(vandq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f32_u32(vorrq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f32_u32(veorq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f32_u32(vbicq_u32(
                vreinterpretq_u32_f32(rhs.0),
                vreinterpretq_u32_f32(self.0),
            ))
        })
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vceqq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vmvnq_u32(vceqq_f32(self.0, rhs.0))) })
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vcltq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vcleq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vcgtq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vcgeq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn select(mask: Self, t: Self, f: Self) -> Self {
        Self(unsafe { vbslq_f32(vreinterpretq_u32_f32(mask.0), t.0, f.0) })
    }

    #[inline(always)]
    fn select_int(mask: Self, t: I32x4, f: I32x4) -> I32x4 {
        I32x4(unsafe { vbslq_s32(vreinterpretq_u32_f32(mask.0), t.0, f.0) })
    }

    #[inline(always)]
    fn int_eq_mask(a: I32x4, b: I32x4) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(vceqq_s32(a.0, b.0)) })
    }

    #[inline(always)]
    fn to_bits(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_f32(self.0) })
    }

    #[inline(always)]
    fn from_bits(bits: I32x4) -> Self {
        Self(unsafe { vreinterpretq_f32_s32(bits.0) })
    }

    #[inline(always)]
    fn to_int_round(self) -> I32x4 {
        I32x4(unsafe { vcvtnq_s32_f32(self.0) })
    }

    #[inline(always)]
    fn from_int(i: I32x4) -> Self {
        Self(unsafe { vcvtq_f32_s32(i.0) })
    }
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f64(self.0, rhs.0) })
    }
}

impl Sub for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f64(self.0, rhs.0) })
    }
}

impl Mul for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f64(self.0, rhs.0) })
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f64(self.0, rhs.0) })
    }
}

impl Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { vnegq_f64(self.0) })
    }
}

impl Lane for F64x2 {
    type Elem = f64;
    type Int = I64x2;
    const WIDTH: usize = 2;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        Self(unsafe { vdupq_n_f64(v) })
    }

    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        assert!(src.len() >= Self::WIDTH);
        Self(unsafe { vld1q_f64(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        assert!(dst.len() >= Self::WIDTH);
        unsafe { vst1q_f64(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        Self(unsafe { vfmaq_f64(a.0, self.0, m.0) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(unsafe { vsqrtq_f64(self.0) })
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self(unsafe { vrndnq_f64(self.0) })
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self(unsafe { vrndmq_f64(self.0) })
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self(unsafe { vrndq_f64(self.0) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { vminq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f64_u64(vandq_u64(
                vreinterpretq_u64_f64(self.0),
                vreinterpretq_u64_f64(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f64_u64(vorrq_u64(
                vreinterpretq_u64_f64(self.0),
                vreinterpretq_u64_f64(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f64_u64(veorq_u64(
                vreinterpretq_u64_f64(self.0),
                vreinterpretq_u64_f64(rhs.0),
            ))
        })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f64_u64(vbicq_u64(
                vreinterpretq_u64_f64(rhs.0),
                vreinterpretq_u64_f64(self.0),
            ))
        })
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vceqq_f64(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self {
        // No 64-bit vmvnq; complement through the 32-bit view.
        Self(unsafe {
            vreinterpretq_f64_u32(vmvnq_u32(vreinterpretq_u32_u64(vceqq_f64(
                self.0, rhs.0,
            ))))
        })
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vcltq_f64(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vcleq_f64(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vcgtq_f64(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vcgeq_f64(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn select(mask: Self, t: Self, f: Self) -> Self {
        Self(unsafe { vbslq_f64(vreinterpretq_u64_f64(mask.0), t.0, f.0) })
    }

    #[inline(always)]
    fn select_int(mask: Self, t: I64x2, f: I64x2) -> I64x2 {
        I64x2(unsafe { vbslq_s64(vreinterpretq_u64_f64(mask.0), t.0, f.0) })
    }

    #[inline(always)]
    fn int_eq_mask(a: I64x2, b: I64x2) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(vceqq_s64(a.0, b.0)) })
    }

    #[inline(always)]
    fn to_bits(self) -> I64x2 {
        I64x2(unsafe { vreinterpretq_s64_f64(self.0) })
    }

    #[inline(always)]
    fn from_bits(bits: I64x2) -> Self {
        Self(unsafe { vreinterpretq_f64_s64(bits.0) })
    }

    #[inline(always)]
    fn to_int_round(self) -> I64x2 {
        I64x2(unsafe { vcvtnq_s64_f64(self.0) })
    }

    #[inline(always)]
    fn from_int(i: I64x2) -> Self {
        Self(unsafe { vcvtq_f64_s64(i.0) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_store_roundtrip() {
        let v = [1.5f32, -2.25, 0.0, 3.0e30];
        let mut out = [0.0f32; 4];
        F32x4::load(&v).store(&mut out);
        assert_eq!(out, v);
    }

    #[test]
    fn round_is_ties_even() {
        let v = [-3.5f32, -0.5, 2.5, 3.5];
        let mut out = [0.0f32; 4];
        F32x4::load(&v).round().store(&mut out);
        assert_eq!(out, [-4.0, 0.0, 2.0, 4.0]);
    }
}
