//! AVX2 lane backend: 8×f32 and 4×f64.
//!
//! Thin wrappers over the 256-bit intrinsics. The build script only sets the
//! `avx2` cfg when it also enables `+avx2,+avx,+fma` codegen, so every
//! intrinsic used here is compiled for a CPU that has it; the `unsafe`
//! blocks are the usual intrinsic formality.
//!
//! The f64 integer conversions use the classic 2^52+2^51 magic-constant
//! trick because AVX2 has no packed i64↔f64 converts. That limits them to
//! magnitudes below 2^51, which covers every conversion the kernels perform
//! (clamped exponents and quadrant indices).

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::lane::{IntLane, Lane};

const NEAREST: i32 = _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC;
const TRUNCATE: i32 = _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC;

/// Round-to-nearest pivot for i64↔f64 bit tricks: 2^52 + 2^51.
const F64_MAGIC: f64 = 6755399441055744.0;

/// 8 packed f32 lanes in a 256-bit register.
#[derive(Copy, Clone, Debug)]
pub struct F32x8(pub(crate) __m256);

/// 8 packed i32 lanes.
#[derive(Copy, Clone, Debug)]
pub struct I32x8(pub(crate) __m256i);

/// 4 packed f64 lanes in a 256-bit register.
#[derive(Copy, Clone, Debug)]
pub struct F64x4(pub(crate) __m256d);

/// 4 packed i64 lanes.
#[derive(Copy, Clone, Debug)]
pub struct I64x4(pub(crate) __m256i);

impl IntLane for I32x8 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        Self(unsafe { _mm256_set1_epi32(v as i32) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        Self(unsafe { _mm256_sll_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(unsafe { _mm256_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }
}

impl IntLane for I64x4 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        Self(unsafe { _mm256_set1_epi64x(v) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        Self(unsafe { _mm256_sll_epi64(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(unsafe { _mm256_srl_epi64(self.0, _mm_cvtsi32_si128(n as i32)) })
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_ps(self.0, rhs.0) })
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_ps(self.0, rhs.0) })
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_ps(self.0, rhs.0) })
    }
}

impl Div for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_ps(self.0, rhs.0) })
    }
}

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm256_xor_ps(self.0, _mm256_set1_ps(-0.0)) })
    }
}

impl Lane for F32x8 {
    type Elem = f32;
    type Int = I32x8;
    const WIDTH: usize = 8;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        Self(unsafe { _mm256_set1_ps(v) })
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        assert!(src.len() >= Self::WIDTH);
        Self(unsafe { _mm256_loadu_ps(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        assert!(dst.len() >= Self::WIDTH);
        unsafe { _mm256_storeu_ps(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        Self(unsafe { _mm256_fmadd_ps(self.0, m.0, a.0) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(unsafe { _mm256_sqrt_ps(self.0) })
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self(unsafe { _mm256_round_ps::<NEAREST>(self.0) })
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self(unsafe { _mm256_floor_ps(self.0) })
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self(unsafe { _mm256_round_ps::<TRUNCATE>(self.0) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_min_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_max_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_andnot_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_NEQ_UQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_LE_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_ps::<_CMP_GE_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn select(mask: Self, t: Self, f: Self) -> Self {
        Self(unsafe { _mm256_blendv_ps(f.0, t.0, mask.0) })
    }

    #[inline(always)]
    fn select_int(mask: Self, t: I32x8, f: I32x8) -> I32x8 {
        I32x8(unsafe {
            _mm256_castps_si256(_mm256_blendv_ps(
                _mm256_castsi256_ps(f.0),
                _mm256_castsi256_ps(t.0),
                mask.0,
            ))
        })
    }

    #[inline(always)]
    fn int_eq_mask(a: I32x8, b: I32x8) -> Self {
        Self(unsafe { _mm256_castsi256_ps(_mm256_cmpeq_epi32(a.0, b.0)) })
    }

    #[inline(always)]
    fn to_bits(self) -> I32x8 {
        I32x8(unsafe { _mm256_castps_si256(self.0) })
    }

    #[inline(always)]
    fn from_bits(bits: I32x8) -> Self {
        Self(unsafe { _mm256_castsi256_ps(bits.0) })
    }

    #[inline(always)]
    fn to_int_round(self) -> I32x8 {
        I32x8(unsafe { _mm256_cvtps_epi32(self.0) })
    }

    #[inline(always)]
    fn from_int(i: I32x8) -> Self {
        Self(unsafe { _mm256_cvtepi32_ps(i.0) })
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_pd(self.0, rhs.0) })
    }
}

impl Sub for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_pd(self.0, rhs.0) })
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_pd(self.0, rhs.0) })
    }
}

impl Div for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_pd(self.0, rhs.0) })
    }
}

impl Neg for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm256_xor_pd(self.0, _mm256_set1_pd(-0.0)) })
    }
}

impl Lane for F64x4 {
    type Elem = f64;
    type Int = I64x4;
    const WIDTH: usize = 4;

    #[inline(always)]
    fn splat(v: f64) -> Self {
        Self(unsafe { _mm256_set1_pd(v) })
    }

    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        assert!(src.len() >= Self::WIDTH);
        Self(unsafe { _mm256_loadu_pd(src.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        assert!(dst.len() >= Self::WIDTH);
        unsafe { _mm256_storeu_pd(dst.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        Self(unsafe { _mm256_fmadd_pd(self.0, m.0, a.0) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(unsafe { _mm256_sqrt_pd(self.0) })
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self(unsafe { _mm256_round_pd::<NEAREST>(self.0) })
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self(unsafe { _mm256_floor_pd(self.0) })
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self(unsafe { _mm256_round_pd::<TRUNCATE>(self.0) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_min_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_max_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_andnot_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_NEQ_UQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_LT_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_LE_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_GT_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_cmp_pd::<_CMP_GE_OQ>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn select(mask: Self, t: Self, f: Self) -> Self {
        Self(unsafe { _mm256_blendv_pd(f.0, t.0, mask.0) })
    }

    #[inline(always)]
    fn select_int(mask: Self, t: I64x4, f: I64x4) -> I64x4 {
        I64x4(unsafe {
            _mm256_castpd_si256(_mm256_blendv_pd(
                _mm256_castsi256_pd(f.0),
                _mm256_castsi256_pd(t.0),
                mask.0,
            ))
        })
    }

    #[inline(always)]
    fn int_eq_mask(a: I64x4, b: I64x4) -> Self {
        Self(unsafe { _mm256_castsi256_pd(_mm256_cmpeq_epi64(a.0, b.0)) })
    }

    #[inline(always)]
    fn to_bits(self) -> I64x4 {
        I64x4(unsafe { _mm256_castpd_si256(self.0) })
    }

    #[inline(always)]
    fn from_bits(bits: I64x4) -> Self {
        Self(unsafe { _mm256_castsi256_pd(bits.0) })
    }

    #[inline(always)]
    fn to_int_round(self) -> I64x4 {
        unsafe {
            let magic = _mm256_set1_pd(F64_MAGIC);
            let shifted = _mm256_add_pd(self.0, magic);
            I64x4(_mm256_sub_epi64(
                _mm256_castpd_si256(shifted),
                _mm256_castpd_si256(magic),
            ))
        }
    }

    #[inline(always)]
    fn from_int(i: I64x4) -> Self {
        unsafe {
            let magic = _mm256_set1_pd(F64_MAGIC);
            let bits = _mm256_add_epi64(i.0, _mm256_castpd_si256(magic));
            Self(_mm256_sub_pd(_mm256_castsi256_pd(bits), magic))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_store_roundtrip() {
        let v = [1.5, -2.25, 0.0, 1e300];
        let mut out = [0.0; 4];
        F64x4::load(&v).store(&mut out);
        assert_eq!(out, v);
    }

    #[test]
    fn f64_int_conversion_tricks() {
        let xs = [-3.5, -0.5, 2.5, 1048577.0];
        let mut rounded = [0.0; 4];
        F64x4::from_int(F64x4::load(&xs).to_int_round()).store(&mut rounded);
        // ties to even: -3.5 -> -4, -0.5 -> 0, 2.5 -> 2
        assert_eq!(rounded, [-4.0, 0.0, 2.0, 1048577.0]);
    }

    #[test]
    fn select_follows_mask() {
        let a = F32x8::splat(1.0);
        let b = F32x8::splat(2.0);
        let mask = a.cmp_lt(b);
        let mut out = [0.0f32; 8];
        F32x8::select(mask, a, b).store(&mut out);
        assert_eq!(out, [1.0; 8]);
    }
}
