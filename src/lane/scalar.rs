//! Width-1 lane instantiation: plain `f32` and `f64`.
//!
//! The scalar path is the algorithmic source of truth; the SIMD backends
//! must match it bit for bit, which follows from running the same generic
//! kernels over the same operations (`mul_add` is fused in both worlds,
//! `round` is ties-to-even in both).

use crate::lane::{IntLane, Lane};

impl IntLane for i32 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        v as i32
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        ((self as u32) << n) as i32
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        ((self as u32) >> n) as i32
    }
}

impl IntLane for i64 {
    #[inline(always)]
    fn splat(v: i64) -> Self {
        v
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        ((self as u64) << n) as i64
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        ((self as u64) >> n) as i64
    }
}

macro_rules! scalar_lane {
    ($float:ty, $int:ty, $uint:ty) => {
        impl Lane for $float {
            type Elem = $float;
            type Int = $int;
            const WIDTH: usize = 1;

            #[inline(always)]
            fn splat(v: Self::Elem) -> Self {
                v
            }

            #[inline(always)]
            fn load(src: &[Self::Elem]) -> Self {
                src[0]
            }

            #[inline(always)]
            fn store(self, dst: &mut [Self::Elem]) {
                dst[0] = self;
            }

            #[inline(always)]
            fn mul_add(self, m: Self, a: Self) -> Self {
                <$float>::mul_add(self, m, a)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                <$float>::sqrt(self)
            }

            #[inline(always)]
            fn round(self) -> Self {
                <$float>::round_ties_even(self)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                <$float>::floor(self)
            }

            #[inline(always)]
            fn trunc(self) -> Self {
                <$float>::trunc(self)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                <$float>::min(self, rhs)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                <$float>::max(self, rhs)
            }

            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                <$float>::from_bits(self.to_bits() & rhs.to_bits())
            }

            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                <$float>::from_bits(self.to_bits() | rhs.to_bits())
            }

            #[inline(always)]
            fn xor(self, rhs: Self) -> Self {
                <$float>::from_bits(self.to_bits() ^ rhs.to_bits())
            }

            #[inline(always)]
            fn andnot(self, rhs: Self) -> Self {
                <$float>::from_bits(!self.to_bits() & rhs.to_bits())
            }

            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> Self {
                mask_from(self == rhs)
            }

            #[inline(always)]
            fn cmp_ne(self, rhs: Self) -> Self {
                mask_from(!(self == rhs))
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> Self {
                mask_from(self < rhs)
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> Self {
                mask_from(self <= rhs)
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> Self {
                mask_from(self > rhs)
            }

            #[inline(always)]
            fn cmp_ge(self, rhs: Self) -> Self {
                mask_from(self >= rhs)
            }

            #[inline(always)]
            fn select(mask: Self, t: Self, f: Self) -> Self {
                if mask.to_bits() != 0 {
                    t
                } else {
                    f
                }
            }

            #[inline(always)]
            fn select_int(mask: Self, t: Self::Int, f: Self::Int) -> Self::Int {
                if mask.to_bits() != 0 {
                    t
                } else {
                    f
                }
            }

            #[inline(always)]
            fn int_eq_mask(a: Self::Int, b: Self::Int) -> Self {
                mask_from(a == b)
            }

            #[inline(always)]
            fn to_bits(self) -> Self::Int {
                <$float>::to_bits(self) as $int
            }

            #[inline(always)]
            fn from_bits(bits: Self::Int) -> Self {
                <$float>::from_bits(bits as $uint)
            }

            #[inline(always)]
            fn to_int_round(self) -> Self::Int {
                <$float>::round_ties_even(self) as $int
            }

            #[inline(always)]
            fn from_int(i: Self::Int) -> Self {
                i as $float
            }
        }

        // Helper shadowed per macro expansion so the literal types line up.
        #[inline(always)]
        fn mask_from(b: bool) -> $float {
            if b {
                <$float>::from_bits(<$uint>::MAX)
            } else {
                <$float>::from_bits(0)
            }
        }
    };
}

mod lane_f32 {
    use super::*;
    scalar_lane!(f32, i32, u32);
}

mod lane_f64 {
    use super::*;
    scalar_lane!(f64, i64, u64);
}
