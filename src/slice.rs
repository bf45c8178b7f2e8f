//! Slice-level API: every kernel over `&[f32]`/`&[f64]`.
//!
//! Each operation comes in three flavors: `simd_*` runs the widest lane
//! type the build selected (AVX2, NEON, or scalar fallback) over full
//! chunks with a width-1 tail, `par_simd_*` splits the chunks across the
//! rayon pool, and `scalar_*` runs the width-1 kernels only. All three
//! produce bitwise-identical results because they execute the same generic
//! kernel code — `scalar_*` exists for exactly that comparison, and as the
//! sensible choice for short slices where SIMD dispatch buys nothing.
//!
//! Binary operations validate lengths and return
//! [`Err(LanemathError::LengthMismatch)`](crate::error::LanemathError) on
//! disagreement; everything element-wise (NaN, domain violations) stays in
//! the output values, IEEE style.

use num::Zero;
use rayon::prelude::*;

use crate::error::{length_mismatch, Result};
use crate::kernel::{atan, bits, cbrt, erf, exp, hyp, log, trig};
use crate::lane::Lane;

#[cfg(avx2)]
type WideF32 = crate::lane::avx2::F32x8;
#[cfg(avx2)]
type WideF64 = crate::lane::avx2::F64x4;

#[cfg(neon)]
type WideF32 = crate::lane::neon::F32x4;
#[cfg(neon)]
type WideF64 = crate::lane::neon::F64x2;

#[cfg(fallback)]
type WideF32 = f32;
#[cfg(fallback)]
type WideF64 = f64;

#[inline(always)]
fn map<W, F, G>(src: &[W::Elem], wide: F, tail: G) -> Vec<W::Elem>
where
    W: Lane,
    F: Fn(W) -> W,
    G: Fn(W::Elem) -> W::Elem,
{
    let mut out = vec![<W::Elem as Zero>::zero(); src.len()];
    let main = src.len() - src.len() % W::WIDTH;
    for (s, d) in src[..main]
        .chunks_exact(W::WIDTH)
        .zip(out[..main].chunks_exact_mut(W::WIDTH))
    {
        wide(W::load(s)).store(d);
    }
    for (s, d) in src[main..].iter().zip(out[main..].iter_mut()) {
        *d = tail(*s);
    }
    out
}

#[inline(always)]
fn par_map<W, F, G>(src: &[W::Elem], wide: F, tail: G) -> Vec<W::Elem>
where
    W: Lane,
    F: Fn(W) -> W + Sync,
    G: Fn(W::Elem) -> W::Elem,
{
    let mut out = vec![<W::Elem as Zero>::zero(); src.len()];
    let main = src.len() - src.len() % W::WIDTH;
    out[..main]
        .par_chunks_exact_mut(W::WIDTH)
        .enumerate()
        .for_each(|(i, d)| {
            let at = i * W::WIDTH;
            wide(W::load(&src[at..at + W::WIDTH])).store(d);
        });
    for (s, d) in src[main..].iter().zip(out[main..].iter_mut()) {
        *d = tail(*s);
    }
    out
}

#[inline(always)]
fn map2<W, F, G>(a: &[W::Elem], b: &[W::Elem], wide: F, tail: G) -> Result<Vec<W::Elem>>
where
    W: Lane,
    F: Fn(W, W) -> W,
    G: Fn(W::Elem, W::Elem) -> W::Elem,
{
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }
    let mut out = vec![<W::Elem as Zero>::zero(); a.len()];
    let main = a.len() - a.len() % W::WIDTH;
    for ((s, t), d) in a[..main]
        .chunks_exact(W::WIDTH)
        .zip(b[..main].chunks_exact(W::WIDTH))
        .zip(out[..main].chunks_exact_mut(W::WIDTH))
    {
        wide(W::load(s), W::load(t)).store(d);
    }
    for ((s, t), d) in a[main..]
        .iter()
        .zip(b[main..].iter())
        .zip(out[main..].iter_mut())
    {
        *d = tail(*s, *t);
    }
    Ok(out)
}

#[inline(always)]
fn par_map2<W, F, G>(a: &[W::Elem], b: &[W::Elem], wide: F, tail: G) -> Result<Vec<W::Elem>>
where
    W: Lane,
    F: Fn(W, W) -> W + Sync,
    G: Fn(W::Elem, W::Elem) -> W::Elem,
{
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }
    let mut out = vec![<W::Elem as Zero>::zero(); a.len()];
    let main = a.len() - a.len() % W::WIDTH;
    out[..main]
        .par_chunks_exact_mut(W::WIDTH)
        .enumerate()
        .for_each(|(i, d)| {
            let at = i * W::WIDTH;
            wide(
                W::load(&a[at..at + W::WIDTH]),
                W::load(&b[at..at + W::WIDTH]),
            )
            .store(d);
        });
    for ((s, t), d) in a[main..]
        .iter()
        .zip(b[main..].iter())
        .zip(out[main..].iter_mut())
    {
        *d = tail(*s, *t);
    }
    Ok(out)
}

macro_rules! slice_math {
    ($(($simd:ident, $par:ident, $scalar:ident, $kernel:path)),+ $(,)?) => {
        /// Element-wise math over float slices, returning freshly
        /// allocated vectors.
        pub trait SliceMath {
            type Output;
            $(
                fn $simd(self) -> Self::Output;
                fn $par(self) -> Self::Output;
                fn $scalar(self) -> Self::Output;
            )+
        }

        impl SliceMath for &[f32] {
            type Output = Vec<f32>;
            $(
                #[inline(always)]
                fn $simd(self) -> Self::Output {
                    map::<WideF32, _, _>(self, |v| $kernel(v), |x| $kernel(x))
                }

                #[inline(always)]
                fn $par(self) -> Self::Output {
                    par_map::<WideF32, _, _>(self, |v| $kernel(v), |x| $kernel(x))
                }

                #[inline(always)]
                fn $scalar(self) -> Self::Output {
                    self.iter().map(|&x: &f32| $kernel(x)).collect()
                }
            )+
        }

        impl SliceMath for &[f64] {
            type Output = Vec<f64>;
            $(
                #[inline(always)]
                fn $simd(self) -> Self::Output {
                    map::<WideF64, _, _>(self, |v| $kernel(v), |x| $kernel(x))
                }

                #[inline(always)]
                fn $par(self) -> Self::Output {
                    par_map::<WideF64, _, _>(self, |v| $kernel(v), |x| $kernel(x))
                }

                #[inline(always)]
                fn $scalar(self) -> Self::Output {
                    self.iter().map(|&x: &f64| $kernel(x)).collect()
                }
            )+
        }
    };
}

slice_math!(
    (simd_abs, par_simd_abs, scalar_abs, bits::abs),
    (simd_cbrt, par_simd_cbrt, scalar_cbrt, cbrt::cbrt),
    (simd_exp2, par_simd_exp2, scalar_exp2, exp::exp2),
    (simd_exp, par_simd_exp, scalar_exp, exp::exp),
    (simd_exp10, par_simd_exp10, scalar_exp10, exp::exp10),
    (simd_expm1, par_simd_expm1, scalar_expm1, exp::expm1),
    (simd_log2, par_simd_log2, scalar_log2, log::log2),
    (simd_log, par_simd_log, scalar_log, log::log),
    (simd_log10, par_simd_log10, scalar_log10, log::log10),
    (simd_log1p, par_simd_log1p, scalar_log1p, log::log1p),
    (simd_sin, par_simd_sin, scalar_sin, trig::sin),
    (simd_cos, par_simd_cos, scalar_cos, trig::cos),
    (simd_tan, par_simd_tan, scalar_tan, trig::tan),
    (simd_asin, par_simd_asin, scalar_asin, atan::asin),
    (simd_acos, par_simd_acos, scalar_acos, atan::acos),
    (simd_atan, par_simd_atan, scalar_atan, atan::atan),
    (simd_sinh, par_simd_sinh, scalar_sinh, hyp::sinh),
    (simd_cosh, par_simd_cosh, scalar_cosh, hyp::cosh),
    (simd_tanh, par_simd_tanh, scalar_tanh, hyp::tanh),
    (simd_asinh, par_simd_asinh, scalar_asinh, hyp::asinh),
    (simd_acosh, par_simd_acosh, scalar_acosh, hyp::acosh),
    (simd_atanh, par_simd_atanh, scalar_atanh, hyp::atanh),
    (simd_erf, par_simd_erf, scalar_erf, erf::erf),
    (simd_erfc, par_simd_erfc, scalar_erfc, erf::erfc),
);

macro_rules! slice_bin_math {
    ($(($simd:ident, $par:ident, $scalar:ident, $kernel:path)),+ $(,)?) => {
        /// Element-wise binary math over same-length float slices.
        ///
        /// The left operand is `self` (so `y.simd_atan2(x)` matches the
        /// scalar argument order `atan2(y, x)`).
        pub trait SliceBinMath<Rhs = Self> {
            type Output;
            $(
                fn $simd(self, rhs: Rhs) -> Self::Output;
                fn $par(self, rhs: Rhs) -> Self::Output;
                fn $scalar(self, rhs: Rhs) -> Self::Output;
            )+
        }

        impl SliceBinMath for &[f32] {
            type Output = Result<Vec<f32>>;
            $(
                #[inline(always)]
                fn $simd(self, rhs: Self) -> Self::Output {
                    map2::<WideF32, _, _>(self, rhs, |u, v| $kernel(u, v), |x, y| $kernel(x, y))
                }

                #[inline(always)]
                fn $par(self, rhs: Self) -> Self::Output {
                    par_map2::<WideF32, _, _>(self, rhs, |u, v| $kernel(u, v), |x, y| $kernel(x, y))
                }

                #[inline(always)]
                fn $scalar(self, rhs: Self) -> Self::Output {
                    if self.len() != rhs.len() {
                        return Err(length_mismatch(self.len(), rhs.len()));
                    }
                    Ok(self
                        .iter()
                        .zip(rhs.iter())
                        .map(|(&x, &y): (&f32, &f32)| $kernel(x, y))
                        .collect())
                }
            )+
        }

        impl SliceBinMath for &[f64] {
            type Output = Result<Vec<f64>>;
            $(
                #[inline(always)]
                fn $simd(self, rhs: Self) -> Self::Output {
                    map2::<WideF64, _, _>(self, rhs, |u, v| $kernel(u, v), |x, y| $kernel(x, y))
                }

                #[inline(always)]
                fn $par(self, rhs: Self) -> Self::Output {
                    par_map2::<WideF64, _, _>(self, rhs, |u, v| $kernel(u, v), |x, y| $kernel(x, y))
                }

                #[inline(always)]
                fn $scalar(self, rhs: Self) -> Self::Output {
                    if self.len() != rhs.len() {
                        return Err(length_mismatch(self.len(), rhs.len()));
                    }
                    Ok(self
                        .iter()
                        .zip(rhs.iter())
                        .map(|(&x, &y): (&f64, &f64)| $kernel(x, y))
                        .collect())
                }
            )+
        }
    };
}

slice_bin_math!(
    (simd_copysign, par_simd_copysign, scalar_copysign, bits::copysign),
    (simd_hypot, par_simd_hypot, scalar_hypot, bits::hypot),
    (simd_fmod, par_simd_fmod, scalar_fmod, bits::fmod),
    (simd_pow, par_simd_pow, scalar_pow, exp::pow),
    (simd_atan2, par_simd_atan2, scalar_atan2, atan::atan2),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bits64(v: &[f64]) -> Vec<u64> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    fn bits32(v: &[f32]) -> Vec<u32> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    #[test]
    fn simd_paths_match_scalar_bitwise_f64() {
        let mut rng = StdRng::seed_from_u64(149);
        // odd length to exercise the tail
        let xs: Vec<f64> = (0..1031).map(|_| rng.random_range(-50.0..50.0)).collect();
        let xs = &xs[..];

        assert_eq!(bits64(&xs.simd_sin()), bits64(&xs.scalar_sin()));
        assert_eq!(bits64(&xs.par_simd_sin()), bits64(&xs.scalar_sin()));
        assert_eq!(bits64(&xs.simd_exp()), bits64(&xs.scalar_exp()));
        assert_eq!(bits64(&xs.simd_cbrt()), bits64(&xs.scalar_cbrt()));
        assert_eq!(bits64(&xs.simd_erf()), bits64(&xs.scalar_erf()));
        assert_eq!(bits64(&xs.simd_tanh()), bits64(&xs.scalar_tanh()));
        assert_eq!(bits64(&xs.simd_atan()), bits64(&xs.scalar_atan()));

        let pos: Vec<f64> = xs.iter().map(|x| x.abs() + 0.001).collect();
        let pos = &pos[..];
        assert_eq!(bits64(&pos.simd_log2()), bits64(&pos.scalar_log2()));
        assert_eq!(bits64(&pos.par_simd_log2()), bits64(&pos.scalar_log2()));
    }

    #[test]
    fn simd_paths_match_scalar_bitwise_f32() {
        let mut rng = StdRng::seed_from_u64(151);
        let xs: Vec<f32> = (0..517).map(|_| rng.random_range(-50.0_f32..50.0)).collect();
        let xs = &xs[..];

        assert_eq!(bits32(&xs.simd_cos()), bits32(&xs.scalar_cos()));
        assert_eq!(bits32(&xs.par_simd_cos()), bits32(&xs.scalar_cos()));
        assert_eq!(bits32(&xs.simd_expm1()), bits32(&xs.scalar_expm1()));
        assert_eq!(bits32(&xs.simd_erfc()), bits32(&xs.scalar_erfc()));
        assert_eq!(bits32(&xs.simd_asinh()), bits32(&xs.scalar_asinh()));
    }

    #[test]
    fn special_values_pass_through_all_paths() {
        let xs = [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            0.0,
            -0.0,
            f64::from_bits(1),
        ];
        let xs = &xs[..];
        assert_eq!(bits64(&xs.simd_sinh()), bits64(&xs.scalar_sinh()));
        assert_eq!(bits64(&xs.simd_exp2()), bits64(&xs.scalar_exp2()));
        assert_eq!(bits64(&xs.simd_cbrt()), bits64(&xs.scalar_cbrt()));
    }

    #[test]
    fn binary_ops_agree_and_validate_lengths() {
        let mut rng = StdRng::seed_from_u64(157);
        let a: Vec<f64> = (0..259).map(|_| rng.random_range(-10.0..10.0)).collect();
        let b: Vec<f64> = (0..259).map(|_| rng.random_range(-10.0..10.0)).collect();
        let (a, b) = (&a[..], &b[..]);

        let simd = a.simd_atan2(b).unwrap();
        let scalar = a.scalar_atan2(b).unwrap();
        let par = a.par_simd_atan2(b).unwrap();
        assert_eq!(bits64(&simd), bits64(&scalar));
        assert_eq!(bits64(&par), bits64(&scalar));

        let h = a.simd_hypot(b).unwrap();
        assert_eq!(bits64(&h), bits64(&a.scalar_hypot(b).unwrap()));

        let err = a.simd_hypot(&b[..100]).unwrap_err();
        assert_eq!(err, crate::error::length_mismatch(259, 100));
        assert!(a.par_simd_pow(&b[..1]).is_err());
        assert!(a.scalar_fmod(&b[..2]).is_err());
    }

    #[test]
    fn empty_slices_are_fine() {
        let xs: &[f64] = &[];
        assert!(xs.simd_sin().is_empty());
        assert!(xs.par_simd_exp().is_empty());
        assert!(xs.simd_hypot(xs).unwrap().is_empty());
    }
}
