//! Branch-light elementary math for `f32` and `f64`, written once and run
//! at any lane width.
//!
//! Every function — `cbrt`, `exp2`/`exp`/`exp10`/`expm1`,
//! `log2`/`log`/`log10`/`log1p`, `pow`, the circular and hyperbolic
//! families, `erf`/`erfc`, and the bit-level primitives
//! `frexp`/`ldexp`/`hypot`/`fmod` — is an approximation kernel generic
//! over the [`lane::Lane`] capability: clamp or fold the argument onto a
//! small well-conditioned interval, evaluate a minimax fit with fused
//! multiply-adds, reconstruct, and patch special values with mask selects.
//! No data-dependent branches, so the same code instantiates as plain
//! scalars and as AVX2 or NEON vectors, producing bitwise-identical
//! results at every width.
//!
//! The build script probes the host CPU and selects the widest available
//! backend; `target_arch` alone decides nothing.
//!
//! Scalar calls are just the width-1 instantiation:
//!
//! ```
//! let y = lanemath::sin::<f64>(1.0);
//! assert!((y - 1.0_f64.sin()).abs() < 1.0e-15);
//!
//! let (m, e) = lanemath::frexp::<f64>(48.0);
//! assert_eq!((m, e), (0.75, 6));
//! ```
//!
//! Slices go through [`slice::SliceMath`] and [`slice::SliceBinMath`],
//! with serial SIMD and rayon-parallel SIMD variants per operation:
//!
//! ```
//! use lanemath::slice::SliceMath;
//!
//! let xs = [0.0_f64, 0.5, 1.0, 2.0];
//! let ys = xs[..].simd_exp();
//! assert_eq!(ys.len(), 4);
//! assert_eq!(ys[0], 1.0);
//! ```

pub mod error;
pub mod kernel;
pub mod lane;
pub mod ops;
pub mod precision;
pub mod reduce;
pub mod slice;

pub use error::{LanemathError, Result};
pub use kernel::atan::{acos, asin, atan, atan2};
pub use kernel::bits::{abs, copysign, fmod, frexp, hypot, ldexp, sign};
pub use kernel::cbrt::cbrt;
pub use kernel::erf::{erf, erfc};
pub use kernel::exp::{exp, exp10, exp2, expm1, pow};
pub use kernel::hyp::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use kernel::log::{log, log10, log1p, log2};
pub use kernel::trig::{cos, sin, tan};
pub use lane::{IntLane, Lane};
pub use ops::{Domain, Op};
pub use precision::Precision;
