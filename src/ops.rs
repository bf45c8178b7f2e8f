//! A small registry of the unary operations, for harnesses that iterate
//! over every function — accuracy sweeps, benchmarks, input generators.
//!
//! Each [`Op`] knows its name, a sampling domain that keeps generated
//! inputs inside the function's well-conditioned range, and scalar
//! evaluators for both precisions dispatching into the width-1 kernels.

use crate::kernel::{atan, bits, cbrt, erf, exp, hyp, log, trig};

/// Every unary operation the crate exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Abs,
    Cbrt,
    Exp2,
    Exp,
    Exp10,
    Expm1,
    Log2,
    Log,
    Log10,
    Log1p,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Erf,
    Erfc,
}

/// Input region an operation is defined (and well conditioned) on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// The whole real line; sampled over a moderate symmetric range.
    Real,
    /// Strictly positive arguments.
    Positive,
    /// The closed interval [−1, 1].
    Unit,
    /// The open interval (−1, 1).
    OpenUnit,
    /// Arguments ≥ 1.
    AboveOne,
    /// Arguments > −1.
    AboveMinusOne,
}

impl Domain {
    /// A representative sampling range, safely inside the domain.
    pub fn sample_range(self) -> (f64, f64) {
        match self {
            Domain::Real => (-50.0, 50.0),
            Domain::Positive => (1.0e-6, 1.0e6),
            Domain::Unit => (-1.0, 1.0),
            Domain::OpenUnit => (-0.999, 0.999),
            Domain::AboveOne => (1.0, 1.0e6),
            Domain::AboveMinusOne => (-0.999, 1.0e6),
        }
    }
}

impl Op {
    pub const ALL: [Op; 24] = [
        Op::Abs,
        Op::Cbrt,
        Op::Exp2,
        Op::Exp,
        Op::Exp10,
        Op::Expm1,
        Op::Log2,
        Op::Log,
        Op::Log10,
        Op::Log1p,
        Op::Sin,
        Op::Cos,
        Op::Tan,
        Op::Asin,
        Op::Acos,
        Op::Atan,
        Op::Sinh,
        Op::Cosh,
        Op::Tanh,
        Op::Asinh,
        Op::Acosh,
        Op::Atanh,
        Op::Erf,
        Op::Erfc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Op::Abs => "abs",
            Op::Cbrt => "cbrt",
            Op::Exp2 => "exp2",
            Op::Exp => "exp",
            Op::Exp10 => "exp10",
            Op::Expm1 => "expm1",
            Op::Log2 => "log2",
            Op::Log => "log",
            Op::Log10 => "log10",
            Op::Log1p => "log1p",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Asin => "asin",
            Op::Acos => "acos",
            Op::Atan => "atan",
            Op::Sinh => "sinh",
            Op::Cosh => "cosh",
            Op::Tanh => "tanh",
            Op::Asinh => "asinh",
            Op::Acosh => "acosh",
            Op::Atanh => "atanh",
            Op::Erf => "erf",
            Op::Erfc => "erfc",
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            Op::Log2 | Op::Log | Op::Log10 => Domain::Positive,
            Op::Asin | Op::Acos => Domain::Unit,
            Op::Atanh => Domain::OpenUnit,
            Op::Acosh => Domain::AboveOne,
            Op::Log1p => Domain::AboveMinusOne,
            _ => Domain::Real,
        }
    }

    pub fn eval_f64(self, x: f64) -> f64 {
        match self {
            Op::Abs => bits::abs::<f64>(x),
            Op::Cbrt => cbrt::cbrt::<f64>(x),
            Op::Exp2 => exp::exp2::<f64>(x),
            Op::Exp => exp::exp::<f64>(x),
            Op::Exp10 => exp::exp10::<f64>(x),
            Op::Expm1 => exp::expm1::<f64>(x),
            Op::Log2 => log::log2::<f64>(x),
            Op::Log => log::log::<f64>(x),
            Op::Log10 => log::log10::<f64>(x),
            Op::Log1p => log::log1p::<f64>(x),
            Op::Sin => trig::sin::<f64>(x),
            Op::Cos => trig::cos::<f64>(x),
            Op::Tan => trig::tan::<f64>(x),
            Op::Asin => atan::asin::<f64>(x),
            Op::Acos => atan::acos::<f64>(x),
            Op::Atan => atan::atan::<f64>(x),
            Op::Sinh => hyp::sinh::<f64>(x),
            Op::Cosh => hyp::cosh::<f64>(x),
            Op::Tanh => hyp::tanh::<f64>(x),
            Op::Asinh => hyp::asinh::<f64>(x),
            Op::Acosh => hyp::acosh::<f64>(x),
            Op::Atanh => hyp::atanh::<f64>(x),
            Op::Erf => erf::erf::<f64>(x),
            Op::Erfc => erf::erfc::<f64>(x),
        }
    }

    pub fn eval_f32(self, x: f32) -> f32 {
        match self {
            Op::Abs => bits::abs::<f32>(x),
            Op::Cbrt => cbrt::cbrt::<f32>(x),
            Op::Exp2 => exp::exp2::<f32>(x),
            Op::Exp => exp::exp::<f32>(x),
            Op::Exp10 => exp::exp10::<f32>(x),
            Op::Expm1 => exp::expm1::<f32>(x),
            Op::Log2 => log::log2::<f32>(x),
            Op::Log => log::log::<f32>(x),
            Op::Log10 => log::log10::<f32>(x),
            Op::Log1p => log::log1p::<f32>(x),
            Op::Sin => trig::sin::<f32>(x),
            Op::Cos => trig::cos::<f32>(x),
            Op::Tan => trig::tan::<f32>(x),
            Op::Asin => atan::asin::<f32>(x),
            Op::Acos => atan::acos::<f32>(x),
            Op::Atan => atan::atan::<f32>(x),
            Op::Sinh => hyp::sinh::<f32>(x),
            Op::Cosh => hyp::cosh::<f32>(x),
            Op::Tanh => hyp::tanh::<f32>(x),
            Op::Asinh => hyp::asinh::<f32>(x),
            Op::Acosh => hyp::acosh::<f32>(x),
            Op::Atanh => hyp::atanh::<f32>(x),
            Op::Erf => erf::erf::<f32>(x),
            Op::Erfc => erf::erfc::<f32>(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_complete_and_consistent() {
        assert_eq!(Op::ALL.len(), 24);
        for op in Op::ALL {
            assert!(!op.name().is_empty());
            let (lo, hi) = op.domain().sample_range();
            assert!(lo < hi);
            // a midpoint sample must evaluate to something finite
            let mid = 0.5 * (lo + hi);
            assert!(
                op.eval_f64(mid).is_finite(),
                "{} not finite at {mid}",
                op.name()
            );
            assert!(
                op.eval_f32(mid as f32).is_finite(),
                "{}f not finite at {mid}",
                op.name()
            );
        }
    }

    #[test]
    fn eval_dispatches_to_the_right_kernel() {
        assert_eq!(Op::Abs.eval_f64(-2.0), 2.0);
        assert_eq!(Op::Exp2.eval_f64(3.0), 8.0);
        assert_eq!(Op::Cos.eval_f64(0.0), 1.0);
        assert_eq!(Op::Erfc.eval_f64(0.0), 1.0);
    }
}
