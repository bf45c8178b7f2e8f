//! Per-precision constants and coefficient tables.
//!
//! Every approximation in this crate is driven by a minimax polynomial or
//! rational fit computed offline (Remez exchange) over the function's
//! well-conditioned interval. The fits live here as `&'static` associated
//! consts on [`Precision`], one set per IEEE format, so the generic kernels
//! in [`crate::kernel`] can be written once and instantiated for `f32`,
//! `f64`, and every SIMD lane type.
//!
//! Coefficient ordering follows the classic convention: highest-degree
//! coefficient first, matching [`crate::kernel::poly::polevl`]. Rational
//! fits store the denominator with an implicit leading 1
//! ([`crate::kernel::poly::p1evl`]); a fit that is a plain polynomial in one
//! precision and a rational in the other simply publishes an empty
//! denominator table for the polynomial case.

#![allow(clippy::excessive_precision)]

use num::Float;

/// An IEEE-754 binary32 or binary64 scalar, with the bit-format constants
/// and coefficient tables the approximation kernels need.
///
/// The tables are immutable for the process lifetime; nothing in the crate
/// ever writes through them.
pub trait Precision: Float + Send + Sync + 'static {
    /// Mantissa field width in bits (23 or 52).
    const MANT_BITS: u32;
    /// Exponent bias (127 or 1023).
    const EXP_BIAS: i64;
    /// Exponent field mask, right-aligned (0xff or 0x7ff).
    const EXP_FIELD_MASK: i64;
    /// Smallest positive normal value.
    const MIN_NORMAL: Self;

    /// Symmetric clamp for ldexp/exp2 exponent construction. Chosen so that
    /// each half of the two-stage scale stays a normal power of two while
    /// the product still saturates to 0/Inf well past the format's range.
    const SCALE_CLAMP: Self;
    /// exp2 overflow threshold: exp2(x) == Inf for x above this.
    const EXP2_MAX: Self;
    /// exp2 underflow threshold: exp2(x) == 0 for x below this.
    const EXP2_MIN: Self;
    /// Largest x with exp(x) finite; erfc saturates where x*x exceeds this.
    const MAXLOG: Self;
    /// Largest |x| the Cody–Waite trig reduction is good for; beyond it the
    /// trig kernels give up and return NaN rather than silently wrong
    /// quadrants.
    const TRIG_MAX: Self;

    /// π/2 split into descending non-overlapping parts for Cody–Waite
    /// trig reduction: the parts sum to π/2 to well beyond working
    /// precision.
    const PIO2_SPLIT: &'static [Self];
    /// Low part of π/2 (π/2 − nearest representable π/2).
    const PIO2_LO: Self;
    /// Low part of π/4.
    const PIO4_LO: Self;

    /// ln(2) split for reconstructing natural log from log2.
    const LN2_HI: Self;
    /// Low part of the ln(2) split.
    const LN2_LO: Self;
    /// log2(e) − 1, used to combine the log2 result without cancellation.
    const LOG2EA: Self;

    /// atan regime boundary between the direct fit and the (x−1)/(x+1) fold.
    const ATAN_MID: Self;

    // Minimax tables. Numerator/denominator pairs share one kernel shape;
    // an empty denominator means the fit is a plain polynomial.
    const SIN_P: &'static [Self];
    const COS_P: &'static [Self];
    const TAN_P: &'static [Self];
    const TAN_Q: &'static [Self];
    const LOG_P: &'static [Self];
    const LOG_Q: &'static [Self];
    const EXP2_P: &'static [Self];
    const EXP2_Q: &'static [Self];
    const EXPM1_P: &'static [Self];
    const ATAN_P: &'static [Self];
    const ATAN_Q: &'static [Self];
    const CBRT_P: &'static [Self];
    const ERF_P: &'static [Self];
    const ERF_Q: &'static [Self];
    const ERFC_P: &'static [Self];
    const ERFC_Q: &'static [Self];
    const ERFC_R: &'static [Self];
    const ERFC_S: &'static [Self];

    /// Lossless widening of an f64 constant shared by both precisions.
    fn from_f64(v: f64) -> Self;
}

impl Precision for f64 {
    const MANT_BITS: u32 = 52;
    const EXP_BIAS: i64 = 1023;
    const EXP_FIELD_MASK: i64 = 0x7ff;
    const MIN_NORMAL: Self = f64::MIN_POSITIVE;

    const SCALE_CLAMP: Self = 2044.0;
    const EXP2_MAX: Self = 1024.0;
    const EXP2_MIN: Self = -1075.0;
    const MAXLOG: Self = 7.09782712893383996843e2;
    const TRIG_MAX: Self = 1.073741824e9;

    const PIO2_SPLIT: &'static [Self] = &[
        1.57079632673412561417e0,
        6.07710050630396597660e-11,
        2.02226624879595063154e-21,
    ];
    const PIO2_LO: Self = 6.123233995736765886130e-17;
    const PIO4_LO: Self = 3.061616997868382943065e-17;

    const LN2_HI: Self = 6.93147180369123816490e-1;
    const LN2_LO: Self = 1.90821492927058770002e-10;
    const LOG2EA: Self = 4.4269504088896340735992e-1;

    const ATAN_MID: Self = 0.66;

    const SIN_P: &'static [Self] = &[
        1.58962301576546568060e-10,
        -2.50507477628578072866e-8,
        2.75573136213857245213e-6,
        -1.98412698295895385996e-4,
        8.33333333332211858878e-3,
        -1.66666666666666307295e-1,
    ];
    const COS_P: &'static [Self] = &[
        -1.13585365213876817300e-11,
        2.08757008419747316778e-9,
        -2.75573141792967388112e-7,
        2.48015872888517179954e-5,
        -1.38888888888730564116e-3,
        4.16666666666665929218e-2,
    ];
    const TAN_P: &'static [Self] = &[
        -1.30936939181383777646e4,
        1.15351664838587416140e6,
        -1.79565251976484877988e7,
    ];
    const TAN_Q: &'static [Self] = &[
        1.36812963470692954678e4,
        -1.32089234440210967447e6,
        2.50083801823357915839e7,
        -5.38695755929454629881e7,
    ];
    const LOG_P: &'static [Self] = &[
        1.01875663804580931796e-4,
        4.97494994976747001425e-1,
        4.70579119878881725854e0,
        1.44989225341610930846e1,
        1.79368678507819816313e1,
        7.70838733755885391666e0,
    ];
    const LOG_Q: &'static [Self] = &[
        1.12873587189167450590e1,
        4.52279145837532221105e1,
        8.29875266912776603211e1,
        7.11544750618563894466e1,
        2.31251620126765340583e1,
    ];
    const EXP2_P: &'static [Self] = &[
        2.30933477057345225087e-2,
        2.02020656693165307700e1,
        1.51390680115615096133e3,
    ];
    const EXP2_Q: &'static [Self] = &[2.33184211722314911771e2, 4.36821166879210612817e3];
    const EXPM1_P: &'static [Self] = &[
        7.64716373181981647590e-13,
        1.14707455977297247139e-11,
        1.60590438368216145994e-10,
        2.08767569878680989792e-9,
        2.50521083854417187751e-8,
        2.75573192239858906526e-7,
        2.75573192239858882706e-6,
        2.48015873015873015873e-5,
        1.98412698412698412698e-4,
        1.38888888888888894189e-3,
        8.33333333333333321769e-3,
        4.16666666666666643537e-2,
        1.66666666666666657415e-1,
    ];
    const ATAN_P: &'static [Self] = &[
        -8.750608600031904122785e-1,
        -1.615753718733365076637e1,
        -7.500855792314704667340e1,
        -1.228866684490136173410e2,
        -6.485021904942025371773e1,
    ];
    const ATAN_Q: &'static [Self] = &[
        2.485846490142306297962e1,
        1.650270098316988542046e2,
        4.328810604912902668951e2,
        4.853903996359136964868e2,
        1.945506571482613964425e2,
    ];
    const CBRT_P: &'static [Self] = &[
        -1.3466110473359520655053e-1,
        5.4664601366395524503440e-1,
        -9.5438224771509446525043e-1,
        1.1399983354717293273738e0,
        4.0238979564544752126924e-1,
    ];
    const ERF_P: &'static [Self] = &[
        9.60497373987051638749e0,
        9.00260197203842689217e1,
        2.23200534594684319226e3,
        7.00332514112805075473e3,
        5.55923013010394962768e4,
    ];
    const ERF_Q: &'static [Self] = &[
        3.35617141647503099647e1,
        5.21357949780152679795e2,
        4.59432382970980127987e3,
        2.26290000613890934246e4,
        4.92673942608635921086e4,
    ];
    const ERFC_P: &'static [Self] = &[
        2.46196981473530512524e-10,
        5.64189564831068821977e-1,
        7.46321056442269912687e0,
        4.86371970985681366614e1,
        1.96520832956077098242e2,
        5.26445194995477358631e2,
        9.34528527171957607540e2,
        1.02755188689515710272e3,
        5.57535335369399327526e2,
    ];
    const ERFC_Q: &'static [Self] = &[
        1.32281951154744992508e1,
        8.67072140885989742329e1,
        3.54937778887819891062e2,
        9.75708501743205489753e2,
        1.82390916687909736289e3,
        2.24633760818710981792e3,
        1.65666309194161350182e3,
        5.57535340817727675546e2,
    ];
    const ERFC_R: &'static [Self] = &[
        5.64189583547673702943e-1,
        1.50918529187709168852e0,
        5.47646257311690821872e0,
        7.53288667194607131739e0,
        8.65270180569146433925e0,
        3.78051504803591252172e0,
    ];
    const ERFC_S: &'static [Self] = &[
        2.67496128229032262684e0,
        1.02067771793409969959e1,
        1.46891745171347288761e1,
        1.96899070277714885666e1,
        1.20390659167529892799e1,
        4.06636439945371529109e0,
    ];

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Precision for f32 {
    const MANT_BITS: u32 = 23;
    const EXP_BIAS: i64 = 127;
    const EXP_FIELD_MASK: i64 = 0xff;
    const MIN_NORMAL: Self = f32::MIN_POSITIVE;

    const SCALE_CLAMP: Self = 252.0;
    const EXP2_MAX: Self = 128.0;
    const EXP2_MIN: Self = -150.0;
    const MAXLOG: Self = 88.72283905206835;
    const TRIG_MAX: Self = 1.0e5;

    // π/2 as three non-overlapping f32 parts; the middle parts are negative
    // because the leading part rounds up.
    const PIO2_SPLIT: &'static [Self] = &[1.5707964, -4.371139e-8, -2.7118834e-17];
    const PIO2_LO: Self = 0.0;
    const PIO4_LO: Self = 0.0;

    const LN2_HI: Self = 0.693359375;
    const LN2_LO: Self = -2.12194440e-4;
    const LOG2EA: Self = 0.44269504088896340736;

    const ATAN_MID: Self = 0.4142135623730950;

    const SIN_P: &'static [Self] = &[-1.9515295891e-4, 8.3321608736e-3, -1.6666654611e-1];
    const COS_P: &'static [Self] = &[
        2.443315711809948e-5,
        -1.388731625493765e-3,
        4.166664568298827e-2,
    ];
    const TAN_P: &'static [Self] = &[
        9.38540185543e-3,
        3.11992232697e-3,
        2.44301354525e-2,
        5.34112807005e-2,
        1.33387994085e-1,
        3.33331568548e-1,
    ];
    const TAN_Q: &'static [Self] = &[];
    const LOG_P: &'static [Self] = &[
        7.0376836292e-2,
        -1.1514610310e-1,
        1.1676998740e-1,
        -1.2420140846e-1,
        1.4249322787e-1,
        -1.6668057665e-1,
        2.0000714765e-1,
        -2.4999993993e-1,
        3.3333331174e-1,
    ];
    const LOG_Q: &'static [Self] = &[];
    const EXP2_P: &'static [Self] = &[
        1.535336188319500e-4,
        1.339887440266574e-3,
        9.618437357674640e-3,
        5.550332471162809e-2,
        2.402264791363012e-1,
        6.931472028550421e-1,
    ];
    const EXP2_Q: &'static [Self] = &[];
    const EXPM1_P: &'static [Self] = &[
        2.4801587301587301e-5,
        1.9841269841269841e-4,
        1.3888888888888889e-3,
        8.3333333333333333e-3,
        4.1666666666666666e-2,
        1.6666666666666666e-1,
    ];
    const ATAN_P: &'static [Self] = &[
        8.05374449538e-2,
        -1.38776856032e-1,
        1.99777106478e-1,
        -3.33329491539e-1,
    ];
    const ATAN_Q: &'static [Self] = &[];
    const CBRT_P: &'static [Self] = &[
        -1.3466110473359520655053e-1,
        5.4664601366395524503440e-1,
        -9.5438224771509446525043e-1,
        1.1399983354717293273738e0,
        4.0238979564544752126924e-1,
    ];
    const ERF_P: &'static [Self] = &[
        7.853861353153693e-5,
        -8.010193625184903e-4,
        5.188327685732524e-3,
        -2.685381193529856e-2,
        1.128358514861418e-1,
        -3.761262582423300e-1,
        1.128379165726710e0,
    ];
    const ERF_Q: &'static [Self] = &[];
    // The erfc regimes reuse the double-precision rational fits narrowed to
    // f32; evaluating them in single precision keeps ~1 ulp of f32 accuracy.
    const ERFC_P: &'static [Self] = &[
        2.46196981473530512524e-10,
        5.64189564831068821977e-1,
        7.46321056442269912687e0,
        4.86371970985681366614e1,
        1.96520832956077098242e2,
        5.26445194995477358631e2,
        9.34528527171957607540e2,
        1.02755188689515710272e3,
        5.57535335369399327526e2,
    ];
    const ERFC_Q: &'static [Self] = &[
        1.32281951154744992508e1,
        8.67072140885989742329e1,
        3.54937778887819891062e2,
        9.75708501743205489753e2,
        1.82390916687909736289e3,
        2.24633760818710981792e3,
        1.65666309194161350182e3,
        5.57535340817727675546e2,
    ];
    const ERFC_R: &'static [Self] = &[
        5.64189583547673702943e-1,
        1.50918529187709168852e0,
        5.47646257311690821872e0,
        7.53288667194607131739e0,
        8.65270180569146433925e0,
        3.78051504803591252172e0,
    ];
    const ERFC_S: &'static [Self] = &[
        2.67496128229032262684e0,
        1.02067771793409969959e1,
        1.46891745171347288761e1,
        1.96899070277714885666e1,
        1.20390659167529892799e1,
        4.06636439945371529109e0,
    ];

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}
