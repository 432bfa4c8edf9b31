//! Fixed-Point Quantization and Rounding
//!
//! ## Motivation
//!
//! The motion-control tick handler converts units on every tick, often on a
//! microcontroller without an FPU. A float multiply there costs thousands of
//! cycles in software emulation; an integer multiply-add-shift costs a
//! handful. So each real-valued conversion ratio is quantized once, at
//! configuration time, into `numerator / 2^FRACTION_BITS`, and the hot path
//! only ever sees the integer numerator.
//!
//! ## Rounding Rule
//!
//! The quantizer and the float reference converters round to nearest with
//! ties away from zero:
//!
//! ```text
//! round_to_nearest( 0.5) ==  1
//! round_to_nearest(-0.5) == -1
//! round_to_nearest( 0.2) ==  0
//! ```
//!
//! The fast path instead biases by half the denominator before an arithmetic
//! right shift. The two schemes agree everywhere except exactly on a tie,
//! and the verification battery confirms no curated input lands on one.
//!
//! ## Width Selection
//!
//! 30 fraction bits keeps every quantized numerator used by realistic
//! machines around 2^37 or below, which leaves room to multiply by the
//! declared input domain (2^22 distance, 2^24 speed) inside a 64-bit signed
//! accumulator. Configurations whose ratios would not leave that headroom
//! are rejected at quantization time, never discovered by overflow.

use crate::errors::{ConversionError, ConversionResult};

/// Number of fractional bits shared by every fixed-point ratio.
pub const FRACTION_BITS: u32 = 30;

/// `2^FRACTION_BITS`, the implicit denominator of every [`FixedRatio`].
pub const FIXED_DENOMINATOR: i64 = 1 << FRACTION_BITS;

/// Half the denominator; added before the shift so the integer division
/// rounds to nearest instead of toward negative infinity.
pub const HALF_FIXED_DENOMINATOR: i64 = 1 << (FRACTION_BITS - 1);

/// Quantized numerators above this magnitude are rejected: they could
/// overflow the 64-bit intermediate when multiplied by an in-domain input.
const MAX_NUMERATOR_MAGNITUDE: f64 = (1i64 << 62) as f64;

/// Round to the nearest integer, ties away from zero.
///
/// Truncates `x + 0.5` toward zero for non-negative input and `x - 0.5`
/// for negative input. The tie-break direction is load-bearing: the fast
/// integer converters reproduce exactly this rule, and the verification
/// battery asserts agreement against it.
#[inline]
pub fn round_to_nearest(x: f64) -> i64 {
    if x < 0.0 {
        (x - 0.5) as i64
    } else {
        (x + 0.5) as i64
    }
}

/// Quantize a real ratio into an integer numerator over `2^fraction_bits`.
///
/// Returns `round_to_nearest(ratio * 2^fraction_bits)`, or
/// [`ConversionError::RatioUnrepresentable`] when the scaled value is not
/// finite or too large for a 64-bit numerator with multiply headroom.
pub fn quantize(ratio: f64, fraction_bits: u32) -> ConversionResult<i64> {
    let scaled = ratio * (1i64 << fraction_bits) as f64;
    if !scaled.is_finite() || libm::fabs(scaled) >= MAX_NUMERATOR_MAGNITUDE {
        return Err(ConversionError::RatioUnrepresentable { ratio });
    }
    Ok(round_to_nearest(scaled))
}

/// A non-negative real ratio stored as `numerator / 2^FRACTION_BITS`.
///
/// Produced once at configuration time by [`FixedRatio::from_f64`]; applied
/// on the hot path by [`FixedRatio::apply`] with one multiply, one add and
/// one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRatio {
    numerator: i64,
}

impl FixedRatio {
    /// Quantize `ratio`, verifying that `input_max * numerator` fits a
    /// 64-bit signed accumulator.
    ///
    /// `input_max` is the largest input magnitude that will ever reach
    /// [`FixedRatio::apply`] with this ratio - the declared domain or the
    /// verification battery extreme, whichever is larger. The check here is
    /// what makes the unchecked fast path sound for every such input.
    pub fn from_f64(ratio: f64, input_max: i32) -> ConversionResult<Self> {
        let numerator = quantize(ratio, FRACTION_BITS)?;
        let headroom = numerator
            .checked_mul(i64::from(input_max))
            .and_then(|product| product.checked_add(HALF_FIXED_DENOMINATOR));
        match headroom {
            Some(_) => Ok(Self { numerator }),
            None => Err(ConversionError::RatioUnrepresentable { ratio }),
        }
    }

    /// The quantized numerator over `2^FRACTION_BITS`.
    #[inline]
    pub fn numerator(self) -> i64 {
        self.numerator
    }

    /// Multiply `x` by the ratio, rounding to nearest.
    ///
    /// Widens to 64 bits before the multiply, biases by half the denominator
    /// and shifts back down. For inputs within the `input_max` this ratio
    /// was constructed with, the intermediate cannot overflow and the result
    /// fits an `i32`.
    #[inline]
    pub fn apply(self, x: i32) -> i32 {
        (((i64::from(x) * self.numerator) + HALF_FIXED_DENOMINATOR) >> FRACTION_BITS) as i32
    }
}
