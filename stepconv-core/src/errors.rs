//! Error Types for Conversion Setup and Checked Conversions
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant carries only inline scalar data, so the
//!    enum stays register-friendly and can be returned from constructors on
//!    targets without an allocator.
//!
//! 2. **No Heap Allocation**: no `String` anywhere - parameter names are
//!    `&'static str`, everything else is a number.
//!
//! 3. **Copy Semantics**: errors implement `Copy` so they can be returned and
//!    matched without move gymnastics.
//!
//! 4. **Construction-Time Only**: with the exception of `DomainViolation`
//!    (returned by the `checked_*` conversion API), every error here can only
//!    occur while a [`Converter`](crate::Converter) is being built. The fast
//!    conversion path has no error branch at all.
//!
//! ## Error Categories
//!
//! ### Configuration errors
//! - `InvalidConfiguration`: a physical machine parameter is non-positive or
//!   not finite
//! - `RatioUnrepresentable`: a derived ratio does not fit the fixed-point
//!   width with enough headroom for the declared input domain
//! - `VerificationFailed`: the self-check battery disagreed for this machine
//!
//! ### Caller errors
//! - `DomainViolation`: input handed to a `checked_*` conversion lies outside
//!   the declared safe range

use thiserror_no_std::Error;

/// Result type for configuration and conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// A physical machine parameter is non-positive or not finite
    #[error("invalid configuration: {parameter} = {value}, must be finite and > 0")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A derived ratio cannot be quantized into the fixed-point width
    /// without risking 64-bit overflow for in-domain inputs
    #[error("ratio {ratio} not representable in the fixed-point width")]
    RatioUnrepresentable {
        /// The real-valued ratio that failed quantization
        ratio: f64,
    },

    /// Input outside the declared safe range of a conversion function
    #[error("input {value} outside safe range [-{limit}, {limit}]")]
    DomainViolation {
        /// The out-of-range input
        value: i32,
        /// Magnitude of the declared domain bound
        limit: i32,
    },

    /// The self-check battery found a disagreement for this configuration
    #[error("verification failed: input {input} produced {actual}, expected within bound of {expected}")]
    VerificationFailed {
        /// Battery input that failed
        input: i32,
        /// Result the conversion produced
        actual: i32,
        /// Expected value (battery input or reference result)
        expected: i32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConfiguration { parameter, value } =>
                defmt::write!(fmt, "invalid config: {} = {}", parameter, value),
            Self::RatioUnrepresentable { ratio } =>
                defmt::write!(fmt, "ratio {} unrepresentable", ratio),
            Self::DomainViolation { value, limit } =>
                defmt::write!(fmt, "input {} outside +/-{}", value, limit),
            Self::VerificationFailed { input, actual, expected } =>
                defmt::write!(fmt, "verify failed: {} -> {}, expected {}", input, actual, expected),
        }
    }
}
