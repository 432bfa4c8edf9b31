//! Fixed-point unit conversion core for stepper-driven linear axes
//!
//! Converts between motor step counts and the controlling system's physical
//! units - hundredths of an inch for distance, hundredths of an inch per
//! minute for speed - using 64-bit integer fixed-point arithmetic so the
//! motion-control tick handler never touches a float.
//!
//! Key constraints:
//! - Deterministic: same input, same output, on every target
//! - No float on the hot path, no allocation anywhere
//! - Constant time per conversion: one multiply, one add, one shift
//!
//! ```
//! use stepconv_core::{Converter, MachineConfig};
//!
//! let config = MachineConfig::new(800.0, 50.0, 48.0)?;
//! let converter = Converter::verified(config)?;
//!
//! let steps = converter.hundredths_to_steps(489);
//! assert_eq!(converter.steps_to_hundredths(steps), 489);
//! # Ok::<(), stepconv_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod fixed;
pub mod ratio;
pub mod verify;

// Public API
pub use config::MachineConfig;
pub use convert::Converter;
pub use errors::{ConversionError, ConversionResult};
pub use fixed::{round_to_nearest, FixedRatio, FRACTION_BITS};
pub use ratio::DerivedRatios;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
