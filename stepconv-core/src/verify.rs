//! Verification Battery
//!
//! The fixed-point converters are only trusted after they have been checked
//! against the float reference for the machine actually being configured.
//! This module holds the curated input batteries and the check itself,
//! exposed as [`Converter::self_check`] and run automatically by
//! [`Converter::verified`].
//!
//! ## What is asserted
//!
//! For every battery value `v`, six properties, each stated exactly once:
//!
//! 1. Fast round-trip `to(from(v))` is within `round_to_nearest(ratio / 2)`
//!    of `v`, in both pairing orders.
//! 2. The fast result equals the float-then-round slow result exactly, for
//!    each direction.
//! 3. The pure-float round-trip is within `ratio / 2` of `v`, in both
//!    orders.
//!
//! Any miss makes the whole configuration invalid. This is the runtime
//! equivalent of a compile-time assertion battery: it runs once at bring-up
//! (and in the test suite), never inside the motion loop.
//!
//! ## How the values were chosen
//!
//! Small primes and powers of two probe bit patterns, values neighboring
//! the conversion ratio probe the rounding boundary, round decimal
//! magnitudes match typical jog and feed commands, and the domain extremes
//! exercise the full 64-bit intermediate. The speed battery reaches
//! [`SPEED_CHECK_MAX`], beyond the declared ±2^24 domain - the quantizer
//! proves multiply headroom against that same magnitude, so the battery
//! demonstrates the headroom without being able to overflow it.

use crate::{
    constants::SPEED_CHECK_MAX,
    convert::Converter,
    errors::{ConversionError, ConversionResult},
    fixed::round_to_nearest,
};

#[cfg(feature = "log")]
macro_rules! verify_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! verify_warn {
    ($($arg:tt)*) => {};
}

/// Curated distance inputs (steps or hundredths), covering zero, sign
/// symmetry, primes, powers of two, ratio-adjacent values, industrial
/// magnitudes and the ±2^22 domain extremes.
pub const DISTANCE_BATTERY: &[i32] = &[
    489_000, 489, 1, 0, 800_000, -489_000, -489, -1, -800_000,
    1 << 22, -(1 << 22),
    // Small primes
    2, 3, 5, 7, 11, 97,
    // Powers of two
    4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192,
    // Neighbors of the steps-per-hundredth ratio magnitude
    67, 68, 134, 135,
    // Common industrial travel commands
    1000, 10_000, 100_000, 1_000_000,
];

/// Curated speed inputs (steps/s or hundredths/min): same structure as the
/// distance battery, plus minute-boundary values and typical feed rates.
pub const SPEED_BATTERY: &[i32] = &[
    489_000, 489, 1, 0, SPEED_CHECK_MAX, -489_000, -489, -1, -SPEED_CHECK_MAX,
    1 << 24, -(1 << 24),
    // Small primes
    2, 3, 5, 7, 11, 97,
    // Powers of two
    4, 16, 64, 256, 1024, 4096,
    // Around the speed ratio and the minute boundary
    60, 120, 600,
    // Typical industrial feed rates
    3000, 6000, 12_000, 60_000, 300_000,
];

impl Converter {
    /// Run the full verification battery against this converter.
    ///
    /// Returns [`ConversionError::VerificationFailed`] naming the first
    /// input that missed its bound. A converter whose configuration fails
    /// here must not be used.
    pub fn self_check(&self) -> ConversionResult<()> {
        let r = self.ratios();

        let sth_bound = round_to_nearest(r.hundredths_per_step / 2.0) as i32;
        let hts_bound = round_to_nearest(r.steps_per_hundredth / 2.0) as i32;
        for &v in DISTANCE_BATTERY {
            self.check_trip(
                v,
                |c, x| c.hundredths_to_steps(x),
                |c, x| c.steps_to_hundredths(x),
                |c, x| c.f64_hundredths_to_steps(x),
                |c, x| c.f64_steps_to_hundredths(x),
                sth_bound,
                r.hundredths_per_step / 2.0,
            )?;
            self.check_trip(
                v,
                |c, x| c.steps_to_hundredths(x),
                |c, x| c.hundredths_to_steps(x),
                |c, x| c.f64_steps_to_hundredths(x),
                |c, x| c.f64_hundredths_to_steps(x),
                hts_bound,
                r.steps_per_hundredth / 2.0,
            )?;
            self.check_agreement(v, |c, x| c.steps_to_hundredths(x), |c, x| {
                c.slow_steps_to_hundredths(x)
            })?;
            self.check_agreement(v, |c, x| c.hundredths_to_steps(x), |c, x| {
                c.slow_hundredths_to_steps(x)
            })?;
        }

        let sps_to_hpm_bound = round_to_nearest(r.sps_to_hpm_ratio / 2.0) as i32;
        let hpm_to_sps_bound = round_to_nearest(r.hpm_to_sps_ratio / 2.0) as i32;
        for &v in SPEED_BATTERY {
            self.check_trip(
                v,
                |c, x| c.hpm_to_sps(x),
                |c, x| c.sps_to_hpm(x),
                |c, x| c.f64_hpm_to_sps(x),
                |c, x| c.f64_sps_to_hpm(x),
                sps_to_hpm_bound,
                r.sps_to_hpm_ratio / 2.0,
            )?;
            self.check_trip(
                v,
                |c, x| c.sps_to_hpm(x),
                |c, x| c.hpm_to_sps(x),
                |c, x| c.f64_sps_to_hpm(x),
                |c, x| c.f64_hpm_to_sps(x),
                hpm_to_sps_bound,
                r.hpm_to_sps_ratio / 2.0,
            )?;
            self.check_agreement(v, |c, x| c.sps_to_hpm(x), |c, x| c.slow_sps_to_hpm(x))?;
            self.check_agreement(v, |c, x| c.hpm_to_sps(x), |c, x| c.slow_hpm_to_sps(x))?;
        }

        Ok(())
    }

    /// Check one round-trip direction starting from `v`: the fast
    /// fixed-point trip against its rounded half-ratio bound, and the pure
    /// float trip against the exact half-ratio.
    #[allow(clippy::too_many_arguments)]
    fn check_trip(
        &self,
        v: i32,
        fast_from: impl Fn(&Self, i32) -> i32,
        fast_to: impl Fn(&Self, i32) -> i32,
        f64_from: impl Fn(&Self, f64) -> f64,
        f64_to: impl Fn(&Self, f64) -> f64,
        trip_bound: i32,
        f64_trip_bound: f64,
    ) -> ConversionResult<()> {
        let trip = fast_to(self, fast_from(self, v));
        if (trip - v).abs() > trip_bound {
            verify_warn!("round-trip {} -> {} exceeds bound {}", v, trip, trip_bound);
            return Err(ConversionError::VerificationFailed {
                input: v,
                actual: trip,
                expected: v,
            });
        }

        let f64_trip = f64_to(self, f64_from(self, f64::from(v)));
        if libm::fabs(f64_trip - f64::from(v)) > f64_trip_bound {
            verify_warn!("float round-trip {} -> {} exceeds bound", v, f64_trip);
            return Err(ConversionError::VerificationFailed {
                input: v,
                actual: round_to_nearest(f64_trip) as i32,
                expected: v,
            });
        }

        Ok(())
    }

    /// Check the fixed-point path agrees exactly with float-then-round for
    /// one conversion direction.
    fn check_agreement(
        &self,
        v: i32,
        fast: impl Fn(&Self, i32) -> i32,
        slow: impl Fn(&Self, i32) -> i32,
    ) -> ConversionResult<()> {
        let fast = fast(self, v);
        let slow = slow(self, v);
        if fast != slow {
            verify_warn!("fast {} != slow {} for input {}", fast, slow, v);
            return Err(ConversionError::VerificationFailed {
                input: v,
                actual: fast,
                expected: slow,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;

    #[test]
    fn andantex_passes_self_check() {
        let converter = Converter::new(MachineConfig::andantex_a30()).unwrap();
        assert_eq!(converter.self_check(), Ok(()));
    }

    #[test]
    fn verified_constructor_runs_battery() {
        assert!(Converter::verified(MachineConfig::andantex_a30()).is_ok());
    }

    #[test]
    fn coarse_axis_fails_cleanly_not_by_overflow() {
        // A valid direct-drive configuration whose speed numerator leaves
        // no headroom for the battery extreme must come back as an error
        // from construction, never reach the battery and wrap or panic.
        let coarse = MachineConfig::new(800.0, 1.0, 258.6).unwrap();
        assert!(matches!(
            Converter::verified(coarse),
            Err(ConversionError::RatioUnrepresentable { .. })
        ));
    }

    #[test]
    fn batteries_cover_domain_extremes() {
        assert!(DISTANCE_BATTERY.contains(&(1 << 22)));
        assert!(DISTANCE_BATTERY.contains(&-(1 << 22)));
        assert!(SPEED_BATTERY.contains(&(1 << 24)));
        assert!(SPEED_BATTERY.contains(&-(1 << 24)));
        assert!(SPEED_BATTERY.contains(&SPEED_CHECK_MAX));
        assert!(SPEED_BATTERY.contains(&-SPEED_CHECK_MAX));
        assert!(DISTANCE_BATTERY.contains(&0));
        assert!(SPEED_BATTERY.contains(&0));
    }
}
