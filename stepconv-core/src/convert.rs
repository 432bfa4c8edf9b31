//! Unit Converters
//!
//! [`Converter`] is the crate's function boundary: four fast fixed-point
//! conversions for the motion loop, checked variants for callers that want
//! the domain enforced, and float reference conversions used only by the
//! verification battery.
//!
//! ## Fast vs checked vs reference
//!
//! - **Fast** (`steps_to_hundredths`, ...): one widening multiply, one add,
//!   one shift. No branch, no error path. The declared domain is a caller
//!   contract; violating it risks overflow of the 64-bit intermediate, the
//!   same contract the fixed-point design has always had.
//! - **Checked** (`checked_steps_to_hundredths`, ...): same arithmetic
//!   behind an explicit domain test, returning
//!   [`ConversionError::DomainViolation`] instead of relying on the caller.
//!   Intended for command ingestion paths, not the tick handler.
//! - **Reference** (`f64_*`, `slow_*`): direct float multiply, and float
//!   multiply followed by round-to-nearest. Exist solely so the battery can
//!   pin the fast path against them; never called by production code.

use crate::{
    config::MachineConfig,
    constants::{DISTANCE_DOMAIN_MAX, SPEED_DOMAIN_MAX},
    errors::{ConversionError, ConversionResult},
    fixed::round_to_nearest,
    ratio::DerivedRatios,
};

/// Step/travel unit converter for one configured axis.
///
/// Immutable once built; every method takes `&self` and is safe to call
/// from any number of threads without synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    config: MachineConfig,
    ratios: DerivedRatios,
}

impl Converter {
    /// Build a converter: validate the configuration and derive all ratios.
    pub fn new(config: MachineConfig) -> ConversionResult<Self> {
        let ratios = DerivedRatios::derive(&config)?;
        Ok(Self { config, ratios })
    }

    /// Build a converter and run the full verification battery on it.
    ///
    /// This is the constructor to use at machine bring-up: a configuration
    /// whose fixed-point ratios disagree with the float reference anywhere
    /// in the curated battery is rejected outright rather than allowed to
    /// mis-position an axis.
    pub fn verified(config: MachineConfig) -> ConversionResult<Self> {
        let converter = Self::new(config)?;
        converter.self_check()?;
        Ok(converter)
    }

    /// The configuration this converter was built from.
    #[inline]
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The derived ratios, real-valued and quantized.
    #[inline]
    pub fn ratios(&self) -> &DerivedRatios {
        &self.ratios
    }

    // ===== FAST PATH =====

    /// Steps at the motor to hundredths of an inch of travel.
    ///
    /// Safe input range `[-2^22, 2^22]`.
    #[inline]
    pub fn steps_to_hundredths(&self, steps: i32) -> i32 {
        self.ratios.fixed_steps_to_hundredths.apply(steps)
    }

    /// Hundredths of an inch of travel to steps at the motor.
    ///
    /// Safe input range `[-2^22, 2^22]`.
    #[inline]
    pub fn hundredths_to_steps(&self, hundredths: i32) -> i32 {
        self.ratios.fixed_hundredths_to_steps.apply(hundredths)
    }

    /// Steps per second to hundredths of an inch per minute.
    ///
    /// Safe input range `[-2^24, 2^24]`.
    #[inline]
    pub fn sps_to_hpm(&self, steps_per_second: i32) -> i32 {
        self.ratios.fixed_sps_to_hpm.apply(steps_per_second)
    }

    /// Hundredths of an inch per minute to steps per second.
    ///
    /// Safe input range `[-2^24, 2^24]`.
    #[inline]
    pub fn hpm_to_sps(&self, hundredths_per_minute: i32) -> i32 {
        self.ratios.fixed_hpm_to_sps.apply(hundredths_per_minute)
    }

    // ===== CHECKED PATH =====

    /// [`Self::steps_to_hundredths`] with the domain enforced.
    pub fn checked_steps_to_hundredths(&self, steps: i32) -> ConversionResult<i32> {
        check_domain(steps, DISTANCE_DOMAIN_MAX)?;
        Ok(self.steps_to_hundredths(steps))
    }

    /// [`Self::hundredths_to_steps`] with the domain enforced.
    pub fn checked_hundredths_to_steps(&self, hundredths: i32) -> ConversionResult<i32> {
        check_domain(hundredths, DISTANCE_DOMAIN_MAX)?;
        Ok(self.hundredths_to_steps(hundredths))
    }

    /// [`Self::sps_to_hpm`] with the domain enforced.
    pub fn checked_sps_to_hpm(&self, steps_per_second: i32) -> ConversionResult<i32> {
        check_domain(steps_per_second, SPEED_DOMAIN_MAX)?;
        Ok(self.sps_to_hpm(steps_per_second))
    }

    /// [`Self::hpm_to_sps`] with the domain enforced.
    pub fn checked_hpm_to_sps(&self, hundredths_per_minute: i32) -> ConversionResult<i32> {
        check_domain(hundredths_per_minute, SPEED_DOMAIN_MAX)?;
        Ok(self.hpm_to_sps(hundredths_per_minute))
    }

    // ===== REFERENCE PATH (verification only) =====

    /// Float reference for [`Self::steps_to_hundredths`].
    pub fn f64_steps_to_hundredths(&self, steps: f64) -> f64 {
        steps * self.ratios.hundredths_per_step
    }

    /// Float reference for [`Self::hundredths_to_steps`].
    pub fn f64_hundredths_to_steps(&self, hundredths: f64) -> f64 {
        hundredths * self.ratios.steps_per_hundredth
    }

    /// Float reference for [`Self::sps_to_hpm`].
    pub fn f64_sps_to_hpm(&self, steps_per_second: f64) -> f64 {
        steps_per_second * self.ratios.sps_to_hpm_ratio
    }

    /// Float reference for [`Self::hpm_to_sps`].
    pub fn f64_hpm_to_sps(&self, hundredths_per_minute: f64) -> f64 {
        hundredths_per_minute * self.ratios.hpm_to_sps_ratio
    }

    /// Float-then-round reference for [`Self::steps_to_hundredths`].
    pub fn slow_steps_to_hundredths(&self, steps: i32) -> i32 {
        round_to_nearest(self.f64_steps_to_hundredths(f64::from(steps))) as i32
    }

    /// Float-then-round reference for [`Self::hundredths_to_steps`].
    pub fn slow_hundredths_to_steps(&self, hundredths: i32) -> i32 {
        round_to_nearest(self.f64_hundredths_to_steps(f64::from(hundredths))) as i32
    }

    /// Float-then-round reference for [`Self::sps_to_hpm`].
    pub fn slow_sps_to_hpm(&self, steps_per_second: i32) -> i32 {
        round_to_nearest(self.f64_sps_to_hpm(f64::from(steps_per_second))) as i32
    }

    /// Float-then-round reference for [`Self::hpm_to_sps`].
    pub fn slow_hpm_to_sps(&self, hundredths_per_minute: i32) -> i32 {
        round_to_nearest(self.f64_hpm_to_sps(f64::from(hundredths_per_minute))) as i32
    }
}

#[inline]
fn check_domain(value: i32, limit: i32) -> ConversionResult<()> {
    if value < -limit || value > limit {
        return Err(ConversionError::DomainViolation { value, limit });
    }
    Ok(())
}
