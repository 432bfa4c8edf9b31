//! Machine Configuration
//!
//! The three physical parameters everything else is derived from: how many
//! steps the drive needs for one motor revolution, the gearbox ratio between
//! motor and pinion, and the pinion diameter. They are supplied once, before
//! any ratio is derived, and validated at that boundary - a non-positive
//! parameter here would silently poison every conversion downstream.

use crate::errors::{ConversionError, ConversionResult};

/// Physical parameters of one stepper-driven linear axis.
///
/// Construct with [`MachineConfig::new`] or one of the named presets; all
/// constructors reject parameters that are not strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Steps the drive emits per motor shaft revolution (microstepping
    /// included).
    steps_per_motor_rev: f64,

    /// Gear reduction between motor shaft and pinion.
    motor_revs_per_pinion_rev: f64,

    /// Pitch diameter of the rack pinion, in millimeters.
    pinion_diameter_mm: f64,
}

impl MachineConfig {
    /// Create a configuration, rejecting non-positive or non-finite
    /// parameters with [`ConversionError::InvalidConfiguration`].
    pub fn new(
        steps_per_motor_rev: f64,
        motor_revs_per_pinion_rev: f64,
        pinion_diameter_mm: f64,
    ) -> ConversionResult<Self> {
        let config = Self {
            steps_per_motor_rev,
            motor_revs_per_pinion_rev,
            pinion_diameter_mm,
        };
        config.validate()?;
        Ok(config)
    }

    /// ANDANTEX A30-021-300 servo reducer on a 48 mm pinion, 800 steps/rev.
    ///
    /// The reference machine the verification battery values were tuned on.
    pub fn andantex_a30() -> Self {
        Self {
            steps_per_motor_rev: 800.0,
            motor_revs_per_pinion_rev: 50.0,
            pinion_diameter_mm: 48.0,
        }
    }

    /// ATLANTA 24 99 232 helical rack drive, 67.91 mm pinion, 800 steps/rev.
    pub fn atlanta_helical() -> Self {
        Self {
            steps_per_motor_rev: 800.0,
            motor_revs_per_pinion_rev: 100.0,
            pinion_diameter_mm: 67.91,
        }
    }

    /// Steps per motor shaft revolution.
    #[inline]
    pub fn steps_per_motor_rev(&self) -> f64 {
        self.steps_per_motor_rev
    }

    /// Motor revolutions per pinion revolution.
    #[inline]
    pub fn motor_revs_per_pinion_rev(&self) -> f64 {
        self.motor_revs_per_pinion_rev
    }

    /// Pinion pitch diameter in millimeters.
    #[inline]
    pub fn pinion_diameter_mm(&self) -> f64 {
        self.pinion_diameter_mm
    }

    /// Check every parameter is strictly positive and finite.
    ///
    /// Re-run by ratio derivation so configurations arriving through serde
    /// (which bypasses `new`) are still caught before any ratio exists.
    pub(crate) fn validate(&self) -> ConversionResult<()> {
        check_positive("steps_per_motor_rev", self.steps_per_motor_rev)?;
        check_positive("motor_revs_per_pinion_rev", self.motor_revs_per_pinion_rev)?;
        check_positive("pinion_diameter_mm", self.pinion_diameter_mm)?;
        Ok(())
    }
}

fn check_positive(parameter: &'static str, value: f64) -> ConversionResult<()> {
    // NaN fails the comparison, so it is rejected here too
    if !(value > 0.0) || !value.is_finite() {
        return Err(ConversionError::InvalidConfiguration { parameter, value });
    }
    Ok(())
}
