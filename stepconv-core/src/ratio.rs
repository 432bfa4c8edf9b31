//! Ratio Derivation
//!
//! Pure arithmetic from [`MachineConfig`] to every conversion ratio the
//! crate uses, real-valued and fixed-point. Derived once per configuration
//! and immutable afterwards; the motion loop only ever reads.
//!
//! Forward and inverse ratios are computed independently from the physical
//! parameters rather than as reciprocals of each other. The float round-trip
//! checks in the verification battery exploit that: if either direction were
//! derived wrong, the independent inverse would expose it.

use core::f64::consts::PI;

use crate::{
    config::MachineConfig,
    constants::{
        DISTANCE_DOMAIN_MAX, HUNDREDTHS_PER_INCH, MM_PER_INCH, SECONDS_PER_MINUTE,
        SPEED_CHECK_MAX,
    },
    errors::ConversionResult,
    fixed::FixedRatio,
};

/// Every conversion ratio derived from one [`MachineConfig`].
///
/// The `f64` fields feed the reference converters and diagnostics; the
/// [`FixedRatio`] fields feed the fast integer path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    /// Pinion pitch circumference in millimeters.
    pub pinion_circumference_mm: f64,
    /// Linear travel per motor shaft revolution, millimeters.
    pub mm_per_motor_rev: f64,
    /// Linear travel per motor shaft revolution, inches.
    pub inch_per_motor_rev: f64,
    /// Linear travel per motor shaft revolution, hundredths of an inch.
    pub hundredths_per_motor_rev: f64,
    /// Travel per single step, millimeters.
    pub mm_per_step: f64,
    /// Travel per single step, hundredths of an inch.
    pub hundredths_per_step: f64,
    /// Steps per millimeter of travel.
    pub steps_per_mm: f64,
    /// Steps per hundredth of an inch of travel.
    pub steps_per_hundredth: f64,
    /// Multiplier taking hundredths-per-minute to steps-per-second.
    pub hpm_to_sps_ratio: f64,
    /// Multiplier taking steps-per-second to hundredths-per-minute.
    pub sps_to_hpm_ratio: f64,

    /// Quantized steps-per-hundredth, for the fast distance converter.
    pub fixed_hundredths_to_steps: FixedRatio,
    /// Quantized hundredths-per-step, for the fast distance converter.
    pub fixed_steps_to_hundredths: FixedRatio,
    /// Quantized speed multiplier, steps/s to hundredths/min.
    pub fixed_sps_to_hpm: FixedRatio,
    /// Quantized speed multiplier, hundredths/min to steps/s.
    pub fixed_hpm_to_sps: FixedRatio,
}

impl DerivedRatios {
    /// Derive all ratios for `config`.
    ///
    /// Validates the configuration first, then fails only if a ratio cannot
    /// be quantized with multiply headroom for the declared input domains.
    pub fn derive(config: &MachineConfig) -> ConversionResult<Self> {
        config.validate()?;

        let pinion_circumference_mm = config.pinion_diameter_mm() * PI;
        let mm_per_motor_rev = pinion_circumference_mm / config.motor_revs_per_pinion_rev();
        let inch_per_motor_rev = mm_per_motor_rev / MM_PER_INCH;
        let hundredths_per_motor_rev = inch_per_motor_rev * HUNDREDTHS_PER_INCH;

        let mm_per_step = mm_per_motor_rev / config.steps_per_motor_rev();
        let hundredths_per_step = hundredths_per_motor_rev / config.steps_per_motor_rev();

        let steps_per_mm = config.steps_per_motor_rev() / mm_per_motor_rev;
        let steps_per_hundredth = config.steps_per_motor_rev() / hundredths_per_motor_rev;

        let hpm_to_sps_ratio = steps_per_hundredth / SECONDS_PER_MINUTE;
        let sps_to_hpm_ratio = 1.0 / hpm_to_sps_ratio;

        Ok(Self {
            pinion_circumference_mm,
            mm_per_motor_rev,
            inch_per_motor_rev,
            hundredths_per_motor_rev,
            mm_per_step,
            hundredths_per_step,
            steps_per_mm,
            steps_per_hundredth,
            hpm_to_sps_ratio,
            sps_to_hpm_ratio,
            fixed_hundredths_to_steps: FixedRatio::from_f64(
                steps_per_hundredth,
                DISTANCE_DOMAIN_MAX,
            )?,
            fixed_steps_to_hundredths: FixedRatio::from_f64(
                hundredths_per_step,
                DISTANCE_DOMAIN_MAX,
            )?,
            // Speed headroom is proven against the battery extreme, not
            // just the declared domain, so self_check cannot overflow.
            fixed_sps_to_hpm: FixedRatio::from_f64(sps_to_hpm_ratio, SPEED_CHECK_MAX)?,
            fixed_hpm_to_sps: FixedRatio::from_f64(hpm_to_sps_ratio, SPEED_CHECK_MAX)?,
        })
    }
}
