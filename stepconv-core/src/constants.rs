//! Unit Factors and Input Domains
//!
//! Centralized constants for the conversion chain. Values are exact unit
//! definitions or declared contract bounds, never tunables.

// ===== UNIT CONVERSION FACTORS =====

/// Millimeters per inch.
///
/// Exact by definition since the 1959 international yard and pound
/// agreement.
pub const MM_PER_INCH: f64 = 25.4;

/// Hundredths of an inch per inch.
///
/// The controlling system positions in 0.01 inch increments, so this is
/// the scale factor between inches and its native distance unit.
pub const HUNDREDTHS_PER_INCH: f64 = 100.0;

/// Seconds per minute.
///
/// Speed commands arrive in units-per-minute while step generation runs
/// in steps-per-second.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// ===== DECLARED INPUT DOMAINS =====

/// Largest distance input magnitude the converters accept (steps or
/// hundredths).
///
/// 2^22 hundredths is just under 42 km of travel - far beyond any
/// physical axis. The bound exists so the 64-bit intermediate
/// `input * numerator` can never overflow for any representable ratio.
pub const DISTANCE_DOMAIN_MAX: i32 = 1 << 22;

/// Largest speed input magnitude the converters accept (steps/s or
/// hundredths/min).
///
/// 2^24 steps per second exceeds any realistic pulse rate; the bound
/// again protects the 64-bit intermediate, not the physics.
pub const SPEED_DOMAIN_MAX: i32 = 1 << 24;

/// Largest speed magnitude the verification battery drives through the
/// fast converters.
///
/// Deliberately beyond [`SPEED_DOMAIN_MAX`]: the battery demonstrates the
/// 64-bit intermediate has real headroom past the declared domain. The
/// speed ratios are therefore quantized with overflow headroom proven
/// against this magnitude, so the battery itself can never overflow on a
/// configuration that constructed successfully.
pub const SPEED_CHECK_MAX: i32 = 80_000_000;
