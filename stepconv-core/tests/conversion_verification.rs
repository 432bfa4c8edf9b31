//! Integration battery for the fixed-point converters
//!
//! Runs the full curated battery against the reference ANDANTEX machine -
//! the configuration the battery values were tuned on - and bound checks
//! against the ATLANTA helical machine.

use stepconv_core::{
    round_to_nearest,
    verify::{DISTANCE_BATTERY, SPEED_BATTERY},
    Converter, MachineConfig,
};

fn andantex() -> Converter {
    Converter::new(MachineConfig::andantex_a30()).unwrap()
}

fn atlanta() -> Converter {
    Converter::new(MachineConfig::atlanta_helical()).unwrap()
}

#[test]
fn andantex_verified_construction_succeeds() {
    assert!(Converter::verified(MachineConfig::andantex_a30()).is_ok());
}

#[test]
fn andantex_distance_battery() {
    let c = andantex();
    let r = c.ratios();
    let sth_bound = round_to_nearest(r.hundredths_per_step / 2.0) as i32;
    let hts_bound = round_to_nearest(r.steps_per_hundredth / 2.0) as i32;

    for &v in DISTANCE_BATTERY {
        // fast round-trips within the rounded half-ratio
        assert!(
            (c.steps_to_hundredths(c.hundredths_to_steps(v)) - v).abs() <= sth_bound,
            "distance round-trip failed for {v}"
        );
        assert!(
            (c.hundredths_to_steps(c.steps_to_hundredths(v)) - v).abs() <= hts_bound,
            "inverse distance round-trip failed for {v}"
        );

        // fixed-point never disagrees with float-then-round
        assert_eq!(c.steps_to_hundredths(v), c.slow_steps_to_hundredths(v));
        assert_eq!(c.hundredths_to_steps(v), c.slow_hundredths_to_steps(v));

        // the float reference round-trips within half the ratio
        let f = f64::from(v);
        assert!(
            (c.f64_steps_to_hundredths(c.f64_hundredths_to_steps(f)) - f).abs()
                <= r.hundredths_per_step / 2.0
        );
        assert!(
            (c.f64_hundredths_to_steps(c.f64_steps_to_hundredths(f)) - f).abs()
                <= r.steps_per_hundredth / 2.0
        );
    }
}

#[test]
fn andantex_speed_battery() {
    let c = andantex();
    let r = c.ratios();
    let sps_to_hpm_bound = round_to_nearest(r.sps_to_hpm_ratio / 2.0) as i32;
    let hpm_to_sps_bound = round_to_nearest(r.hpm_to_sps_ratio / 2.0) as i32;

    for &v in SPEED_BATTERY {
        assert!(
            (c.sps_to_hpm(c.hpm_to_sps(v)) - v).abs() <= sps_to_hpm_bound,
            "speed round-trip failed for {v}"
        );
        assert!(
            (c.hpm_to_sps(c.sps_to_hpm(v)) - v).abs() <= hpm_to_sps_bound,
            "inverse speed round-trip failed for {v}"
        );

        assert_eq!(c.sps_to_hpm(v), c.slow_sps_to_hpm(v));
        assert_eq!(c.hpm_to_sps(v), c.slow_hpm_to_sps(v));

        let f = f64::from(v);
        assert!(
            (c.f64_sps_to_hpm(c.f64_hpm_to_sps(f)) - f).abs() <= r.sps_to_hpm_ratio / 2.0
        );
        assert!(
            (c.f64_hpm_to_sps(c.f64_sps_to_hpm(f)) - f).abs() <= r.hpm_to_sps_ratio / 2.0
        );
    }
}

#[test]
fn atlanta_round_trips_within_bounds() {
    // Exact fast/slow agreement is a property of a particular quantization,
    // so for the second machine only the round-trip bounds are asserted.
    let c = atlanta();
    let r = c.ratios();
    let sth_bound = round_to_nearest(r.hundredths_per_step / 2.0) as i32;
    let hts_bound = round_to_nearest(r.steps_per_hundredth / 2.0) as i32;

    for &v in DISTANCE_BATTERY {
        assert!((c.steps_to_hundredths(c.hundredths_to_steps(v)) - v).abs() <= sth_bound);
        assert!((c.hundredths_to_steps(c.steps_to_hundredths(v)) - v).abs() <= hts_bound);
    }

    let sps_to_hpm_bound = round_to_nearest(r.sps_to_hpm_ratio / 2.0) as i32;
    let hpm_to_sps_bound = round_to_nearest(r.hpm_to_sps_ratio / 2.0) as i32;

    for &v in SPEED_BATTERY {
        assert!((c.sps_to_hpm(c.hpm_to_sps(v)) - v).abs() <= sps_to_hpm_bound);
        assert!((c.hpm_to_sps(c.sps_to_hpm(v)) - v).abs() <= hpm_to_sps_bound);
    }
}

#[test]
fn commanded_distance_survives_round_trip() {
    // 800 steps/rev, 50:1, 48 mm pinion: 489 hundredths survives the trip
    let c = Converter::new(MachineConfig::new(800.0, 50.0, 48.0).unwrap()).unwrap();
    let bound = round_to_nearest(c.ratios().hundredths_per_step / 2.0) as i32;
    let steps = c.hundredths_to_steps(489);
    let back = c.steps_to_hundredths(steps);
    assert!((back - 489).abs() <= bound);
}
