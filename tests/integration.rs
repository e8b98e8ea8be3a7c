use heliodon::{find_noon, find_times, find_times_with_twilight, DayPoint, EpochDays, Observer};
use proptest::prelude::*;

// Seeds are mid-morning UTC so they sit safely inside the solar day
// under test at every longitude used below.
const SOLSTICE_2024_06H: i64 = 1_718_949_600_000; // 2024-06-21T06:00:00Z
const EQUINOX_2024_06H: i64 = 1_710_914_400_000; // 2024-03-20T06:00:00Z
const SOLSTICE_2024_NOON: i64 = 1_718_971_200_000; // 2024-06-21T12:00:00Z

const MINUTE_MS: i64 = 60_000;
const DAY_MS: i64 = 86_400_000;

fn ordered_instants(times: &heliodon::DayTimes) -> [i64; 9] {
    [
        times.start_midnight,
        times.start_dawn,
        times.start_rise,
        times.end_rise,
        times.noon,
        times.start_set,
        times.end_set,
        times.end_dusk,
        times.end_midnight,
    ]
}

#[test]
fn greenwich_solstice_noon_is_near_civil_noon() {
    let observer = Observer::from_degrees(51.4769, -0.0005).unwrap();
    let times = find_times(SOLSTICE_2024_06H, &observer).unwrap();

    // Apparent noon differs from civil noon by the equation of time,
    // under two minutes in late June.
    let offset = times.noon - SOLSTICE_2024_NOON;
    assert!(
        offset.abs() < 5 * MINUTE_MS,
        "noon offset from 12:00Z = {} s",
        offset / 1000
    );
}

#[test]
fn greenwich_solstice_daylight_span() {
    let observer = Observer::from_degrees(51.4769, -0.0005).unwrap();
    let times = find_times(SOLSTICE_2024_06H, &observer).unwrap();

    // Almanac daylight for Greenwich on 2024-06-21: 16 h 38 m.
    let daylight = times.end_set - times.start_rise;
    let expected = 16 * 60 * MINUTE_MS + 38 * MINUTE_MS;
    assert!(
        (daylight - expected).abs() < 5 * MINUTE_MS,
        "daylight = {} s, expected ≈ {} s",
        daylight / 1000,
        expected / 1000
    );
    assert!(!times.no_dawn && !times.no_rise && !times.no_set && !times.no_dusk);
}

#[test]
fn svalbard_solstice_is_continuous_polar_day() {
    let observer = Observer::from_degrees(78.0, 15.0).unwrap();
    let times = find_times(SOLSTICE_2024_06H, &observer).unwrap();

    assert!(times.no_dawn, "dawn should not occur");
    assert!(times.no_rise, "sunrise should not occur");
    assert!(times.no_set, "sunset should not occur");
    assert!(times.no_dusk, "dusk should not occur");

    // The whole daily arc is above every target altitude, so the rising
    // events collapse onto the opening midnight and the setting events
    // onto the closing one.
    assert_eq!(times.start_rise, times.start_midnight);
    assert_eq!(times.end_set, times.end_midnight);

    assert!((times.day_length - DAY_MS).abs() < MINUTE_MS);
}

#[test]
fn equator_equinox_day() {
    let observer = Observer::from_degrees(0.0, 0.0).unwrap();
    let times = find_times(EQUINOX_2024_06H, &observer).unwrap();

    // At the equator the sun rises vertically: the disc takes only a
    // couple of minutes to clear the horizon.
    let rise_span = times.end_rise - times.start_rise;
    assert!(
        (MINUTE_MS..=6 * MINUTE_MS).contains(&rise_span),
        "rise span = {} s",
        rise_span / 1000
    );
    let set_span = times.end_set - times.start_set;
    assert!(
        (MINUTE_MS..=6 * MINUTE_MS).contains(&set_span),
        "set span = {} s",
        set_span / 1000
    );

    // Midnight-to-midnight is one apparent solar day — 24 h minus the
    // ~17 s equation-of-time drift of late March.
    assert!(
        (times.day_length - DAY_MS).abs() < 30_000,
        "day length = {} s",
        times.day_length / 1000
    );
    assert!(!times.no_rise && !times.no_set);
}

#[test]
fn noon_lies_strictly_between_the_bracketing_midnights() {
    for &(lat, lon) in &[(51.4769, -0.0005), (0.0, 0.0), (-33.87, 151.21)] {
        let observer = Observer::from_degrees(lat, lon).unwrap();
        let times = find_times(SOLSTICE_2024_06H, &observer).unwrap();
        assert!(
            times.start_midnight < times.noon && times.noon < times.end_midnight,
            "at ({lat}, {lon})"
        );
    }
}

#[test]
fn instants_are_ordered_at_mid_latitudes() {
    for &(lat, lon) in &[(51.4769, -0.0005), (0.0, 0.0), (-33.87, 151.21), (40.4, -3.7)] {
        let observer = Observer::from_degrees(lat, lon).unwrap();
        let times = find_times(SOLSTICE_2024_06H, &observer).unwrap();
        let instants = ordered_instants(&times);
        for pair in instants.windows(2) {
            assert!(pair[0] <= pair[1], "disorder at ({lat}, {lon}): {instants:?}");
        }
    }
}

#[test]
fn identical_inputs_yield_identical_output() {
    let observer = Observer::from_degrees(51.4769, -0.0005).unwrap();
    let a = find_times_with_twilight(SOLSTICE_2024_06H, &observer).unwrap();
    let b = find_times_with_twilight(SOLSTICE_2024_06H, &observer).unwrap();
    assert_eq!(a, b);
}

#[test]
fn find_noon_rolls_the_window_forward() {
    let observer = Observer::from_degrees(51.4769, -0.0005).unwrap();
    let noon = find_noon(SOLSTICE_2024_06H, &observer).unwrap();
    let next_noon = find_noon(noon + DAY_MS, &observer).unwrap();
    let gap = next_noon - noon;
    assert!(
        (gap - DAY_MS).abs() < MINUTE_MS,
        "noon-to-noon gap = {} s",
        gap / 1000
    );
}

#[test]
fn greenwich_midsummer_twilight_extension() {
    let observer = Observer::from_degrees(51.4769, -0.0005).unwrap();
    let times = find_times_with_twilight(SOLSTICE_2024_06H, &observer).unwrap();
    let twilight = times.twilight.expect("twilight requested");

    // Midsummer at 51.5° N: the sun bottoms out near −15°, so nautical
    // twilight occurs but astronomical twilight never starts — those
    // instants collapse onto the midnights.
    assert_eq!(twilight.start_astronomical, times.start_midnight);
    assert_eq!(twilight.end_astronomical, times.end_midnight);
    assert!(times.start_midnight < twilight.start_nautical);
    assert!(twilight.start_nautical < times.start_dawn);
    assert!(times.end_dusk < twilight.end_nautical);
    assert!(twilight.end_nautical < times.end_midnight);
}

#[test]
fn out_of_range_observers_fail_fast() {
    assert!(Observer::from_degrees(91.0, 0.0).is_err());
    assert!(Observer::from_degrees(0.0, 181.0).is_err());
}

proptest! {
    #[test]
    fn prop_unix_ms_roundtrip_is_exact(unix_ms in -400_000_000_000_i64..2_500_000_000_000) {
        let t = EpochDays::from_unix_ms(unix_ms);
        prop_assert_eq!(t.to_unix_ms(), unix_ms);
    }

    #[test]
    fn prop_instants_are_ordered(
        lat in -55.0..55.0_f64,
        lon in -180.0..180.0_f64,
        unix_ms in 0_i64..2_000_000_000_000,
    ) {
        let observer = Observer::from_degrees(lat, lon).unwrap();
        let times = find_times(unix_ms, &observer).unwrap();
        let instants = ordered_instants(&times);
        for pair in instants.windows(2) {
            prop_assert!(pair[0] <= pair[1], "disorder: {:?}", instants);
        }
    }

    #[test]
    fn prop_ratio_endpoints_are_exact(
        lat in -55.0..55.0_f64,
        lon in -180.0..180.0_f64,
        unix_ms in 0_i64..2_000_000_000_000,
    ) {
        let observer = Observer::from_degrees(lat, lon).unwrap();
        let times = find_times(unix_ms, &observer).unwrap();
        prop_assert_eq!(times.ratio_of(DayPoint::StartMidnight), 0.0);
        prop_assert_eq!(times.ratio_of(DayPoint::EndMidnight), 1.0);
    }

    #[test]
    fn prop_input_instant_falls_inside_its_day(
        lat in -55.0..55.0_f64,
        lon in -180.0..180.0_f64,
        unix_ms in 0_i64..2_000_000_000_000,
    ) {
        let observer = Observer::from_degrees(lat, lon).unwrap();
        let times = find_times(unix_ms, &observer).unwrap();
        let ratio = times.ratio_at(unix_ms);
        // The transit search anchors on the nearest noon, so the input
        // sits within half a day of it on either side.
        prop_assert!((-0.6..1.6).contains(&ratio), "ratio = {}", ratio);
    }
}
