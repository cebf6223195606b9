//! Integration-level checks of the `sipp` facade.

use sipp::literals::{ft_min, ft_s, km, km_h, kts, m, min, nmi, s};
use sipp::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Distance conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_distance_table() {
    let km: Kilometers = Meters::new(2.0).into();
    assert_relative_eq!(km.count(), 0.002);

    let ft: Feet = Meters::new(100.0).into();
    assert_abs_diff_eq!(ft.count(), 328.084, epsilon = 1e-3);

    let nm: NauticalMiles = Kilometers::new(123.5).into();
    assert_abs_diff_eq!(nm.count(), 66.684_665, epsilon = 1e-6);
}

#[test]
fn smoke_test_sum_across_units() {
    let total = Kilometers::new(100.0) + Meters::new(20.0);
    assert_relative_eq!(total.to::<Meter>().count(), 100_020.0, epsilon = 1e-9);

    let reversed = Meters::new(20.0) + Kilometers::new(100.0);
    assert_relative_eq!(reversed.count(), 100_020.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_narrowing_cast() {
    let meters: Distance<i32, Meter> = Distance::new(1150);
    assert_eq!(meters.cast::<i32, Kilometer>().count(), 1);

    let checked = meters.try_cast::<i8, Millimeter>();
    assert_eq!(
        checked.unwrap_err(),
        ConversionError::OutOfRange {
            value: 1_150_000.0,
            target: "i8"
        }
    );
}

#[test]
fn smoke_test_plain_literal_scalars() {
    let d = Meters::new(100.0);
    assert_eq!((2 * d).count(), 200.0);
    assert_eq!((d * 1.5).count(), 150.0);
    assert_eq!((d / 2).to::<Kilometer>().count(), 0.05);
    assert_eq!((1.5 * Knots::new(100.0)).count(), 150.0);
}

#[test]
fn smoke_test_mixed_float_widths() {
    let sum = Meters::new(1.0) + Distance::<f32, Meter>::new(2.0);
    assert_eq!(sum.count(), 3.0);

    let elapsed = Duration::<f32, Minute>::new(1.5) + Minutes::new(0.5);
    assert_eq!(elapsed.count(), 2.0_f32);
}

// ─────────────────────────────────────────────────────────────────────────────
// Speed conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_speed_table() {
    let v: MetersPerSecond = FeetPerMinute::new(3000.0).into();
    assert_relative_eq!(v.count(), 15.24, epsilon = 1e-12);

    let v: KmPerHour = Knots::new(140.0).into();
    assert_relative_eq!(v.count(), 259.28, epsilon = 1e-12);

    let v: Knots = KmPerHour::new(900.0).into();
    assert_abs_diff_eq!(v.count(), 485.961, epsilon = 1e-3);

    let v: MilesPerHour = KmPerHour::new(900.0).into();
    assert_abs_diff_eq!(v.count(), 559.235_47, epsilon = 1e-5);
}

#[test]
fn smoke_test_speed_equivalence() {
    assert!(ft_s(1) == ft_min(60));
    assert!(ft_min(60) == ft_s(1));
    assert!(!(ft_s(1) < ft_min(60)));
    assert!(!(ft_s(1) > ft_min(60)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Composition
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_composition() {
    let d = nmi(60);
    let t = min(25);

    let v = d / t;
    assert_relative_eq!(v.to::<NauticalMile, Hour>().count(), 144.0, epsilon = 1e-9);

    let back = v * t;
    assert_relative_eq!(back.count(), 60.0, epsilon = 1e-12);

    let cruise = kts(144);
    let time_en_route = d / cruise;
    assert_relative_eq!(time_en_route.to::<Minute>().count(), 25.0, epsilon = 1e-9);

    let recovered = (cruise * t) / t;
    assert!((recovered.to::<NauticalMile, Hour>() - cruise).abs() < kts(1e-9));
}

#[test]
fn smoke_test_std_duration() {
    let flight = std::time::Duration::from_secs(90 * 60);
    let d = km_h(800) * flight;
    assert_relative_eq!(d.count(), 1_200.0, epsilon = 1e-9);

    let block: Hours = Seconds::from(flight).into();
    assert_eq!(block.count(), 1.5);
    assert_eq!(
        std::time::Duration::try_from(block).unwrap(),
        std::time::Duration::from_secs(5_400)
    );
}

#[test]
fn smoke_test_literals_and_constants() {
    assert_eq!(km(1), 1_000.0 * M);
    assert_eq!(2 * NMI, m(3_704));
    assert_eq!(MINUTE, s(60));
    assert_eq!(KT, Knots::new(1.0));
    assert_eq!(format!("{}", 3 * KM), "3 km");
    assert_eq!(format!("{}", kts(140)), "140 NM/h");
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparator consistency
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_nan_tie_break() {
    let nan = Meters::new(f64::NAN);
    let one = Kilometers::new(1.0);

    assert!(!(nan < one));
    assert!(!(nan <= one));
    assert!(nan > one);
    assert!(nan >= one);
    assert!(!(nan == one));
    assert_eq!(nan.partial_cmp(&one), None);
}

proptest! {
    #[test]
    fn prop_round_trip_all_length_units(x in -1e9..1e9f64) {
        fn round_trip<U: LengthUnit>(x: f64) -> f64 {
            Meters::new(x).to::<U>().to::<Meter>().count()
        }
        let tolerance = 1e-9 * x.abs().max(1.0);
        prop_assert!((round_trip::<Kilometer>(x) - x).abs() <= tolerance);
        prop_assert!((round_trip::<Millimeter>(x) - x).abs() <= tolerance);
        prop_assert!((round_trip::<Nanometer>(x) - x).abs() <= tolerance);
        prop_assert!((round_trip::<Foot>(x) - x).abs() <= tolerance);
        prop_assert!((round_trip::<NauticalMile>(x) - x).abs() <= tolerance);
        prop_assert!((round_trip::<StatuteMile>(x) - x).abs() <= tolerance);
    }

    #[test]
    fn prop_comparator_consistency(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let a = Knots::new(a);
        let b = KmPerHour::new(b);
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
    }

    #[test]
    fn prop_abs_of_negation(x in -1e6..1e6f64) {
        prop_assert_eq!((-Feet::new(x)).abs(), Feet::new(x).abs());
        prop_assert_eq!((-FeetPerMinute::new(x)).abs(), FeetPerMinute::new(x).abs());
    }

    #[test]
    fn prop_compound_assignment(a in -1e6..1e6f64, b in -1e6..1e6f64, k in 1.0..1e3f64) {
        let x = Meters::new(a);
        let y = Feet::new(b);

        let mut lhs = x;
        lhs += y;
        prop_assert_eq!(lhs, x + y);

        let mut lhs = x;
        lhs -= y;
        prop_assert_eq!(lhs, x - y);

        let mut lhs = x;
        lhs *= k;
        prop_assert_eq!(lhs, x * k);

        let mut lhs = x;
        lhs /= k;
        prop_assert_eq!(lhs, x / k);
    }
}
