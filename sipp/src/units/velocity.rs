//! Velocity units: a length unit over a time unit.
//!
//! Speeds are not separate unit markers: a [`Speed`] carries its distance and time units as two type parameters,
//! so any pairing is expressible. This module names the pairings in common use and wires implicit (float-only)
//! conversions between them.
//!
//! ```rust
//! use sipp::velocity::{FeetPerMinute, Knots, MetersPerSecond};
//!
//! let climb: MetersPerSecond = FeetPerMinute::new(3_000.0).into();
//! assert!((climb.count() - 15.24).abs() < 1e-9);
//! assert!(Knots::new(1.0) > MetersPerSecond::new(0.5));
//! ```

use crate::units::length::{Foot, Kilometer, Meter, NauticalMile, StatuteMile};
use crate::units::time::{Hour, Minute, Second};
use crate::Speed;

/// Kilometres per hour.
pub type KmPerHour = Speed<f64, Kilometer, Hour>;
/// One kilometre per hour.
pub const KM_H: KmPerHour = KmPerHour::new(1.0);

/// Metres per second.
pub type MetersPerSecond = Speed<f64, Meter, Second>;
/// One metre per second.
pub const M_S: MetersPerSecond = MetersPerSecond::new(1.0);

/// Feet per second.
pub type FeetPerSecond = Speed<f64, Foot, Second>;
/// One foot per second.
pub const FT_S: FeetPerSecond = FeetPerSecond::new(1.0);

/// Feet per minute, the usual unit of vertical speed.
pub type FeetPerMinute = Speed<f64, Foot, Minute>;
/// One foot per minute.
pub const FT_MIN: FeetPerMinute = FeetPerMinute::new(1.0);

/// Knots (nautical miles per hour).
pub type Knots = Speed<f64, NauticalMile, Hour>;
/// One knot.
pub const KT: Knots = Knots::new(1.0);

/// Statute miles per hour.
pub type MilesPerHour = Speed<f64, StatuteMile, Hour>;
/// One mile per hour.
pub const MPH: MilesPerHour = MilesPerHour::new(1.0);

impl_speed_conversions!(
    (Kilometer, Hour),
    (Meter, Second),
    (Foot, Second),
    (Foot, Minute),
    (NauticalMile, Hour),
    (StatuteMile, Hour)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn symbols() {
        assert_eq!(KmPerHour::symbol(), "km/h");
        assert_eq!(FeetPerMinute::symbol(), "ft/min");
        assert_eq!(Knots::symbol(), "NM/h");
        assert_eq!(MilesPerHour::symbol(), "mi/h");
    }

    #[test]
    fn into_every_other_unit() {
        let v: MetersPerSecond = KM_H.into();
        assert_relative_eq!(v.count(), 1.0 / 3.6, epsilon = 1e-15);

        let v: KmPerHour = M_S.into();
        assert_relative_eq!(v.count(), 3.6, epsilon = 1e-12);

        let v: FeetPerMinute = FT_S.into();
        assert_eq!(v.count(), 60.0);

        let v: Knots = (1_852.0 * M_S).into();
        assert_relative_eq!(v.count(), 3_600.0, epsilon = 1e-9);

        let v: MilesPerHour = KT.into();
        assert_relative_eq!(v.count(), 1_852.0 / 1_609.34, epsilon = 1e-12);

        let v: FeetPerSecond = MPH.into();
        assert_relative_eq!(v.count(), 1_609.34 / 0.3048 / 3_600.0, epsilon = 1e-12);
    }

    #[test]
    fn into_changes_float_width() {
        let v: Speed<f32, Kilometer, Hour> = Knots::new(100.0).into();
        assert!((v.count() - 185.2_f32).abs() < 1e-4);
    }

    #[test]
    fn non_aliased_pairings_still_cast() {
        let v = Knots::new(60.0).to::<NauticalMile, Minute>();
        assert_eq!(v.count(), 1.0);
        let v = v.to::<Kilometer, Second>();
        assert_relative_eq!(v.count(), 1.852 / 60.0, epsilon = 1e-15);
    }
}
