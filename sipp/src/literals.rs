//! Short constructors for the predefined `f64` quantities.
//!
//! Each function takes any number losslessly convertible to `f64` (`i32`, `u32`, `f32`, `f64`, ...):
//!
//! ```rust
//! use sipp::literals::{ft_min, km, kts, m, min};
//!
//! let leg = km(123.5) + m(500);
//! assert_eq!(leg.count(), 124.0);
//!
//! let descent = ft_min(-700) * min(3);
//! assert!((descent.count() + 2_100.0).abs() < 1e-9);
//!
//! assert!(kts(140) > km(259) / sipp::literals::h(1));
//! ```

use crate::units::length::{
    Feet, Kilometers, Meters, Micrometers, Millimeters, Nanometers, NauticalMiles, StatuteMiles,
};
use crate::units::time::{Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds};
use crate::units::velocity::{
    FeetPerMinute, FeetPerSecond, KmPerHour, Knots, MetersPerSecond, MilesPerHour,
};

macro_rules! literal {
    ($($(#[$doc:meta])* $name:ident => $quantity:ty;)+) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(value: impl Into<f64>) -> $quantity {
                <$quantity>::new(value.into())
            }
        )+
    };
}

literal! {
    /// Metres.
    m => Meters;
    /// Kilometres.
    km => Kilometers;
    /// Millimetres.
    mm => Millimeters;
    /// Micrometres.
    um => Micrometers;
    /// Nanometres.
    nm => Nanometers;
    /// Feet.
    ft => Feet;
    /// Nautical miles.
    nmi => NauticalMiles;
    /// Statute miles.
    mi => StatuteMiles;
}

literal! {
    /// Kilometres per hour.
    km_h => KmPerHour;
    /// Metres per second.
    m_s => MetersPerSecond;
    /// Feet per second.
    ft_s => FeetPerSecond;
    /// Feet per minute.
    ft_min => FeetPerMinute;
    /// Knots.
    kts => Knots;
    /// Statute miles per hour.
    mph => MilesPerHour;
}

literal! {
    /// Nanoseconds.
    ns => Nanoseconds;
    /// Microseconds.
    us => Microseconds;
    /// Milliseconds.
    ms => Milliseconds;
    /// Seconds.
    s => Seconds;
    /// Minutes.
    min => Minutes;
    /// Hours.
    h => Hours;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_literals() {
        assert_eq!(m(2.0), Meters::new(2.0));
        assert_eq!(km(123.5).count(), 123.5);
        assert_eq!(mm(3).count(), 3.0);
        assert_eq!(um(4_u8).count(), 4.0);
        assert_eq!(nm(5.5_f32).count(), 5.5);
        assert_eq!(ft(9_000).count(), 9_000.0);
        assert_eq!(nmi(12).count(), 12.0);
        assert_eq!(mi(1_u32).count(), 1.0);
    }

    #[test]
    fn speed_literals() {
        assert_eq!(km_h(900).count(), 900.0);
        assert_eq!(m_s(15.24).count(), 15.24);
        assert_eq!(ft_s(1), ft_min(60));
        assert_eq!(kts(140).count(), 140.0);
        assert_eq!(mph(10).count(), 10.0);
    }

    #[test]
    fn duration_literals() {
        assert_eq!(h(1), min(60));
        assert_eq!(min(1), s(60));
        assert_eq!(s(1), ms(1_000));
        assert_eq!(ms(1), us(1_000));
        assert_eq!(us(1), ns(1_000));
    }

    #[test]
    fn literals_compose() {
        let d = km_h(900) * min(30);
        assert_relative_eq!(d.count(), 450.0);

        let total = nmi(1) + m(148);
        assert_relative_eq!(total.count(), 2_000.0 / 1_852.0, epsilon = 1e-12);
    }
}
