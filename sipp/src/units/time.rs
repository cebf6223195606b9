//! Time units.
//!
//! The canonical unit of this dimension is [`Second`]. Sub-second units are decimal fractions of it, while
//! [`Minute`] and [`Hour`] are the usual 60 s and 3600 s.
//!
//! ```rust
//! use sipp::time::{Hours, Minute, Seconds};
//!
//! let block = Hours::new(1.25);
//! assert_eq!(block.to::<Minute>().count(), 75.0);
//! assert!(block > Seconds::new(4_000.0));
//! ```

use crate::{Dimension, Duration, Unit};
use sipp_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Sub-second
// ─────────────────────────────────────────────────────────────────────────────

/// Nanosecond (`1e-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "ns", dimension = Time, num = 1, den = 1_000_000_000)]
pub struct Nanosecond;
/// A duration measured in nanoseconds.
pub type Nanoseconds = Duration<f64, Nanosecond>;
/// One nanosecond.
pub const NANOSEC: Nanoseconds = Nanoseconds::new(1.0);

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "µs", dimension = Time, num = 1, den = 1_000_000)]
pub struct Microsecond;
/// A duration measured in microseconds.
pub type Microseconds = Duration<f64, Microsecond>;
/// One microsecond.
pub const MICROSEC: Microseconds = Microseconds::new(1.0);

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "ms", dimension = Time, num = 1, den = 1_000)]
pub struct Millisecond;
/// A duration measured in milliseconds.
pub type Milliseconds = Duration<f64, Millisecond>;
/// One millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Second and above
// ─────────────────────────────────────────────────────────────────────────────

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "s", dimension = Time, num = 1)]
pub struct Second;
/// A duration measured in seconds.
pub type Seconds = Duration<f64, Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "min", dimension = Time, num = 60)]
pub struct Minute;
/// A duration measured in minutes.
pub type Minutes = Duration<f64, Minute>;
/// One minute.
pub const MINUTE: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "h", dimension = Time, num = 3_600)]
pub struct Hour;
/// A duration measured in hours.
pub type Hours = Duration<f64, Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

impl_unit_conversions!(
    Duration: Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ratios() {
        assert_eq!(Nanosecond::RATIO, 1e-9);
        assert_eq!(Microsecond::RATIO, 1e-6);
        assert_eq!(Millisecond::RATIO, 1e-3);
        assert_eq!(Second::RATIO, 1.0);
        assert_eq!(Minute::RATIO, 60.0);
        assert_eq!(Hour::RATIO, 3_600.0);
    }

    #[test]
    fn symbols() {
        assert_eq!(Microsecond::SYMBOL, "µs");
        assert_eq!(Minute::SYMBOL, "min");
        assert_eq!(Hour::SYMBOL, "h");
    }

    #[test]
    fn into_every_other_unit() {
        let s: Seconds = HOUR.into();
        assert_eq!(s.count(), 3_600.0);

        let ms: Milliseconds = MINUTE.into();
        assert_eq!(ms.count(), 60_000.0);

        let ns: Nanoseconds = MILLISEC.into();
        assert_relative_eq!(ns.count(), 1e6, epsilon = 1e-9);

        let h: Hours = Microseconds::new(3.6e9).into();
        assert_relative_eq!(h.count(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constants_compose() {
        let total = HOUR + 30.0 * MINUTE + 15 * SEC;
        assert_relative_eq!(total.count(), 1.5 + 15.0 / 3_600.0, epsilon = 1e-12);
    }
}
