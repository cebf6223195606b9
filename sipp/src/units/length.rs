//! Length units.
//!
//! The canonical unit of this dimension is [`Meter`]. Every other unit is an exact rational multiple of it, so
//! the factor between any two of them reduces without rounding:
//!
//! - **Metric ladder**: kilometre down to nanometre.
//! - **Imperial**: the international foot (`0.3048 m`).
//! - **Navigation**: the international nautical mile (`1852 m`) and the statute mile, taken as `1609.34 m`.
//!
//! ```rust
//! use sipp::length::{Feet, Kilometers, Meter};
//!
//! let ceiling = Feet::new(10_000.0);
//! assert!((ceiling.to::<Meter>().count() - 3_048.0).abs() < 1e-9);
//! assert!(Kilometers::new(3.0) < ceiling);
//! ```

use crate::{Dimension, Distance, Unit};
use sipp_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Metric
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "m", dimension = Length, num = 1)]
pub struct Meter;
/// A distance measured in metres.
pub type Meters = Distance<f64, Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "km", dimension = Length, num = 1_000)]
pub struct Kilometer;
/// A distance measured in kilometres.
pub type Kilometers = Distance<f64, Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "mm", dimension = Length, num = 1, den = 1_000)]
pub struct Millimeter;
/// A distance measured in millimetres.
pub type Millimeters = Distance<f64, Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "µm", dimension = Length, num = 1, den = 1_000_000)]
pub struct Micrometer;
/// A distance measured in micrometres.
pub type Micrometers = Distance<f64, Micrometer>;
/// One micrometre.
pub const UM: Micrometers = Micrometers::new(1.0);

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "nm", dimension = Length, num = 1, den = 1_000_000_000)]
pub struct Nanometer;
/// A distance measured in nanometres.
pub type Nanometers = Distance<f64, Nanometer>;
/// One nanometre.
///
/// Not the nautical mile, even though that unit prints as `NM`: one nautical mile is [`NMI`].
pub const NM: Nanometers = Nanometers::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and navigation
// ─────────────────────────────────────────────────────────────────────────────

/// International foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "ft", dimension = Length, num = 3_048, den = 10_000)]
pub struct Foot;
/// A distance measured in feet.
pub type Feet = Distance<f64, Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// International nautical mile (`1852 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "NM", dimension = Length, num = 1_852)]
pub struct NauticalMile;
/// A distance measured in nautical miles.
pub type NauticalMiles = Distance<f64, NauticalMile>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

/// Statute mile, rounded to `1609.34 m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(symbol = "mi", dimension = Length, num = 160_934, den = 100)]
pub struct StatuteMile;
/// A distance measured in statute miles.
pub type StatuteMiles = Distance<f64, StatuteMile>;
/// One statute mile.
pub const MI: StatuteMiles = StatuteMiles::new(1.0);

impl_unit_conversions!(
    Distance: Meter,
    Kilometer,
    Millimeter,
    Micrometer,
    Nanometer,
    Foot,
    NauticalMile,
    StatuteMile
);
