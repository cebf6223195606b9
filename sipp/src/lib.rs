//! Statically typed distances, speeds and durations.
//!
//! `sipp` attaches a unit to a number at the type level. A value is a [`Distance<R, U>`], a [`Duration<R, T>`] or a
//! [`Speed<R, D, T>`], where `R` is the numeric storage type and `U`, `D`, `T` are zero-sized unit markers. The unit
//! costs nothing at runtime: a `Distance<f64, Foot>` is exactly one `f64`.
//!
//! # What this crate solves
//!
//! - Mixing dimensions is a compile error (you cannot add feet to minutes).
//! - Mixing units of the same dimension converts automatically when the storage is floating point: the result keeps
//!   the left operand's unit.
//! - Lossy conversions are never implicit: integer-backed quantities only change unit through an explicit
//!   [`cast`](Distance::cast), which truncates toward zero, or a checked [`try_cast`](Distance::try_cast).
//! - Distances, durations and speeds compose (`Distance / Duration = Speed`, `Speed * Duration = Distance`,
//!   `Distance / Speed = Duration`).
//!
//! # What this crate does not try to solve
//!
//! - General dimensional analysis: only length, time and their ratio are modelled.
//! - Exact arithmetic: conversion factors are exact rationals, but they are applied in `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use sipp::{Feet, KmPerHour, Knots, Meter, Meters, Minutes};
//!
//! // Explicit conversion
//! let altitude = Feet::new(10_000.0);
//! assert!((altitude.to::<Meter>().count() - 3_048.0).abs() < 1e-9);
//!
//! // Implicit conversion in arithmetic and comparisons
//! let total = altitude + Meters::new(100.0);
//! assert!(total > Feet::new(10_328.0));
//!
//! // Composition
//! let cruise: KmPerHour = Knots::new(140.0).into();
//! let leg = cruise * Minutes::new(30.0);
//! assert!((leg.count() - 129.64).abs() < 1e-9);
//! ```
//!
//! Integer storage works within a single unit:
//!
//! ```rust
//! use sipp::{Distance, Kilometer, Meter};
//!
//! let a: Distance<i32, Meter> = Distance::new(700);
//! let b: Distance<i32, Meter> = Distance::new(450);
//! assert_eq!((a + b).count(), 1150);
//! assert_eq!((a + b).cast::<i32, Kilometer>().count(), 1);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Integer-backed quantities do not convert implicitly:
//!
//! ```compile_fail
//! use sipp::{Distance, Kilometer, Meter};
//!
//! let m: Distance<i32, Meter> = Distance::new(1150);
//! let km: Distance<i32, Kilometer> = m.into();
//! ```
//!
//! ```compile_fail
//! use sipp::{Distance, Kilometer, Meter};
//!
//! let m: Distance<i32, Meter> = Distance::new(1150);
//! let km: Distance<i32, Kilometer> = Distance::new(1);
//! let _ = m + km;
//! ```
//!
//! Dimensions never mix:
//!
//! ```compile_fail
//! use sipp::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! ```compile_fail
//! use sipp::{Knots, Meters};
//!
//! let _ = Knots::new(1.0) == Meters::new(1.0);
//! ```
//!
//! Scalars must be primitive numbers:
//!
//! ```compile_fail
//! use sipp::Meters;
//!
//! let _ = Meters::new(1.0) * "2";
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension (and re-exported at the crate root):
//!
//! - `sipp::length` (metre ladder, foot, nautical and statute miles)
//! - `sipp::time` (nanosecond up to hour)
//! - `sipp::velocity` (`Length / Time` aliases such as knots and feet per minute)
//! - `sipp::literals` (short constructors: `km(12.5)`, `kts(140)`, `min(30)`)
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for every quantity as its bare count, plus the [`serde_with_unit`] helper.
//!
//! # Panics and errors
//!
//! Floating point arithmetic follows IEEE-754 (NaN and infinities propagate). Integer arithmetic follows Rust's
//! integer semantics, so dividing an integer-backed quantity by integer zero panics. The checked conversions
//! ([`Distance::try_cast`], `TryFrom<Duration>` for [`std::time::Duration`], ...) report failures as
//! [`ConversionError`].
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dimension;
mod distance;
mod duration;
mod error;
pub mod literals;
mod quantity;
mod representation;
#[cfg(feature = "serde")]
mod serde_support;
mod speed;
mod unit;

pub use dimension::Dimension;
pub use distance::Distance;
pub use duration::Duration;
pub use error::{ConversionError, Result};
pub use quantity::Quantity;
pub use representation::{FloatRepresentation, Representation, Scalar};
#[cfg(feature = "serde")]
pub use serde_support::serde_with_unit;
pub use speed::Speed;
pub use unit::{ScaleFactor, Unit};

pub mod units;

pub use units::length;
pub use units::time;
pub use units::velocity;

pub use units::length::*;
pub use units::time::*;
pub use units::velocity::*;
