//! Distance quantity.

use crate::duration::Duration;
use crate::error::Result;
use crate::quantity::Quantity;
use crate::representation::{narrow, try_narrow, FloatRepresentation, Representation};
use crate::speed::Speed;
use crate::unit::ScaleFactor;
use crate::units::length::LengthUnit;
use crate::units::time::TimeUnit;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};
use num_traits::Signed;

/// A length stored as `R` and measured in the unit `U`.
///
/// The unit lives only in the type: a `Distance` is exactly one `R` wide and copying it is free.
///
/// ```rust
/// use sipp::{Feet, Meter, Meters};
///
/// let runway = Feet::new(9_000.0);
/// let in_meters = runway.to::<Meter>();
/// assert!((in_meters.count() - 2_743.2).abs() < 1e-9);
///
/// // Mixed-unit arithmetic keeps the left operand's unit.
/// let longer = runway + Meters::new(300.0);
/// assert!((longer.count() - 9_984.251_968_503_937).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Distance<R: Representation, U: LengthUnit> {
    count: R,
    unit: PhantomData<U>,
}

impl<R: Representation, U: LengthUnit> Distance<R, U> {
    /// Creates a distance of `count` units of `U`.
    #[inline]
    pub const fn new(count: R) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    /// Returns the stored magnitude, in `U`.
    #[inline]
    pub const fn count(&self) -> R {
        self.count
    }

    /// Explicit conversion to any representation and length unit.
    ///
    /// The magnitude is rescaled in `f64` and stored with the target's `as` conversion, so an integer target
    /// truncates toward zero:
    ///
    /// ```rust
    /// use sipp::{Distance, Kilometer, Meter};
    ///
    /// let meters: Distance<i32, Meter> = Distance::new(1150);
    /// let km = meters.cast::<i32, Kilometer>();
    /// assert_eq!(km.count(), 1);
    /// ```
    #[inline]
    pub fn cast<R2: Representation, U2: LengthUnit>(self) -> Distance<R2, U2> {
        let value = ScaleFactor::between::<U, U2>().apply(self.count.as_f64());
        Distance::new(narrow(value))
    }

    /// Checked variant of [`cast`](Self::cast).
    ///
    /// Fails when the converted magnitude is out of range for `R2`, or is NaN/infinite and `R2` is an integer.
    pub fn try_cast<R2: Representation, U2: LengthUnit>(self) -> Result<Distance<R2, U2>> {
        let value = ScaleFactor::between::<U, U2>().apply(self.count.as_f64());
        try_narrow(value).map(Distance::new)
    }

    /// Absolute value, in the same unit.
    #[inline]
    pub fn abs(self) -> Self
    where
        R: Signed,
    {
        Self::new(self.count.abs())
    }
}

impl<R: FloatRepresentation, U: LengthUnit> Distance<R, U> {
    /// Converts to another length unit, keeping the floating point representation.
    ///
    /// ```rust
    /// use sipp::{Kilometer, Meters};
    ///
    /// let km = Meters::new(2.0).to::<Kilometer>();
    /// assert_eq!(km.count(), 0.002);
    /// ```
    #[inline]
    pub fn to<U2: LengthUnit>(self) -> Distance<R, U2> {
        self.cast()
    }
}

impl<R: Representation, U: LengthUnit> Default for Distance<R, U> {
    fn default() -> Self {
        Self::new(R::zero())
    }
}

impl_float_width_conversions!([U: LengthUnit] Distance<U>);

impl<R: Representation, U: LengthUnit> Quantity for Distance<R, U> {
    type Rep = R;

    fn count(&self) -> R {
        self.count
    }

    fn from_count(count: R) -> Self {
        Self::new(count)
    }

    fn symbol() -> String {
        U::SYMBOL.to_owned()
    }
}

impl<R: Representation + fmt::Display, U: LengthUnit> fmt::Display for Distance<R, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, U::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<R, U, Rhs> Add<Rhs> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Rhs) -> Self {
        Self::new(self.count + rhs.into().count)
    }
}

impl<R, U, Rhs> Sub<Rhs> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Rhs) -> Self {
        Self::new(self.count - rhs.into().count)
    }
}

impl<R, U, Rhs> AddAssign<Rhs> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rhs) {
        *self = *self + rhs;
    }
}

impl<R, U, Rhs> SubAssign<Rhs> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Rhs) {
        *self = *self - rhs;
    }
}

impl<R: Representation + Neg<Output = R>, U: LengthUnit> Neg for Distance<R, U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

impl_scalar_ops!(
    [R: Representation, U: LengthUnit] Distance<R, U>;
    i32, f64
);

// Distance / Duration = Speed
impl<R: Representation, U: LengthUnit, T: TimeUnit> Div<Duration<R, T>> for Distance<R, U> {
    type Output = Speed<R, U, T>;

    #[inline]
    fn div(self, rhs: Duration<R, T>) -> Speed<R, U, T> {
        Speed::new(self.count / rhs.count())
    }
}

// Distance / Speed = Duration, in the speed's time unit
impl<R, U, D, T> Div<Speed<R, D, T>> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    D: LengthUnit,
    T: TimeUnit,
{
    type Output = Duration<R, T>;

    #[inline]
    fn div(self, rhs: Speed<R, D, T>) -> Duration<R, T> {
        Duration::new(self.cast::<R, D>().count / rhs.count())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────
//
// The right operand is converted into the left operand's representation and unit. `>` and `>=` are the negations
// of `<=` and `<`, so with a NaN on either side both of them hold.

impl<R, U, R2, U2> PartialEq<Distance<R2, U2>> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    R2: Representation,
    U2: LengthUnit,
{
    #[inline]
    fn eq(&self, other: &Distance<R2, U2>) -> bool {
        self.count == other.cast::<R, U>().count
    }
}

impl<R, U, R2, U2> PartialOrd<Distance<R2, U2>> for Distance<R, U>
where
    R: Representation,
    U: LengthUnit,
    R2: Representation,
    U2: LengthUnit,
{
    #[inline]
    fn partial_cmp(&self, other: &Distance<R2, U2>) -> Option<Ordering> {
        self.count.partial_cmp(&other.cast::<R, U>().count)
    }

    #[inline]
    fn lt(&self, other: &Distance<R2, U2>) -> bool {
        self.count < other.cast::<R, U>().count
    }

    #[inline]
    fn le(&self, other: &Distance<R2, U2>) -> bool {
        self.count <= other.cast::<R, U>().count
    }

    #[inline]
    fn gt(&self, other: &Distance<R2, U2>) -> bool {
        !self.le(other)
    }

    #[inline]
    fn ge(&self, other: &Distance<R2, U2>) -> bool {
        !self.lt(other)
    }
}
