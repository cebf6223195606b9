//! Speed quantity: a length unit over a time unit.

use crate::duration::Duration;
use crate::error::Result;
use crate::quantity::Quantity;
use crate::representation::{narrow, try_narrow, FloatRepresentation, Representation};
use crate::unit::ScaleFactor;
use crate::units::length::LengthUnit;
use crate::units::time::{Second, TimeUnit};
use crate::Distance;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use core::time::Duration as StdDuration;
use num_traits::Signed;

/// A speed stored as `R`, measured in `D` per `T`.
///
/// ```rust
/// use sipp::{KmPerHour, Knots, Minutes};
///
/// let cruise = Knots::new(140.0);
/// let km_h: KmPerHour = cruise.into();
/// assert!((km_h.count() - 259.28).abs() < 1e-9);
///
/// // Speed * Duration is a distance in the speed's length unit.
/// let leg = cruise * Minutes::new(30.0);
/// assert!((leg.count() - 70.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Speed<R: Representation, D: LengthUnit, T: TimeUnit> {
    count: R,
    unit: PhantomData<(D, T)>,
}

impl<R: Representation, D: LengthUnit, T: TimeUnit> Speed<R, D, T> {
    /// Creates a speed of `count` units of `D` per `T`.
    #[inline]
    pub const fn new(count: R) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    /// Returns the stored magnitude.
    #[inline]
    pub const fn count(&self) -> R {
        self.count
    }

    /// Explicit conversion to any representation, length unit and time unit.
    ///
    /// The distance component is converted first, then the result is divided by the factor between the two
    /// periods:
    ///
    /// ```rust
    /// use sipp::{Foot, Meter, Minute, Second, Speed};
    ///
    /// let climb: Speed<f64, Foot, Minute> = Speed::new(3_000.0);
    /// let si = climb.cast::<f64, Meter, Second>();
    /// assert!((si.count() - 15.24).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn cast<R2, D2, T2>(self) -> Speed<R2, D2, T2>
    where
        R2: Representation,
        D2: LengthUnit,
        T2: TimeUnit,
    {
        Speed::new(narrow(Self::rescale::<D2, T2>(self.count)))
    }

    /// Checked variant of [`cast`](Self::cast).
    pub fn try_cast<R2, D2, T2>(self) -> Result<Speed<R2, D2, T2>>
    where
        R2: Representation,
        D2: LengthUnit,
        T2: TimeUnit,
    {
        try_narrow(Self::rescale::<D2, T2>(self.count)).map(Speed::new)
    }

    fn rescale<D2: LengthUnit, T2: TimeUnit>(count: R) -> f64 {
        let distance = ScaleFactor::between::<D, D2>();
        let period = ScaleFactor::between::<T, T2>();
        period.unapply(distance.apply(count.as_f64()))
    }

    /// Absolute value, in the same units.
    #[inline]
    pub fn abs(self) -> Self
    where
        R: Signed,
    {
        Self::new(self.count.abs())
    }
}

impl<R: FloatRepresentation, D: LengthUnit, T: TimeUnit> Speed<R, D, T> {
    /// Converts to other units, keeping the floating point representation.
    #[inline]
    pub fn to<D2: LengthUnit, T2: TimeUnit>(self) -> Speed<R, D2, T2> {
        self.cast()
    }
}

impl<R: Representation, D: LengthUnit, T: TimeUnit> Default for Speed<R, D, T> {
    fn default() -> Self {
        Self::new(R::zero())
    }
}

impl_float_width_conversions!([D: LengthUnit, T: TimeUnit] Speed<D, T>);

impl<R: Representation, D: LengthUnit, T: TimeUnit> Quantity for Speed<R, D, T> {
    type Rep = R;

    fn count(&self) -> R {
        self.count
    }

    fn from_count(count: R) -> Self {
        Self::new(count)
    }

    fn symbol() -> String {
        format!("{}/{}", D::SYMBOL, T::SYMBOL)
    }
}

impl<R, D, T> fmt::Display for Speed<R, D, T>
where
    R: Representation + fmt::Display,
    D: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.count, D::SYMBOL, T::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<R, D, T, Rhs> Add<Rhs> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Rhs) -> Self {
        Self::new(self.count + rhs.into().count)
    }
}

impl<R, D, T, Rhs> Sub<Rhs> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Rhs) -> Self {
        Self::new(self.count - rhs.into().count)
    }
}

impl<R, D, T, Rhs> AddAssign<Rhs> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rhs) {
        *self = *self + rhs;
    }
}

impl<R, D, T, Rhs> SubAssign<Rhs> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Rhs) {
        *self = *self - rhs;
    }
}

impl<R, D, T> Neg for Speed<R, D, T>
where
    R: Representation + Neg<Output = R>,
    D: LengthUnit,
    T: TimeUnit,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

impl_scalar_ops!(
    [R: Representation, D: LengthUnit, T: TimeUnit] Speed<R, D, T>;
    i32, f64
);

// Speed * Duration = Distance, in the speed's length unit
impl<R, D, T, T2> Mul<Duration<R, T2>> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    T2: TimeUnit,
{
    type Output = Distance<R, D>;

    #[inline]
    fn mul(self, rhs: Duration<R, T2>) -> Distance<R, D> {
        let periods = ScaleFactor::between::<T2, T>().apply(rhs.count().as_f64());
        Distance::new(narrow(self.count.as_f64() * periods))
    }
}

impl<R, D, T> Mul<StdDuration> for Speed<R, D, T>
where
    R: FloatRepresentation,
    D: LengthUnit,
    T: TimeUnit,
{
    type Output = Distance<R, D>;

    #[inline]
    fn mul(self, rhs: StdDuration) -> Distance<R, D> {
        self * Duration::<R, Second>::from(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<R, D, T, R2, D2, T2> PartialEq<Speed<R2, D2, T2>> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    R2: Representation,
    D2: LengthUnit,
    T2: TimeUnit,
{
    #[inline]
    fn eq(&self, other: &Speed<R2, D2, T2>) -> bool {
        self.count == other.cast::<R, D, T>().count
    }
}

impl<R, D, T, R2, D2, T2> PartialOrd<Speed<R2, D2, T2>> for Speed<R, D, T>
where
    R: Representation,
    D: LengthUnit,
    T: TimeUnit,
    R2: Representation,
    D2: LengthUnit,
    T2: TimeUnit,
{
    #[inline]
    fn partial_cmp(&self, other: &Speed<R2, D2, T2>) -> Option<Ordering> {
        self.count.partial_cmp(&other.cast::<R, D, T>().count)
    }

    #[inline]
    fn lt(&self, other: &Speed<R2, D2, T2>) -> bool {
        self.count < other.cast::<R, D, T>().count
    }

    #[inline]
    fn le(&self, other: &Speed<R2, D2, T2>) -> bool {
        self.count <= other.cast::<R, D, T>().count
    }

    #[inline]
    fn gt(&self, other: &Speed<R2, D2, T2>) -> bool {
        !self.le(other)
    }

    #[inline]
    fn ge(&self, other: &Speed<R2, D2, T2>) -> bool {
        !self.lt(other)
    }
}
