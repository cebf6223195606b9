//! Duration quantity (the time dimension of a speed).

use crate::error::{ConversionError, Result};
use crate::quantity::Quantity;
use crate::representation::{narrow, try_narrow, FloatRepresentation, Representation};
use crate::speed::Speed;
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

/// A span of time stored as `R` and measured in the unit `T`.
///
/// Mirrors [`Distance`] for the time dimension.
///
/// ```rust
/// use sipp::{Minutes, Second};
///
/// let holding = Minutes::new(4.0);
/// assert_eq!(holding.to::<Second>().count(), 240.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Duration<R: Representation, T: TimeUnit> {
    count: R,
    unit: PhantomData<T>,
}

impl<R: Representation, T: TimeUnit> Duration<R, T> {
    /// Creates a duration of `count` units of `T`.
    #[inline]
    pub const fn new(count: R) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    /// Returns the stored magnitude, in `T`.
    #[inline]
    pub const fn count(&self) -> R {
        self.count
    }

    /// Explicit conversion to any representation and time unit (truncating for integer targets).
    #[inline]
    pub fn cast<R2: Representation, T2: TimeUnit>(self) -> Duration<R2, T2> {
        let value = ScaleFactor::between::<T, T2>().apply(self.count.as_f64());
        Duration::new(narrow(value))
    }

    /// Checked variant of [`cast`](Self::cast).
    pub fn try_cast<R2: Representation, T2: TimeUnit>(self) -> Result<Duration<R2, T2>> {
        let value = ScaleFactor::between::<T, T2>().apply(self.count.as_f64());
        try_narrow(value).map(Duration::new)
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

impl<R: FloatRepresentation, T: TimeUnit> Duration<R, T> {
    /// Converts to another time unit, keeping the floating point representation.
    #[inline]
    pub fn to<T2: TimeUnit>(self) -> Duration<R, T2> {
        self.cast()
    }
}

impl<R: Representation, T: TimeUnit> Default for Duration<R, T> {
    fn default() -> Self {
        Self::new(R::zero())
    }
}

impl_float_width_conversions!([T: TimeUnit] Duration<T>);

impl<R: Representation, T: TimeUnit> Quantity for Duration<R, T> {
    type Rep = R;

    fn count(&self) -> R {
        self.count
    }

    fn from_count(count: R) -> Self {
        Self::new(count)
    }

    fn symbol() -> String {
        T::SYMBOL.to_owned()
    }
}

impl<R: Representation + fmt::Display, T: TimeUnit> fmt::Display for Duration<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, T::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::time::Duration bridge
// ─────────────────────────────────────────────────────────────────────────────

impl<R: FloatRepresentation> From<StdDuration> for Duration<R, Second> {
    fn from(value: StdDuration) -> Self {
        Self::new(R::cast_from_f64(value.as_secs_f64()))
    }
}

impl<R: Representation, T: TimeUnit> TryFrom<Duration<R, T>> for StdDuration {
    type Error = ConversionError;

    fn try_from(value: Duration<R, T>) -> Result<Self> {
        let seconds = ScaleFactor::between::<T, Second>().apply(value.count.as_f64());
        StdDuration::try_from_secs_f64(seconds).map_err(|_| {
            log::debug!("{} s has no std::time::Duration equivalent", seconds);
            ConversionError::InvalidDuration { seconds }
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<R, T, Rhs> Add<Rhs> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Rhs) -> Self {
        Self::new(self.count + rhs.into().count)
    }
}

impl<R, T, Rhs> Sub<Rhs> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Rhs) -> Self {
        Self::new(self.count - rhs.into().count)
    }
}

impl<R, T, Rhs> AddAssign<Rhs> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rhs) {
        *self = *self + rhs;
    }
}

impl<R, T, Rhs> SubAssign<Rhs> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    Rhs: Into<Self>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Rhs) {
        *self = *self - rhs;
    }
}

impl<R: Representation + Neg<Output = R>, T: TimeUnit> Neg for Duration<R, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

impl_scalar_ops!(
    [R: Representation, T: TimeUnit] Duration<R, T>;
    i32, f64
);

// Duration * Speed = Distance
impl<R, T, D, T2> Mul<Speed<R, D, T2>> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    D: LengthUnit,
    T2: TimeUnit,
{
    type Output = Distance<R, D>;

    #[inline]
    fn mul(self, rhs: Speed<R, D, T2>) -> Distance<R, D> {
        rhs * self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<R, T, R2, T2> PartialEq<Duration<R2, T2>> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    R2: Representation,
    T2: TimeUnit,
{
    #[inline]
    fn eq(&self, other: &Duration<R2, T2>) -> bool {
        self.count == other.cast::<R, T>().count
    }
}

impl<R, T, R2, T2> PartialOrd<Duration<R2, T2>> for Duration<R, T>
where
    R: Representation,
    T: TimeUnit,
    R2: Representation,
    T2: TimeUnit,
{
    #[inline]
    fn partial_cmp(&self, other: &Duration<R2, T2>) -> Option<Ordering> {
        self.count.partial_cmp(&other.cast::<R, T>().count)
    }

    #[inline]
    fn lt(&self, other: &Duration<R2, T2>) -> bool {
        self.count < other.cast::<R, T>().count
    }

    #[inline]
    fn le(&self, other: &Duration<R2, T2>) -> bool {
        self.count <= other.cast::<R, T>().count
    }

    #[inline]
    fn gt(&self, other: &Duration<R2, T2>) -> bool {
        !self.le(other)
    }

    #[inline]
    fn ge(&self, other: &Duration<R2, T2>) -> bool {
        !self.lt(other)
    }
}
