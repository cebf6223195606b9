//! Unit descriptors and the exact scale between two units.

use crate::dimension::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** marker type.
///
/// A unit is a rational scale `NUM / DEN` relative to the canonical unit of its dimension: metres for length,
/// seconds for time. For example a foot is `3048 / 10000` metres.
///
/// Built-in units are zero-sized structs declared with `#[derive(Unit)]`, which also rejects a zero `NUM` or `DEN`
/// at compile time.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Numerator of the scale relative to the canonical unit.
    const NUM: u64;

    /// Denominator of the scale relative to the canonical unit.
    const DEN: u64;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// `NUM / DEN` as a float.
    const RATIO: f64 = Self::NUM as f64 / Self::DEN as f64;
}

/// Reduced rational factor taking a magnitude from one unit to another of the same dimension.
///
/// The factor is kept exact until it is applied, so equal units always produce the identity and a conversion
/// followed by its inverse lands on the same rational value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScaleFactor {
    num: u128,
    den: u128,
}

impl ScaleFactor {
    /// The factor between a unit and itself.
    pub const IDENTITY: Self = Self { num: 1, den: 1 };

    /// Factor taking a magnitude in `F` to a magnitude in `T`.
    ///
    /// ```rust
    /// use sipp::{Kilometer, Meter, ScaleFactor};
    ///
    /// let factor = ScaleFactor::between::<Meter, Kilometer>();
    /// assert_eq!((factor.num(), factor.den()), (1, 1000));
    /// assert_eq!(factor.apply(2.0), 0.002);
    /// ```
    #[inline]
    pub fn between<F: Unit, T: Unit<Dim = F::Dim>>() -> Self {
        Self::reduced(
            F::NUM as u128 * T::DEN as u128,
            F::DEN as u128 * T::NUM as u128,
        )
    }

    const fn reduced(num: u128, den: u128) -> Self {
        let divisor = gcd(num, den);
        Self {
            num: num / divisor,
            den: den / divisor,
        }
    }

    /// Reduced numerator.
    pub const fn num(&self) -> u128 {
        self.num
    }

    /// Reduced denominator.
    pub const fn den(&self) -> u128 {
        self.den
    }

    /// `true` when the factor is exactly one.
    pub const fn is_identity(&self) -> bool {
        self.num == self.den
    }

    /// The reciprocal factor.
    pub const fn inverse(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }

    /// The factor as a float.
    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `value * num / den`.
    ///
    /// The product with `num` is taken first, so whole-number ratios stay exact. If that intermediate overflows
    /// for a finite `value`, the factor is applied as one precomputed ratio instead.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        let scaled = value * self.num as f64;
        if scaled.is_infinite() && value.is_finite() {
            value * self.as_f64()
        } else {
            scaled / self.den as f64
        }
    }

    /// `value * den / num`, i.e. divides `value` by the factor.
    #[inline]
    pub fn unapply(self, value: f64) -> f64 {
        self.inverse().apply(value)
    }
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
