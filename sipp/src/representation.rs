//! Numeric storage types for quantities and scalar operands.
//!
//! Every quantity stores exactly one magnitude of some [`Representation`]. Conversions always go through an `f64`
//! intermediate and come back with the representation's native `as` conversion, so narrowing into an integer truncates
//! toward zero and saturates at the type bounds.

use crate::error::{ConversionError, Result};
use core::any::type_name;
use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, ToPrimitive};

/// Numeric type usable as the stored magnitude of a quantity.
///
/// Implemented for every primitive integer (up to 64 bits) and for `f32`/`f64`.
pub trait Representation: Num + NumCast + Copy + PartialOrd + Debug + 'static {
    /// `true` for IEEE-754 floating point types.
    const IS_FLOAT: bool;

    /// Widens the magnitude to `f64`.
    fn as_f64(self) -> f64;

    /// Converts an `f64` with `as` semantics (truncating, saturating, NaN maps to zero for integers).
    fn cast_from_f64(value: f64) -> Self;
}

/// Floating point representations.
///
/// Only quantities stored in one of these may convert implicitly (`From`/`Into`, `+`, `-`) between units.
pub trait FloatRepresentation: Representation + Float {}

macro_rules! impl_representation {
    ($is_float:literal => $($t:ty),*) => {
        $(
            impl Representation for $t {
                const IS_FLOAT: bool = $is_float;

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn cast_from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_representation!(true => f32, f64);
impl_representation!(false => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FloatRepresentation for f32 {}
impl FloatRepresentation for f64 {}

mod sealed {
    pub trait Sealed {}
}

/// Operand accepted by scalar multiplication and division of a quantity.
///
/// Sealed: only primitive integers and floats qualify, so scaling a quantity by anything else does not compile.
/// Any of them works on the right of `*` and `/`. On the left of `*`, only `i32` and `f64` are accepted, which is
/// what unsuffixed literals such as `2 * d` or `1.5 * d` default to.
///
/// When either side is floating point the product is computed in `f64` and converted back to the quantity's
/// representation. Two integers multiply in the representation itself (an integer division by zero panics), unless
/// the scalar does not fit the representation, in which case the `f64` path is taken and the result saturates.
pub trait Scalar: Copy + sealed::Sealed {
    /// `count * self`, in the representation `R`.
    fn scale<R: Representation>(self, count: R) -> R;

    /// `count / self`, in the representation `R`.
    fn divide<R: Representation>(self, count: R) -> R;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn scale<R: Representation>(self, count: R) -> R {
                    R::cast_from_f64(count.as_f64() * self as f64)
                }

                #[inline]
                fn divide<R: Representation>(self, count: R) -> R {
                    R::cast_from_f64(count.as_f64() / self as f64)
                }
            }
        )*
    };
}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn scale<R: Representation>(self, count: R) -> R {
                    match integer_operand::<R, _>(self) {
                        Some(k) => count * k,
                        None => R::cast_from_f64(count.as_f64() * self as f64),
                    }
                }

                #[inline]
                fn divide<R: Representation>(self, count: R) -> R {
                    match integer_operand::<R, _>(self) {
                        Some(k) => count / k,
                        None => R::cast_from_f64(count.as_f64() / self as f64),
                    }
                }
            }
        )*
    };
}

/// The scalar as an `R`, when `R` is an integer type that can hold it.
#[inline]
fn integer_operand<R: Representation, S: ToPrimitive + Copy + Debug>(scalar: S) -> Option<R> {
    if R::IS_FLOAT {
        return None;
    }
    let converted = <R as NumCast>::from(scalar);
    if converted.is_none() {
        log::trace!("scalar {:?} does not fit `{}`, scaling through f64", scalar, type_name::<R>());
    }
    converted
}

impl_float_scalar!(f32, f64);
impl_integer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Stores a converted `f64` magnitude in `R`, truncating for integer targets.
#[inline]
pub(crate) fn narrow<R: Representation>(value: f64) -> R {
    if !R::IS_FLOAT && value.fract() != 0.0 {
        log::trace!("truncating {} toward zero into `{}`", value, type_name::<R>());
    }
    R::cast_from_f64(value)
}

/// Checked counterpart of [`narrow`].
pub(crate) fn try_narrow<R: Representation>(value: f64) -> Result<R> {
    let target = type_name::<R>();
    if !R::IS_FLOAT && !value.is_finite() {
        log::debug!("rejected conversion of {} into `{}`", value, target);
        return Err(ConversionError::NotFinite { value, target });
    }
    <R as NumCast>::from(value).ok_or_else(|| {
        log::debug!("{} is out of range for `{}`", value, target);
        ConversionError::OutOfRange { value, target }
    })
}
