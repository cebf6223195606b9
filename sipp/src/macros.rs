//! Macros generating the repetitive operator and conversion impls.

/// Scalar `*`, `/`, `*=`, `/=` for a quantity, generic over any [`Scalar`](crate::Scalar) on the right.
///
/// The scalar-on-the-left form is only generated for the listed primitives. Keeping that list to one integer and
/// one float type lets an unsuffixed literal such as `2 * d` or `1.5 * d` resolve to a single impl.
///
/// Invoked as `impl_scalar_ops!([generics] Quantity<..>; i32, f64)`.
macro_rules! impl_scalar_ops {
    (@left [$($gen:tt)*] $quantity:ty;) => {};

    (@left [$($gen:tt)*] $quantity:ty; $scalar:ty $(, $rest:ty)*) => {
        impl<$($gen)*> ::core::ops::Mul<$quantity> for $scalar {
            type Output = $quantity;
            #[inline]
            fn mul(self, rhs: $quantity) -> $quantity {
                rhs * self
            }
        }

        impl_scalar_ops!(@left [$($gen)*] $quantity; $($rest),*);
    };

    ([$($gen:tt)*] $quantity:ty; $($scalar:ty),*) => {
        impl<$($gen)*, S: $crate::Scalar> ::core::ops::Mul<S> for $quantity {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: S) -> Self {
                Self::new($crate::Scalar::scale(rhs, self.count()))
            }
        }

        impl<$($gen)*, S: $crate::Scalar> ::core::ops::Div<S> for $quantity {
            type Output = Self;
            #[inline]
            fn div(self, rhs: S) -> Self {
                Self::new($crate::Scalar::divide(rhs, self.count()))
            }
        }

        impl<$($gen)*, S: $crate::Scalar> ::core::ops::MulAssign<S> for $quantity {
            #[inline]
            fn mul_assign(&mut self, rhs: S) {
                *self = *self * rhs;
            }
        }

        impl<$($gen)*, S: $crate::Scalar> ::core::ops::DivAssign<S> for $quantity {
            #[inline]
            fn div_assign(&mut self, rhs: S) {
                *self = *self / rhs;
            }
        }

        impl_scalar_ops!(@left [$($gen)*] $quantity; $($scalar),*);
    };
}

/// `From` between the `f32` and `f64` forms of a quantity in the same unit.
///
/// Invoked as `impl_float_width_conversions!([generics] Quantity<unit params>)`.
macro_rules! impl_float_width_conversions {
    ([$($gen:tt)*] $quantity:ident<$($param:ident),+>) => {
        impl<$($gen)*> From<$quantity<f32, $($param),+>> for $quantity<f64, $($param),+> {
            #[inline]
            fn from(value: $quantity<f32, $($param),+>) -> Self {
                Self::new(f64::from(value.count()))
            }
        }

        impl<$($gen)*> From<$quantity<f64, $($param),+>> for $quantity<f32, $($param),+> {
            #[inline]
            fn from(value: $quantity<f64, $($param),+>) -> Self {
                Self::new(value.count() as f32)
            }
        }
    };
}

/// Float-only `From` impls between every pair of the listed units of a single-unit quantity.
macro_rules! impl_unit_conversions {
    ($quantity:ident: $unit:ty) => {};

    ($quantity:ident: $first:ty, $($rest:ty),+) => {
        $(
            impl<R, R2> From<$crate::$quantity<R2, $first>> for $crate::$quantity<R, $rest>
            where
                R: $crate::FloatRepresentation,
                R2: $crate::FloatRepresentation,
            {
                #[inline]
                fn from(value: $crate::$quantity<R2, $first>) -> Self {
                    value.cast()
                }
            }

            impl<R, R2> From<$crate::$quantity<R2, $rest>> for $crate::$quantity<R, $first>
            where
                R: $crate::FloatRepresentation,
                R2: $crate::FloatRepresentation,
            {
                #[inline]
                fn from(value: $crate::$quantity<R2, $rest>) -> Self {
                    value.cast()
                }
            }
        )+

        impl_unit_conversions!($quantity: $($rest),+);
    };
}

/// Float-only `From` impls between every pair of the listed `(distance, time)` speed units.
macro_rules! impl_speed_conversions {
    (($d:ty, $t:ty)) => {};

    (($d:ty, $t:ty), $(($rd:ty, $rt:ty)),+) => {
        $(
            impl<R, R2> From<$crate::Speed<R2, $d, $t>> for $crate::Speed<R, $rd, $rt>
            where
                R: $crate::FloatRepresentation,
                R2: $crate::FloatRepresentation,
            {
                #[inline]
                fn from(value: $crate::Speed<R2, $d, $t>) -> Self {
                    value.cast()
                }
            }

            impl<R, R2> From<$crate::Speed<R2, $rd, $rt>> for $crate::Speed<R, $d, $t>
            where
                R: $crate::FloatRepresentation,
                R2: $crate::FloatRepresentation,
            {
                #[inline]
                fn from(value: $crate::Speed<R2, $rd, $rt>) -> Self {
                    value.cast()
                }
            }
        )+

        impl_speed_conversions!($(($rd, $rt)),+);
    };
}
