//! Behaviour shared by every quantity type.

use crate::representation::Representation;

/// A magnitude tagged at the type level with its unit.
///
/// Implemented by [`Distance`](crate::Distance), [`Speed`](crate::Speed) and [`Duration`](crate::Duration). Generic
/// code (such as [`serde_with_unit`](crate::serde_with_unit)) uses it to move between a quantity and its raw count
/// without knowing the unit.
pub trait Quantity: Copy {
    /// Numeric storage type.
    type Rep: Representation;

    /// The stored magnitude, in the quantity's own unit.
    fn count(&self) -> Self::Rep;

    /// Builds the quantity from a magnitude already expressed in its unit.
    fn from_count(count: Self::Rep) -> Self;

    /// Printable unit symbol, e.g. `"km"` or `"NM/h"`.
    fn symbol() -> String;
}
