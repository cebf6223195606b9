//! Dimension marker trait.

/// Marker trait for **dimensions** (length, time).
///
/// A dimension is what distinguishes a metre from a second. Each one is modelled as an empty enum:
///
/// ```rust
/// use sipp::Dimension;
///
/// pub enum Length {}
/// impl Dimension for Length {}
/// ```
pub trait Dimension: 'static {}
