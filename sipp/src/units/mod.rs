//! Predefined unit markers, grouped by dimension.
//!
//! - [`length`]: metre ladder, foot, nautical and statute miles.
//! - [`time`]: nanosecond up to hour.
//! - [`velocity`]: the speed aliases used in navigation and aviation.

pub mod length;
pub mod time;
pub mod velocity;
