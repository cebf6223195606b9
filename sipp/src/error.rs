//! Error type for the checked conversion APIs.
//!
//! The unchecked operators never fail at runtime: floating point magnitudes follow IEEE-754 and integer magnitudes
//! follow Rust's integer semantics. Only `try_cast` and the `std::time::Duration` bridge report errors.

/// Shorthand `Result` type for checked conversions.
pub type Result<T, E = ConversionError> = core::result::Result<T, E>;

/// Reasons a checked conversion can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The converted magnitude does not fit in the target representation.
    #[error("magnitude {value} is out of range for `{target}`")]
    OutOfRange {
        /// Converted magnitude, in the target unit.
        value: f64,
        /// Name of the target representation.
        target: &'static str,
    },

    /// NaN or an infinity cannot be stored in an integer representation.
    #[error("non-finite magnitude {value} cannot be stored as `{target}`")]
    NotFinite {
        /// Converted magnitude, in the target unit.
        value: f64,
        /// Name of the target representation.
        target: &'static str,
    },

    /// Negative, non-finite or overflowing spans have no `std::time::Duration` equivalent.
    #[error("{seconds} s cannot be represented as std::time::Duration")]
    InvalidDuration {
        /// The span expressed in seconds.
        seconds: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ConversionError::OutOfRange {
            value: 1000.0,
            target: "i8",
        };
        assert_eq!(err.to_string(), "magnitude 1000 is out of range for `i8`");

        let err = ConversionError::NotFinite {
            value: f64::INFINITY,
            target: "i32",
        };
        assert_eq!(
            err.to_string(),
            "non-finite magnitude inf cannot be stored as `i32`"
        );

        let err = ConversionError::InvalidDuration { seconds: -1.5 };
        assert_eq!(
            err.to_string(),
            "-1.5 s cannot be represented as std::time::Duration"
        );
    }
}
