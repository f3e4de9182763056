//! Error types for the core crate.
//!
//! Core operations are total for everything the editor produces; these errors
//! only surface when a caller asks for a checked conversion.

use thiserror::Error;

/// Errors raised by checked conversions on core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The integer is not one of the three color codes.
    #[error("Invalid color code: {0} (expected 1, 2 or 3)")]
    InvalidColorCode(i64),

    /// A color channel does not fit in 0..=255.
    #[error("Color channel '{channel}' out of range: {value}")]
    ChannelOutOfRange { channel: char, value: i64 },
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display() {
        let err = CoreError::InvalidColorCode(7);
        assert_eq!(err.to_string(), "Invalid color code: 7 (expected 1, 2 or 3)");

        let err = CoreError::ChannelOutOfRange {
            channel: 'g',
            value: 300,
        };
        assert_eq!(err.to_string(), "Color channel 'g' out of range: 300");
    }
}
