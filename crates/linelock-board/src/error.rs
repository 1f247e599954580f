//! Board error types.

/// Error raised when an argument falls outside its valid domain.
///
/// Both variants are the same kind of failure — a programming-contract
/// violation by the caller — and are raised synchronously before any state is
/// touched. Semantically disallowed but well-formed requests (writing a locked
/// cell, setting a duplicate value) are silent no-ops instead, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A coordinate is outside `0..size`.
    #[display("coordinate ({x}, {y}) is out of range for a {size}x{size} board")]
    CoordinateOutOfRange {
        /// Row index passed by the caller.
        x: usize,
        /// Column index passed by the caller.
        y: usize,
        /// Board dimension the coordinate was checked against.
        size: usize,
    },
    /// A cell value is outside `0..=max`.
    #[display("value {value} is out of range 0..={max}")]
    ValueOutOfRange {
        /// Value passed by the caller.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BoardError::CoordinateOutOfRange { x: 9, y: 0, size: 9 };
        assert_eq!(
            err.to_string(),
            "coordinate (9, 0) is out of range for a 9x9 board"
        );

        let err = BoardError::ValueOutOfRange { value: 11, max: 10 };
        assert_eq!(err.to_string(), "value 11 is out of range 0..=10");
    }
}
