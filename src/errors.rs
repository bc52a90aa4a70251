//! Error types for board and configuration decoding, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (B001-B004) for documentation lookup:
//!
//! - B001: `WrongCellCount` (Board string has the wrong number of cells)
//! - B002: `InvalidCell` (Non-lowercase character in the board string)
//! - B003: `EmptyDimension` (Board dimension of zero)
//! - B004: `ContradictoryBounds` (Minimum word length exceeds maximum)
//!
//! The search itself never fails: once a [`Grid`](crate::grid::Grid) and a
//! [`Trie`](crate::trie::Trie) have been built, solving is a total function.
//! All fallibility lives here, at the input-decoding boundary.
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//!
//! match Grid::parse("abc", 2, 2) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for board and configuration decoding.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board has {actual} cells, expected {expected}")]
    WrongCellCount { expected: usize, actual: usize },

    #[error("invalid board character '{found}' at position {position}")]
    InvalidCell { position: usize, found: char },

    #[error("board dimensions must be at least 1x1 (got {rows}x{cols})")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("contradictory word-length bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },
}

impl From<BoardError> for io::Error {
    fn from(be: BoardError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, be.to_string())
    }
}

impl BoardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::WrongCellCount { .. } => "B001",
            BoardError::InvalidCell { .. } => "B002",
            BoardError::EmptyDimension { .. } => "B003",
            BoardError::ContradictoryBounds { .. } => "B004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BoardError::WrongCellCount { .. } => "Board string has the wrong number of cells",
            BoardError::InvalidCell { .. } => "Non-lowercase character in the board string",
            BoardError::EmptyDimension { .. } => "Board dimension of zero",
            BoardError::ContradictoryBounds { .. } => "Minimum word length exceeds maximum",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::WrongCellCount { .. } => {
                Some("The board string must contain exactly rows*cols letters in row-major order (e.g., 16 letters for a 4x4 board)")
            }
            BoardError::InvalidCell { .. } => {
                Some("Board cells must be single lowercase letters a-z, with no separators or whitespace")
            }
            BoardError::EmptyDimension { .. } => {
                Some("Both the row count and the column count must be at least 1")
            }
            BoardError::ContradictoryBounds { .. } => {
                Some("The minimum word length cannot exceed the maximum word length")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = BoardError::WrongCellCount { expected: 16, actual: 15 };
        assert_eq!(err.code(), "B001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("B001"));
        assert!(detailed.contains("row-major"));
    }

    #[test]
    fn test_contradictory_bounds_help() {
        let err = BoardError::ContradictoryBounds { min: 5, max: 3 };
        assert_eq!(err.code(), "B004");
        let detailed = err.display_detailed();
        assert!(detailed.contains("minimum word length cannot exceed"));
    }

    /// Test that all `BoardError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        // Sample one of each variant
        let errors: Vec<BoardError> = vec![
            BoardError::WrongCellCount { expected: 16, actual: 4 },
            BoardError::InvalidCell { position: 3, found: 'Q' },
            BoardError::EmptyDimension { rows: 0, cols: 4 },
            BoardError::ContradictoryBounds { min: 5, max: 3 },
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.starts_with('B'),
                "Error code '{}' should start with 'B'",
                code
            );
            assert!(
                codes.insert(code),
                "Duplicate error code found: {}",
                code
            );
        }

        assert_eq!(codes.len(), 4, "Should have 4 unique error codes");
    }

    #[test]
    fn test_conversion_to_io_error() {
        let err = BoardError::InvalidCell { position: 0, found: '1' };
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("position 0"));
    }
}
