//! Error types for the interpolation engine
//!
//! This module defines [`InterpError`], the only failure the engine can
//! report. The scanner is deliberately asymmetric: a syntactically complete
//! placeholder that references a missing argument is a caller-side bug and
//! aborts the scan, while every malformed or partial placeholder is
//! recovered locally as literal text and never surfaces here.

use std::fmt;

/// Errors raised while resolving a template against its argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    /// A fully-formed `{n}` placeholder referenced an index at or beyond
    /// the end of the argument list
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    write!(
                        f,
                        "Placeholder index {} is out of range: the argument list is empty",
                        index
                    )
                } else {
                    write!(
                        f,
                        "Placeholder index {} is out of range: valid indices are 0 to {}",
                        index,
                        len - 1
                    )
                }
            }
        }
    }
}

impl std::error::Error for InterpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_args() {
        let err = InterpError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Placeholder index 5 is out of range: valid indices are 0 to 1"
        );
    }

    #[test]
    fn test_display_empty_args() {
        let err = InterpError::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(
            err.to_string(),
            "Placeholder index 0 is out of range: the argument list is empty"
        );
    }
}
