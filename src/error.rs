//! Error types for optslot.
//!
//! The container has exactly one failure mode: accessing the held value of
//! an empty container. Everything else either cannot fail or propagates
//! whatever the held type's own code raises.

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for optional-value access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The container was accessed while holding no value.
    #[error("no value present in optional")]
    NoValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NoValue.to_string(), "no value present in optional");
    }

    #[test]
    fn test_result_alias() {
        fn absent() -> Result<i32> {
            Err(Error::NoValue)
        }
        assert_eq!(absent(), Err(Error::NoValue));
    }
}
