//! Validated page size.

use crate::PaginationError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of items per page. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Creates a page size, rejecting zero.
    pub fn new(size: usize) -> Result<Self, PaginationError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PaginationError::InvalidArgument(size))
    }

    /// Returns the page size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(PageSize::new(0), Err(PaginationError::InvalidArgument(0)));
    }

    #[test]
    fn test_positive_accepted() {
        assert_eq!(PageSize::new(3).map(PageSize::get), Ok(3));
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        let size: PageSize = serde_json::from_str("7").expect("valid page size");
        assert_eq!(size.get(), 7);
    }
}
