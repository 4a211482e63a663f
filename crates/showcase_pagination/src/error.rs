//! Pagination error types.

/// Error raised by the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PaginationError {
    /// Page size was zero.
    #[display("Page size must be at least 1 (got {_0})")]
    InvalidArgument(usize),

    /// A page index past the last page was requested.
    #[display("Page {requested} is out of range ({page_count} pages)")]
    OutOfRange {
        /// The requested zero-based page index.
        requested: usize,
        /// Number of pages available at the time of the request.
        page_count: usize,
    },
}

impl std::error::Error for PaginationError {}
