//! Client-side pagination over borrowed collections.
//!
//! The engine partitions an ordered slice into fixed-size pages and
//! navigates between them. Navigation is bounds-safe inside the engine:
//!
//! - `next()` / `prev()` clamp at the first and last page and report
//!   [`Navigation::BoundaryReached`] instead of leaving the valid range.
//! - `go_to()` rejects indices past the last page with
//!   [`PaginationError::OutOfRange`] and leaves the current page as is.
//!
//! Disabling "next" and "previous" controls in a UI ([`Paginator::has_next`],
//! [`Paginator::has_prev`]) is an affordance only; correctness never depends
//! on it.
//!
//! # Example
//!
//! ```
//! use showcase_pagination::{Navigation, Paginator};
//!
//! let items = [1, 2, 3, 4, 5];
//! let mut pager = Paginator::new(&items, 2)?;
//! assert_eq!(pager.page_count(), 3);
//!
//! pager.go_to(2)?;
//! assert_eq!(pager.current_page(), Some(&[5][..]));
//! assert!(matches!(pager.next(), Navigation::BoundaryReached { at: 2 }));
//! # Ok::<(), showcase_pagination::PaginationError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod page_size;
mod paginator;
mod partition;
mod view;

pub use error::PaginationError;
pub use page_size::PageSize;
pub use paginator::{Navigation, Paginator, PaginatorState};
pub use partition::{paginate, partition};
pub use view::PageView;
