//! Partitioning a collection into pages.

use crate::{PageSize, PaginationError};
use tracing::instrument;

/// Partitions `items` into pages of `page_size` items.
///
/// `pages[i] == items[i * size .. min((i + 1) * size, len)]`. The last page
/// may be shorter; an empty collection yields no pages.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] if `page_size` is zero.
#[instrument(skip(items), fields(len = items.len()))]
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Vec<&[T]>, PaginationError> {
    let page_size = PageSize::new(page_size)?;
    Ok(partition(items, page_size))
}

/// Partitions `items` using an already validated page size.
pub fn partition<T>(items: &[T], page_size: PageSize) -> Vec<&[T]> {
    items.chunks(page_size.get()).collect()
}
