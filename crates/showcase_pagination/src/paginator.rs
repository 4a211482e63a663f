//! Navigable pagination engine.

use crate::view::PageView;
use crate::{partition, PageSize, PaginationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a relative navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Navigation {
    /// The current page changed.
    Moved {
        /// Page index before the step.
        from: usize,
        /// Page index after the step.
        to: usize,
    },
    /// Already at the first or last page; the index was left unchanged.
    BoundaryReached {
        /// The unchanged page index.
        at: usize,
    },
}

impl Navigation {
    /// Returns true if the step changed the current page.
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Whether the paginator currently has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaginatorState {
    /// The collection is empty; there are no pages.
    Empty,
    /// At least one page exists.
    HasPages,
}

/// Pagination engine over a borrowed collection.
///
/// Invariant: when there are pages, `current_page_index < page_count()`;
/// when there are none, `current_page_index == 0`.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: PageSize,
    pages: Vec<&'a [T]>,
    current_page_index: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a paginator positioned on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if `page_size` is zero.
    #[instrument(skip(items), fields(len = items.len()))]
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self, PaginationError> {
        Ok(Self::with_page_size(items, PageSize::new(page_size)?))
    }

    /// Creates a paginator from an already validated page size.
    pub fn with_page_size(items: &'a [T], page_size: PageSize) -> Self {
        Self {
            items,
            page_size,
            pages: partition(items, page_size),
            current_page_index: 0,
        }
    }

    /// Replaces the collection and recomputes pages.
    ///
    /// The current index is clamped to the new last page.
    #[instrument(skip_all, fields(len = items.len()))]
    pub fn set_items(&mut self, items: &'a [T]) {
        self.items = items;
        self.repaginate();
    }

    /// Changes the page size and recomputes pages.
    ///
    /// The current index is clamped to the new last page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if `page_size` is zero;
    /// the paginator is left unchanged.
    #[instrument(skip(self))]
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), PaginationError> {
        self.page_size = PageSize::new(page_size)?;
        self.repaginate();
        Ok(())
    }

    fn repaginate(&mut self) {
        self.pages = partition(self.items, self.page_size);
        let clamped = self.current_page_index.min(self.last_index());
        if clamped != self.current_page_index {
            debug!(
                from = self.current_page_index,
                to = clamped,
                "Clamped page index after repagination"
            );
        }
        self.current_page_index = clamped;
    }

    fn last_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    /// Advances to the next page, clamping at the last one.
    #[instrument(skip(self), fields(current = self.current_page_index))]
    pub fn next(&mut self) -> Navigation {
        if self.has_next() {
            self.step_to(self.current_page_index + 1)
        } else {
            debug!("Already on last page");
            Navigation::BoundaryReached {
                at: self.current_page_index,
            }
        }
    }

    /// Goes back to the previous page, clamping at the first one.
    #[instrument(skip(self), fields(current = self.current_page_index))]
    pub fn prev(&mut self) -> Navigation {
        if self.has_prev() {
            self.step_to(self.current_page_index - 1)
        } else {
            debug!("Already on first page");
            Navigation::BoundaryReached {
                at: self.current_page_index,
            }
        }
    }

    fn step_to(&mut self, to: usize) -> Navigation {
        let from = self.current_page_index;
        self.current_page_index = to;
        Navigation::Moved { from, to }
    }

    /// Jumps to the page at `page_index`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::OutOfRange`] if `page_index` is not a valid
    /// page; the current page is unchanged.
    #[instrument(skip(self))]
    pub fn go_to(&mut self, page_index: usize) -> Result<(), PaginationError> {
        if page_index >= self.pages.len() {
            return Err(PaginationError::OutOfRange {
                requested: page_index,
                page_count: self.pages.len(),
            });
        }
        self.current_page_index = page_index;
        Ok(())
    }

    /// Returns the page being shown, or `None` if there are no pages.
    pub fn current_page(&self) -> Option<&'a [T]> {
        self.page(self.current_page_index)
    }

    /// Returns the page at `page_index`, if any.
    pub fn page(&self, page_index: usize) -> Option<&'a [T]> {
        self.pages.get(page_index).copied()
    }

    /// Returns all pages in order.
    pub fn pages(&self) -> &[&'a [T]] {
        &self.pages
    }

    /// Returns the zero-based index of the page being shown.
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the paginated collection.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns true if `next()` would move.
    pub fn has_next(&self) -> bool {
        self.current_page_index + 1 < self.pages.len()
    }

    /// Returns true if `prev()` would move.
    pub fn has_prev(&self) -> bool {
        self.current_page_index > 0
    }

    /// Returns whether there is anything to show.
    pub fn state(&self) -> PaginatorState {
        if self.pages.is_empty() {
            PaginatorState::Empty
        } else {
            PaginatorState::HasPages
        }
    }

    /// Returns an owned, serializable snapshot of the paginator.
    pub fn view(&self) -> PageView<T>
    where
        T: Clone,
    {
        PageView {
            current_page_index: self.current_page_index,
            paginated_data: self.pages.iter().map(|page| page.to_vec()).collect(),
            page_count: self.pages.len(),
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let items = [1, 2, 3, 4, 5];
        let pager = Paginator::new(&items, 2).expect("valid page size");
        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(pager.current_page(), Some(&[1, 2][..]));
        assert_eq!(pager.state(), PaginatorState::HasPages);
    }

    #[test]
    fn test_next_and_prev_move() {
        let items = [1, 2, 3, 4, 5];
        let mut pager = Paginator::new(&items, 2).expect("valid page size");

        assert_eq!(pager.next(), Navigation::Moved { from: 0, to: 1 });
        assert_eq!(pager.current_page(), Some(&[3, 4][..]));
        assert_eq!(pager.prev(), Navigation::Moved { from: 1, to: 0 });
        assert_eq!(pager.current_page(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let items = [1, 2, 3];
        let mut pager = Paginator::new(&items, 2).expect("valid page size");
        pager.next();

        assert_eq!(pager.next(), Navigation::BoundaryReached { at: 1 });
        assert_eq!(pager.current_page_index(), 1);
        assert!(!pager.has_next());
    }

    #[test]
    fn test_prev_clamps_at_first_page() {
        let items = [1, 2, 3];
        let mut pager = Paginator::new(&items, 2).expect("valid page size");

        assert_eq!(pager.prev(), Navigation::BoundaryReached { at: 0 });
        assert_eq!(pager.current_page_index(), 0);
        assert!(!pager.has_prev());
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let items = [1, 2, 3];
        let mut pager = Paginator::new(&items, 2).expect("valid page size");
        pager.next();

        assert_eq!(
            pager.go_to(2),
            Err(PaginationError::OutOfRange {
                requested: 2,
                page_count: 2
            })
        );
        assert_eq!(pager.current_page_index(), 1);
    }

    #[test]
    fn test_empty_collection() {
        let items: [i32; 0] = [];
        let mut pager = Paginator::new(&items, 4).expect("valid page size");

        assert_eq!(pager.state(), PaginatorState::Empty);
        assert_eq!(pager.current_page(), None);
        assert_eq!(pager.next(), Navigation::BoundaryReached { at: 0 });
        assert_eq!(pager.prev(), Navigation::BoundaryReached { at: 0 });
        assert!(pager.go_to(0).is_err());
    }

    #[test]
    fn test_set_items_clamps_index() {
        let long = [1, 2, 3, 4, 5, 6];
        let short = [7, 8];
        let mut pager = Paginator::new(&long, 2).expect("valid page size");
        pager.go_to(2).expect("page exists");

        pager.set_items(&short);
        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(pager.current_page(), Some(&[7, 8][..]));
    }

    #[test]
    fn test_set_page_size_repaginates() {
        let items = [1, 2, 3, 4, 5, 6];
        let mut pager = Paginator::new(&items, 1).expect("valid page size");
        pager.go_to(5).expect("page exists");

        pager.set_page_size(4).expect("valid page size");
        assert_eq!(pager.page_count(), 2);
        assert_eq!(pager.current_page(), Some(&[5, 6][..]));
    }

    #[test]
    fn test_set_page_size_zero_leaves_state() {
        let items = [1, 2, 3];
        let mut pager = Paginator::new(&items, 2).expect("valid page size");

        assert_eq!(pager.set_page_size(0), Err(PaginationError::InvalidArgument(0)));
        assert_eq!(pager.page_size().get(), 2);
        assert_eq!(pager.page_count(), 2);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let items = [1];
        assert!(matches!(
            Paginator::new(&items, 0),
            Err(PaginationError::InvalidArgument(0))
        ));
    }
}
