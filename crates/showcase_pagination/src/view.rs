//! Serializable snapshot of a paginator for consuming views.

use serde::{Deserialize, Serialize};

/// Owned pagination state, shaped for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    /// Zero-based index of the page being shown.
    pub current_page_index: usize,
    /// Every page, in order.
    pub paginated_data: Vec<Vec<T>>,
    /// Number of pages.
    pub page_count: usize,
    /// Whether a "next" control should be enabled.
    pub has_next: bool,
    /// Whether a "previous" control should be enabled.
    pub has_prev: bool,
}

impl<T> PageView<T> {
    /// Returns the page being shown, if any.
    pub fn current_page(&self) -> Option<&[T]> {
        self.paginated_data
            .get(self.current_page_index)
            .map(Vec::as_slice)
    }
}
