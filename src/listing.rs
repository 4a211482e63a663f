//! Plain-text rendering of a paginated listing.

use showcase_pagination::Paginator;
use std::fmt::Display;
use std::fmt::Write as _;

/// Renders the current page, numbering items across the whole collection,
/// followed by a navigation footer.
pub fn render_page<T: Display>(pager: &Paginator<'_, T>) -> String {
    let mut out = String::new();
    let Some(page) = pager.current_page() else {
        out.push_str("(no items)\n");
        return out;
    };

    let offset = pager.current_page_index() * pager.page_size().get();
    for (i, item) in page.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", offset + i + 1, item);
    }
    let _ = writeln!(
        out,
        "-- page {}/{} | prev: {} | next: {} --",
        pager.current_page_index() + 1,
        pager.page_count(),
        if pager.has_prev() { "yes" } else { "no" },
        if pager.has_next() { "yes" } else { "no" },
    );
    out
}
