//! Paginator - fixed-size page slicing over the filtered view
//!
//! Pages are 1-based. An empty view still has one (empty) page, so the pager
//! always shows a single button instead of none.

use std::ops::Range;

/// Thoughts shown per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages for `len` items: `max(1, ceil(len / PAGE_SIZE))`
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a requested page into `[1, page_count(len)]`
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len))
}

/// Offsets of `page` within a sequence of `len` items, clipped to bounds
///
/// Callers pass a clamped page; an out-of-range page yields an empty range.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

/// The page that holds the item at `position`
pub fn page_of(position: usize) -> usize {
    position / PAGE_SIZE + 1
}
