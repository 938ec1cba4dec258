//! Fixed-size page arithmetic over the filtered member list.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Navigation request from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    /// 1-based page number, clamped into range.
    Number(usize),
}

/// Number of pages needed for `len` rows. Never less than 1.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a 1-based page into `[1, page_count(len)]`.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len))
}

/// Index range of `page` (1-based) within a list of `len` rows.
///
/// Pages past the end yield an empty range.
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}

/// Whether a page after `page` exists for `len` rows.
///
/// Mirrors the "last visible index" check: next is disallowed once
/// `page * PAGE_SIZE >= len`.
pub fn has_next_page(page: usize, len: usize) -> bool {
    page.saturating_mul(PAGE_SIZE) < len
}
