//! Page slicing over an already filtered-and-sorted sequence.

/// Marketplace listing-grid page size.
pub const PAGE_SIZE: usize = 12;

/// One page of an already filtered-and-sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size` of them.
    pub items: &'a [T],
    /// The page actually served, after clamping into `[1, total_pages]`.
    pub page: u32,
    /// Total number of pages, always at least 1.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total: usize,
}

/// Total page count: `max(1, ceil(total / page_size))`.
#[must_use]
pub fn total_pages(total: usize, page_size: usize) -> u32 {
    let pages = total.div_ceil(page_size.max(1)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Return the contiguous slice for a 1-based page number.
///
/// Out-of-range page numbers (including 0) are clamped into
/// `[1, total_pages]`; this never errors.
#[must_use]
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let total = items.len();
    let total_pages = total_pages(total, size);
    let current = page.clamp(1, total_pages);

    let index = usize::try_from(current).unwrap_or(usize::MAX).saturating_sub(1);
    let start = index.saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    Page {
        items: &items[start..end],
        page: current,
        total_pages,
        total,
    }
}

/// Page numbers to render in pagination controls: the current page ± 2,
/// always including the first and last page, ascending and deduplicated.
#[must_use]
pub fn page_range(current: u32, total_pages: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(2).max(1);
    let end = current.saturating_add(2).min(total_pages);

    let mut range: Vec<u32> = (start..=end).collect();
    if !range.contains(&1) {
        range.insert(0, 1);
    }
    if !range.contains(&total_pages) {
        range.push(total_pages);
    }
    range
}
