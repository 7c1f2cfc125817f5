use serde::Serialize;

/// One page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Page<'a, T> {
    /// Rows on this page.
    pub items: &'a [T],
    /// Zero-based page index after clamping.
    pub index: usize,
    /// Number of pages; at least one, even for an empty list.
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows across all pages.
    pub total: usize,
}

impl<T> Page<'_, T> {
    /// True when a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index + 1 < self.page_count
    }

    /// True when an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// `Page 2 of 5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.index + 1, self.page_count)
    }
}

/// Slice `items` into page `index` of `page_size` rows.
///
/// `index` is clamped into `[0, page_count - 1]` and a zero `page_size` is
/// treated as one. Concatenating every page reproduces `items`.
///
/// ```
/// use stockai_core::paginate;
///
/// let rows: Vec<u32> = (0..120).collect();
/// let last = paginate(&rows, 50, 9);
/// assert_eq!(last.index, 2);
/// assert_eq!(last.items.len(), 20);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, index: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let index = index.min(page_count - 1);
    let start = (index * page_size).min(total);
    let end = (start + page_size).min(total);
    Page {
        items: &items[start..end],
        index,
        page_count,
        page_size,
        total,
    }
}
