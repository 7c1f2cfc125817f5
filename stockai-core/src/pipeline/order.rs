use crate::types::{Bar, DisplayOrder};

/// Bars held in canonical order together with its exact reverse.
///
/// Canonical order is newest first by `(date, time)`. Ties keep their
/// arrival order. The oldest-first view is the element-wise reverse of the
/// canonical one, so toggling the display order never re-sorts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedBars {
    newest: Vec<Bar>,
    oldest: Vec<Bar>,
}

impl SortedBars {
    /// Sort `bars` newest first and derive the oldest-first view.
    #[must_use]
    pub fn new(mut bars: Vec<Bar>) -> Self {
        bars.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        let mut oldest = bars.clone();
        oldest.reverse();
        Self {
            newest: bars,
            oldest,
        }
    }

    /// Newest-first bars.
    #[must_use]
    pub fn newest_first(&self) -> &[Bar] {
        &self.newest
    }

    /// Oldest-first bars.
    #[must_use]
    pub fn oldest_first(&self) -> &[Bar] {
        &self.oldest
    }

    /// Bars in the requested display order.
    #[must_use]
    pub fn displayed(&self, order: DisplayOrder) -> &[Bar] {
        match order {
            DisplayOrder::Newest => &self.newest,
            DisplayOrder::Oldest => &self.oldest,
        }
    }

    /// Most recent bar.
    #[must_use]
    pub fn latest(&self) -> Option<&Bar> {
        self.newest.first()
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.newest.len()
    }

    /// True when there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newest.is_empty()
    }
}

impl From<Vec<Bar>> for SortedBars {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}
