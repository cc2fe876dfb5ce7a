//! Windowing over a list that is longer than one page.
//!
//! Wheel convention: a positive wheel delta (wheel rolled up) moves the
//! offset toward earlier items, a negative delta toward later ones.

use crate::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPager {
    offset: usize,
    page_size: usize,
}

impl Default for ListPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Largest valid offset for a list of `total` items
    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.page_size)
    }

    /// Indices of the items currently on screen
    pub fn visible_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        start..(self.offset + self.page_size).min(total)
    }

    pub fn scroll_by(&mut self, delta: i32, total: usize) {
        let max = i64::try_from(self.max_offset(total)).unwrap_or(i64::MAX);
        let current = i64::try_from(self.offset).unwrap_or(i64::MAX);
        let target = current.saturating_sub(i64::from(delta)).clamp(0, max);
        self.offset = usize::try_from(target).unwrap_or(0);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Pull the offset back after items were removed
    pub fn on_item_count_shrunk(&mut self, total: usize) {
        let max = self.max_offset(total);
        if self.offset > max {
            self.offset = max;
        }
    }

    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_down(&self, total: usize) -> bool {
        self.offset + self.page_size < total
    }

    /// Scrollbar thumb as `(start, length)` along a track of `track_len`.
    /// Returns `None` when everything fits on one page.
    pub fn thumb(&self, total: usize, track_len: i32, min_thumb: i32) -> Option<(i32, i32)> {
        if total <= self.page_size {
            return None;
        }

        let total = i64::try_from(total).ok()?;
        let page = i64::try_from(self.page_size).ok()?;
        let track = i64::from(track_len);
        let length = (track * page / total).max(i64::from(min_thumb)).min(track);

        let max_offset = total - page;
        let offset = i64::try_from(self.offset).ok()?.min(max_offset);
        let start = (track - length) * offset / max_offset;

        Some((i32::try_from(start).ok()?, i32::try_from(length).ok()?))
    }
}
