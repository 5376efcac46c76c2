//! Page slicing for ordered result sets

use std::ops::Range;

/// Items per page for every question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page number as requested; values below 1 select nothing
    pub number: i64,
    /// Items per page
    pub size: usize,
}

impl Page {
    pub fn new(number: i64) -> Self {
        Self::with_size(number, QUESTIONS_PER_PAGE)
    }

    pub fn with_size(number: i64, size: usize) -> Self {
        Self { number, size }
    }

    /// Parse a raw `page` query value.
    ///
    /// Absent or non-numeric input falls back to page 1. Numeric input is
    /// kept as-is, so `0` or `-3` produce an empty slice rather than page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        let number = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(number)
    }

    /// Index range `[start, end)` before clamping, or `None` when the page
    /// can never hold items.
    pub fn bounds(&self) -> Option<Range<usize>> {
        if self.number < 1 || self.size == 0 {
            return None;
        }
        let index = usize::try_from(self.number - 1).ok()?;
        let start = index.checked_mul(self.size)?;
        let end = start.saturating_add(self.size);
        Some(start..end)
    }

    /// Borrow this page's window of `items`, clamped to its length.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.bounds() {
            Some(range) if range.start < items.len() => {
                &items[range.start..range.end.min(items.len())]
            }
            _ => &[],
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Copy one page out of an ordered sequence. Never fails; a page past the
/// end is simply empty.
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    page.window(items).to_vec()
}
