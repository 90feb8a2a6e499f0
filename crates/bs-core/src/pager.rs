//! Fixed-size windows over a record slice for the raw-row viewer.

/// Rows shown per window unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Cursor over consecutive windows of `page_size` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Creates a cursor at the first window. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
        }
    }

    /// The current window; empty once the cursor has passed the end.
    pub fn window<'a, R>(&self, records: &'a [R]) -> &'a [R] {
        let start = self.start.min(records.len());
        let end = self.start.saturating_add(self.page_size).min(records.len());
        &records[start..end]
    }

    /// Moves to the next window.
    pub const fn advance(&mut self) {
        self.start = self.start.saturating_add(self.page_size);
    }
}
