//! Pagination controller
//!
//! Tracks the current and last page as the server reports them. Pages are
//! 1-based; `next`/`prev` are no-ops at the bounds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    last: u32,
}

impl Pager {
    pub fn new() -> Self {
        Self { current: 1, last: 1 }
    }

    pub fn current_page(&self) -> u32 {
        self.current
    }

    pub fn last_page(&self) -> u32 {
        self.last
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.current < self.last {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Back to page 1. Must happen before the next fetch whenever the
    /// category or search term changes, so an out-of-range page is never
    /// requested.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Record the page count reported by the server, re-clamping the
    /// current page into `[1, last]`.
    pub fn set_last_page(&mut self, last: u32) {
        self.last = last.max(1);
        if self.current > self.last {
            self.current = self.last;
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
