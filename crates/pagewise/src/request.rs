use serde::Serialize;

use crate::error::Result;
use crate::guard::{guard_current_page, guard_current_within_total, guard_total_pages};

/// Position within a paginated list: how many pages exist and which one is
/// active.
///
/// Always satisfies `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationRequest {
    total_pages:  u64,
    current_page: u64,
}

impl PaginationRequest {
    pub fn new(total_pages: u64, current_page: u64) -> Result<Self> {
        guard_total_pages(total_pages)?;
        guard_current_page(current_page)?;
        guard_current_within_total(total_pages, current_page)?;
        Ok(Self { total_pages, current_page })
    }

    /// Returns a copy with a different page count, checked against the
    /// current page of `self`.
    pub fn with_total_pages(&self, total_pages: u64) -> Result<Self> {
        Self::new(total_pages, self.current_page)
    }

    /// Returns a copy with a different active page, checked against the
    /// page count of `self`.
    pub fn with_current_page(&self, current_page: u64) -> Result<Self> {
        Self::new(self.total_pages, current_page)
    }

    pub fn total_pages(&self) -> u64 { self.total_pages }

    pub fn current_page(&self) -> u64 { self.current_page }
}
