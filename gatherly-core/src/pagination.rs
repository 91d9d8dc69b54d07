use serde::{Deserialize, Serialize};

/// Records returned per paginated request.
pub const PAGE_SIZE: u64 = 3;

/// A single page of results plus the page count for the whole match set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total_pages: u64,
}

/// ceil(total / page_size); zero matches mean zero pages.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size)
}

/// Rows to skip for a 1-based page number.
pub fn offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1) * page_size
}

/// Page number from a raw query value; anything unusable means page 1.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
