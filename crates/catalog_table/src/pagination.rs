//! Paginator math derived from upstream page metadata.

use catalog_host::PageMetadata;

/// Number of pages needed for `total` records at `rows` per page.
pub fn page_count(total: u64, rows: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(rows))).unwrap_or(u32::MAX)
}

/// One-based page that starts at `offset`, or 0 when there is no page size.
pub fn page_at_offset(offset: u64, rows: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    u32::try_from(offset / u64::from(rows) + 1).unwrap_or(u32::MAX)
}

/// Up to `window` consecutive page numbers centred on `current` and clamped to `1..=page_count`.
pub fn visible_page_links(current: u32, page_count: u32, window: u32) -> Vec<u32> {
    if page_count == 0 || window == 0 {
        return Vec::new();
    }
    let window = window.min(page_count);
    let current = current.clamp(1, page_count);
    let start = current.saturating_sub(window / 2).max(1);
    let start = start.min(page_count - window + 1);
    (start..start + window).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PagerModel {
    pub current_page: u32,
    pub page_count: u32,
    pub total_records: u64,
    pub links: Vec<u32>,
}

impl PagerModel {
    /// Binds the pager the way a lazy table widget does: `rows = limit`, `first = offset`,
    /// `total_records = total`.
    pub fn from_metadata(pagination: &PageMetadata, window: u32) -> Self {
        let page_count = page_count(pagination.total, pagination.limit);
        let current_page = page_at_offset(pagination.offset, pagination.limit).min(page_count);
        Self {
            current_page,
            page_count,
            total_records: pagination.total,
            links: visible_page_links(current_page, page_count, window),
        }
    }

    pub fn summary(&self) -> String {
        format!("Page {} of {}", self.current_page, self.page_count)
    }
}
