use catalog_host::{CatalogRecord, PageMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Issues monotonically increasing request ids for one operation and remembers the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    latest: Option<RequestId>,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestId {
        let next = RequestId(self.latest.map_or(1, |id| id.0 + 1));
        self.latest = Some(next);
        next
    }

    pub fn latest(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn is_latest(&self, request_id: RequestId) -> bool {
        self.latest == Some(request_id)
    }

    /// Supersedes any outstanding request so its response is treated as stale.
    pub fn invalidate(&mut self) {
        self.issue();
    }
}

/// Records currently marked selected, independent of the displayed page.
///
/// `None` is the "no explicit selection" sentinel. Membership is keyed by record id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    records: Option<Vec<CatalogRecord>>,
}

impl SelectionSet {
    pub fn clear(&mut self) {
        self.records = None;
    }

    pub fn replace(&mut self, records: Vec<CatalogRecord>) {
        self.records = Some(records);
    }

    pub fn toggle(&mut self, record: &CatalogRecord) {
        let records = self.records.get_or_insert_with(Vec::new);
        if let Some(idx) = records.iter().position(|r| r.id == record.id) {
            records.remove(idx);
        } else {
            records.push(record.clone());
        }
    }

    /// Selects or deselects every record in `page`, leaving other pages' picks alone.
    pub fn set_many(&mut self, page: &[CatalogRecord], selected: bool) {
        let records = self.records.get_or_insert_with(Vec::new);
        if selected {
            for record in page {
                if !records.iter().any(|r| r.id == record.id) {
                    records.push(record.clone());
                }
            }
        } else {
            records.retain(|r| !page.iter().any(|p| p.id == r.id));
        }
    }

    pub fn contains(&self, record_id: u64) -> bool {
        self.records
            .as_ref()
            .is_some_and(|records| records.iter().any(|r| r.id == record_id))
    }

    pub fn is_explicit(&self) -> bool {
        self.records.is_some()
    }

    pub fn records(&self) -> &[CatalogRecord] {
        self.records.as_deref().unwrap_or(&[])
    }

    pub fn ids(&self) -> Vec<u64> {
        self.records().iter().map(|r| r.id).collect()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single state container for the catalog table.
///
/// Loading and error are mutually exclusive with a rendered table; see [`TableState::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub records: Vec<CatalogRecord>,
    pub pagination: Option<PageMetadata>,
    pub loading: bool,
    pub error: Option<String>,
    pub selection: SelectionSet,
    pub requested_page: Option<u32>,
    pub page_requests: RequestTracker,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            pagination: None,
            // The mount load is pending before the first render.
            loading: true,
            error: None,
            selection: SelectionSet::default(),
            requested_page: None,
            page_requests: RequestTracker::default(),
        }
    }
}

impl TableState {
    pub fn view(&self) -> TableView {
        if self.loading {
            TableView::Loading
        } else if let Some(message) = &self.error {
            TableView::Error(message.clone())
        } else {
            TableView::Ready
        }
    }

    pub fn find_record(&self, record_id: u64) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id == record_id)
    }

    /// True when the displayed page has rows and every one of them is selected.
    pub fn page_fully_selected(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(|r| self.selection.contains(r.id))
    }
}

/// Which of the three mutually exclusive screens the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkSelectorState {
    /// Raw text last typed into the popover input.
    pub input: String,
    /// Count waiting for the debounce timer to fire.
    pub pending_count: Option<i64>,
    pub debounce_generation: u64,
    pub requests: RequestTracker,
}

/// User-visible transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub summary: String,
    pub detail: String,
}

impl Notice {
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            summary: "Error".to_string(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u64,
    pub notice: Notice,
}
