//! Catalog service contracts, a no-op adapter, and an in-memory adapter.

use std::{cell::RefCell, collections::BTreeSet, future::Future, pin::Pin, rc::Rc};

use crate::{CatalogPage, CatalogRecord, FetchError, PageMetadata, PageRequest};

/// Object-safe boxed future used by [`CatalogService`].
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that performs one paginated catalog query.
pub trait CatalogService {
    /// Fetches one page of projected records plus upstream pagination.
    ///
    /// Implementations resolve an unset or zero limit through
    /// [`PageRequest::effective_limit`] and never mutate caller state.
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> CatalogFuture<'a, Result<CatalogPage, FetchError>>;
}

/// Fetches `page` with an optional `limit` through any [`CatalogService`].
///
/// # Errors
///
/// Returns the service's [`FetchError`] unchanged.
pub async fn fetch_catalog_page_with<S: CatalogService + ?Sized>(
    service: &S,
    page: u32,
    limit: Option<u32>,
) -> Result<CatalogPage, FetchError> {
    let request = PageRequest::new(page, limit);
    service.fetch_page(&request).await
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op catalog service for targets without an HTTP transport.
pub struct NoopCatalogService;

impl CatalogService for NoopCatalogService {
    fn fetch_page<'a>(
        &'a self,
        _request: &'a PageRequest,
    ) -> CatalogFuture<'a, Result<CatalogPage, FetchError>> {
        Box::pin(async { Err(FetchError::Unavailable) })
    }
}

#[derive(Debug, Default)]
struct MemoryCatalog {
    records: Vec<CatalogRecord>,
    failing_pages: BTreeSet<u32>,
    requests: Vec<PageRequest>,
}

#[derive(Debug, Clone, Default)]
/// In-memory catalog that paginates a fixed dataset the way the upstream API does.
///
/// Every request is recorded so callers can assert on issued fetches. Clones share state.
pub struct MemoryCatalogService {
    inner: Rc<RefCell<MemoryCatalog>>,
}

impl MemoryCatalogService {
    /// Creates a catalog over `records` in the given order.
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryCatalog {
                records,
                ..MemoryCatalog::default()
            })),
        }
    }

    /// Creates a catalog of `count` synthetic artworks with ids `1..=count`.
    pub fn sample(count: u64) -> Self {
        let records = (1..=count)
            .map(|id| CatalogRecord {
                id,
                title: Some(format!("Untitled Study No. {id}")),
                place_of_origin: Some(if id % 2 == 0 { "France" } else { "Japan" }.to_string()),
                artist_display: Some(format!("Workshop {}", id % 7 + 1)),
                inscriptions: (id % 3 == 0).then(|| "signed lower right".to_string()),
                date_start: Some(1800 + id as i64),
                date_end: Some(1805 + id as i64),
            })
            .collect();
        Self::new(records)
    }

    /// Makes every later request for `page` fail with a `503` status.
    pub fn fail_page(&self, page: u32) {
        self.inner.borrow_mut().failing_pages.insert(page);
    }

    /// Removes a failure previously injected with [`Self::fail_page`].
    pub fn recover_page(&self, page: u32) {
        self.inner.borrow_mut().failing_pages.remove(&page);
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.inner.borrow().requests.clone()
    }

    fn paginate(&self, request: &PageRequest) -> Result<CatalogPage, FetchError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(*request);
        if inner.failing_pages.contains(&request.page) {
            return Err(FetchError::Status { status: 503 });
        }

        let limit = request.effective_limit();
        let total = inner.records.len() as u64;
        let offset = u64::from(limit) * u64::from(request.page.saturating_sub(1));
        let total_pages = total.div_ceil(u64::from(limit)) as u32;
        let records = inner
            .records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        let link = |page: u32| format!("memory://artworks?page={page}&limit={limit}");

        Ok(CatalogPage {
            records,
            pagination: PageMetadata {
                total,
                limit,
                offset,
                total_pages,
                current_page: request.page,
                prev_url: (request.page > 1).then(|| link(request.page - 1)),
                next_url: (request.page < total_pages).then(|| link(request.page + 1)),
            },
        })
    }
}

impl CatalogService for MemoryCatalogService {
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> CatalogFuture<'a, Result<CatalogPage, FetchError>> {
        Box::pin(async move { self.paginate(request) })
    }
}
