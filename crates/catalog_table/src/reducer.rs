//! Reducer actions, side-effect intents, and transition logic for the catalog table.

use std::time::Duration;

use catalog_host::{CatalogConfig, CatalogPage, FetchError, PageMetadata, PageRequest};
use thiserror::Error;

use crate::{
    bulk_selector::{
        over_limit_message, parse_bulk_count, plan_bulk_selection, BulkSelectionPlan,
        NEGATIVE_COUNT_MESSAGE,
    },
    model::{BulkSelectorState, Notice, RequestId, TableState},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_table`].
pub enum TableAction {
    /// Request one page of records from the catalog service.
    LoadPage {
        /// One-based page number.
        page: u32,
    },
    /// Request the most recently requested page again.
    RetryLastPage,
    /// Deliver the outcome of a page request.
    PageLoaded {
        /// Id issued when the request was emitted.
        request_id: RequestId,
        /// Fetched page or transport failure.
        result: Result<CatalogPage, FetchError>,
    },
    /// Flip selection of one displayed row.
    ToggleRowSelection {
        /// Record backing the row.
        record_id: u64,
    },
    /// Header checkbox: select or deselect every displayed row.
    SetPageSelection {
        /// Target state for the displayed rows.
        selected: bool,
    },
    /// Raw text typed into the bulk selector input.
    BulkInputChanged {
        /// Unparsed input value.
        raw: String,
    },
    /// The bulk selector debounce timer fired.
    BulkDebounceElapsed {
        /// Generation the timer was armed for.
        generation: u64,
    },
    /// Deliver the outcome of a bulk selection request.
    BulkSelectionLoaded {
        /// Id issued when the request was emitted.
        request_id: RequestId,
        /// Fetched records or transport failure.
        result: Result<CatalogPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_table`] for the host to execute.
pub enum TableEffect {
    /// Fetch a page and answer with [`TableAction::PageLoaded`].
    FetchPage {
        /// Id to echo back.
        request_id: RequestId,
        /// Page request to send.
        request: PageRequest,
    },
    /// Cancel any armed debounce timer and arm a new one that answers with
    /// [`TableAction::BulkDebounceElapsed`].
    ScheduleBulkDebounce {
        /// Generation to echo back.
        generation: u64,
        /// Quiet period before firing.
        delay: Duration,
    },
    /// Fetch the bulk selection and answer with [`TableAction::BulkSelectionLoaded`].
    FetchBulkSelection {
        /// Id to echo back.
        request_id: RequestId,
        /// Page-1 request sized to the wanted count.
        request: PageRequest,
    },
    /// Show a transient notification.
    Notify(Notice),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum TableReducerError {
    /// Pages are one-based.
    #[error("page {page} is not a valid page number")]
    InvalidPage {
        /// Rejected page number.
        page: u32,
    },
    /// The record is not on the displayed page.
    #[error("record {record_id} is not displayed")]
    RecordNotFound {
        /// Missing record id.
        record_id: u64,
    },
    /// No page has been requested yet.
    #[error("no page request to retry")]
    NothingToRetry,
    /// A newer request superseded this response.
    #[error("discarded stale response for request {}", request_id.0)]
    StaleResponse {
        /// Id of the superseded request.
        request_id: RequestId,
    },
    /// A newer keystroke re-armed the debounce timer.
    #[error("ignored stale debounce generation {generation}")]
    StaleDebounce {
        /// Superseded generation.
        generation: u64,
    },
}

impl TableReducerError {
    /// True for superseded responses and timers, which are expected under normal use.
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::StaleResponse { .. } | Self::StaleDebounce { .. }
        )
    }
}

/// Applies a [`TableAction`] to the table and bulk selector state and collects side effects.
///
/// # Errors
///
/// Returns [`TableReducerError`] when the action does not apply. State is left untouched in that
/// case.
pub fn reduce_table(
    state: &mut TableState,
    bulk: &mut BulkSelectorState,
    config: &CatalogConfig,
    action: TableAction,
) -> Result<Vec<TableEffect>, TableReducerError> {
    let mut effects = Vec::new();
    match action {
        TableAction::LoadPage { page } => {
            if page == 0 {
                return Err(TableReducerError::InvalidPage { page });
            }
            effects.push(begin_page_load(state, config, page));
        }
        TableAction::RetryLastPage => {
            let page = state
                .requested_page
                .ok_or(TableReducerError::NothingToRetry)?;
            effects.push(begin_page_load(state, config, page));
        }
        TableAction::PageLoaded { request_id, result } => {
            if !state.page_requests.is_latest(request_id) {
                return Err(TableReducerError::StaleResponse { request_id });
            }
            match result {
                Ok(page) => {
                    state.records = page.records;
                    state.pagination = Some(page.pagination);
                    state.error = None;
                }
                Err(err) => {
                    state.error = Some(err.user_message());
                    state.records.clear();
                    state.pagination = Some(PageMetadata::zeroed());
                }
            }
            state.loading = false;
        }
        TableAction::ToggleRowSelection { record_id } => {
            let record = state
                .find_record(record_id)
                .cloned()
                .ok_or(TableReducerError::RecordNotFound { record_id })?;
            state.selection.toggle(&record);
            bulk.requests.invalidate();
        }
        TableAction::SetPageSelection { selected } => {
            let page = state.records.clone();
            state.selection.set_many(&page, selected);
            bulk.requests.invalidate();
        }
        TableAction::BulkInputChanged { raw } => {
            let count = parse_bulk_count(&raw);
            bulk.input = raw;
            if count < 0 {
                effects.push(TableEffect::Notify(Notice::error(NEGATIVE_COUNT_MESSAGE)));
                return Ok(effects);
            }
            bulk.debounce_generation += 1;
            bulk.pending_count = Some(count);
            effects.push(TableEffect::ScheduleBulkDebounce {
                generation: bulk.debounce_generation,
                delay: config.bulk_debounce(),
            });
        }
        TableAction::BulkDebounceElapsed { generation } => {
            if generation != bulk.debounce_generation {
                return Err(TableReducerError::StaleDebounce { generation });
            }
            let Some(count) = bulk.pending_count.take() else {
                return Err(TableReducerError::StaleDebounce { generation });
            };
            match plan_bulk_selection(count, config.max_bulk_selection) {
                BulkSelectionPlan::Reject { max } => {
                    effects.push(TableEffect::Notify(Notice::error(over_limit_message(max))));
                }
                BulkSelectionPlan::Clear => {
                    // A bulk fetch still in flight must not resurrect the cleared selection.
                    bulk.requests.invalidate();
                    state.selection.clear();
                }
                BulkSelectionPlan::Fetch { limit } => {
                    let request_id = bulk.requests.issue();
                    effects.push(TableEffect::FetchBulkSelection {
                        request_id,
                        request: PageRequest::new(1, Some(limit)),
                    });
                }
            }
        }
        TableAction::BulkSelectionLoaded { request_id, result } => {
            if !bulk.requests.is_latest(request_id) {
                return Err(TableReducerError::StaleResponse { request_id });
            }
            match result {
                Ok(page) => state.selection.replace(page.records),
                Err(err) => {
                    state.error = Some(err.user_message());
                    state.selection.replace(Vec::new());
                }
            }
        }
    }
    Ok(effects)
}

fn begin_page_load(state: &mut TableState, config: &CatalogConfig, page: u32) -> TableEffect {
    state.loading = true;
    state.requested_page = Some(page);
    TableEffect::FetchPage {
        request_id: state.page_requests.issue(),
        request: PageRequest::new(page, Some(config.page_size)),
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::{CatalogRecord, GENERIC_FETCH_ERROR_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::TableView;

    fn page_of(ids: std::ops::RangeInclusive<u64>, total: u64, current_page: u32) -> CatalogPage {
        let records: Vec<_> = ids.map(CatalogRecord::new).collect();
        let limit = 12;
        CatalogPage {
            pagination: PageMetadata {
                total,
                limit,
                offset: u64::from(limit) * u64::from(current_page - 1),
                total_pages: 9,
                current_page,
                prev_url: None,
                next_url: None,
            },
            records,
        }
    }

    fn reduce(
        state: &mut TableState,
        bulk: &mut BulkSelectorState,
        action: TableAction,
    ) -> Result<Vec<TableEffect>, TableReducerError> {
        reduce_table(state, bulk, &CatalogConfig::default(), action)
    }

    fn load(state: &mut TableState, bulk: &mut BulkSelectorState, page: u32) -> RequestId {
        let effects = reduce(state, bulk, TableAction::LoadPage { page }).expect("load page");
        match effects.as_slice() {
            [TableEffect::FetchPage { request_id, .. }] => *request_id,
            other => panic!("unexpected effects {other:?}"),
        }
    }

    fn loaded_state() -> (TableState, BulkSelectorState) {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        let request_id = load(&mut state, &mut bulk, 1);
        reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id,
                result: Ok(page_of(1..=12, 100, 1)),
            },
        )
        .expect("page loaded");
        (state, bulk)
    }

    #[test]
    fn load_page_enters_loading_and_requests_configured_page_size() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();

        let effects = reduce(&mut state, &mut bulk, TableAction::LoadPage { page: 3 })
            .expect("load page");

        assert!(state.loading);
        assert_eq!(state.requested_page, Some(3));
        assert_eq!(
            effects,
            vec![TableEffect::FetchPage {
                request_id: RequestId(1),
                request: PageRequest::new(3, Some(12)),
            }]
        );
    }

    #[test]
    fn page_zero_is_rejected_without_state_change() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        let before = state.clone();

        let err = reduce(&mut state, &mut bulk, TableAction::LoadPage { page: 0 })
            .expect_err("page zero");

        assert_eq!(err, TableReducerError::InvalidPage { page: 0 });
        assert_eq!(state, before);
    }

    #[test]
    fn successful_load_replaces_records_and_clears_error() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        state.error = Some("old".to_string());
        let request_id = load(&mut state, &mut bulk, 1);

        reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id,
                result: Ok(page_of(1..=12, 100, 1)),
            },
        )
        .expect("loaded");

        assert_eq!(state.view(), TableView::Ready);
        assert_eq!(state.records.len(), 12);
        assert_eq!(state.pagination.as_ref().map(|p| p.total), Some(100));
    }

    #[test]
    fn failed_load_zeroes_table_and_shows_generic_message() {
        let (mut state, mut bulk) = loaded_state();
        let request_id = load(&mut state, &mut bulk, 3);

        reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id,
                result: Err(FetchError::Status { status: 500 }),
            },
        )
        .expect("failure recorded");

        assert_eq!(
            state.view(),
            TableView::Error(GENERIC_FETCH_ERROR_MESSAGE.to_string())
        );
        assert!(state.records.is_empty());
        assert_eq!(state.pagination, Some(PageMetadata::zeroed()));
    }

    #[test]
    fn stale_page_response_never_overwrites_newer_page() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        let older = load(&mut state, &mut bulk, 2);
        let newer = load(&mut state, &mut bulk, 3);

        reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id: newer,
                result: Ok(page_of(25..=36, 100, 3)),
            },
        )
        .expect("newer page");
        let err = reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id: older,
                result: Ok(page_of(13..=24, 100, 2)),
            },
        )
        .expect_err("older page discarded");

        assert!(err.is_stale());
        assert_eq!(state.records[0].id, 25);
        assert_eq!(state.pagination.as_ref().map(|p| p.current_page), Some(3));
    }

    #[test]
    fn retry_reissues_last_requested_page() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        assert_eq!(
            reduce(&mut state, &mut bulk, TableAction::RetryLastPage),
            Err(TableReducerError::NothingToRetry)
        );

        load(&mut state, &mut bulk, 4);
        let effects = reduce(&mut state, &mut bulk, TableAction::RetryLastPage).expect("retry");

        assert_eq!(
            effects,
            vec![TableEffect::FetchPage {
                request_id: RequestId(2),
                request: PageRequest::new(4, Some(12)),
            }]
        );
    }

    #[test]
    fn row_and_header_selection_survive_page_changes() {
        let (mut state, mut bulk) = loaded_state();

        reduce(
            &mut state,
            &mut bulk,
            TableAction::ToggleRowSelection { record_id: 4 },
        )
        .expect("toggle");
        assert_eq!(
            reduce(
                &mut state,
                &mut bulk,
                TableAction::ToggleRowSelection { record_id: 400 },
            ),
            Err(TableReducerError::RecordNotFound { record_id: 400 })
        );

        let request_id = load(&mut state, &mut bulk, 2);
        reduce(
            &mut state,
            &mut bulk,
            TableAction::PageLoaded {
                request_id,
                result: Ok(page_of(13..=24, 100, 2)),
            },
        )
        .expect("page two");
        reduce(
            &mut state,
            &mut bulk,
            TableAction::SetPageSelection { selected: true },
        )
        .expect("select page");

        assert_eq!(state.selection.len(), 13);
        assert!(state.selection.contains(4));
        assert!(state.page_fully_selected());
    }

    #[test]
    fn negative_input_notifies_immediately_and_keeps_pending_timer() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "7".into() },
        )
        .expect("first input");

        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "-3".into() },
        )
        .expect("negative input");

        assert_eq!(
            effects,
            vec![TableEffect::Notify(Notice::error("Input can not be negative"))]
        );
        assert_eq!(bulk.debounce_generation, 1);
        assert_eq!(bulk.pending_count, Some(7));
        assert_eq!(bulk.input, "-3");
    }

    #[test]
    fn only_the_latest_debounce_generation_fires() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        for raw in ["1", "12", "5"] {
            reduce(
                &mut state,
                &mut bulk,
                TableAction::BulkInputChanged { raw: raw.into() },
            )
            .expect("input");
        }

        let err = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 2 },
        )
        .expect_err("stale generation");
        assert!(err.is_stale());

        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 3 },
        )
        .expect("latest generation");
        assert_eq!(
            effects,
            vec![TableEffect::FetchBulkSelection {
                request_id: RequestId(1),
                request: PageRequest::new(1, Some(5)),
            }]
        );
    }

    #[test]
    fn over_limit_count_notifies_after_debounce_without_fetching() {
        let mut state = TableState::default();
        let mut bulk = BulkSelectorState::default();
        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "101".into() },
        )
        .expect("input");
        assert_eq!(
            effects,
            vec![TableEffect::ScheduleBulkDebounce {
                generation: 1,
                delay: Duration::from_millis(500),
            }]
        );

        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 1 },
        )
        .expect("elapsed");
        assert_eq!(
            effects,
            vec![TableEffect::Notify(Notice::error(
                "Can not select more than 100 records at once"
            ))]
        );
    }

    #[test]
    fn zero_count_clears_selection_to_unset() {
        let (mut state, mut bulk) = loaded_state();
        reduce(
            &mut state,
            &mut bulk,
            TableAction::SetPageSelection { selected: true },
        )
        .expect("select page");

        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "".into() },
        )
        .expect("input");
        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 1 },
        )
        .expect("elapsed");

        assert!(effects.is_empty());
        assert!(!state.selection.is_explicit());
    }

    #[test]
    fn clearing_supersedes_a_bulk_fetch_still_in_flight() {
        let (mut state, mut bulk) = loaded_state();
        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "5".into() },
        )
        .expect("input five");
        let effects = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 1 },
        )
        .expect("fire five");
        let in_flight = match effects.as_slice() {
            [TableEffect::FetchBulkSelection { request_id, .. }] => *request_id,
            other => panic!("unexpected effects {other:?}"),
        };

        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkInputChanged { raw: "0".into() },
        )
        .expect("input zero");
        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkDebounceElapsed { generation: 2 },
        )
        .expect("fire zero");

        let err = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkSelectionLoaded {
                request_id: in_flight,
                result: Ok(page_of(1..=5, 100, 1)),
            },
        )
        .expect_err("late bulk response");

        assert!(err.is_stale());
        assert!(!state.selection.is_explicit());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn manual_selection_supersedes_a_bulk_fetch_still_in_flight() {
        let (mut state, mut bulk) = loaded_state();
        let in_flight = bulk.requests.issue();

        reduce(
            &mut state,
            &mut bulk,
            TableAction::ToggleRowSelection { record_id: 9 },
        )
        .expect("toggle");
        let err = reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkSelectionLoaded {
                request_id: in_flight,
                result: Ok(page_of(1..=5, 100, 1)),
            },
        )
        .expect_err("late bulk response");

        assert!(err.is_stale());
        assert_eq!(state.selection.ids(), vec![9]);
    }

    #[test]
    fn bulk_results_replace_selection_and_failures_empty_it() {
        let (mut state, mut bulk) = loaded_state();
        let first = bulk.requests.issue();
        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkSelectionLoaded {
                request_id: first,
                result: Ok(page_of(1..=5, 100, 1)),
            },
        )
        .expect("bulk loaded");
        assert_eq!(state.selection.ids(), vec![1, 2, 3, 4, 5]);

        let second = bulk.requests.issue();
        reduce(
            &mut state,
            &mut bulk,
            TableAction::BulkSelectionLoaded {
                request_id: second,
                result: Err(FetchError::Unavailable),
            },
        )
        .expect("bulk failure");

        assert!(state.selection.is_explicit());
        assert!(state.selection.is_empty());
        assert_eq!(
            state.view(),
            TableView::Error(GENERIC_FETCH_ERROR_MESSAGE.to_string())
        );
        assert_eq!(
            reduce(
                &mut state,
                &mut bulk,
                TableAction::BulkSelectionLoaded {
                    request_id: first,
                    result: Ok(page_of(1..=3, 100, 1)),
                },
            ),
            Err(TableReducerError::StaleResponse { request_id: first })
        );
    }
}
