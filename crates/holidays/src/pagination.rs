//! Window computation for paged collections.
//!
//! Two variants share one contract: [`slice_window`] pages a
//! materialized list, [`count_window`] computes bounds for a
//! store-resident collection the caller then fetches. In both, the
//! window for `(limit, page)` is `[limit * (page - 1), limit * page)`.

use serde::{Deserialize, Serialize};

use feriado_core::{ServiceError, ServiceResult};

/// Validated paging input. `limit` and `page` are both at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    page: u32,
}

impl PageRequest {
    /// Validate caller-supplied paging values.
    ///
    /// Out-of-range values are rejected up front instead of yielding a
    /// degenerate empty window.
    pub fn new(limit: u32, page: u32) -> ServiceResult<Self> {
        if limit < 1 {
            return Err(ServiceError::validation("limit must be at least 1"));
        }
        if page < 1 {
            return Err(ServiceError::validation("page must be at least 1"));
        }

        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    fn start(&self) -> usize {
        self.limit as usize * (self.page as usize - 1)
    }

    fn end(&self) -> usize {
        self.limit as usize * self.page as usize
    }

    fn next(&self) -> PageRef {
        PageRef {
            page: self.page + 1,
            limit: self.limit,
        }
    }

    fn prev(&self) -> PageRef {
        PageRef {
            page: self.page - 1,
            limit: self.limit,
        }
    }
}

/// Descriptor of an adjacent page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

/// One computed window: the current slice plus adjacent-page descriptors.
///
/// `next` is present iff the window's end index lies before the end of
/// the collection; `prev` iff its start index lies after the beginning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationWindow<T> {
    pub current: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

/// Page a materialized, ordered list.
///
/// A window past the end of `items` yields an empty `current` (with
/// `prev` still present when applicable).
pub fn slice_window<T: Clone>(items: &[T], request: PageRequest) -> PaginationWindow<T> {
    let total = items.len();
    let start = request.start();
    let end = request.end();

    PaginationWindow {
        current: items[start.min(total)..end.min(total)].to_vec(),
        next: (end < total).then(|| request.next()),
        prev: (start > 0).then(|| request.prev()),
    }
}

/// Window bounds for a store-resident collection.
///
/// The caller fetches exactly `limit` records from `offset`; the whole
/// collection is never materialized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowBounds {
    pub offset: usize,
    pub limit: usize,
    pub next: Option<PageRef>,
    pub prev: Option<PageRef>,
}

/// Compute window bounds from a record count.
///
/// An empty collection has neither `next` nor `prev`, whatever the page.
pub fn count_window(total: usize, request: PageRequest) -> WindowBounds {
    let start = request.start();
    let end = request.end();

    WindowBounds {
        offset: start,
        limit: request.limit as usize,
        next: (end < total && total != 0).then(|| request.next()),
        prev: (start > 0 && total != 0).then(|| request.prev()),
    }
}
