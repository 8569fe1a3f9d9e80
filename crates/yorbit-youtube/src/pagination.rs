//! Generic cursor-based pagination over YouTube list endpoints.
//!
//! YouTube list endpoints return a `nextPageToken` while more results exist;
//! its absence signals exhaustion. [`collect_all_pages`] drives any page
//! fetcher through that protocol so the loop is written once rather than
//! re-derived per endpoint.

use std::future::Future;

/// One page of items plus the cursor for the next page, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// An exhausted page with no items — used when a rejection is absorbed
    /// into an empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

/// Collects every item from a paginated listing, in fetch order.
///
/// Calls `fetch_page` with `None` for the first page, then repeatedly with
/// the previous page's token until a page carries no token. Requests are
/// strictly sequential; items are concatenated in request order without
/// reordering or deduplication. Exhaustion is the only termination
/// condition — there is no page cap or time budget at this layer.
///
/// # Errors
///
/// Propagates the first error returned by `fetch_page`, aborting the run.
pub async fn collect_all_pages<T, E, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut all: Vec<T> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor).await?;
        all.extend(page.items);

        match page.next_page_token {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    Ok(all)
}
