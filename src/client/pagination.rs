//! Pagination helpers for list endpoints
//!
//! List calls return one page plus a `meta` block. Walking the pages is the
//! caller's job; [`paginate`] packages that loop as a stream.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Response metadata for a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Page size the server applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Cursor for the next page; empty or absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,

    /// Sort order the server applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl Meta {
    /// The next cursor, if there is another page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// A page of `T` with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    #[serde(default)]
    pub meta: Meta,
}

/// A page that can point at the next one.
pub trait CursorPage {
    type Item;

    /// Cursor for the following page, `None` when this is the last.
    fn next_cursor(&self) -> Option<&str>;

    /// Consume the page into its items.
    fn into_items(self) -> Vec<Self::Item>;
}

impl<T> CursorPage for Collection<T> {
    type Item = T;

    fn next_cursor(&self) -> Option<&str> {
        self.meta.next_cursor()
    }

    fn into_items(self) -> Vec<T> {
        self.data
    }
}

/// Follow cursors from the first page until one comes back empty.
///
/// `fetch` receives `None` for the first page and the previous page's cursor
/// afterwards. Items are yielded in server order. A cursor that repeats the
/// one just used ends the stream rather than looping.
///
/// # Example
/// ```ignore
/// let all: Vec<Domain> = paginate(|cursor| {
///     let input = ListDomainsInput { cursor, limit: Some(100), ..Default::default() };
///     let client = client.clone();
///     async move { domain::list(&client, &input).await }
/// })
/// .try_collect()
/// .await?;
/// ```
pub fn paginate<P, F, Fut>(fetch: F) -> impl Stream<Item = Result<P::Item>>
where
    P: CursorPage,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    // State: (fetcher, cursor to request, finished)
    stream::try_unfold(
        (fetch, None::<String>, false),
        |(mut fetch, cursor, done)| async move {
            if done {
                return Ok::<_, Error>(None);
            }

            debug!("Fetching page (cursor={:?})", cursor);
            let page = fetch(cursor.clone()).await?;

            let next = page.next_cursor().map(str::to_string);
            let finished = match (&next, &cursor) {
                (None, _) => true,
                (Some(n), Some(c)) if n == c => {
                    warn!("Server returned the same cursor twice; stopping");
                    true
                }
                _ => false,
            };

            let items = page.into_items();
            debug!("Page returned {} items", items.len());
            Ok::<_, Error>(Some((items, (fetch, next, finished))))
        },
    )
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, Error>)))
    .try_flatten()
}
