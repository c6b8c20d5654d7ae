//! Lazy pagination over list endpoints.

use crate::{Client, Result};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use strata_types::Collection;

/// Page size requested when none is set explicitly.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Lazy iterator over the pages of a list endpoint.
///
/// Each [`next`](Pages::next) call performs one GET with the current
/// skip/limit window and advances the offset by the number of items the
/// server actually returned, so repeated calls yield every item exactly
/// once, with no duplicates and no gaps. The iterator holds mutable offset
/// state; calls must be issued sequentially.
pub struct Pages<'a, T> {
    client: &'a Client,
    path: String,
    skip: u64,
    limit: u64,
    total: Option<u64>,
    yielded: u64,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pages<'a, T> {
    pub(crate) fn new(client: &'a Client, path: String) -> Self {
        Self {
            client,
            path,
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
            total: None,
            yielded: 0,
            done: false,
            _marker: PhantomData,
        }
    }

    /// Sets the page size for subsequent fetches.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Fetches the next page, or `Ok(None)` once every item has been
    /// yielded.
    ///
    /// Termination is exact: the iterator finishes when the cumulative
    /// yielded count reaches the server-reported total. An empty page
    /// arriving earlier is also terminal, so a server that misreports its
    /// total cannot make the iterator spin. On error the offset state is
    /// unchanged and the call can simply be retried.
    pub async fn next(&mut self) -> Result<Option<Collection<T>>> {
        if self.done {
            return Ok(None);
        }
        if let Some(total) = self.total {
            if self.yielded >= total {
                self.done = true;
                return Ok(None);
            }
        }

        let query = [
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let page: Collection<T> = self.client.get_json(&self.path, &query).await?;

        let count = page.items.len() as u64;
        self.total = Some(page.total);
        self.skip += count;
        self.yielded += count;
        if count == 0 {
            self.done = true;
        }

        Ok(Some(page))
    }

    /// Drains every remaining page into one vector.
    pub async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next().await? {
            items.extend(page.items);
        }
        Ok(items)
    }
}
