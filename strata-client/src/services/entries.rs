//! Entry operations.

use crate::client::CONTENT_TYPE_ID_HEADER;
use crate::{Client, Error, Pages, Result};
use reqwest::Method;
use strata_types::{Entry, Resource};

/// Operations on the entries of a space.
pub struct EntriesService<'a> {
    client: &'a Client,
}

impl<'a> EntriesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn collection_path(space_id: &str) -> String {
        format!("/spaces/{space_id}/entries")
    }

    fn item_path(space_id: &str, id: &str) -> String {
        format!("/spaces/{space_id}/entries/{id}")
    }

    /// Lazily pages through every entry in the space.
    pub fn list(&self, space_id: &str) -> Pages<'a, Entry> {
        Pages::new(self.client, Self::collection_path(space_id))
    }

    /// Pages through the published view of the space's entries.
    pub fn list_published(&self, space_id: &str) -> Pages<'a, Entry> {
        Pages::new(self.client, format!("/spaces/{space_id}/public/entries"))
    }

    /// Fetches one entry by id. Any non-2xx status is an error.
    pub async fn get(&self, space_id: &str, id: &str) -> Result<Entry> {
        self.client.get_json(&Self::item_path(space_id, id), &[]).await
    }

    /// Creates or updates the entry, overwriting it with the server's
    /// response on success.
    ///
    /// Creation is the one place a content type is mandatory: the owning
    /// content type id is read from `sys.content_type` and sent in the
    /// `X-Strata-Content-Type` header.
    pub async fn upsert(&self, space_id: &str, entry: &mut Entry) -> Result<()> {
        let content_type_id = match entry.id() {
            Some(_) => None,
            None => Some(
                entry
                    .content_type_id()
                    .ok_or(Error::MissingContentType)?
                    .to_string(),
            ),
        };

        self.client
            .upsert_with(&Self::collection_path(space_id), entry, |request| {
                match content_type_id {
                    Some(id) => request.header(CONTENT_TYPE_ID_HEADER, id),
                    None => request,
                }
            })
            .await
    }

    /// Deletes one entry by id.
    pub async fn delete(&self, space_id: &str, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(space_id, id)).await
    }

    pub async fn publish(&self, space_id: &str, entry: &mut Entry) -> Result<()> {
        self.client
            .lifecycle(Method::PUT, &Self::collection_path(space_id), "published", entry)
            .await
    }

    pub async fn unpublish(&self, space_id: &str, entry: &mut Entry) -> Result<()> {
        self.client
            .lifecycle(Method::DELETE, &Self::collection_path(space_id), "published", entry)
            .await
    }

    pub async fn archive(&self, space_id: &str, entry: &mut Entry) -> Result<()> {
        self.client
            .lifecycle(Method::PUT, &Self::collection_path(space_id), "archived", entry)
            .await
    }

    pub async fn unarchive(&self, space_id: &str, entry: &mut Entry) -> Result<()> {
        self.client
            .lifecycle(Method::DELETE, &Self::collection_path(space_id), "archived", entry)
            .await
    }
}
