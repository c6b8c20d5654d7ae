//! Content type operations.

use crate::{Client, Pages, Result};
use reqwest::Method;
use strata_types::ContentType;

/// Operations on the content types of a space.
pub struct ContentTypesService<'a> {
    client: &'a Client,
}

impl<'a> ContentTypesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn collection_path(space_id: &str) -> String {
        format!("/spaces/{space_id}/content_types")
    }

    fn item_path(space_id: &str, id: &str) -> String {
        format!("/spaces/{space_id}/content_types/{id}")
    }

    /// Lazily pages through every content type in the space.
    pub fn list(&self, space_id: &str) -> Pages<'a, ContentType> {
        Pages::new(self.client, Self::collection_path(space_id))
    }

    /// Pages through the published view of the space's content types.
    pub fn list_published(&self, space_id: &str) -> Pages<'a, ContentType> {
        Pages::new(self.client, format!("/spaces/{space_id}/public/content_types"))
    }

    /// Fetches one content type by id. Any non-2xx status is an error.
    pub async fn get(&self, space_id: &str, id: &str) -> Result<ContentType> {
        self.client.get_json(&Self::item_path(space_id, id), &[]).await
    }

    /// Creates or updates the content type, overwriting it with the
    /// server's response on success.
    pub async fn upsert(&self, space_id: &str, content_type: &mut ContentType) -> Result<()> {
        self.client
            .upsert(&Self::collection_path(space_id), content_type)
            .await
    }

    /// Deletes one content type by id. The server rejects the call while
    /// entries of this type still exist; no client-side check is made.
    pub async fn delete(&self, space_id: &str, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(space_id, id)).await
    }

    /// Publishes the content type, making it available for entry creation.
    pub async fn publish(&self, space_id: &str, content_type: &mut ContentType) -> Result<()> {
        self.client
            .lifecycle(
                Method::PUT,
                &Self::collection_path(space_id),
                "published",
                content_type,
            )
            .await
    }

    pub async fn unpublish(&self, space_id: &str, content_type: &mut ContentType) -> Result<()> {
        self.client
            .lifecycle(
                Method::DELETE,
                &Self::collection_path(space_id),
                "published",
                content_type,
            )
            .await
    }
}
