//! Asset operations.

use crate::{Client, Error, Pages, Result};
use reqwest::Method;
use strata_types::{Asset, Resource};

/// Operations on the assets of a space.
pub struct AssetsService<'a> {
    client: &'a Client,
}

impl<'a> AssetsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn collection_path(space_id: &str) -> String {
        format!("/spaces/{space_id}/assets")
    }

    fn item_path(space_id: &str, id: &str) -> String {
        format!("/spaces/{space_id}/assets/{id}")
    }

    /// Lazily pages through every asset in the space.
    pub fn list(&self, space_id: &str) -> Pages<'a, Asset> {
        Pages::new(self.client, Self::collection_path(space_id))
    }

    /// Pages through the published view of the space's assets.
    pub fn list_published(&self, space_id: &str) -> Pages<'a, Asset> {
        Pages::new(self.client, format!("/spaces/{space_id}/public/assets"))
    }

    /// Fetches one asset by id. Any non-2xx status is an error.
    pub async fn get(&self, space_id: &str, id: &str) -> Result<Asset> {
        self.client.get_json(&Self::item_path(space_id, id), &[]).await
    }

    /// Creates the asset when it has no id yet, updates it otherwise.
    /// On success the asset is overwritten with the server's response.
    pub async fn upsert(&self, space_id: &str, asset: &mut Asset) -> Result<()> {
        self.client.upsert(&Self::collection_path(space_id), asset).await
    }

    /// Deletes one asset by id.
    pub async fn delete(&self, space_id: &str, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(space_id, id)).await
    }

    /// Tells the server to process the uploaded file for one locale.
    ///
    /// The processed file metadata (CDN URL, size, dimensions) appears on
    /// the asset once the server is done; a 204 response leaves the local
    /// value untouched.
    pub async fn process(&self, space_id: &str, asset: &mut Asset, locale: &str) -> Result<()> {
        let id = asset.id().ok_or(Error::MissingId)?.to_string();
        let path = format!("{}/files/{locale}/process", Self::item_path(space_id, &id));
        self.client.transition(Method::PUT, &path, asset).await
    }

    pub async fn publish(&self, space_id: &str, asset: &mut Asset) -> Result<()> {
        self.client
            .lifecycle(Method::PUT, &Self::collection_path(space_id), "published", asset)
            .await
    }

    pub async fn unpublish(&self, space_id: &str, asset: &mut Asset) -> Result<()> {
        self.client
            .lifecycle(Method::DELETE, &Self::collection_path(space_id), "published", asset)
            .await
    }

    pub async fn archive(&self, space_id: &str, asset: &mut Asset) -> Result<()> {
        self.client
            .lifecycle(Method::PUT, &Self::collection_path(space_id), "archived", asset)
            .await
    }

    pub async fn unarchive(&self, space_id: &str, asset: &mut Asset) -> Result<()> {
        self.client
            .lifecycle(Method::DELETE, &Self::collection_path(space_id), "archived", asset)
            .await
    }
}
