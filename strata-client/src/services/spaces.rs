//! Space operations.

use crate::{Client, Pages, Result};
use strata_types::Space;

/// Operations on spaces themselves.
pub struct SpacesService<'a> {
    client: &'a Client,
}

impl<'a> SpacesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn item_path(id: &str) -> String {
        format!("/spaces/{id}")
    }

    /// Lazily pages through every space the token can see.
    pub fn list(&self) -> Pages<'a, Space> {
        Pages::new(self.client, "/spaces".to_string())
    }

    /// Fetches one space by id. Any non-2xx status is an error.
    pub async fn get(&self, id: &str) -> Result<Space> {
        self.client.get_json(&Self::item_path(id), &[]).await
    }

    /// Creates or updates the space, overwriting it with the server's
    /// response on success.
    pub async fn upsert(&self, space: &mut Space) -> Result<()> {
        self.client.upsert("/spaces", space).await
    }

    /// Deletes one space by id, along with everything in it server-side.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(id)).await
    }
}
