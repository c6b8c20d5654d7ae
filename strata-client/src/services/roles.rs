//! Role operations.

use crate::{Client, Pages, Result};
use strata_types::Role;

/// Operations on the roles of a space.
pub struct RolesService<'a> {
    client: &'a Client,
}

impl<'a> RolesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn collection_path(space_id: &str) -> String {
        format!("/spaces/{space_id}/roles")
    }

    fn item_path(space_id: &str, id: &str) -> String {
        format!("/spaces/{space_id}/roles/{id}")
    }

    /// Lazily pages through every role in the space.
    pub fn list(&self, space_id: &str) -> Pages<'a, Role> {
        Pages::new(self.client, Self::collection_path(space_id))
    }

    /// Fetches one role by id. Any non-2xx status is an error.
    pub async fn get(&self, space_id: &str, id: &str) -> Result<Role> {
        self.client.get_json(&Self::item_path(space_id, id), &[]).await
    }

    /// Creates or updates the role, overwriting it with the server's
    /// response on success.
    pub async fn upsert(&self, space_id: &str, role: &mut Role) -> Result<()> {
        self.client.upsert(&Self::collection_path(space_id), role).await
    }

    /// Deletes one role by id.
    pub async fn delete(&self, space_id: &str, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(space_id, id)).await
    }
}
