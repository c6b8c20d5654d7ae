//! Space membership operations.

use crate::{Client, Pages, Result};
use strata_types::SpaceMembership;

/// Operations on the memberships of a space.
pub struct MembershipsService<'a> {
    client: &'a Client,
}

impl<'a> MembershipsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn collection_path(space_id: &str) -> String {
        format!("/spaces/{space_id}/space_memberships")
    }

    fn item_path(space_id: &str, id: &str) -> String {
        format!("/spaces/{space_id}/space_memberships/{id}")
    }

    /// Lazily pages through every membership of the space.
    pub fn list(&self, space_id: &str) -> Pages<'a, SpaceMembership> {
        Pages::new(self.client, Self::collection_path(space_id))
    }

    /// Fetches one membership by id. Any non-2xx status is an error.
    pub async fn get(&self, space_id: &str, id: &str) -> Result<SpaceMembership> {
        self.client.get_json(&Self::item_path(space_id, id), &[]).await
    }

    /// Creates or updates the membership, overwriting it with the server's
    /// response on success. The `email` field is only honored on create.
    pub async fn upsert(&self, space_id: &str, membership: &mut SpaceMembership) -> Result<()> {
        self.client
            .upsert(&Self::collection_path(space_id), membership)
            .await
    }

    /// Deletes one membership by id.
    pub async fn delete(&self, space_id: &str, id: &str) -> Result<()> {
        self.client.delete(&Self::item_path(space_id, id)).await
    }
}
