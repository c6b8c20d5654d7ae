//! Create-vs-update dispatch.

use strata_types::Sys;

/// How an upsert should be carried out.
///
/// Decided purely from the entity's metadata block, independent of any
/// network call: an entity without a server-assigned id does not exist
/// remotely yet and must be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertAction {
    /// POST to the collection endpoint.
    Create,
    /// PUT to the item endpoint, echoing the last-known version in the
    /// concurrency header.
    Update { id: String, version: u64 },
}

impl UpsertAction {
    /// Plans the action for an entity with the given metadata block.
    ///
    /// A missing version on an already-created entity is sent as 0, letting
    /// the server reject the stale write rather than the client guessing.
    pub fn plan(sys: Option<&Sys>) -> Self {
        match sys {
            Some(sys) if !sys.id.is_empty() => UpsertAction::Update {
                id: sys.id.clone(),
                version: sys.version.unwrap_or(0),
            },
            _ => UpsertAction::Create,
        }
    }
}
