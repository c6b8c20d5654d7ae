//! Paginated list envelope.

use crate::Sys;
use serde::{Deserialize, Serialize};

/// One page of a list endpoint, plus pagination metadata.
///
/// Produced fresh per page fetch and never mutated afterwards. `total` is
/// the server-reported size of the full result set, of which `items` holds
/// the window starting at `skip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
