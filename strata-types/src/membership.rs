//! Space memberships.

use crate::{Link, Resource, Sys};
use serde::{Deserialize, Serialize};

/// A user's membership in a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub admin: bool,
    /// Invitation address. Only honored by the server on create.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Link>,
}

impl Resource for SpaceMembership {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
