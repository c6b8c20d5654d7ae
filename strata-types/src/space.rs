//! Spaces: top-level content containers.

use crate::{Resource, Sys};
use serde::{Deserialize, Serialize};

/// A top-level content container, analogous to a project or tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

impl Resource for Space {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
