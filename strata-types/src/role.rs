//! Roles and their access policies.

use crate::{Resource, Sys};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A role granting a set of policies and permissions within a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<Policy>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub permissions: BTreeMap<String, Value>,
}

/// One allow/deny rule of a role.
///
/// `actions` is either the string `"all"` or an array of action names, and
/// `constraint` is a server-defined filter tree, so both stay as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub effect: String,
    #[serde(default)]
    pub actions: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub constraint: Value,
}

impl Resource for Role {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
