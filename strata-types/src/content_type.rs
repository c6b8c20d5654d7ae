//! Content type definitions.

use crate::{Resource, Sys};
use serde::{Deserialize, Serialize};

/// Schema for a kind of entry: its name and field definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field shown as the entry title in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One field of a content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub localized: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub omitted: bool,
}

impl Resource for ContentType {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
