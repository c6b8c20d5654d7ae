//! Content entries with free-form, locale-keyed fields.

use crate::{LocaleItem, Resource, Sys};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A content entry.
///
/// The field set is defined by the entry's content type, so fields are kept
/// as a field-id → locale → value map rather than a fixed struct. The
/// owning content type is a link in `sys.content_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub fields: BTreeMap<String, LocaleItem<Value>>,
}

impl Entry {
    /// The value of a field for one locale, if set.
    pub fn field(&self, field_id: &str, locale: &str) -> Option<&Value> {
        self.fields.get(field_id)?.get(locale)
    }

    /// Sets the value of a field for one locale.
    pub fn set_field(&mut self, field_id: impl Into<String>, locale: impl Into<String>, value: Value) {
        self.fields
            .entry(field_id.into())
            .or_default()
            .set(locale, value);
    }

    /// Id of the owning content type, read from the sys block.
    pub fn content_type_id(&self) -> Option<&str> {
        let link = self.sys.as_ref()?.content_type.as_ref()?;
        if link.id().is_empty() {
            None
        } else {
            Some(link.id())
        }
    }
}

impl Resource for Entry {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
