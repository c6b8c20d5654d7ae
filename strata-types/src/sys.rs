//! System metadata attached to every API resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `sys` metadata block present on every resource.
///
/// A resource constructed client-side carries no id yet; the server assigns
/// id and version on create. The last-known version must be echoed on every
/// update for optimistic concurrency, or the server rejects the write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sys {
    /// Server-assigned identifier. Empty until the resource is created.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Resource type name ("Space", "Asset", "Entry", "Link", ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Target resource type, set on link sys blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,

    /// Last server-reported version, echoed in the concurrency header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Link>,

    /// Owning content type, present on entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sys {
    /// Builds the sys block of a link pointing at another resource.
    pub fn link(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some("Link".to_string()),
            link_type: Some(link_type.into()),
            ..Default::default()
        }
    }
}

/// A reference to another resource, serialized as `{"sys": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub sys: Box<Sys>,
}

impl Link {
    /// Creates a link to the resource with the given type and id.
    pub fn new(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            sys: Box::new(Sys::link(link_type, id)),
        }
    }

    /// Id of the linked resource.
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// Uniform access to the metadata block of an entity.
///
/// The client uses this for upsert dispatch (create vs. update) and for
/// lifecycle preconditions without knowing the concrete resource type.
pub trait Resource {
    fn sys(&self) -> Option<&Sys>;
    fn sys_mut(&mut self) -> &mut Option<Sys>;

    /// Server-assigned id, or `None` when the entity was never created.
    fn id(&self) -> Option<&str> {
        self.sys()
            .map(|sys| sys.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Last-known server version, if any.
    fn version(&self) -> Option<u64> {
        self.sys().and_then(|sys| sys.version)
    }
}
