//! Media assets and their file metadata.

use crate::{LocaleItem, Resource, Sys};
use serde::{Deserialize, Serialize};

/// A media asset: locale-keyed title, description and file reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(default, skip_serializing_if = "LocaleItem::is_empty")]
    pub title: LocaleItem<String>,
    #[serde(default, skip_serializing_if = "LocaleItem::is_empty")]
    pub description: LocaleItem<String>,
    #[serde(default, skip_serializing_if = "LocaleItem::is_empty")]
    pub file: LocaleItem<FileInfo>,
}

/// One locale's file behind an asset.
///
/// `upload` is the source URL the server pulls from when processing;
/// `url` and `details` are computed by the server once processing is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub file_name: String,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, rename = "upload", skip_serializing_if = "String::is_empty")]
    pub upload_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
}

/// Server-computed file metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDetails {
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDetails>,
}

/// Pixel dimensions, present for image files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub width: u32,
    pub height: u32,
}

impl Resource for Asset {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }

    fn sys_mut(&mut self) -> &mut Option<Sys> {
        &mut self.sys
    }
}
