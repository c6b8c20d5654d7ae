//! Wire-format type definitions for the Strata content management API.
//!
//! This crate defines the typed representations of API resources exchanged
//! with the management endpoints:
//! - The `Sys` metadata block and resource links
//! - Locale-keyed field containers
//! - The paginated collection envelope
//! - Per-resource entities (spaces, assets, entries, content types, roles,
//!   space memberships)
//!
//! Everything here is plain data: all HTTP behavior lives in
//! `strata-client`.

mod asset;
mod collection;
mod content_type;
mod entry;
mod locale;
mod membership;
mod role;
mod space;
mod sys;

pub use asset::{Asset, AssetFields, FileDetails, FileInfo, ImageDetails};
pub use collection::Collection;
pub use content_type::{ContentType, FieldDefinition};
pub use entry::Entry;
pub use locale::LocaleItem;
pub use membership::SpaceMembership;
pub use role::{Policy, Role};
pub use space::Space;
pub use sys::{Link, Resource, Sys};
