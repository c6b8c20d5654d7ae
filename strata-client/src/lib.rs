//! HTTP client for the Strata content management API.
//!
//! The [`Client`] issues bearer-authenticated JSON requests against the
//! management endpoints and exposes one service per resource kind:
//!
//! ```no_run
//! use strata_client::Client;
//! use strata_types::{Asset, LocaleItem};
//!
//! # async fn run() -> strata_client::Result<()> {
//! let client = Client::with_token("cma-token");
//!
//! let mut asset = Asset::default();
//! asset.fields.title = LocaleItem::single("en-US", "doge".to_string());
//! client.assets().upsert("my-space", &mut asset).await?;
//! client.assets().publish("my-space", &mut asset).await?;
//!
//! let mut pages = client.assets().list("my-space");
//! while let Some(page) = pages.next().await? {
//!     for asset in page.items {
//!         println!("{:?}", asset.sys);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is a single request/response round trip; retries,
//! backoff and rate-limit handling are deliberately left to the caller.

mod client;
mod error;
mod pages;
mod services;
mod upsert;

pub use client::{
    Client, ClientConfig, CONTENT_TYPE_ID_HEADER, MANAGEMENT_CONTENT_TYPE, VERSION_HEADER,
};
pub use error::{ApiErrorBody, Error, Result};
pub use pages::{Pages, DEFAULT_PAGE_LIMIT};
pub use services::{
    AssetsService, ContentTypesService, EntriesService, MembershipsService, RolesService,
    SpacesService,
};
pub use upsert::UpsertAction;
