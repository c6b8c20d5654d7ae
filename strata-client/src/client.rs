//! The management API client and its HTTP plumbing.

use crate::services::{
    AssetsService, ContentTypesService, EntriesService, MembershipsService, RolesService,
    SpacesService,
};
use crate::upsert::UpsertAction;
use crate::{Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strata_types::Resource;
use tracing::{debug, info};

/// Vendor media type sent as `Content-Type` on every request.
pub const MANAGEMENT_CONTENT_TYPE: &str = "application/vnd.strata.management.v1+json";

/// Header carrying the entity's last-known version on updates and
/// lifecycle calls, for optimistic concurrency.
pub const VERSION_HEADER: &str = "X-Strata-Version";

/// Header carrying the owning content type id on entry creation.
pub const CONTENT_TYPE_ID_HEADER: &str = "X-Strata-Content-Type";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token for the management API.
    pub token: String,
    /// Base URL of the API (e.g. `https://api.strata.io`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: "https://api.strata.io".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the content management API.
///
/// Cheap to share: every operation takes `&self` and performs exactly one
/// request/response round trip on the pooled inner HTTP client.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, http }
    }

    /// Creates a client with the given token and default configuration.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(ClientConfig {
            token: token.into(),
            ..Default::default()
        })
    }

    /// Base URL the client is pointed at.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ── Service accessors ───────────────────────────────────────────

    pub fn spaces(&self) -> SpacesService<'_> {
        SpacesService::new(self)
    }

    pub fn assets(&self) -> AssetsService<'_> {
        AssetsService::new(self)
    }

    pub fn entries(&self) -> EntriesService<'_> {
        EntriesService::new(self)
    }

    pub fn content_types(&self) -> ContentTypesService<'_> {
        ContentTypesService::new(self)
    }

    pub fn roles(&self) -> RolesService<'_> {
        RolesService::new(self)
    }

    pub fn memberships(&self) -> MembershipsService<'_> {
        MembershipsService::new(self)
    }

    // ── Request plumbing ────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.config.token)
            .header(reqwest::header::CONTENT_TYPE, MANAGEMENT_CONTENT_TYPE)
    }

    /// Sends the request and maps any non-2xx status to [`Error::Api`],
    /// decoding the structured error body when one is present.
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw_body = response.text().await.unwrap_or_default();
        Err(Error::api(status.as_u16(), &raw_body))
    }

    /// Reads a 2xx response body and decodes it as `T`.
    pub(crate) async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// One GET round trip decoded as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET {path}");
        let response = self.send(self.request(Method::GET, path).query(query)).await?;
        self.decode(response).await
    }

    /// Creates or updates `entity` depending on whether it already carries a
    /// server-assigned id, and overwrites it with the server's response so
    /// the caller sees assigned ids, bumped versions and computed fields
    /// without a second fetch. On failure the entity is left unmodified.
    pub(crate) async fn upsert<T>(&self, collection_path: &str, entity: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Resource,
    {
        self.upsert_with(collection_path, entity, |request| request).await
    }

    /// Upsert with a hook applied to create requests, for resources whose
    /// creation needs extra headers.
    pub(crate) async fn upsert_with<T, F>(
        &self,
        collection_path: &str,
        entity: &mut T,
        on_create: F,
    ) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Resource,
        F: FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    {
        let request = match UpsertAction::plan(entity.sys()) {
            UpsertAction::Create => {
                debug!("POST {collection_path}");
                on_create(self.request(Method::POST, collection_path))
            }
            UpsertAction::Update { id, version } => {
                let path = format!("{collection_path}/{id}");
                debug!("PUT {path}");
                self.request(Method::PUT, &path).header(VERSION_HEADER, version)
            }
        };

        let response = self.send(request.json(entity)).await?;
        *entity = self.decode(response).await?;
        info!("upserted resource at {collection_path}");
        Ok(())
    }

    /// One lifecycle round trip against `{collection}/{id}/{sub}`.
    ///
    /// Requires a server-assigned id and sends the version header. A 2xx
    /// body replaces the entity in place; an empty body (204) leaves it
    /// untouched, since the server owns the actual status transition.
    pub(crate) async fn lifecycle<T>(
        &self,
        method: Method,
        collection_path: &str,
        sub_path: &str,
        entity: &mut T,
    ) -> Result<()>
    where
        T: DeserializeOwned + Resource,
    {
        let id = entity.id().ok_or(Error::MissingId)?.to_string();
        let path = format!("{collection_path}/{id}/{sub_path}");
        self.transition(method, &path, entity).await
    }

    pub(crate) async fn transition<T>(
        &self,
        method: Method,
        path: &str,
        entity: &mut T,
    ) -> Result<()>
    where
        T: DeserializeOwned + Resource,
    {
        let version = entity.version().unwrap_or(0);
        debug!("{method} {path}");
        let response = self
            .send(self.request(method, path).header(VERSION_HEADER, version))
            .await?;

        let body = response.text().await?;
        if !body.trim().is_empty() {
            *entity = serde_json::from_str(&body)?;
        }
        Ok(())
    }

    /// One DELETE round trip. Any 2xx is success; the body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        info!("DELETE {path}");
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}
