//! Modrinth version resolver - finds a downloadable file for a project via
//! the Modrinth v2 REST API.
//!
//! The [`ModrinthResolver`] calls `GET /v2/project/{slug}/version` filtered by
//! loader and, for strict lookups, by game version, then applies
//! [`select_first_file`] to the returned list.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};
use url::Url;

use crate::http_client::{HttpTimeouts, build_http_client};

use super::{FileDescriptor, ResolveError, VersionRecord, VersionSource, select_first_file};

/// Default Modrinth API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.modrinth.com";

/// Resolves Modrinth project slugs to downloadable files.
pub struct ModrinthResolver {
    client: Client,
    base_url: String,
}

impl ModrinthResolver {
    /// Creates a resolver against the public Modrinth API.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ClientBuild`] if HTTP client construction fails.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, ResolveError> {
        Self::with_base_url(DEFAULT_API_BASE_URL, timeouts)
    }

    /// Creates a resolver with a custom base URL (mirrors, or wiremock in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ClientBuild`] if HTTP client construction fails.
    #[tracing::instrument(skip_all, fields(base_url))]
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeouts: HttpTimeouts,
    ) -> Result<Self, ResolveError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::Span::current().record("base_url", base_url.as_str());
        let client = build_http_client(timeouts).map_err(ResolveError::client_build)?;
        Ok(Self { client, base_url })
    }

    /// Builds the version-listing URL for one lookup.
    ///
    /// Filters are JSON arrays holding a single value, e.g. `loaders=["fabric"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidUrl`] if the base URL is not a valid URL.
    pub fn version_list_url(
        &self,
        slug: &str,
        loader: &str,
        game_version: Option<&str>,
    ) -> Result<Url, ResolveError> {
        let raw = format!(
            "{}/v2/project/{}/version",
            self.base_url,
            urlencoding::encode(slug)
        );
        let mut url = Url::parse(&raw).map_err(|e| ResolveError::invalid_url(&raw, e))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("loaders", &json_filter(&loader.to_lowercase()));
            if let Some(version) = game_version {
                query.append_pair("game_versions", &json_filter(version));
            }
        }
        Ok(url)
    }
}

/// Encodes a single filter value as a one-element JSON array.
fn json_filter(value: &str) -> String {
    serde_json::json!([value]).to_string()
}

impl std::fmt::Debug for ModrinthResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModrinthResolver")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl VersionSource for ModrinthResolver {
    #[tracing::instrument(skip(self), fields(resolver = "modrinth"))]
    async fn resolve(
        &self,
        slug: &str,
        loader: &str,
        game_version: Option<&str>,
    ) -> Result<FileDescriptor, ResolveError> {
        let url = self.version_list_url(slug, loader, game_version)?;
        debug!(api_url = %url, "Calling Modrinth version API");

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Modrinth API request failed");
                return Err(ResolveError::network(slug, e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 404 {
                error!(slug, "CRITICAL: project does not exist on Modrinth");
                return Err(ResolveError::project_not_found(slug));
            }
            warn!(slug, status = status.as_u16(), "Modrinth API error");
            return Err(ResolveError::http_status(slug, status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Modrinth API response body could not be read");
            ResolveError::network(slug, e)
        })?;

        let versions: Vec<VersionRecord> = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Modrinth API response did not match version schema");
            ResolveError::malformed(slug, e)
        })?;

        debug!(count = versions.len(), "Modrinth returned versions");
        select_first_file(slug, loader, game_version, versions)
    }
}
