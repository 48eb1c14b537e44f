//! Typed calls against the YouTube Data API.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use tukija_domain::{Channel, ListResponse, Member, MembershipLevel};

use super::error::ApiError;
use crate::adapters::AuthenticatedClient;

/// Largest page size accepted by `members.list`.
pub const MEMBERS_PAGE_SIZE: u32 = 1000;

/// Authenticated YouTube Data API client.
#[derive(Debug)]
pub struct YouTubeClient {
    http: Client,
    auth: AuthenticatedClient,
    base_url: Url,
}

impl YouTubeClient {
    /// Creates a client. `base_url` must end with `/`.
    #[must_use]
    pub const fn new(http: Client, auth: AuthenticatedClient, base_url: Url) -> Self {
        Self {
            http,
            auth,
            base_url,
        }
    }

    /// API root all resources are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The credential layer, for inspecting the current token.
    #[must_use]
    pub const fn auth(&self) -> &AuthenticatedClient {
        &self.auth
    }

    /// Identifier of the authenticated user's channel.
    ///
    /// # Errors
    /// Returns `ApiError::NoChannel` if the account has no channel.
    #[instrument(skip(self))]
    pub async fn my_channel_id(&self) -> Result<String, ApiError> {
        let page: ListResponse<Channel> = self
            .get("channels", &[("part", "id"), ("mine", "true")])
            .await?;

        page.items
            .into_iter()
            .next()
            .map(|channel| channel.id)
            .ok_or(ApiError::NoChannel)
    }

    /// Membership levels offered by the authenticated creator.
    ///
    /// # Errors
    /// Returns `ApiError` if the request fails.
    #[instrument(skip(self))]
    pub async fn membership_levels(&self) -> Result<Vec<MembershipLevel>, ApiError> {
        let page: ListResponse<MembershipLevel> = self
            .get("membershipsLevels", &[("part", "id,snippet")])
            .await?;
        Ok(page.items)
    }

    /// All current members, optionally restricted to those with access to
    /// `level`. Follows page tokens until the last page.
    ///
    /// # Errors
    /// Returns `ApiError` if any page request fails.
    #[instrument(skip(self))]
    pub async fn members(&self, level: Option<&str>) -> Result<Vec<Member>, ApiError> {
        let page_size = MEMBERS_PAGE_SIZE.to_string();
        let mut members = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("part", "snippet"), ("maxResults", page_size.as_str())];
            if let Some(level) = level {
                query.push(("hasAccessToLevel", level));
            }
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let page: ListResponse<Member> = self.get("members", &query).await?;
            debug!(count = page.items.len(), "Fetched members page");
            members.extend(page.items);

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        Ok(members)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self
            .base_url
            .join(resource)
            .map_err(|e| ApiError::Decode(format!("invalid resource path {resource}: {e}")))?;

        let request = self.auth.authorize(self.http.get(url).query(query)).await?;
        let response = request.send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
