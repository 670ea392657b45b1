//! Directory client for the Reddit community directory.
//!
//! This crate provides the HTTP client behind the pipeline's
//! `DirectoryClient` capability. It handles:
//! - OAuth2 client-credentials token acquisition
//! - Keyword search over communities (relevance-sorted)
//! - Popularity listings
//! - Per-community "about" lookups for the surprise sampler and CLI

mod types;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use common::{CommunityDetail, CommunityInfo, Config};
use pipeline::DirectoryClient;
use types::{AboutResponse, Listing, TokenResponse};

const REDDIT_AUTH_URL: &str = "https://www.reddit.com";
const REDDIT_API_URL: &str = "https://oauth.reddit.com";

/// Errors that can occur when talking to the directory service
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to obtain access token: {0}")]
    Auth(String),

    #[error("Directory API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// HTTP client for the community directory.
///
/// A fresh token is requested per call, matching the collaborator's expected
/// usage for read-only client-credentials access.
#[derive(Clone)]
pub struct RedditDirectory {
    client_id: String,
    client_secret: String,
    user_agent: String,
    http: reqwest::Client,
    auth_url: String,
    api_url: String,
}

impl RedditDirectory {
    pub fn new(config: &Config) -> Self {
        Self {
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
            http: reqwest::Client::new(),
            auth_url: REDDIT_AUTH_URL.to_string(),
            api_url: REDDIT_API_URL.to_string(),
        }
    }

    /// Point the client at different base URLs (tests, proxies).
    pub fn with_base_urls(mut self, auth_url: &str, api_url: &str) -> Self {
        self.auth_url = auth_url.to_string();
        self.api_url = api_url.to_string();
        self
    }

    /// Fetch an OAuth2 access token via the client-credentials grant.
    async fn access_token(&self) -> Result<String> {
        let url = format!("{}/api/v1/access_token", self.auth_url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("Sending token request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Auth(format!("{status}: {body}")).into());
        }

        let token: TokenResponse = response.json().await.context("Parsing token response")?;
        Ok(token.access_token)
    }

    /// GET a listing endpoint with a bearer token and map it to domain records.
    async fn get_listing(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<CommunityInfo>> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.api_url, path);

        debug!(%url, "directory listing request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&token)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .with_context(|| format!("Requesting {path}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api { status, body }.into());
        }

        let listing: Listing = response.json().await.context("Parsing listing response")?;
        Ok(listing.into_infos())
    }

    /// Fetch the detailed "about" record for a single community.
    pub async fn about(&self, name: &str) -> Result<CommunityDetail> {
        let token = self.access_token().await?;
        let url = format!("{}/r/{}/about", self.api_url, name);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .with_context(|| format!("Requesting about for {name}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api { status, body }.into());
        }

        let about: AboutResponse = response.json().await.context("Parsing about response")?;
        Ok(about.data.into_detail())
    }
}

#[async_trait]
impl DirectoryClient for RedditDirectory {
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<CommunityInfo>> {
        self.get_listing(
            "/subreddits/search",
            &[
                ("q", term.to_string()),
                ("limit", limit.to_string()),
                ("sort", "relevance".to_string()),
                ("type", "sr".to_string()),
            ],
        )
        .await
    }

    async fn popular(&self, limit: u32) -> Result<Vec<CommunityInfo>> {
        self.get_listing("/subreddits/popular", &[("limit", limit.to_string())])
            .await
    }
}
