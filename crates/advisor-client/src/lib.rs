//! Advisor client for the Gemini text-generation service.
//!
//! This crate provides the HTTP client behind the pipeline's
//! `AdvisorClient` capability:
//! - `expand_query` turns free-text interests into search keywords
//! - `rank` selects and justifies a subset of the candidate pool
//!
//! Both calls are best-effort from the pipeline's point of view; any
//! transport or parse failure is returned as `Err` and the orchestrator
//! substitutes the documented fallback values.

mod parse;
mod prompts;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{CommunityInfo, Config, RankingResult, RecommendationRequest};
use pipeline::AdvisorClient;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<GenerateCandidate>,
}

#[derive(Debug, Deserialize)]
struct GenerateCandidate {
    content: Content,
}

impl GenerateResponse {
    /// The first candidate's text, which is all this client ever asks for.
    fn text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| anyhow!("Advisor response contained no candidates"))
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the Gemini generateContent endpoint.
#[derive(Clone)]
pub struct GeminiAdvisor {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiAdvisor {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: GEMINI_MODEL.to_string(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (tests, proxies).
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Send a single-prompt generation request and return the response text.
    async fn generate(&self, prompt: String) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!(model = %self.model, "advisor generate request");

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Sending advisor request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Advisor API error ({status}): {body}"));
        }

        let generated: GenerateResponse =
            response.json().await.context("Parsing advisor response")?;
        generated.text()
    }
}

#[async_trait]
impl AdvisorClient for GeminiAdvisor {
    async fn expand_query(&self, text: &str) -> Result<Vec<String>> {
        let response = self.generate(prompts::expansion_prompt(text)).await?;
        Ok(parse::parse_keywords(&response))
    }

    async fn rank(
        &self,
        request: &RecommendationRequest,
        candidates: &[CommunityInfo],
    ) -> Result<RankingResult> {
        let response = self
            .generate(prompts::ranking_prompt(request, candidates))
            .await?;
        parse::parse_ranking(&response)
    }
}
