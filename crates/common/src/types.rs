//! Core domain types for the community recommendation pipeline.
//!
//! This module defines the data structures that flow through the system:
//! directory records, user requests, advisor output, and the assembled
//! response. Everything here is request-scoped — records are created when a
//! request starts and dropped when the response is serialized.

use serde::{Deserialize, Serialize};

// =============================================================================
// Directory Records
// =============================================================================

/// A single community record as returned by the directory service.
///
/// `name` is the canonical identifier (unique per community, case preserved
/// exactly as the directory returns it). Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub subscriber_count: u64,
    pub url: String,
}

/// Richer per-community detail from the directory's "about" lookup.
///
/// Used by the surprise sampler and the CLI; not part of the candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityDetail {
    pub name: String,
    pub title: String,
    pub description: String,
    pub subscribers: u64,
    pub active_users: u64,
    pub url: String,
    pub over18: bool,
    pub community_type: String,
}

// =============================================================================
// Request / Response Boundary
// =============================================================================

/// User-supplied input to the recommendation pipeline.
///
/// `interests` is required (non-empty after trimming); the other two fields
/// add optional context for the advisor's ranking prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub interests: String,
    #[serde(default)]
    pub problems: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

impl RecommendationRequest {
    pub fn new(interests: impl Into<String>) -> Self {
        Self {
            interests: interests.into(),
            problems: None,
            preferences: None,
        }
    }
}

/// Output of the advisor's ranking step.
///
/// `selected_names` is advisor-controlled and is NOT validated against the
/// candidate pool — reconciliation drops names with no pool entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    pub selected_names: Vec<String>,
    pub reasoning: String,
    pub categories: Vec<String>,
}

impl RankingResult {
    /// The fixed fallback used when the advisor call fails or its output
    /// cannot be parsed. A zero-result response is valid, if degraded.
    pub fn degraded() -> Self {
        Self {
            selected_names: Vec::new(),
            reasoning: "Unable to generate recommendations at this time.".to_string(),
            categories: Vec::new(),
        }
    }
}

/// The assembled recommendation response returned to the caller.
///
/// `search_terms` discloses the step-1 search strategy, even when it was the
/// degraded single-term fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<CommunityInfo>,
    pub reasoning: String,
    pub categories: Vec<String>,
    pub search_terms: Vec<String>,
}

// =============================================================================
// Surprise Sampler
// =============================================================================

/// A trending community entry in the surprise response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurpriseCommunity {
    pub name: String,
    pub title: String,
    pub description: String,
    pub subscribers: u64,
    pub active_users: u64,
    pub url: String,
    pub category: String,
}

/// Response body for the surprise endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurpriseResponse {
    pub communities: Vec<SurpriseCommunity>,
    pub total_results: usize,
    pub message: String,
}
