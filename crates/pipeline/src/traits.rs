//! Collaborator traits for the recommendation pipeline.
//!
//! The orchestrator only depends on these two capabilities; the concrete
//! HTTP clients live in their own crates and tests substitute mocks.

use anyhow::Result;
use async_trait::async_trait;
use common::{CommunityInfo, RankingResult, RecommendationRequest};

/// Keyword search and popularity listing over the community directory.
///
/// ## Design Note
/// - `Send + Sync` so a single client can serve concurrent requests
/// - Implementations surface transport/auth failures as `Err`; the
///   orchestrator treats a failed term search as an empty contribution
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Search communities by keyword, relevance-ordered, at most `limit`.
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<CommunityInfo>>;

    /// List the most popular communities, at most `limit`.
    async fn popular(&self, limit: u32) -> Result<Vec<CommunityInfo>>;
}

/// Free-text query expansion and candidate ranking via the advisor service.
///
/// Both operations are best-effort from the pipeline's point of view: the
/// orchestrator substitutes documented fallback values on any `Err`.
#[async_trait]
pub trait AdvisorClient: Send + Sync {
    /// Expand free-text interests into search keywords (0..N strings).
    async fn expand_query(&self, text: &str) -> Result<Vec<String>>;

    /// Select and justify a subset of `candidates` for this request.
    ///
    /// The returned names are advisor-controlled and may include names that
    /// are not in `candidates`; callers must reconcile.
    async fn rank(
        &self,
        request: &RecommendationRequest,
        candidates: &[CommunityInfo],
    ) -> Result<RankingResult>;
}
