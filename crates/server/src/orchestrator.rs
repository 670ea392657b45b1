//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Validate the request (non-empty interests)
//! 2. Expand the free-text query into search terms (advisor)
//! 3. Fan out a directory search per term
//! 4. Merge results into the candidate pool, first writer wins
//! 5. Merge the popularity fallback into the same pool
//! 6. Rank the pooled candidates (advisor)
//! 7. Reconcile selected names back against pool records
//!
//! Every stage after validation degrades instead of failing: a broken term
//! search contributes nothing, a broken advisor call is replaced by the
//! documented fallback value. The only hard failures are bad input and the
//! case where no directory call succeeded at all.

use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, info, warn};

use common::{
    CommunityInfo, RankingResult, RecommendationRequest, RecommendationResponse, RecsError,
};
use pipeline::{AdvisorClient, CandidatePool, DirectoryClient};

/// Per-term search result cap.
pub const SEARCH_LIMIT: u32 = 15;
/// Popularity fallback cap.
pub const FALLBACK_LIMIT: u32 = 30;
/// Maximum number of expanded search terms; excess terms are dropped.
pub const MAX_SEARCH_TERMS: usize = 5;

/// Main orchestrator that drives the recommendation pipeline.
///
/// Stateless across requests: the candidate pool is created fresh per call
/// and discarded with the response.
#[derive(Clone)]
pub struct RecommendationOrchestrator<D, A> {
    directory: D,
    advisor: A,
}

impl<D: DirectoryClient, A: AdvisorClient> RecommendationOrchestrator<D, A> {
    pub fn new(directory: D, advisor: A) -> Self {
        Self { directory, advisor }
    }

    /// Main entry point: produce recommendations for a request.
    ///
    /// # Errors
    /// - `RecsError::Validation` when `interests` is empty after trimming;
    ///   no collaborator is invoked in that case
    /// - `RecsError::UpstreamUnavailable` when every directory call failed
    ///   and no candidates exist at all
    ///
    /// Everything else degrades into a best-effort response.
    pub async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse, RecsError> {
        let start_time = Instant::now();

        if request.interests.trim().is_empty() {
            return Err(RecsError::Validation(
                "interests field is required".to_string(),
            ));
        }

        // Step 1: expand the query into search terms (best-effort)
        let search_terms = self.expand_terms(&request.interests).await;
        info!(terms = search_terms.len(), "Expanded query into search terms");

        // Steps 2-3: fan-out search plus popularity fallback into the pool
        let (pool, failed_calls, total_calls) = self.assemble_pool(&search_terms).await;
        info!(
            candidates = pool.len(),
            failed_calls, total_calls, "Assembled candidate pool"
        );

        if pool.is_empty() && failed_calls == total_calls {
            return Err(RecsError::UpstreamUnavailable(
                "no directory call succeeded".to_string(),
            ));
        }

        // Step 4: rank (best-effort)
        let ranking = self.rank_candidates(&request, &pool).await;
        info!(
            selected = ranking.selected_names.len(),
            "Ranked candidate pool"
        );

        // Step 5: reconcile advisor-selected names against pool records
        let recommendations = self.reconcile(&ranking.selected_names, &pool);
        info!(
            recommendations = recommendations.len(),
            elapsed = ?start_time.elapsed(),
            "Assembled recommendation response"
        );

        Ok(RecommendationResponse {
            recommendations,
            reasoning: ranking.reasoning,
            categories: ranking.categories,
            search_terms,
        })
    }

    /// Expand the interests text into search terms, capped at
    /// `MAX_SEARCH_TERMS`. A failed or empty expansion degrades to a
    /// single-element sequence holding the raw interests text.
    async fn expand_terms(&self, interests: &str) -> Vec<String> {
        match self.advisor.expand_query(interests).await {
            Ok(mut terms) if !terms.is_empty() => {
                terms.truncate(MAX_SEARCH_TERMS);
                terms
            }
            Ok(_) => {
                warn!("Query expansion returned no terms, using raw interests");
                vec![interests.to_string()]
            }
            Err(e) => {
                warn!(error = %e, "Query expansion failed, using raw interests");
                vec![interests.to_string()]
            }
        }
    }

    /// Fan out one search per term, then merge the popularity fallback.
    ///
    /// Searches run concurrently, but `join_all` yields results in
    /// submission order, so the single merge pass below applies first-writer-
    /// wins by term position rather than completion time. The fallback is
    /// merged only after every term insertion, preserving the
    /// "search hit beats fallback" invariant.
    ///
    /// Returns the pool plus (failed directory calls, total directory calls)
    /// so the caller can distinguish "everything empty" from
    /// "everything unreachable".
    async fn assemble_pool(&self, terms: &[String]) -> (CandidatePool, usize, usize) {
        let searches = join_all(
            terms
                .iter()
                .map(|term| self.directory.search(term, SEARCH_LIMIT)),
        )
        .await;

        let mut pool = CandidatePool::new();
        let mut failed_calls = 0;

        for (term, result) in terms.iter().zip(searches) {
            match result {
                Ok(records) => {
                    debug!(term = %term, hits = records.len(), "Term search completed");
                    for record in records {
                        pool.insert_if_absent(record);
                    }
                }
                Err(e) => {
                    failed_calls += 1;
                    warn!(term = %term, error = %e, "Term search failed, treating as empty");
                }
            }
        }

        match self.directory.popular(FALLBACK_LIMIT).await {
            Ok(records) => {
                debug!(hits = records.len(), "Popularity fallback completed");
                for record in records {
                    pool.insert_if_absent(record);
                }
            }
            Err(e) => {
                failed_calls += 1;
                warn!(error = %e, "Popularity fallback failed, treating as empty");
            }
        }

        (pool, failed_calls, terms.len() + 1)
    }

    /// Rank the pooled candidates; degrade to the fixed empty result on
    /// any advisor failure.
    async fn rank_candidates(
        &self,
        request: &RecommendationRequest,
        pool: &CandidatePool,
    ) -> RankingResult {
        let candidates = pool.values();
        match self.advisor.rank(request, &candidates).await {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!(error = %e, "Advisor ranking failed, returning degraded result");
                RankingResult::degraded()
            }
        }
    }

    /// Map advisor-selected names back to full pool records.
    ///
    /// Lookup is case-insensitive; names with no pool entry are expected
    /// (the advisor may echo names outside the supplied list) and silently
    /// dropped. Advisor selection order is preserved.
    fn reconcile(&self, selected_names: &[String], pool: &CandidatePool) -> Vec<CommunityInfo> {
        selected_names
            .iter()
            .filter_map(|name| pool.get_case_insensitive(name).cloned())
            .collect()
    }
}
