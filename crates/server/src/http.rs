//! HTTP surface for the recommendation service.
//!
//! Thin axum layer over the orchestrator: deserialize the request body,
//! run the pipeline, map the error taxonomy onto status codes. All policy
//! lives in the orchestrator.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

use common::{RecommendationRequest, RecsError};
use directory_client::RedditDirectory;
use pipeline::{AdvisorClient, DirectoryClient};

use crate::orchestrator::RecommendationOrchestrator;
use crate::surprise;

/// Shared application state: the orchestrator plus the directory client the
/// surprise endpoint talks to directly.
pub struct AppState<D, A> {
    pub orchestrator: RecommendationOrchestrator<D, A>,
    pub directory: RedditDirectory,
}

pub fn router<D, A>(state: Arc<AppState<D, A>>) -> Router
where
    D: DirectoryClient + 'static,
    A: AdvisorClient + 'static,
{
    Router::new()
        .route("/api/recommendations", post(recommendations))
        .route("/api/surprise", post(surprise_sample))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn recommendations<D, A>(
    State(state): State<Arc<AppState<D, A>>>,
    Json(request): Json<RecommendationRequest>,
) -> impl IntoResponse
where
    D: DirectoryClient + 'static,
    A: AdvisorClient + 'static,
{
    match state.orchestrator.recommend(request).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(RecsError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Interests field is required" })),
        ),
        Err(RecsError::UpstreamUnavailable(message)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": message })),
        ),
        Err(e) => {
            error!(error = %e, "Recommendation request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
        }
    }
}

async fn surprise_sample<D, A>(State(state): State<Arc<AppState<D, A>>>) -> impl IntoResponse
where
    D: DirectoryClient + 'static,
    A: AdvisorClient + 'static,
{
    Json(surprise::surprise(&state.directory).await)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use common::{CommunityInfo, Config, RankingResult};
    use tower::ServiceExt;

    // ============================================================================
    // Mock Collaborators
    // ============================================================================

    /// Directory whose every call fails, as if the service were unreachable.
    struct UnreachableDirectory;

    #[async_trait]
    impl DirectoryClient for UnreachableDirectory {
        async fn search(&self, term: &str, _limit: u32) -> anyhow::Result<Vec<CommunityInfo>> {
            anyhow::bail!("directory unreachable for {term}");
        }

        async fn popular(&self, _limit: u32) -> anyhow::Result<Vec<CommunityInfo>> {
            anyhow::bail!("directory unreachable");
        }
    }

    /// Advisor that expands to a fixed term and never gets to rank.
    struct FixedAdvisor;

    #[async_trait]
    impl AdvisorClient for FixedAdvisor {
        async fn expand_query(&self, _text: &str) -> anyhow::Result<Vec<String>> {
            Ok(vec!["hiking".to_string()])
        }

        async fn rank(
            &self,
            _request: &RecommendationRequest,
            _candidates: &[CommunityInfo],
        ) -> anyhow::Result<RankingResult> {
            anyhow::bail!("advisor unreachable");
        }
    }

    fn test_config() -> Config {
        Config {
            reddit_client_id: "id".to_string(),
            reddit_client_secret: "secret".to_string(),
            reddit_user_agent: "test/0.0".to_string(),
            gemini_api_key: "key".to_string(),
            http_host: "127.0.0.1".to_string(),
            http_port: 0,
        }
    }

    fn test_router<D, A>(directory: D, advisor: A) -> Router
    where
        D: DirectoryClient + 'static,
        A: AdvisorClient + 'static,
    {
        let state = Arc::new(AppState {
            orchestrator: RecommendationOrchestrator::new(directory, advisor),
            directory: RedditDirectory::new(&test_config()),
        });
        router(state)
    }

    async fn post_recommendations(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommendations")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // ============================================================================
    // Error → Status Mapping
    // ============================================================================

    #[tokio::test]
    async fn test_whitespace_interests_returns_400_with_error_body() {
        let app = test_router(UnreachableDirectory, FixedAdvisor);

        let (status, body) = post_recommendations(app, r#"{"interests": "   "}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Interests field is required");
    }

    #[tokio::test]
    async fn test_unreachable_directory_returns_503() {
        let app = test_router(UnreachableDirectory, FixedAdvisor);

        let (status, body) = post_recommendations(app, r#"{"interests": "hiking"}"#).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_router(UnreachableDirectory, FixedAdvisor);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
