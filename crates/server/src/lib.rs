//! Server crate for the community-recs recommendation service.
//!
//! Contains the orchestrator that drives the recommendation pipeline, the
//! axum HTTP surface, and the standalone surprise sampler.

pub mod http;
pub mod orchestrator;
pub mod surprise;

pub use http::{AppState, router};
pub use orchestrator::RecommendationOrchestrator;
