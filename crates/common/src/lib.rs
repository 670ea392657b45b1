//! Shared domain types, error taxonomy, and configuration for the
//! community-recs workspace.

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{RecsError, Result};
pub use types::{
    CommunityDetail, CommunityInfo, RankingResult, RecommendationRequest, RecommendationResponse,
    SurpriseCommunity, SurpriseResponse,
};
