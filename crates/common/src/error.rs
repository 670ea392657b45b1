//! Error taxonomy for the recommendation pipeline.
//!
//! Only two variants ever reach the caller of `recommend()`: `Validation`
//! (bad input, nothing was called downstream) and `UpstreamUnavailable`
//! (no directory call succeeded at all). Everything else is either absorbed
//! by the orchestrator's degrade policy or belongs to the binaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecsError {
    /// Required input missing; reported before any collaborator is invoked.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Every directory call failed, so no candidate set could be assembled.
    #[error("Upstream services unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Directory client failure. Absorbed per-term by the orchestrator.
    #[error("Directory error: {0}")]
    Directory(String),

    /// Advisor call or parse failure. Absorbed by the degrade policy.
    #[error("Advisor error: {0}")]
    Advisor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience type alias for Results in the pipeline crates.
pub type Result<T> = std::result::Result<T, RecsError>;
