//! Core pipeline building blocks for community recommendations.
//!
//! This crate provides:
//! - The `DirectoryClient` and `AdvisorClient` collaborator traits
//! - The `CandidatePool` for deduplicating fan-out search results
//!
//! ## Architecture
//! The orchestrator (server crate) drives the pipeline in stages:
//! 1. Expand the free-text query into search terms (advisor)
//! 2. Fan out a directory search per term into the pool
//! 3. Merge the popularity fallback into the same pool
//! 4. Rank the pooled candidates (advisor)
//! 5. Reconcile selected names back against pool records
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::CandidatePool;
//!
//! let mut pool = CandidatePool::new();
//! for info in search_results {
//!     pool.insert_if_absent(info);
//! }
//! let candidates = pool.values();
//! ```

pub mod pool;
pub mod traits;

// Re-export main types
pub use pool::CandidatePool;
pub use traits::{AdvisorClient, DirectoryClient};
