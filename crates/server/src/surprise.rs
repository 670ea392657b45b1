//! The "surprise me" trending sampler.
//!
//! Standalone fetch-and-filter: pick a random handful of known trending
//! communities, pull their detail records concurrently, keep the public,
//! non-NSFW, reasonably-sized ones, and return the most active five with a
//! keyword-derived category each. Shares nothing with the recommendation
//! pipeline beyond the directory client.

use futures::future::join_all;
use rand::seq::IndexedRandom;
use tracing::warn;

use common::{CommunityDetail, SurpriseCommunity, SurpriseResponse};
use directory_client::RedditDirectory;

/// Trending communities worth surfacing blind.
const TRENDING_COMMUNITIES: &[&str] = &[
    "todayilearned",
    "AskReddit",
    "gaming",
    "movies",
    "music",
    "science",
    "technology",
    "programming",
    "funny",
    "pics",
    "videos",
    "news",
    "books",
    "fitness",
    "food",
    "travel",
    "art",
    "DIY",
    "LifeProTips",
    "explainlikeimfive",
    "dataisbeautiful",
    "Showerthoughts",
    "Jokes",
    "gadgets",
    "space",
    "history",
    "philosophy",
    "psychology",
    "sports",
];

/// How many trending names to sample per request.
const SAMPLE_SIZE: usize = 8;
/// How many communities end up in the response.
const RESULT_SIZE: usize = 5;
/// Communities below this subscriber count are dropped.
const MIN_SUBSCRIBERS: u64 = 1_000;

const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Technology", &["tech", "programming", "coding", "software", "computer", "ai", "ml", "developer", "gadgets"]),
    ("Gaming", &["gaming", "games", "game", "play", "console", "pc", "xbox", "playstation", "nintendo"]),
    ("Career", &["career", "job", "work", "employment", "resume", "interview", "professional"]),
    ("Health", &["health", "fitness", "medical", "wellness", "exercise", "diet", "mental", "therapy"]),
    ("Hobby", &["hobby", "craft", "art", "music", "photography", "cooking", "gardening", "diy"]),
    ("Education", &["learn", "education", "school", "study", "university", "college", "course", "tutorial"]),
    ("Entertainment", &["movies", "tv", "shows", "music", "books", "reading", "comedy", "funny"]),
    ("Sports", &["sports", "football", "basketball", "soccer", "baseball", "hockey", "fitness"]),
    ("Finance", &["finance", "money", "investing", "stocks", "business", "economy", "crypto"]),
    ("Lifestyle", &["life", "lifestyle", "relationships", "dating", "family", "home", "travel"]),
];

/// Assign a category from the first keyword table entry matching the
/// community's name, title, or description.
fn categorize(detail: &CommunityDetail) -> String {
    let name = detail.name.to_lowercase();
    let title = detail.title.to_lowercase();
    let description = detail.description.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        let matched = keywords.iter().any(|keyword| {
            name.contains(keyword) || title.contains(keyword) || description.contains(keyword)
        });
        if matched {
            return category.to_string();
        }
    }

    "General".to_string()
}

/// Keep public, safe-for-work, non-trivial communities; rank by activity
/// (active users plus subscribers); return the top few with categories.
fn select_top(details: Vec<CommunityDetail>) -> Vec<SurpriseCommunity> {
    let mut valid: Vec<CommunityDetail> = details
        .into_iter()
        .filter(|detail| {
            detail.community_type == "public"
                && !detail.over18
                && detail.subscribers > MIN_SUBSCRIBERS
        })
        .collect();

    valid.sort_by_key(|detail| {
        std::cmp::Reverse(detail.active_users.saturating_add(detail.subscribers))
    });
    valid.truncate(RESULT_SIZE);

    valid
        .into_iter()
        .map(|detail| {
            let category = categorize(&detail);
            let description = if detail.description.is_empty() {
                "No description available".to_string()
            } else {
                detail.description
            };
            SurpriseCommunity {
                name: detail.name,
                title: detail.title,
                description,
                subscribers: detail.subscribers,
                active_users: detail.active_users,
                url: detail.url,
                category,
            }
        })
        .collect()
}

/// Fetch a random surprise sample. Per-community fetch failures are dropped
/// rather than failing the whole response.
pub async fn surprise(directory: &RedditDirectory) -> SurpriseResponse {
    // Scope the thread-local rng so it drops before the await; the handler
    // future must stay `Send`.
    let picks: Vec<&str> = {
        let mut rng = rand::rng();
        TRENDING_COMMUNITIES
            .choose_multiple(&mut rng, SAMPLE_SIZE)
            .copied()
            .collect()
    };

    let fetched = join_all(picks.iter().map(|name| directory.about(name))).await;

    let details: Vec<CommunityDetail> = picks
        .iter()
        .zip(fetched)
        .filter_map(|(name, result)| match result {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(community = %name, error = %e, "Skipping community detail fetch");
                None
            }
        })
        .collect();

    let communities = select_top(details);

    SurpriseResponse {
        total_results: communities.len(),
        communities,
        message: "Surprise! Here are some trending communities you might enjoy.".to_string(),
    }
}
