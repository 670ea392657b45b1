//! Raw wire types for the directory service's listing API.
//!
//! The directory nests records two levels deep (`data.children[].data`);
//! these types exist only to deserialize that shape before mapping into the
//! domain records in `common`.

use common::{CommunityDetail, CommunityInfo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingChild {
    pub data: RawCommunity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AboutResponse {
    pub data: RawCommunity,
}

/// One community record as the directory returns it.
///
/// Most fields are nullable on the wire, so everything beyond the name
/// defaults rather than failing the whole listing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCommunity {
    pub display_name: String,
    #[serde(default)]
    pub display_name_prefixed: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub public_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subscribers: Option<u64>,
    #[serde(default)]
    pub active_user_count: Option<u64>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub over18: bool,
    #[serde(default)]
    pub subreddit_type: String,
}

impl RawCommunity {
    /// Prefer the short public description, fall back to the full one.
    fn best_description(&self) -> String {
        match self.public_description.as_deref() {
            Some(desc) if !desc.is_empty() => desc.to_string(),
            _ => self.description.clone().unwrap_or_default(),
        }
    }

    fn full_url(&self) -> String {
        format!("https://reddit.com{}", self.url)
    }

    pub fn into_info(self) -> CommunityInfo {
        CommunityInfo {
            display_name: self.display_name_prefixed.clone(),
            description: self.best_description(),
            subscriber_count: self.subscribers.unwrap_or(0),
            url: self.full_url(),
            name: self.display_name,
        }
    }

    pub fn into_detail(self) -> CommunityDetail {
        CommunityDetail {
            title: self.title.clone(),
            description: self.best_description(),
            subscribers: self.subscribers.unwrap_or(0),
            active_users: self.active_user_count.unwrap_or(0),
            url: self.full_url(),
            over18: self.over18,
            community_type: self.subreddit_type.clone(),
            name: self.display_name,
        }
    }
}

impl Listing {
    /// Map every child record into a domain `CommunityInfo`.
    pub fn into_infos(self) -> Vec<CommunityInfo> {
        self.data
            .children
            .into_iter()
            .map(|child| child.data.into_info())
            .collect()
    }
}
