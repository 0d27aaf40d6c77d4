use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FeedFilter, NewsMix, PostId, Topic, UserId, UserType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub user_type: UserType,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    pub fn is_premium(&self) -> bool {
        self.user_type == UserType::Premium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PremiumFeatures {
    pub ad_free: bool,
    pub priority_feed: bool,
    pub exclusive_content: bool,
    pub advanced_filters: bool,
    pub download_content: bool,
}

impl PremiumFeatures {
    pub fn for_user_type(user_type: UserType) -> Self {
        let enabled = user_type == UserType::Premium;
        Self {
            ad_free: enabled,
            priority_feed: enabled,
            exclusive_content: enabled,
            advanced_filters: enabled,
            download_content: enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: User,
    pub headline: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    #[serde(default)]
    pub is_premium_content: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub is_onboarding_complete: bool,
    pub is_loading: bool,
}

/// Preferences gathered by the first-run wizard. Kept in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    pub news_mix: Option<NewsMix>,
    pub topics: BTreeSet<Topic>,
    pub notifications_enabled: bool,
}

impl Default for OnboardingAnswers {
    fn default() -> Self {
        Self {
            news_mix: None,
            topics: Topic::ALL.into_iter().collect(),
            notifications_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    pub active_filter: FeedFilter,
    pub loading: bool,
    pub refreshing: bool,
    /// Pagination extension point; never populated.
    pub has_more: bool,
    /// Pagination extension point; never populated.
    pub loading_more: bool,
}
