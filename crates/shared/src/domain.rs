use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(PostId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Free,
    Premium,
}

/// Named rule selecting and ordering the visible posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedFilter {
    #[default]
    All,
    /// Accepted but has no filtering rule yet; behaves as a passthrough.
    Following,
    Trending,
    Premium,
}

impl FeedFilter {
    pub const ALL: [FeedFilter; 4] = [
        FeedFilter::All,
        FeedFilter::Following,
        FeedFilter::Trending,
        FeedFilter::Premium,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedFilter::All => "all",
            FeedFilter::Following => "following",
            FeedFilter::Trending => "trending",
            FeedFilter::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedFilter::All => "For You",
            FeedFilter::Following => "Following",
            FeedFilter::Trending => "Trending",
            FeedFilter::Premium => "Premium",
        }
    }

    /// Maps a filter name onto a variant. Unrecognised names fall back to
    /// [`FeedFilter::All`], which shows the full dataset.
    pub fn from_label_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "following" => FeedFilter::Following,
            "trending" => FeedFilter::Trending,
            "premium" => FeedFilter::Premium,
            _ => FeedFilter::All,
        }
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsMix {
    TrendingPopCulture,
    InDepthAnalysis,
    BalancedMix,
}

impl NewsMix {
    pub const ALL: [NewsMix; 3] = [
        NewsMix::TrendingPopCulture,
        NewsMix::InDepthAnalysis,
        NewsMix::BalancedMix,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NewsMix::TrendingPopCulture => "Trending & pop culture",
            NewsMix::InDepthAnalysis => "In-depth analysis",
            NewsMix::BalancedMix => "Balanced mix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    UsNews,
    Politics,
    Sports,
    Business,
    Lifestyle,
    Entertainment,
    Education,
    World,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::UsNews,
        Topic::Politics,
        Topic::Sports,
        Topic::Business,
        Topic::Lifestyle,
        Topic::Entertainment,
        Topic::Education,
        Topic::World,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::UsNews => "US News",
            Topic::Politics => "Politics",
            Topic::Sports => "Sports",
            Topic::Business => "Business",
            Topic::Lifestyle => "Lifestyle",
            Topic::Entertainment => "Entertainment",
            Topic::Education => "Education",
            Topic::World => "World",
        }
    }
}

/// Navigation target chosen from the onboarding completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialRoute {
    Onboarding,
    Feed,
}

impl InitialRoute {
    pub fn path(self) -> &'static str {
        match self {
            InitialRoute::Onboarding => "/(onboarding)/welcome",
            InitialRoute::Feed => "/(newsfeed)/feed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_filter_labels_fall_back_to_all() {
        assert_eq!(FeedFilter::from_label_lossy("Trending"), FeedFilter::Trending);
        assert_eq!(FeedFilter::from_label_lossy(" premium "), FeedFilter::Premium);
        assert_eq!(FeedFilter::from_label_lossy("following"), FeedFilter::Following);
        assert_eq!(FeedFilter::from_label_lossy("latest"), FeedFilter::All);
        assert_eq!(FeedFilter::from_label_lossy(""), FeedFilter::All);
    }

    #[test]
    fn filters_serialize_as_snake_case_names() {
        let json = serde_json::to_string(&FeedFilter::Trending).expect("serialize");
        assert_eq!(json, "\"trending\"");
        let id: PostId = serde_json::from_str("\"p1\"").expect("deserialize");
        assert_eq!(id, PostId::new("p1"));
    }
}
