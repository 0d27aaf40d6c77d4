//! Built-in dataset standing in for the feed API.

use chrono::{DateTime, Utc};
use shared::{
    domain::{PostId, UserId, UserType},
    protocol::{Post, User},
};

pub fn mock_user() -> User {
    User {
        id: UserId::new("1"),
        name: "John Doe".into(),
        username: "johndoe".into(),
        avatar: "https://i.pravatar.cc/150?img=1".into(),
        user_type: UserType::Free,
        verified: false,
    }
}

fn newsroom(id: &str, name: &str, username: &str, img: u8, verified: bool) -> User {
    User {
        id: UserId::new(id),
        name: name.into(),
        username: username.into(),
        avatar: format!("https://i.pravatar.cc/150?img={img}"),
        user_type: UserType::Premium,
        verified,
    }
}

fn at(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

struct Seed {
    id: &'static str,
    headline: &'static str,
    summary: &'static str,
    category: &'static str,
    source: &'static str,
    likes: u64,
    comments: u64,
    shares: u64,
    premium: bool,
    video: Option<&'static str>,
    posted_at: i64,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        headline: "City council approves late-night transit expansion",
        summary: "Three new night routes start next month after a unanimous vote.",
        category: "US News",
        source: "Metro Daily",
        likes: 1240,
        comments: 86,
        shares: 41,
        premium: false,
        video: None,
        posted_at: 1_760_000_000,
    },
    Seed {
        id: "2",
        headline: "Inside the chip shortage: what changed in a year",
        summary: "Analysts break down supply, demand and the fabs coming online.",
        category: "Business",
        source: "Ledger Weekly",
        likes: 3420,
        comments: 210,
        shares: 175,
        premium: true,
        video: Some("https://cdn.example.com/reels/chips.mp4"),
        posted_at: 1_760_003_600,
    },
    Seed {
        id: "3",
        headline: "Late equaliser sends the derby to extra time",
        summary: "A header in stoppage time rescued the home side.",
        category: "Sports",
        source: "Pitchside",
        likes: 980,
        comments: 132,
        shares: 64,
        premium: false,
        video: Some("https://cdn.example.com/reels/derby.mp4"),
        posted_at: 1_760_007_200,
    },
    Seed {
        id: "4",
        headline: "Election explainer: how the new districts were drawn",
        summary: "A step-by-step look at the commission's final map.",
        category: "Politics",
        source: "The Civic Desk",
        likes: 3420,
        comments: 540,
        shares: 302,
        premium: true,
        video: None,
        posted_at: 1_760_010_800,
    },
    Seed {
        id: "5",
        headline: "Festival lineup leaks a week early",
        summary: "Headliners include two reunion tours and a surprise debut.",
        category: "Entertainment",
        source: "Backstage",
        likes: 5120,
        comments: 388,
        shares: 640,
        premium: false,
        video: Some("https://cdn.example.com/reels/festival.mp4"),
        posted_at: 1_760_014_400,
    },
    Seed {
        id: "6",
        headline: "Universities pilot four-day study weeks",
        summary: "Early results show attendance up and burnout down.",
        category: "Education",
        source: "Campus Report",
        likes: 615,
        comments: 47,
        shares: 19,
        premium: false,
        video: None,
        posted_at: 1_760_018_000,
    },
];

pub fn mock_posts() -> Vec<Post> {
    let desks = [
        newsroom("101", "Metro Daily", "metrodaily", 12, true),
        newsroom("102", "World Brief", "worldbrief", 33, false),
    ];

    SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| Post {
            id: PostId::new(seed.id),
            author: desks[index % desks.len()].clone(),
            headline: seed.headline.into(),
            content: format!("{}\n\n{}", seed.headline, seed.summary),
            images: vec![format!("https://picsum.photos/seed/post{}/1080/1920", seed.id)],
            videos: seed.video.map(|v| vec![v.to_string()]).unwrap_or_default(),
            category: Some(seed.category.into()),
            source: Some(seed.source.into()),
            summary: Some(seed.summary.into()),
            tags: vec![seed.category.to_ascii_lowercase().replace(' ', "-")],
            likes: seed.likes,
            comments: seed.comments,
            shares: seed.shares,
            is_premium_content: seed.premium,
            timestamp: at(seed.posted_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn mock_post_ids_are_unique() {
        let posts = mock_posts();
        let ids: HashSet<_> = posts.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn mock_dataset_mixes_free_and_premium_posts() {
        let posts = mock_posts();
        assert!(posts.iter().any(|p| p.is_premium_content));
        assert!(posts.iter().any(|p| !p.is_premium_content));
    }
}
