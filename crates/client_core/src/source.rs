//! Post sources consumed by the feed controller.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use shared::protocol::Post;

use crate::mock_data;

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Returns the full, unfiltered dataset in its original order.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}

/// Simulated round-trip time: a fixed base delay plus up to `jitter` extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub base: Duration,
    pub jitter: Duration,
}

impl LatencyProfile {
    pub const NONE: LatencyProfile = LatencyProfile {
        base: Duration::ZERO,
        jitter: Duration::ZERO,
    };

    pub fn fixed(base: Duration) -> Self {
        Self {
            base,
            jitter: Duration::ZERO,
        }
    }

    pub fn sample(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let extra_ms = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        self.base + Duration::from_millis(extra_ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::fixed(Duration::from_millis(500))
    }
}

/// Serves a fixed dataset after a simulated network delay.
pub struct StaticPostSource {
    posts: Vec<Post>,
    latency: LatencyProfile,
}

impl StaticPostSource {
    pub fn new(posts: Vec<Post>, latency: LatencyProfile) -> Self {
        Self { posts, latency }
    }

    pub fn with_mock_data(latency: LatencyProfile) -> Self {
        Self::new(mock_data::mock_posts(), latency)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let delay = self.latency.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(self.posts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_latency_stays_within_bounds() {
        let profile = LatencyProfile {
            base: Duration::from_millis(100),
            jitter: Duration::from_millis(50),
        };
        for _ in 0..64 {
            let sample = profile.sample();
            assert!(sample >= Duration::from_millis(100));
            assert!(sample <= Duration::from_millis(150));
        }
        assert_eq!(LatencyProfile::NONE.sample(), Duration::ZERO);
    }

    #[tokio::test]
    async fn static_source_returns_dataset_in_order() {
        let source = StaticPostSource::with_mock_data(LatencyProfile::NONE);
        let posts = source.fetch_posts().await.expect("fetch");
        assert_eq!(posts, source.posts());
        assert!(!posts.is_empty());
    }
}
