//! Filtered view over the post dataset with optimistic engagement counters.
//!
//! Loads suspend on the [`PostSource`]; every request is tagged with a
//! sequence number and only the newest request may commit its result, so the
//! view always matches the most recently requested filter. Counter mutations
//! are synchronous and never wait on a load.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use shared::{
    domain::{FeedFilter, PostId},
    error::ClientError,
    protocol::{FeedSnapshot, Post},
};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::{event_channel, source::PostSource, ClientEvent};

#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    pub initial_filter: FeedFilter,
    /// Upper bound on a single fetch. `None` waits indefinitely.
    pub load_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { filter: FeedFilter, post_count: usize },
    /// A newer request was issued before this one finished; nothing changed.
    Superseded { filter: FeedFilter },
    /// The filter was already active; no reload was started.
    Unchanged { filter: FeedFilter },
    /// The fetch failed; the previous view is kept.
    Failed(ClientError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    Load,
    Refresh,
}

#[derive(Debug, Clone, Copy)]
enum Counter {
    Likes,
    Comments,
    Shares,
}

struct FeedState {
    posts: Vec<Post>,
    active_filter: FeedFilter,
    loading: bool,
    refreshing: bool,
    latest_request: u64,
    /// Filter of the last load that committed posts to the view.
    applied_filter: Option<FeedFilter>,
}

impl FeedState {
    fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            posts: self.posts.clone(),
            active_filter: self.active_filter,
            loading: self.loading,
            refreshing: self.refreshing,
            has_more: false,
            loading_more: false,
        }
    }
}

/// Computes the visible posts for `filter` from the full dataset.
pub fn apply_filter(posts: Vec<Post>, filter: FeedFilter) -> Vec<Post> {
    match filter {
        FeedFilter::Premium => posts.into_iter().filter(|p| p.is_premium_content).collect(),
        FeedFilter::Trending => {
            let mut posts = posts;
            // `sort_by` is stable: equal like counts keep dataset order.
            posts.sort_by(|a, b| b.likes.cmp(&a.likes));
            posts
        }
        FeedFilter::All | FeedFilter::Following => posts,
    }
}

pub struct FeedDataController {
    source: Arc<dyn PostSource>,
    load_timeout: Option<Duration>,
    state: Mutex<FeedState>,
    events: broadcast::Sender<ClientEvent>,
}

impl FeedDataController {
    pub fn new(source: Arc<dyn PostSource>, options: FeedOptions) -> Self {
        Self::with_events(source, options, event_channel())
    }

    pub fn with_events(
        source: Arc<dyn PostSource>,
        options: FeedOptions,
        events: broadcast::Sender<ClientEvent>,
    ) -> Self {
        Self {
            source,
            load_timeout: options.load_timeout,
            state: Mutex::new(FeedState {
                posts: Vec::new(),
                active_filter: options.initial_filter,
                loading: false,
                refreshing: false,
                latest_request: 0,
                applied_filter: None,
            }),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state_guard().snapshot()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state_guard().posts.clone()
    }

    pub fn post(&self, id: &PostId) -> Option<Post> {
        self.state_guard().posts.iter().find(|p| &p.id == id).cloned()
    }

    pub fn active_filter(&self) -> FeedFilter {
        self.state_guard().active_filter
    }

    pub fn is_loading(&self) -> bool {
        self.state_guard().loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.state_guard().refreshing
    }

    /// Fetches the dataset and replaces the view with `filter` applied.
    pub async fn load_posts(&self, filter: FeedFilter) -> LoadOutcome {
        self.run_load(filter, LoadKind::Load).await
    }

    /// Pull-to-refresh: reloads the current filter, flagging `refreshing`.
    pub async fn refresh(&self) -> LoadOutcome {
        let filter = self.active_filter();
        self.run_load(filter, LoadKind::Refresh).await
    }

    /// Switches filter and reloads. Selecting the filter whose posts are
    /// already shown is a no-op while no load is in flight; a filter whose
    /// last load failed is fetched again.
    pub async fn set_active_filter(&self, filter: FeedFilter) -> LoadOutcome {
        {
            let state = self.state_guard();
            let busy = state.loading || state.refreshing;
            if !busy && state.applied_filter == Some(filter) && state.active_filter == filter {
                return LoadOutcome::Unchanged { filter };
            }
        }
        info!(filter = %filter, "feed: filter selected");
        self.load_posts(filter).await
    }

    pub fn like_post(&self, id: &PostId) -> bool {
        self.bump(id, Counter::Likes)
    }

    pub fn comment_on_post(&self, id: &PostId) -> bool {
        self.bump(id, Counter::Comments)
    }

    pub fn share_post(&self, id: &PostId) -> bool {
        self.bump(id, Counter::Shares)
    }

    async fn run_load(&self, filter: FeedFilter, kind: LoadKind) -> LoadOutcome {
        let request = {
            let mut state = self.state_guard();
            state.latest_request += 1;
            state.active_filter = filter;
            match kind {
                LoadKind::Load => state.loading = true,
                LoadKind::Refresh => state.refreshing = true,
            }
            state.latest_request
        };
        if filter == FeedFilter::Following {
            debug!("feed: following filter has no rule yet; showing all posts");
        }
        debug!(request, filter = %filter, ?kind, "feed: load started");

        let fetched = self.fetch().await;

        let (outcome, event) = {
            let mut state = self.state_guard();
            if state.latest_request != request {
                debug!(request, latest = state.latest_request, filter = %filter, "feed: discarding superseded load");
                return LoadOutcome::Superseded { filter };
            }
            // Older requests were abandoned, so the newest one settles every flag.
            state.loading = false;
            state.refreshing = false;
            match fetched {
                Ok(posts) => {
                    state.posts = apply_filter(posts, filter);
                    state.applied_filter = Some(filter);
                    let post_count = state.posts.len();
                    info!(filter = %filter, post_count, "feed: posts loaded");
                    (
                        LoadOutcome::Applied { filter, post_count },
                        ClientEvent::FeedUpdated(state.snapshot()),
                    )
                }
                Err(err) => {
                    error!(filter = %filter, error = %err, "feed: error loading posts");
                    (
                        LoadOutcome::Failed(err.clone()),
                        ClientEvent::FeedLoadFailed { filter, error: err },
                    )
                }
            }
        };
        let _ = self.events.send(event);
        outcome
    }

    async fn fetch(&self) -> Result<Vec<Post>, ClientError> {
        let fetch = self.source.fetch_posts();
        let result = match self.load_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(ClientError::timeout(format!(
                        "post source did not answer within {}ms",
                        limit.as_millis()
                    )))
                }
            },
            None => fetch.await,
        };
        result.map_err(|err| ClientError::load(format!("{err:#}")))
    }

    fn bump(&self, id: &PostId, counter: Counter) -> bool {
        let updated = {
            let mut state = self.state_guard();
            let Some(post) = state.posts.iter_mut().find(|p| &p.id == id) else {
                debug!(post_id = %id, ?counter, "feed: post not in view; ignoring");
                return false;
            };
            let value = match counter {
                Counter::Likes => &mut post.likes,
                Counter::Comments => &mut post.comments,
                Counter::Shares => &mut post.shares,
            };
            *value = value.saturating_add(1);
            post.clone()
        };
        let _ = self.events.send(ClientEvent::PostUpdated(updated));
        true
    }

    fn state_guard(&self) -> MutexGuard<'_, FeedState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
