use std::sync::Arc;

use shared::{
    domain::FeedFilter,
    error::ClientError,
    protocol::{FeedSnapshot, OnboardingStatus, Post, User},
};
use storage::KeyValueStore;
use tokio::sync::broadcast;

pub mod feed;
pub mod mock_data;
pub mod onboarding;
pub mod session;
pub mod source;
pub mod wizard;

pub use feed::{apply_filter, FeedDataController, FeedOptions, LoadOutcome};
pub use onboarding::{OnboardingFlowController, OnboardingPhase, ONBOARDING_COMPLETE_KEY};
pub use session::UserSession;
pub use source::{LatencyProfile, PostSource, StaticPostSource};
pub use wizard::{OnboardingStep, OnboardingWizard, WizardError};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// State changes published to presentation layers.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    OnboardingStatusChanged(OnboardingStatus),
    FeedUpdated(FeedSnapshot),
    PostUpdated(Post),
    FeedLoadFailed {
        filter: FeedFilter,
        error: ClientError,
    },
    SessionChanged(Option<User>),
}

pub fn event_channel() -> broadcast::Sender<ClientEvent> {
    let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    events
}

/// Controllers built once at start-up and handed to consumers by reference.
pub struct ClientContext {
    pub onboarding: Arc<OnboardingFlowController>,
    pub feed: Arc<FeedDataController>,
    pub session: Arc<UserSession>,
    events: broadcast::Sender<ClientEvent>,
}

impl ClientContext {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn PostSource>,
        options: FeedOptions,
        user: Option<User>,
    ) -> Self {
        let events = event_channel();
        Self {
            onboarding: Arc::new(OnboardingFlowController::with_events(
                store,
                events.clone(),
            )),
            feed: Arc::new(FeedDataController::with_events(
                source,
                options,
                events.clone(),
            )),
            session: Arc::new(UserSession::with_events(user, events.clone())),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
