//! First-run gate backed by a single persisted flag.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use shared::{domain::InitialRoute, protocol::OnboardingStatus};
use storage::KeyValueStore;
use tokio::sync::{broadcast, OnceCell};
use tracing::{info, warn};

use crate::{event_channel, ClientEvent};

pub const ONBOARDING_COMPLETE_KEY: &str = "onboarding_complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingPhase {
    /// The persisted flag has not been read yet.
    Unknown,
    Incomplete,
    Complete,
}

impl OnboardingPhase {
    fn status(self) -> OnboardingStatus {
        OnboardingStatus {
            is_onboarding_complete: self == OnboardingPhase::Complete,
            is_loading: self == OnboardingPhase::Unknown,
        }
    }
}

pub struct OnboardingFlowController {
    store: Arc<dyn KeyValueStore>,
    phase: Mutex<OnboardingPhase>,
    loaded: OnceCell<()>,
    events: broadcast::Sender<ClientEvent>,
}

impl OnboardingFlowController {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_events(store, event_channel())
    }

    pub fn with_events(store: Arc<dyn KeyValueStore>, events: broadcast::Sender<ClientEvent>) -> Self {
        Self {
            store,
            phase: Mutex::new(OnboardingPhase::Unknown),
            loaded: OnceCell::new(),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> OnboardingPhase {
        *self.phase_guard()
    }

    /// Current status without touching storage. Reports `is_loading` until the
    /// first [`get_status`](Self::get_status) call has resolved.
    pub fn status(&self) -> OnboardingStatus {
        self.phase().status()
    }

    /// Resolves the completion flag, reading storage at most once per process.
    pub async fn get_status(&self) -> OnboardingStatus {
        self.loaded
            .get_or_init(|| self.load_persisted_flag())
            .await;
        self.status()
    }

    pub fn initial_route(&self) -> Option<InitialRoute> {
        match self.phase() {
            OnboardingPhase::Unknown => None,
            OnboardingPhase::Incomplete => Some(InitialRoute::Onboarding),
            OnboardingPhase::Complete => Some(InitialRoute::Feed),
        }
    }

    /// Marks onboarding complete in memory, then persists the flag best-effort.
    pub async fn complete_onboarding(&self) {
        let changed = {
            let mut phase = self.phase_guard();
            let changed = *phase != OnboardingPhase::Complete;
            *phase = OnboardingPhase::Complete;
            changed
        };
        if changed {
            info!("onboarding: marked complete");
            self.publish(OnboardingPhase::Complete);
        }

        if let Err(err) = self.store.set(ONBOARDING_COMPLETE_KEY, "true").await {
            warn!(error = %err, "onboarding: failed to persist completion flag");
        }
    }

    /// Developer action: forget completion so the next launch shows onboarding.
    /// Memory is left untouched when the persisted flag cannot be cleared.
    pub async fn reset(&self) -> Result<()> {
        self.store
            .remove(ONBOARDING_COMPLETE_KEY)
            .await
            .context("failed to clear persisted onboarding flag")?;
        let _ = self.loaded.set(());
        *self.phase_guard() = OnboardingPhase::Incomplete;
        info!("onboarding: reset");
        self.publish(OnboardingPhase::Incomplete);
        Ok(())
    }

    async fn load_persisted_flag(&self) {
        let persisted = match self.store.get(ONBOARDING_COMPLETE_KEY).await {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
                warn!(error = %err, raw = %raw, "onboarding: unreadable persisted flag; treating as incomplete");
                false
            }),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "onboarding: failed to read persisted flag; treating as incomplete");
                false
            }
        };

        let resolved = {
            let mut phase = self.phase_guard();
            // Completion may have landed while the read was pending.
            if *phase == OnboardingPhase::Unknown {
                *phase = if persisted {
                    OnboardingPhase::Complete
                } else {
                    OnboardingPhase::Incomplete
                };
            }
            *phase
        };
        info!(complete = resolved == OnboardingPhase::Complete, "onboarding: status resolved");
        self.publish(resolved);
    }

    fn publish(&self, phase: OnboardingPhase) {
        let _ = self
            .events
            .send(ClientEvent::OnboardingStatusChanged(phase.status()));
    }

    fn phase_guard(&self) -> MutexGuard<'_, OnboardingPhase> {
        self.phase
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "tests/onboarding_tests.rs"]
mod tests;
