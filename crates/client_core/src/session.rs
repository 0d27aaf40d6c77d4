use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::{
    domain::UserType,
    protocol::{PremiumFeatures, User},
};
use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use crate::{event_channel, mock_data, ClientEvent};

/// The signed-in identity, constructed once and shared with consumers.
pub struct UserSession {
    session_id: Uuid,
    user: RwLock<Option<User>>,
    events: broadcast::Sender<ClientEvent>,
}

impl UserSession {
    pub fn new(user: Option<User>) -> Self {
        Self::with_events(user, event_channel())
    }

    pub fn with_events(user: Option<User>, events: broadcast::Sender<ClientEvent>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user: RwLock::new(user),
            events,
        }
    }

    pub fn mock() -> Self {
        Self::new(Some(mock_data::mock_user()))
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn is_premium(&self) -> bool {
        self.read().as_ref().is_some_and(User::is_premium)
    }

    pub fn premium_features(&self) -> PremiumFeatures {
        let user_type = self
            .read()
            .as_ref()
            .map(|u| u.user_type)
            .unwrap_or_default();
        PremiumFeatures::for_user_type(user_type)
    }

    pub fn sign_in(&self, user: User) {
        info!(session_id = %self.session_id, user_id = %user.id, "session: signed in");
        *self.write() = Some(user.clone());
        self.publish(Some(user));
    }

    /// One-way upgrade. Returns `false` when signed out or already premium.
    pub fn upgrade_to_premium(&self) -> bool {
        let upgraded = {
            let mut guard = self.write();
            match guard.as_mut() {
                Some(user) if user.user_type == UserType::Free => {
                    user.user_type = UserType::Premium;
                    Some(user.clone())
                }
                _ => None,
            }
        };
        match upgraded {
            Some(user) => {
                info!(session_id = %self.session_id, user_id = %user.id, "session: upgraded to premium");
                self.publish(Some(user));
                true
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        let previous = self.write().take();
        if let Some(user) = previous {
            info!(session_id = %self.session_id, user_id = %user.id, "session: logged out");
            self.publish(None);
        }
    }

    fn publish(&self, user: Option<User>) {
        let _ = self.events.send(ClientEvent::SessionChanged(user));
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.user.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.user.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
