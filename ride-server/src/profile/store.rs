//! In-memory profile state.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::DomainError;

use super::payment::{PaymentMethod, PaymentMethods};
use super::preferences::{Preferences, UserProfile};

struct ProfileState {
    profile: UserProfile,
    payments: PaymentMethods,
}

/// Thread-safe holder for the user's profile and payment methods.
///
/// Changes live only as long as the process; nothing is persisted.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<ProfileState>>,
}

impl ProfileStore {
    pub fn new(profile: UserProfile, payments: PaymentMethods) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ProfileState { profile, payments })),
        }
    }

    /// Snapshot of the current profile.
    pub async fn profile(&self) -> UserProfile {
        self.inner.read().await.profile.clone()
    }

    /// Snapshot of the saved payment methods.
    pub async fn payment_methods(&self) -> PaymentMethods {
        self.inner.read().await.payments.clone()
    }

    /// Replace the preferences after validating them.
    ///
    /// The preferred payment method must be one that is currently on file.
    pub async fn update_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, DomainError> {
        preferences.validate()?;

        let mut guard = self.inner.write().await;
        if !guard.payments.contains(&preferences.preferred_payment_method) {
            return Err(DomainError::UnknownPaymentMethod(
                preferences.preferred_payment_method,
            ));
        }
        guard.profile.preferences = preferences.clone();
        info!(user = %guard.profile.id, "preferences updated");

        Ok(preferences)
    }

    /// Make `id` the default payment method.
    pub async fn set_default_payment(&self, id: &str) -> Result<PaymentMethods, DomainError> {
        let mut guard = self.inner.write().await;
        guard.payments.set_default(id)?;
        info!(payment_method = id, "default payment method updated");
        Ok(guard.payments.clone())
    }

    /// Remove a payment method.
    pub async fn remove_payment(&self, id: &str) -> Result<PaymentMethod, DomainError> {
        let mut guard = self.inner.write().await;
        let removed = guard.payments.remove(id)?;
        info!(payment_method = id, "payment method removed");
        Ok(removed)
    }
}
