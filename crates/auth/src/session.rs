use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use smartstock_core::UserId;

use crate::identity::{initials_of, user_label};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login.html";

/// Where a successful sign-in / sign-up lands.
pub const DASHBOARD_PATH: &str = "/index.html";

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uid: UserId,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl SessionUser {
    pub fn new(uid: UserId) -> Self {
        Self {
            uid,
            display_name: None,
            email: None,
            photo_url: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Header label: display name, then email, then "User".
    pub fn label(&self) -> String {
        user_label(self.display_name.as_deref(), self.email.as_deref())
    }

    /// Avatar initials (at most two characters).
    pub fn initials(&self) -> String {
        initials_of(self.display_name.as_deref(), self.email.as_deref())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("sign-out failed: {0}")]
    SignOut(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface onto the identity provider.
///
/// Only the outer (HTTP) layer talks to this; the aggregation core never does.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// The currently signed-in user, if any.
    async fn current_user(&self) -> Option<SessionUser>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), SessionError>;
}

#[async_trait::async_trait]
impl<S> SessionProvider for Arc<S>
where
    S: SessionProvider + ?Sized,
{
    async fn current_user(&self) -> Option<SessionUser> {
        (**self).current_user().await
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        (**self).sign_out().await
    }
}

/// In-memory session for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    inner: RwLock<Option<SessionUser>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            inner: RwLock::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: SessionUser) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(user);
        }
    }
}

#[async_trait::async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_user(&self) -> Option<SessionUser> {
        self.inner.read().ok()?.clone()
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| SessionError::SignOut("session lock poisoned".to_string()))?;
        if let Some(user) = slot.take() {
            tracing::info!(uid = %user.uid, "signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> SessionUser {
        SessionUser::new(UserId::parse("uid-1").unwrap())
            .with_display_name("Alice Smith")
            .with_email("alice@example.com")
    }

    #[tokio::test]
    async fn sign_out_clears_current_user() {
        let provider = InMemorySessionProvider::signed_in(alice());
        assert_eq!(provider.current_user().await, Some(alice()));

        provider.sign_out().await.unwrap();
        assert_eq!(provider.current_user().await, None);

        // Signing out twice is harmless.
        provider.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn arc_provider_delegates() {
        let provider: Arc<dyn SessionProvider> = Arc::new(InMemorySessionProvider::new());
        assert_eq!(provider.current_user().await, None);
    }

    #[test]
    fn label_and_initials() {
        let user = alice();
        assert_eq!(user.label(), "Alice Smith");
        assert_eq!(user.initials(), "AS");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["displayName"], "Alice Smith");
        assert_eq!(json["uid"], "uid-1");
    }
}
