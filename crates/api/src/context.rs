use smartstock_auth::SessionUser;
use smartstock_core::UserId;

/// Signed-in user for a request.
///
/// Inserted by the session guard; present on every guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user: SessionUser,
}

impl SessionContext {
    pub fn new(user: SessionUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn uid(&self) -> &UserId {
        &self.user.uid
    }
}
