use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartstock_core::UserId;

use crate::session::SessionUser;

pub const DEFAULT_ROLE: &str = "user";

/// Profile document stored at `users/{uid}` on first sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile for a user seen for the first time.
    ///
    /// A non-blank `display_name` (typically from the sign-up form) wins over
    /// the name the identity provider reports.
    pub fn for_new_user(user: &SessionUser, display_name: Option<&str>, now: DateTime<Utc>) -> Self {
        let display_name = display_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| user.display_name.clone());

        Self {
            uid: user.uid.clone(),
            email: user.email.clone(),
            display_name,
            photo_url: user.photo_url.clone(),
            role: DEFAULT_ROLE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
