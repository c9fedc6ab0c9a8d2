use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use smartstock_auth::{AuthFlow, SessionUser};
use smartstock_infra::ProfileOutcome;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    /// RFC 3339 instant; defaults to now in the configured offset.
    pub as_of: Option<String>,
}

impl AsOfQuery {
    pub fn parse(&self) -> Result<Option<DateTime<FixedOffset>>, axum::response::Response> {
        match self.as_of.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(raw) => DateTime::parse_from_rfc3339(raw).map(Some).map_err(|_| {
                errors::json_error(
                    axum::http::StatusCode::BAD_REQUEST,
                    "invalid_as_of",
                    "as_of must be an RFC 3339 timestamp",
                )
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthErrorRequest {
    pub flow: AuthFlow,
    pub code: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub uid: String,
    pub label: String,
    pub initials: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&SessionUser> for SessionResponse {
    fn from(user: &SessionUser) -> Self {
        Self {
            uid: user.uid.to_string(),
            label: user.label(),
            initials: user.initials(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            photo_url: user.photo_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub outcome: &'static str,
}

impl From<ProfileOutcome> for ProfileResponse {
    fn from(outcome: ProfileOutcome) -> Self {
        Self {
            outcome: match outcome {
                ProfileOutcome::Created => "created",
                ProfileOutcome::Existing => "existing",
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAccepted {
    pub redirect: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
