//! First-sign-in profile document upsert.

use chrono::{DateTime, Utc};

use smartstock_auth::{SessionUser, UserProfile};
use smartstock_inventory::RawRecord;

use crate::record_store::{DocumentStore, FetchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOutcome {
    Created,
    Existing,
}

/// Make sure `{collection}/{uid}` exists, creating it from `user` if missing.
///
/// An existing document is never overwritten.
pub async fn ensure_user_profile<S>(
    store: &S,
    collection: &str,
    user: &SessionUser,
    display_name: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ProfileOutcome, FetchError>
where
    S: DocumentStore + ?Sized,
{
    let uid = user.uid.as_str();
    if store.get(collection, uid).await?.is_some() {
        return Ok(ProfileOutcome::Existing);
    }

    let profile = UserProfile::for_new_user(user, display_name, now);
    let mut record: RawRecord =
        serde_json::to_value(&profile)
            .and_then(serde_json::from_value)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
    record.id = Some(uid.to_string());

    store.put(collection, record).await?;
    tracing::info!(uid, collection, "created user profile");
    Ok(ProfileOutcome::Created)
}
