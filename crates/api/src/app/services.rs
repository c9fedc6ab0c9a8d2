use std::sync::Arc;

use smartstock_auth::{InMemorySessionProvider, SessionProvider, SessionUser};
use smartstock_core::UserId;
use smartstock_infra::{
    AppConfig, DashboardConfig, DashboardService, DocumentStore, FetchError, InMemoryRecordStore,
    RecordStore,
};

/// Everything a handler can reach. Cheap to clone.
#[derive(Clone)]
pub struct AppServices {
    pub dashboard: Arc<DashboardService<Arc<dyn RecordStore>>>,
    pub documents: Arc<dyn DocumentStore>,
    pub session: Arc<dyn SessionProvider>,
}

impl AppServices {
    /// Wire services around one store that serves both collection and document reads.
    pub fn new<S>(store: Arc<S>, session: Arc<dyn SessionProvider>, config: DashboardConfig) -> Self
    where
        S: RecordStore + DocumentStore + 'static,
    {
        let records: Arc<dyn RecordStore> = store.clone();
        let documents: Arc<dyn DocumentStore> = store;
        Self {
            dashboard: Arc::new(DashboardService::new(records, config)),
            documents,
            session,
        }
    }

    pub fn users_collection(&self) -> &str {
        &self.dashboard.config().users_collection
    }
}

/// In-memory wiring: record store (optionally seeded) plus in-memory session.
pub fn build_services(config: &AppConfig) -> Result<AppServices, FetchError> {
    let store = match &config.seed_path {
        Some(path) => InMemoryRecordStore::load_seed_file(path)?,
        None => {
            tracing::warn!("no seed path configured; starting with an empty record store");
            InMemoryRecordStore::new()
        }
    };

    let session = InMemorySessionProvider::new();
    if let Some(uid) = &config.dev_user {
        match UserId::parse(uid) {
            Ok(uid) => {
                tracing::warn!(uid = %uid, "dev user configured; session starts signed in");
                session.sign_in(SessionUser::new(uid));
            }
            Err(e) => tracing::warn!(error = %e, "ignoring invalid dev user"),
        }
    }

    Ok(AppServices::new(
        Arc::new(store),
        Arc::new(session),
        config.dashboard.clone(),
    ))
}
