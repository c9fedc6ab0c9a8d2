//! Infrastructure layer: record store adapters, dashboard loading, config.

pub mod config;
pub mod dashboard;
pub mod profile;
pub mod record_store;

pub use config::{AlertSource, AppConfig, DashboardConfig};
pub use dashboard::{DashboardService, DashboardView, KpiPanel, Region};
pub use profile::{ensure_user_profile, ProfileOutcome};
pub use record_store::{DocumentStore, FetchError, InMemoryRecordStore, RecordStore};
