//! Dashboard loading: fetch, normalize, aggregate and summarize.
//!
//! The three regions (KPIs, alerts, recent transactions) load concurrently and
//! independently. A region whose fetch fails is logged and stays `Loading`;
//! the others are unaffected.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use smartstock_inventory::{
    aggregate, derive_low_stock_alerts, normalize_all, summarize_alerts,
    summarize_transactions_in, AlertRecord, AlertRow, DashboardSnapshot, InventoryItem, KpiTiles,
    RowSet, Transaction, TransactionRow,
};

use crate::config::{AlertSource, DashboardConfig};
use crate::record_store::{FetchError, RecordStore};

/// One independently loaded part of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Region<T> {
    Loading,
    Ready(T),
}

impl<T> Region<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPanel {
    pub snapshot: DashboardSnapshot,
    pub tiles: KpiTiles,
}

impl From<DashboardSnapshot> for KpiPanel {
    fn from(snapshot: DashboardSnapshot) -> Self {
        let tiles = snapshot.tiles();
        Self { snapshot, tiles }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub as_of: DateTime<FixedOffset>,
    pub kpis: Region<KpiPanel>,
    pub alerts: Region<RowSet<AlertRow>>,
    pub transactions: Region<RowSet<TransactionRow>>,
}

/// Loads dashboard regions from an injected [`RecordStore`].
#[derive(Debug, Clone)]
pub struct DashboardService<S> {
    store: S,
    config: DashboardConfig,
}

impl<S: RecordStore> DashboardService<S> {
    pub fn new(store: S, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Current instant in the configured offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.config.utc_offset)
    }

    /// KPI snapshot over all items and the most recent transaction window.
    pub async fn load_kpis(&self, as_of: &DateTime<FixedOffset>) -> Result<KpiPanel, FetchError> {
        let cfg = &self.config;
        let (items, recent) = tokio::try_join!(
            self.store.fetch_all(&cfg.items_collection),
            self.store.fetch_recent(
                &cfg.transactions_collection,
                &cfg.order_field,
                cfg.kpi_transaction_window,
            ),
        )?;

        let items = normalize_all::<InventoryItem>(&items);
        let recent = normalize_all::<Transaction>(&recent);
        let snapshot = aggregate(&items, &recent, as_of);

        tracing::debug!(
            items = items.len(),
            transactions = recent.len(),
            low_stock = snapshot.low_stock_count,
            "kpis aggregated"
        );
        Ok(snapshot.into())
    }

    /// Alert rows from the configured [`AlertSource`].
    pub async fn load_alerts(&self) -> Result<RowSet<AlertRow>, FetchError> {
        let cfg = &self.config;
        let alerts = match cfg.alert_source {
            AlertSource::Explicit => {
                let records = self
                    .store
                    .fetch_recent(&cfg.alerts_collection, &cfg.order_field, cfg.alert_limit)
                    .await?;
                normalize_all::<AlertRecord>(&records)
            }
            AlertSource::Derived => {
                let records = self.store.fetch_all(&cfg.items_collection).await?;
                let mut alerts = derive_low_stock_alerts(&normalize_all::<InventoryItem>(&records));
                alerts.truncate(cfg.alert_limit);
                alerts
            }
        };
        Ok(summarize_alerts(&alerts))
    }

    /// Most recent transactions as rows, time labels in the configured offset.
    pub async fn load_transactions(&self) -> Result<RowSet<TransactionRow>, FetchError> {
        let cfg = &self.config;
        let records = self
            .store
            .fetch_recent(
                &cfg.transactions_collection,
                &cfg.order_field,
                cfg.transaction_limit,
            )
            .await?;
        let transactions = normalize_all::<Transaction>(&records);
        Ok(summarize_transactions_in(&transactions, &cfg.utc_offset))
    }

    /// Load every region concurrently. Never fails as a whole.
    pub async fn load_dashboard(&self, as_of: DateTime<FixedOffset>) -> DashboardView {
        let (kpis, alerts, transactions) = tokio::join!(
            self.load_kpis(&as_of),
            self.load_alerts(),
            self.load_transactions(),
        );

        DashboardView {
            as_of,
            kpis: settle("kpis", kpis),
            alerts: settle("alerts", alerts),
            transactions: settle("transactions", transactions),
        }
    }
}

fn settle<T>(region: &'static str, result: Result<T, FetchError>) -> Region<T> {
    match result {
        Ok(value) => Region::Ready(value),
        Err(e) => {
            tracing::warn!(region, error = %e, "dashboard region failed to load");
            Region::Loading
        }
    }
}
