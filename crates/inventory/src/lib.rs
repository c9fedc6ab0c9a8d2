//! Inventory dashboard domain module.
//!
//! This crate turns loosely-typed documents fetched from the record store into
//! strict entities, folds them into KPI snapshots and maps recent records into
//! presentation rows. Everything here is deterministic domain logic (no IO,
//! no HTTP, no storage, no wall clock).

pub mod alert;
pub mod display;
pub mod item;
pub mod kpi;
pub mod normalize;
pub mod record;
pub mod summary;
pub mod transaction;

pub use alert::{derive_low_stock_alerts, AlertRecord};
pub use display::{format_int, format_money, format_time, KpiTiles};
pub use item::InventoryItem;
pub use kpi::{aggregate, start_of_day, DashboardSnapshot};
pub use normalize::{normalize, normalize_all, normalize_timestamp, FromRecord, TimestampInput};
pub use record::RawRecord;
pub use summary::{
    summarize_alerts, summarize_transactions, summarize_transactions_in, AlertRow, Badge,
    BadgeIcon, BadgeTone, RowSet, TransactionRow, MAX_ROWS,
};
pub use transaction::{Transaction, TransactionKind};
