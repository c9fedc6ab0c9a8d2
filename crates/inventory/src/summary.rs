//! Alert / transaction summarizer: bounded lists of presentation rows.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use smartstock_core::{AlertId, ItemId, TransactionId, ValueObject};

use crate::alert::AlertRecord;
use crate::display::{format_int, format_time};
use crate::transaction::{Transaction, TransactionKind};

/// Maximum rows in a summarized list.
pub const MAX_ROWS: usize = 8;

const UNKNOWN_ITEM: &str = "Unknown item";
const NO_TIME: &str = "—";

/// A summarized list, with an explicit variant for "nothing to show".
///
/// `Empty` is distinct from a list of rows so the renderer can show its own
/// empty-state message instead of an empty container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "rows", rename_all = "snake_case")]
pub enum RowSet<T> {
    Empty,
    Rows(Vec<T>),
}

impl<T: ValueObject> RowSet<T> {
    fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeIcon {
    DownArrow,
    UpArrow,
    Wrench,
    Swap,
    Dot,
}

impl BadgeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeIcon::DownArrow => "⬇️",
            BadgeIcon::UpArrow => "⬆️",
            BadgeIcon::Wrench => "🛠️",
            BadgeIcon::Swap => "↔️",
            BadgeIcon::Dot => "•",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Red,
    Indigo,
    Amber,
    Gray,
}

/// Visual classification of a transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub icon: BadgeIcon,
    pub tone: BadgeTone,
}

impl ValueObject for Badge {}

impl Badge {
    /// Total over [`TransactionKind`]: every kind has a badge.
    pub fn for_kind(kind: TransactionKind) -> Self {
        let (icon, tone) = match kind {
            TransactionKind::In => (BadgeIcon::DownArrow, BadgeTone::Green),
            TransactionKind::Out => (BadgeIcon::UpArrow, BadgeTone::Red),
            TransactionKind::Adjust => (BadgeIcon::Wrench, BadgeTone::Indigo),
            TransactionKind::Transfer => (BadgeIcon::Swap, BadgeTone::Amber),
            TransactionKind::Unknown => (BadgeIcon::Dot, BadgeTone::Gray),
        };
        Self { icon, tone }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRow {
    pub alert_id: AlertId,
    pub item_id: Option<ItemId>,
    pub label: String,
    pub current_quantity: u64,
    pub reorder_point: u64,
    pub detail: String,
}

impl ValueObject for AlertRow {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub transaction_id: TransactionId,
    pub label: String,
    pub kind: TransactionKind,
    pub badge: Badge,
    pub quantity: i64,
    pub quantity_label: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub time_label: String,
}

impl ValueObject for TransactionRow {}

fn item_label(item_name: Option<&str>, item_id: Option<&ItemId>) -> String {
    item_name
        .or_else(|| item_id.map(ItemId::as_str))
        .unwrap_or(UNKNOWN_ITEM)
        .to_string()
}

/// First [`MAX_ROWS`] alerts as rows, input order preserved.
///
/// Callers pass alerts already ordered newest-first.
pub fn summarize_alerts(alerts: &[AlertRecord]) -> RowSet<AlertRow> {
    let rows = alerts
        .iter()
        .take(MAX_ROWS)
        .map(|alert| AlertRow {
            alert_id: alert.alert_id().clone(),
            item_id: alert.item_id().cloned(),
            label: item_label(alert.item_name(), alert.item_id()),
            current_quantity: alert.current_quantity(),
            reorder_point: alert.reorder_point(),
            detail: format!(
                "Qty: {} · Reorder at {}",
                format_int(alert.current_quantity()),
                format_int(alert.reorder_point())
            ),
        })
        .collect();
    RowSet::from_rows(rows)
}

/// [`summarize_transactions_in`] with UTC time labels.
pub fn summarize_transactions(transactions: &[Transaction]) -> RowSet<TransactionRow> {
    summarize_transactions_in(transactions, &Utc)
}

/// First [`MAX_ROWS`] transactions as rows with time labels rendered in `tz`.
pub fn summarize_transactions_in<Tz>(
    transactions: &[Transaction],
    tz: &Tz,
) -> RowSet<TransactionRow>
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    let rows = transactions
        .iter()
        .take(MAX_ROWS)
        .map(|txn| TransactionRow {
            transaction_id: txn.transaction_id().clone(),
            label: item_label(txn.item_name(), txn.item_id()),
            kind: txn.kind(),
            badge: Badge::for_kind(txn.kind()),
            quantity: txn.quantity(),
            quantity_label: format_int(txn.quantity()),
            occurred_at: txn.occurred_at(),
            time_label: txn
                .occurred_at()
                .map(|t| format_time(t, tz))
                .unwrap_or_else(|| NO_TIME.to_string()),
        })
        .collect();
    RowSet::from_rows(rows)
}
