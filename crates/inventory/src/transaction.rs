use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartstock_core::{DomainResult, Entity, ItemId, TransactionId};

use crate::normalize::{coerce_integer, document_id, normalize_timestamp, FromRecord};
use crate::record::RawRecord;

/// Kind of stock movement.
///
/// Parsing is total: anything unrecognized becomes [`TransactionKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    In,
    Out,
    Adjust,
    Transfer,
    Unknown,
}

impl TransactionKind {
    /// Case-insensitive parse; never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IN" => Self::In,
            "OUT" => Self::Out,
            "ADJUST" => Self::Adjust,
            "TRANSFER" => Self::Transfer,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Adjust => "ADJUST",
            Self::Transfer => "TRANSFER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stock transaction as read from the `transactions` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    item_id: Option<ItemId>,
    item_name: Option<String>,
    kind: TransactionKind,
    quantity: i64,
    occurred_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        quantity: i64,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            item_id: None,
            item_name: None,
            kind,
            quantity,
            occurred_at,
        }
    }

    pub fn with_item(mut self, item_id: Option<ItemId>, item_name: Option<String>) -> Self {
        self.item_id = item_id;
        self.item_name = item_name;
        self
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.id
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.occurred_at
    }
}

impl Entity for Transaction {
    type Id = TransactionId;
    const KIND: &'static str = "transaction";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl FromRecord for Transaction {
    fn from_record(record: &RawRecord) -> DomainResult<Self> {
        let id = document_id::<TransactionId>(record, Self::KIND)?;
        Ok(Self {
            id,
            item_id: record.text("itemId").and_then(|s| ItemId::parse(s).ok()),
            item_name: record.text("itemName").map(str::to_string),
            kind: record
                .text("type")
                .map(TransactionKind::parse)
                .unwrap_or(TransactionKind::Unknown),
            quantity: coerce_integer(record.first_field(&["qty", "quantity"])).unwrap_or(0),
            occurred_at: normalize_timestamp(record.field("createdAt")),
        })
    }
}
