use serde::{Deserialize, Serialize};

use smartstock_core::{AlertId, DomainResult, Entity, ItemId};

use crate::item::InventoryItem;
use crate::normalize::{coerce_count, document_id, FromRecord};
use crate::record::RawRecord;

/// A low-stock alert.
///
/// Alerts come from two independent inputs: an explicit `alerts` feed
/// ([`FromRecord`]) or low-stock items ([`derive_low_stock_alerts`]). The two
/// are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    id: AlertId,
    item_id: Option<ItemId>,
    item_name: Option<String>,
    current_quantity: u64,
    reorder_point: u64,
}

impl AlertRecord {
    pub fn new(
        id: AlertId,
        item_id: Option<ItemId>,
        item_name: Option<String>,
        current_quantity: u64,
        reorder_point: u64,
    ) -> Self {
        Self {
            id,
            item_id,
            item_name,
            current_quantity,
            reorder_point,
        }
    }

    /// Alert describing an item's current stock against its threshold.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: AlertId::from(item.item_id()),
            item_id: Some(item.item_id().clone()),
            item_name: item.name().map(str::to_string),
            current_quantity: item.quantity(),
            reorder_point: item.reorder_point(),
        }
    }

    pub fn alert_id(&self) -> &AlertId {
        &self.id
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    pub fn current_quantity(&self) -> u64 {
        self.current_quantity
    }

    pub fn reorder_point(&self) -> u64 {
        self.reorder_point
    }
}

impl Entity for AlertRecord {
    type Id = AlertId;
    const KIND: &'static str = "alert";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl FromRecord for AlertRecord {
    fn from_record(record: &RawRecord) -> DomainResult<Self> {
        let id = document_id::<AlertId>(record, Self::KIND)?;
        Ok(Self {
            id,
            item_id: record.text("itemId").and_then(|s| ItemId::parse(s).ok()),
            item_name: record.text("itemName").map(str::to_string),
            current_quantity: coerce_count(record.first_field(&["currentQty", "qty"])),
            reorder_point: coerce_count(record.first_field(&["reorderPoint", "reorder"])),
        })
    }
}

/// Alerts for every low-stock item, in input order.
pub fn derive_low_stock_alerts(items: &[InventoryItem]) -> Vec<AlertRecord> {
    items
        .iter()
        .filter(|item| item.is_low_stock())
        .map(AlertRecord::from_item)
        .collect()
}
