use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use smartstock_core::{DomainResult, Entity, ItemId};

use crate::normalize::{coerce_count, coerce_non_negative_decimal, document_id, FromRecord};
use crate::record::RawRecord;

/// An inventory item as read from the `items` collection.
///
/// # Invariants
/// - `quantity`, `unit_cost` and `reorder_point` are never negative.
/// - A `reorder_point` of 0 means "no reorder threshold configured".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: Option<String>,
    quantity: u64,
    unit_cost: Decimal,
    reorder_point: u64,
}

impl InventoryItem {
    pub fn new(id: ItemId, quantity: u64, unit_cost: Decimal, reorder_point: u64) -> Self {
        Self {
            id,
            name: None,
            quantity,
            unit_cost: if unit_cost.is_sign_negative() {
                Decimal::ZERO
            } else {
                unit_cost
            },
            reorder_point,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn item_id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn reorder_point(&self) -> u64 {
        self.reorder_point
    }

    /// Stock value: quantity × unit cost (saturating).
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_cost)
    }

    /// Low stock: a threshold is configured and quantity has fallen to it.
    pub fn is_low_stock(&self) -> bool {
        self.reorder_point > 0 && self.quantity <= self.reorder_point
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;
    const KIND: &'static str = "item";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl FromRecord for InventoryItem {
    fn from_record(record: &RawRecord) -> DomainResult<Self> {
        let id = document_id::<ItemId>(record, Self::KIND)?;
        Ok(Self {
            id,
            name: record.text("name").map(str::to_string),
            quantity: coerce_count(record.field("quantity")),
            unit_cost: coerce_non_negative_decimal(record.first_field(&["cost", "unitCost"])),
            reorder_point: coerce_count(record.field("reorderPoint")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, normalize_all};
    use serde_json::json;

    #[test]
    fn normalizes_loosely_typed_fields() {
        let record = RawRecord::new("sku-1")
            .with("name", "Widget")
            .with("quantity", "12")
            .with("cost", "2.50")
            .with("reorderPoint", 4);

        let item: InventoryItem = normalize(&record).unwrap();
        assert_eq!(item.item_id().as_str(), "sku-1");
        assert_eq!(item.name(), Some("Widget"));
        assert_eq!(item.quantity(), 12);
        assert_eq!(item.unit_cost(), Decimal::new(250, 2));
        assert_eq!(item.reorder_point(), 4);
        assert_eq!(item.value(), Decimal::from(30));
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        let record = RawRecord::new("sku-2").with("quantity", json!("lots"));
        let item: InventoryItem = normalize(&record).unwrap();
        assert_eq!(item.quantity(), 0);
        assert_eq!(item.unit_cost(), Decimal::ZERO);
        assert_eq!(item.reorder_point(), 0);
    }

    #[test]
    fn unit_cost_falls_back_to_alias() {
        let record = RawRecord::new("sku-3").with("unitCost", 7);
        let item: InventoryItem = normalize(&record).unwrap();
        assert_eq!(item.unit_cost(), Decimal::from(7));
    }

    #[test]
    fn records_without_id_are_dropped() {
        let records = vec![
            RawRecord::default().with("quantity", 5),
            RawRecord::new("   ").with("quantity", 5),
            RawRecord::new("ok").with("quantity", 5),
        ];
        let items: Vec<InventoryItem> = normalize_all(&records);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_id().as_str(), "ok");
    }

    #[test]
    fn zero_reorder_point_is_never_low_stock() {
        let item = InventoryItem::new(ItemId::parse("a").unwrap(), 0, Decimal::ONE, 0);
        assert!(!item.is_low_stock());

        let item = InventoryItem::new(ItemId::parse("b").unwrap(), 3, Decimal::ONE, 3);
        assert!(item.is_low_stock());
    }
}
