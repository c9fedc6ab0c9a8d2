//! KPI aggregation: items + recent transactions in, dashboard snapshot out.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use smartstock_core::ValueObject;

use crate::item::InventoryItem;
use crate::transaction::Transaction;

/// Dashboard summary values.
///
/// Produced fresh on every load; no identity beyond its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub total_quantity: u64,
    pub total_value: Decimal,
    pub low_stock_count: u64,
    pub transactions_today: u64,
}

impl ValueObject for DashboardSnapshot {}

/// Fold items and recent transactions into a [`DashboardSnapshot`].
///
/// - `total_quantity`: Σ quantity
/// - `total_value`: Σ quantity × unit cost (exact decimal arithmetic)
/// - `low_stock_count`: items with a positive reorder point and
///   `quantity <= reorder_point`
/// - `transactions_today`: transactions with `start_of_day(as_of) <= t <= as_of`
///
/// Pure and order-independent: all sums are over non-negative terms and
/// saturate, so any permutation of the inputs gives the same snapshot.
pub fn aggregate<Tz: TimeZone>(
    items: &[InventoryItem],
    recent_transactions: &[Transaction],
    as_of: &DateTime<Tz>,
) -> DashboardSnapshot {
    let mut snapshot = DashboardSnapshot::default();

    for item in items {
        snapshot.total_quantity = snapshot.total_quantity.saturating_add(item.quantity());
        snapshot.total_value = snapshot.total_value.saturating_add(item.value());
        if item.is_low_stock() {
            snapshot.low_stock_count += 1;
        }
    }

    let day_start = start_of_day(as_of);
    let upper = as_of.with_timezone(&Utc);
    snapshot.transactions_today = recent_transactions
        .iter()
        .filter_map(Transaction::occurred_at)
        .filter(|t| *t >= day_start && *t <= upper)
        .count() as u64;

    snapshot
}

/// Midnight of `as_of`'s calendar day, in `as_of`'s own time zone.
///
/// If local midnight does not exist (DST gap), the day starts at the earliest
/// instant of that date.
pub fn start_of_day<Tz: TimeZone>(as_of: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = as_of.timezone();
    let midnight = as_of.date_naive().and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        None => {
            let since_midnight = as_of.time().signed_duration_since(NaiveTime::MIN);
            (as_of.clone() - since_midnight).with_timezone(&Utc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::{Duration, FixedOffset};
    use proptest::prelude::*;
    use smartstock_core::{ItemId, TransactionId};

    fn item(id: &str, quantity: u64, cost: i64, reorder_point: u64) -> InventoryItem {
        InventoryItem::new(
            ItemId::parse(id).unwrap(),
            quantity,
            Decimal::from(cost),
            reorder_point,
        )
    }

    fn txn(id: &str, occurred_at: Option<DateTime<Utc>>) -> Transaction {
        Transaction::new(
            TransactionId::parse(id).unwrap(),
            TransactionKind::In,
            1,
            occurred_at,
        )
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_inputs_give_zero_snapshot() {
        let snapshot = aggregate(&[], &[], &noon());
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert_eq!(snapshot.total_value, Decimal::ZERO);
    }

    #[test]
    fn worked_example() {
        let items = vec![item("a", 10, 5, 3), item("b", 2, 5, 3)];
        let snapshot = aggregate(&items, &[], &noon());
        assert_eq!(snapshot.total_quantity, 12);
        assert_eq!(snapshot.total_value, Decimal::from(60));
        assert_eq!(snapshot.low_stock_count, 1);
        assert_eq!(snapshot.transactions_today, 0);
    }

    #[test]
    fn zero_reorder_point_never_counts_as_low_stock() {
        let items = vec![item("a", 0, 1, 0), item("b", 100, 1, 0)];
        assert_eq!(aggregate(&items, &[], &noon()).low_stock_count, 0);
    }

    #[test]
    fn today_window_is_inclusive_of_midnight_and_as_of() {
        let as_of = noon();
        let midnight = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let txns = vec![
            txn("midnight", Some(midnight)),
            txn("just-before", Some(midnight - Duration::seconds(1))),
            txn("morning", Some(midnight + Duration::hours(9))),
            txn("exactly-now", Some(as_of)),
            txn("later-today", Some(as_of + Duration::minutes(1))),
            txn("untimed", None),
        ];

        assert_eq!(aggregate(&[], &txns, &as_of).transactions_today, 3);
    }

    #[test]
    fn day_boundary_follows_as_of_time_zone() {
        // 01:00 on May 10 at UTC+02:00 is 23:00 on May 9 in UTC.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let as_of = tz.with_ymd_and_hms(2024, 5, 10, 1, 0, 0).unwrap();
        assert_eq!(
            start_of_day(&as_of),
            Utc.with_ymd_and_hms(2024, 5, 9, 22, 0, 0).unwrap()
        );

        // 21:30 UTC on May 9 is still "yesterday" at UTC+02:00, but "today" in UTC.
        let txns = vec![
            txn("before-local-midnight", Some(Utc.with_ymd_and_hms(2024, 5, 9, 21, 30, 0).unwrap())),
            txn("after-local-midnight", Some(Utc.with_ymd_and_hms(2024, 5, 9, 22, 30, 0).unwrap())),
        ];
        assert_eq!(aggregate(&[], &txns, &as_of).transactions_today, 1);
        assert_eq!(
            aggregate(&[], &txns, &as_of.with_timezone(&Utc)).transactions_today,
            2
        );
    }

    #[test]
    fn fractional_costs_sum_exactly() {
        let items: Vec<_> = (0..10)
            .map(|i| {
                InventoryItem::new(
                    ItemId::parse(format!("i{i}")).unwrap(),
                    1,
                    Decimal::new(1, 1),
                    0,
                )
            })
            .collect();
        assert_eq!(aggregate(&items, &[], &noon()).total_value, Decimal::ONE);
    }

    fn arb_item() -> impl Strategy<Value = InventoryItem> {
        (0u64..100_000, 0i64..1_000_000, 0u32..4, 0u64..50).prop_map(
            |(quantity, cost_minor, scale, reorder_point)| {
                InventoryItem::new(
                    ItemId::generate(),
                    quantity,
                    Decimal::new(cost_minor, scale),
                    reorder_point,
                )
            },
        )
    }

    fn arb_txn() -> impl Strategy<Value = Transaction> {
        prop::option::of(-172_800i64..172_800).prop_map(|offset| {
            Transaction::new(
                TransactionId::generate(),
                TransactionKind::Out,
                1,
                offset.map(|s| noon() + Duration::seconds(s)),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals do not depend on input order.
        #[test]
        fn totals_are_permutation_invariant(
            items in prop::collection::vec(arb_item(), 0..32),
            txns in prop::collection::vec(arb_txn(), 0..32),
        ) {
            let forward = aggregate(&items, &txns, &noon());

            let mut rev_items = items.clone();
            rev_items.reverse();
            let mut rev_txns = txns.clone();
            rev_txns.reverse();
            let backward = aggregate(&rev_items, &rev_txns, &noon());

            prop_assert_eq!(forward, backward);
        }

        /// Property: aggregation is idempotent.
        #[test]
        fn aggregate_is_idempotent(
            items in prop::collection::vec(arb_item(), 0..32),
            txns in prop::collection::vec(arb_txn(), 0..32),
        ) {
            prop_assert_eq!(
                aggregate(&items, &txns, &noon()),
                aggregate(&items, &txns, &noon())
            );
        }

        /// Property: untimestamped transactions never count toward today.
        #[test]
        fn untimed_transactions_never_count(
            count in 0usize..20,
            hours in -48i64..48,
        ) {
            let txns: Vec<_> = (0..count).map(|i| txn(&format!("u{i}"), None)).collect();
            let as_of = noon() + Duration::hours(hours);
            prop_assert_eq!(aggregate(&[], &txns, &as_of).transactions_today, 0);
        }
    }
}
