//! Display strings for dashboard view-models.
//!
//! Formatting follows the dashboard's US-English conventions: grouped
//! integers (`12,345`), whole-dollar currency (`$1,235`) and
//! `M/D/YYYY, h:mm:ss AM` timestamps.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use smartstock_core::ValueObject;

use crate::kpi::DashboardSnapshot;

/// Integer with thousands separators.
pub fn format_int(n: impl Into<i128>) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole US dollars, half away from zero (`$1,235`).
pub fn format_money(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or(0);
    if whole < 0 {
        format!("-${}", format_int(-whole))
    } else {
        format!("${}", format_int(whole))
    }
}

/// Local date-time label in `tz`.
pub fn format_time<Tz>(t: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    t.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// The four KPI tiles as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTiles {
    pub stock_on_hand: String,
    pub inventory_value: String,
    pub low_stock: String,
    pub transactions_today: String,
}

impl ValueObject for KpiTiles {}

impl DashboardSnapshot {
    pub fn tiles(&self) -> KpiTiles {
        KpiTiles {
            stock_on_hand: format_int(self.total_quantity),
            inventory_value: format_money(self.total_value),
            low_stock: format_int(self.low_stock_count),
            transactions_today: format_int(self.transactions_today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_int(0u64), "0");
        assert_eq!(format_int(999u64), "999");
        assert_eq!(format_int(1_000u64), "1,000");
        assert_eq!(format_int(1_234_567i64), "1,234,567");
        assert_eq!(format_int(-12_345i64), "-12,345");
        assert_eq!(format_int(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn money_rounds_to_whole_dollars() {
        assert_eq!(format_money(Decimal::new(123_450, 2)), "$1,235");
        assert_eq!(format_money(Decimal::new(123_449, 2)), "$1,234");
        assert_eq!(format_money(Decimal::ZERO), "$0");
        assert_eq!(format_money(Decimal::new(-2_50, 2)), "-$3");
    }

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_time(t, &Utc), "1/2/2024, 3:04:05 PM");

        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_time(t, &tz), "1/2/2024, 10:04:05 AM");
    }

    #[test]
    fn tiles_render_snapshot() {
        let snapshot = DashboardSnapshot {
            total_quantity: 12_000,
            total_value: Decimal::new(6_000_049, 2),
            low_stock_count: 1,
            transactions_today: 0,
        };
        let tiles = snapshot.tiles();
        assert_eq!(tiles.stock_on_hand, "12,000");
        assert_eq!(tiles.inventory_value, "$60,000");
        assert_eq!(tiles.low_stock, "1");
        assert_eq!(tiles.transactions_today, "0");
    }
}
