use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

pub const DEFAULT_OPEN_TIME: &str = "10:00";
pub const DEFAULT_CLOSE_TIME: &str = "22:00";
pub const DEFAULT_MIN_ORDER_PRICE: i64 = 100;
pub const DEFAULT_DELIVERY_CHARGE: i64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SettingRow {
    pub setting_key: String,
    pub setting_value: String,
    pub updated_at: Option<NaiveDateTime>,
}

/// Immutable snapshot of the restaurant's operational policy, resolved from
/// the key/value rows. Consumers hold a snapshot and the resolver swaps in a
/// fresh one on every change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSettings {
    pub open_time: String,
    pub close_time: String,
    pub min_order_price: Decimal,
    pub delivery_charge: Decimal,
    /// Unrecognized keys (contact details etc.) pass through untouched.
    pub raw: HashMap<String, String>,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self::from_rows(&[])
    }
}

impl RestaurantSettings {
    pub fn from_rows(rows: &[SettingRow]) -> Self {
        let raw: HashMap<String, String> = rows
            .iter()
            .map(|r| (r.setting_key.clone(), r.setting_value.clone()))
            .collect();

        let open_time = raw
            .get("open_time")
            .cloned()
            .unwrap_or_else(|| DEFAULT_OPEN_TIME.to_string());
        let close_time = raw
            .get("close_time")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CLOSE_TIME.to_string());
        let min_order_price = raw
            .get("min_order_price")
            .and_then(|v| v.parse::<Decimal>().ok())
            .unwrap_or_else(|| Decimal::from(DEFAULT_MIN_ORDER_PRICE));
        let delivery_charge = raw
            .get("delivery_charge")
            .and_then(|v| v.parse::<Decimal>().ok())
            .unwrap_or_else(|| Decimal::from(DEFAULT_DELIVERY_CHARGE));

        Self {
            open_time,
            close_time,
            min_order_price,
            delivery_charge,
            raw,
        }
    }

    /// Open-window check against a zero-padded `HH:MM` clock string. The
    /// comparison is lexical and the window is inclusive on both ends; a
    /// window crossing midnight (open > close) never evaluates open — kept
    /// as-is because the intended overnight behavior is ambiguous.
    pub fn is_open_at(&self, current_time: &str) -> bool {
        if self.raw.get("is_open").map(String::as_str) == Some("false") {
            return false;
        }
        self.open_time.as_str() <= current_time && current_time <= self.close_time.as_str()
    }

    /// `is_open` for the current wall clock, matching what the storefront
    /// shows its visitors.
    pub fn is_open_now(&self) -> bool {
        let now = chrono::Local::now().format("%H:%M").to_string();
        self.is_open_at(&now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> SettingRow {
        SettingRow {
            setting_key: key.to_string(),
            setting_value: value.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn defaults_when_rows_missing() {
        let s = RestaurantSettings::from_rows(&[]);
        assert_eq!(s.open_time, "10:00");
        assert_eq!(s.close_time, "22:00");
        assert_eq!(s.min_order_price, Decimal::from(100));
        assert_eq!(s.delivery_charge, Decimal::from(50));
    }

    #[test]
    fn parses_configured_rows_and_keeps_unknown_keys() {
        let s = RestaurantSettings::from_rows(&[
            row("open_time", "09:30"),
            row("close_time", "23:00"),
            row("min_order_price", "250"),
            row("delivery_charge", "40.50"),
            row("whatsapp", "+911234567890"),
        ]);
        assert_eq!(s.open_time, "09:30");
        assert_eq!(s.min_order_price, Decimal::from(250));
        assert_eq!(s.delivery_charge, "40.50".parse::<Decimal>().unwrap());
        assert_eq!(s.raw.get("whatsapp").unwrap(), "+911234567890");
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let s = RestaurantSettings::from_rows(&[row("min_order_price", "lots")]);
        assert_eq!(s.min_order_price, Decimal::from(100));
    }

    #[test]
    fn open_window_is_inclusive() {
        let s = RestaurantSettings::from_rows(&[]);
        assert!(s.is_open_at("10:00"));
        assert!(s.is_open_at("15:37"));
        assert!(s.is_open_at("22:00"));
        assert!(!s.is_open_at("09:59"));
        assert!(!s.is_open_at("22:01"));
        assert!(!s.is_open_at("23:00"));
    }

    #[test]
    fn overnight_window_never_opens() {
        let s =
            RestaurantSettings::from_rows(&[row("open_time", "22:00"), row("close_time", "02:00")]);
        assert!(!s.is_open_at("23:00"));
        assert!(!s.is_open_at("01:00"));
    }

    #[test]
    fn explicit_closed_override_wins() {
        let s = RestaurantSettings::from_rows(&[row("is_open", "false")]);
        assert!(!s.is_open_at("12:00"));
    }
}
