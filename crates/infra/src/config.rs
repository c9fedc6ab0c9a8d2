//! Runtime configuration.
//!
//! Everything is read from `SMARTSTOCK_*` environment variables. Missing values
//! use defaults silently; values that are present but unparseable use defaults
//! with a warning.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};

pub const ENV_BIND_ADDR: &str = "SMARTSTOCK_BIND_ADDR";
pub const ENV_SEED_PATH: &str = "SMARTSTOCK_SEED_PATH";
pub const ENV_ALERT_SOURCE: &str = "SMARTSTOCK_ALERT_SOURCE";
pub const ENV_TZ_OFFSET_MINUTES: &str = "SMARTSTOCK_TZ_OFFSET_MINUTES";
pub const ENV_DEV_USER: &str = "SMARTSTOCK_DEV_USER";

/// Where the alerts region gets its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertSource {
    /// The stored alerts collection, newest first.
    #[default]
    Explicit,
    /// Low-stock alerts computed from the items collection.
    Derived,
}

impl FromStr for AlertSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(Self::Explicit),
            "derived" => Ok(Self::Derived),
            other => Err(format!("unknown alert source `{other}`")),
        }
    }
}

impl fmt::Display for AlertSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::Derived => "derived",
        })
    }
}

/// Collection names, ordering and list limits used by the dashboard loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub items_collection: String,
    pub alerts_collection: String,
    pub transactions_collection: String,
    pub users_collection: String,
    pub order_field: String,
    pub alert_limit: usize,
    pub transaction_limit: usize,
    /// How many recent transactions the KPI aggregation looks at.
    pub kpi_transaction_window: usize,
    pub alert_source: AlertSource,
    /// Offset used for "today" and for rendered time labels.
    pub utc_offset: FixedOffset,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            items_collection: "items".to_string(),
            alerts_collection: "alerts".to_string(),
            transactions_collection: "transactions".to_string(),
            users_collection: "users".to_string(),
            order_field: "createdAt".to_string(),
            alert_limit: 8,
            transaction_limit: 8,
            kpi_transaction_window: 100,
            alert_source: AlertSource::Explicit,
            utc_offset: utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    /// Uid of a user to start the in-memory session signed in as (dev only).
    pub dev_user: Option<String>,
    pub dashboard: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_path: None,
            dev_user: None,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = parsed(&lookup, ENV_BIND_ADDR) {
            config.bind_addr = addr;
        }

        config.seed_path = non_blank(&lookup, ENV_SEED_PATH).map(PathBuf::from);
        config.dev_user = non_blank(&lookup, ENV_DEV_USER);

        if let Some(source) = parsed(&lookup, ENV_ALERT_SOURCE) {
            config.dashboard.alert_source = source;
        }

        if let Some(minutes) = parsed::<i32, _>(&lookup, ENV_TZ_OFFSET_MINUTES) {
            match minutes.checked_mul(60).and_then(FixedOffset::east_opt) {
                Some(offset) => config.dashboard.utc_offset = offset,
                None => tracing::warn!(
                    key = ENV_TZ_OFFSET_MINUTES,
                    minutes,
                    "offset out of range; using UTC"
                ),
            }
        }

        config
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = raw, error = %e, "invalid config value; using default");
            None
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn utc() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.dashboard.alert_limit, 8);
        assert_eq!(config.dashboard.transaction_limit, 8);
        assert_eq!(config.dashboard.kpi_transaction_window, 100);
        assert_eq!(config.dashboard.order_field, "createdAt");
        assert_eq!(config.dashboard.alert_source, AlertSource::Explicit);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:3000"),
            (ENV_SEED_PATH, "seed/demo.json"),
            (ENV_ALERT_SOURCE, "Derived"),
            (ENV_TZ_OFFSET_MINUTES, "-300"),
            (ENV_DEV_USER, " dev-uid "),
        ]));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.seed_path, Some(PathBuf::from("seed/demo.json")));
        assert_eq!(config.dashboard.alert_source, AlertSource::Derived);
        assert_eq!(config.dashboard.utc_offset.local_minus_utc(), -300 * 60);
        assert_eq!(config.dev_user.as_deref(), Some("dev-uid"));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "not an address"),
            (ENV_SEED_PATH, "   "),
            (ENV_DEV_USER, ""),
            (ENV_ALERT_SOURCE, "both"),
            (ENV_TZ_OFFSET_MINUTES, "100000"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn alert_source_round_trips_through_display() {
        for source in [AlertSource::Explicit, AlertSource::Derived] {
            assert_eq!(source.to_string().parse::<AlertSource>(), Ok(source));
        }
    }
}
