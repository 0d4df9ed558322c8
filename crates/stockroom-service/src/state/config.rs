//! # Configuration State
//!
//! Store settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (`StoreConfig::default()`)
//!
//! Bad values never abort startup: they are logged with `warn!` and the
//! default is kept.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use stockroom_core::{IdPolicy, Store, StoreConfig};
use tracing::{debug, warn};

use super::StoreState;

pub const ENV_ID_POLICY: &str = "STOCKROOM_ID_POLICY";
pub const ENV_CURRENCY_SYMBOL: &str = "STOCKROOM_CURRENCY_SYMBOL";
pub const ENV_TOP_N: &str = "STOCKROOM_TOP_N";

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// How product ids are assigned. Default: auto-increment
    pub id_policy: IdPolicy,

    /// Currency symbol for receipt text. Default: "$"
    pub currency_symbol: String,

    /// Best sellers reported when the caller gives no count. Default: 3
    pub default_top_n: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState::from(StoreConfig::default())
    }
}

impl From<StoreConfig> for ConfigState {
    fn from(config: StoreConfig) -> Self {
        ConfigState {
            id_policy: config.id_policy,
            currency_symbol: config.currency_symbol,
            default_top_n: config.default_top_n,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_ID_POLICY`: `auto` or `explicit`
    /// - `STOCKROOM_CURRENCY_SYMBOL`: e.g. `₱`
    /// - `STOCKROOM_TOP_N`: positive integer
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup(ENV_ID_POLICY) {
            match raw.parse::<IdPolicy>() {
                Ok(policy) => config.id_policy = policy,
                Err(err) => warn!(key = ENV_ID_POLICY, value = %raw, error = %err, "Ignoring id policy"),
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = raw.trim();
            if symbol.is_empty() {
                warn!(key = ENV_CURRENCY_SYMBOL, "Ignoring empty currency symbol");
            } else {
                config.currency_symbol = symbol.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_TOP_N) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.default_top_n = n,
                _ => warn!(key = ENV_TOP_N, value = %raw, "Ignoring top-n, expected a positive integer"),
            }
        }

        debug!(
            id_policy = %config.id_policy,
            currency_symbol = %config.currency_symbol,
            default_top_n = config.default_top_n,
            "Configuration loaded"
        );
        config
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            id_policy: self.id_policy,
            currency_symbol: self.currency_symbol.clone(),
            default_top_n: self.default_top_n,
        }
    }

    /// Builds an empty shared store with this configuration.
    pub fn into_store_state(self) -> StoreState {
        StoreState::new(Store::new(self.store_config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.id_policy, IdPolicy::AutoIncrement);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_top_n, 3);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_ID_POLICY, "explicit"),
            (ENV_CURRENCY_SYMBOL, " ₱ "),
            (ENV_TOP_N, "5"),
        ]));
        assert_eq!(config.id_policy, IdPolicy::ExplicitRequired);
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.default_top_n, 5);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_ID_POLICY, "sometimes"),
            (ENV_CURRENCY_SYMBOL, "   "),
            (ENV_TOP_N, "0"),
        ]));
        assert_eq!(config, ConfigState::default());

        let config = ConfigState::from_lookup(lookup_from(&[(ENV_TOP_N, "three")]));
        assert_eq!(config.default_top_n, 3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["idPolicy"], "auto_increment");
        assert_eq!(json["currencySymbol"], "$");
        assert_eq!(json["defaultTopN"], 3);
    }

    #[test]
    fn test_store_state_uses_config() {
        let state = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        }
        .into_store_state();
        let symbol = state.with_store(|store| store.config().currency_symbol.clone());
        assert_eq!(symbol, "€");
    }
}
