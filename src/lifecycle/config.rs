//! Restaurant sizing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lifecycle::RestaurantError;

pub const CAPACITY_VAR: &str = "BOWL_CAPACITY";
pub const CUSTOMERS_VAR: &str = "BOWL_CUSTOMERS";
pub const COOKS_VAR: &str = "BOWL_COOKS";
pub const ORDERS_PER_CUSTOMER_VAR: &str = "BOWL_ORDERS_PER_CUSTOMER";

/// Upper bound on customers plus cooks.
///
/// Every customer and cook occupies a thread of Tokio's blocking pool, whose
/// default size is 512. A customer blocked on a full queue never gives its
/// thread back, so cooks queued behind it would never start.
pub const MAX_WORKERS: u32 = 512;

/// How big the restaurant is and how much work it will see.
///
/// Fields missing from a deserialized config fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    /// Maximum number of orders waiting at once.
    pub capacity: usize,
    pub customers: u32,
    pub cooks: u32,
    pub orders_per_customer: u32,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            customers: 90,
            cooks: 10,
            orders_per_customer: 3,
        }
    }
}

impl RestaurantConfig {
    /// Default config with every field overridable through `BOWL_*` environment variables.
    pub fn from_env() -> Result<Self, RestaurantError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default config with overrides taken from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RestaurantError> {
        let mut config = Self::default();
        override_field(&mut config.capacity, CAPACITY_VAR, &lookup)?;
        override_field(&mut config.customers, CUSTOMERS_VAR, &lookup)?;
        override_field(&mut config.cooks, COOKS_VAR, &lookup)?;
        override_field(&mut config.orders_per_customer, ORDERS_PER_CUSTOMER_VAR, &lookup)?;
        Ok(config)
    }

    /// Total number of orders every customer together will place.
    pub fn expected_total(&self) -> u64 {
        u64::from(self.customers) * u64::from(self.orders_per_customer)
    }

    pub fn validate(&self) -> Result<(), RestaurantError> {
        if self.capacity == 0 {
            return Err(RestaurantError::InvalidConfig("capacity must be greater than zero".into()));
        }
        if self.cooks == 0 && self.expected_total() > 0 {
            return Err(RestaurantError::InvalidConfig(format!(
                "{} orders expected but no cooks to fulfill them",
                self.expected_total()
            )));
        }
        let workers = u64::from(self.customers) + u64::from(self.cooks);
        if workers > u64::from(MAX_WORKERS) {
            return Err(RestaurantError::InvalidConfig(format!(
                "{workers} customers and cooks exceed the limit of {MAX_WORKERS}"
            )));
        }
        Ok(())
    }
}

fn override_field<T: FromStr>(
    field: &mut T,
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<(), RestaurantError>
where
    T::Err: std::fmt::Display,
{
    if let Some(raw) = lookup(key) {
        *field = raw
            .trim()
            .parse()
            .map_err(|e| RestaurantError::InvalidConfig(format!("{key}={raw:?}: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_classic_sizing() {
        let config = RestaurantConfig::default();
        assert_eq!(config.expected_total(), 270);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_fields() {
        let vars = HashMap::from([(COOKS_VAR, "2"), (CAPACITY_VAR, " 5 ")]);
        let config = RestaurantConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.cooks, 2);
        assert_eq!(config.capacity, 5);
        assert_eq!(config.customers, 90);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let result = RestaurantConfig::from_lookup(|key| (key == CUSTOMERS_VAR).then(|| "many".to_string()));
        assert!(matches!(result, Err(RestaurantError::InvalidConfig(msg)) if msg.contains(CUSTOMERS_VAR)));
    }

    #[test]
    fn test_validate_rejects_unfinishable_configs() {
        let zero_capacity = RestaurantConfig { capacity: 0, ..Default::default() };
        assert!(zero_capacity.validate().is_err());

        let no_cooks = RestaurantConfig { cooks: 0, ..Default::default() };
        assert!(no_cooks.validate().is_err());

        let crowded = RestaurantConfig { customers: MAX_WORKERS, ..Default::default() };
        assert!(crowded.validate().is_err());

        let idle = RestaurantConfig { cooks: 0, customers: 0, ..Default::default() };
        assert!(idle.validate().is_ok());
    }
}
