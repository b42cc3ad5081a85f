use serde::{Deserialize, Serialize};
use std::env;

use crate::services::status::DEFAULT_EXPIRING_SOON_DAYS;

/// Application-level defaults for the derivation functions. The resolver
/// still takes its threshold as an explicit parameter; this only supplies
/// the value the host wires through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// How close to its end date a subscription is flagged as expiring
    /// soon, inclusive of the boundary day.
    pub expiring_soon_days: i64,
    pub currency: String,
}

impl BillingConfig {
    pub fn from_env() -> Self {
        Self {
            expiring_soon_days: env::var("EXPIRING_SOON_DAYS")
                .unwrap_or_else(|_| DEFAULT_EXPIRING_SOON_DAYS.to_string())
                .parse()
                .unwrap_or(DEFAULT_EXPIRING_SOON_DAYS),
            currency: env::var("BILLING_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            currency: "INR".to_string(),
        }
    }
}
