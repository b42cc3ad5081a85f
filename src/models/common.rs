use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Ledger a fee or payment belongs to. A member can carry both at once:
/// the regular membership and a personal-training add-on settle separately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeeTrack {
    Regular,
    Pt,
}

impl std::fmt::Display for FeeTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeTrack::Regular => write!(f, "REGULAR"),
            FeeTrack::Pt => write!(f, "PT"),
        }
    }
}

/// How a subscription period came to exist relative to its predecessor.
/// Assigned by the caller when the period is created, never derived here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenewalType {
    New,
    Renewal,
    Upgrade,
    Downgrade,
}

impl std::fmt::Display for RenewalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewalType::New => write!(f, "new"),
            RenewalType::Renewal => write!(f, "renewal"),
            RenewalType::Upgrade => write!(f, "upgrade"),
            RenewalType::Downgrade => write!(f, "downgrade"),
        }
    }
}

/// Display-only tenure label: has this subject ever held a period before.
/// Deliberately not the same enum as `RenewalType`, which also distinguishes
/// plan changes for accounting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubscriptionKind {
    New,
    Renewed,
}

impl std::fmt::Display for SubscriptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionKind::New => write!(f, "new"),
            SubscriptionKind::Renewed => write!(f, "renewed"),
        }
    }
}

pub(crate) fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}
