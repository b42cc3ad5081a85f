use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::models::common::FeeTrack;

/// Append-only ledger entry. Never mutated after creation; an edit replaces
/// the record wholesale, which is why `services::ledger::validate_payment`
/// takes an exclusion id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    /// Older records carry no track tag; they settle against REGULAR.
    #[serde(default)]
    pub track: Option<FeeTrack>,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    pub track: Option<FeeTrack>,

    #[validate(custom = "crate::models::common::validate_non_negative_amount")]
    pub amount: Decimal,

    pub metadata: Option<serde_json::Value>,
}

impl PaymentRecord {
    pub fn new(request: RecordPaymentRequest) -> Result<Self, ValidationErrors> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            track: request.track,
            amount: request.amount,
            paid_at: Utc::now(),
            metadata: request.metadata,
        })
    }

    pub fn effective_track(&self) -> FeeTrack {
        self.track.unwrap_or(FeeTrack::Regular)
    }
}

/// Contractually owed total for one track, fixed at purchase/renewal time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeTotal {
    pub track: FeeTrack,
    pub final_fees: Decimal,
}

impl FeeTotal {
    /// Plan price less the discount agreed at signup, floored at zero.
    pub fn from_plan(track: FeeTrack, plan_price: Decimal, discount: Decimal) -> Self {
        Self {
            track,
            final_fees: (plan_price - discount).max(Decimal::ZERO),
        }
    }
}
