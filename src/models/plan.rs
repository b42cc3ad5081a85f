use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Immutable plan reference data, looked up by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub duration_days: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 2, max = 100, message = "Plan name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(custom = "crate::models::common::validate_non_negative_amount")]
    pub price: Decimal,

    #[validate(range(min = 1, message = "Plan duration must be at least one day"))]
    pub duration_days: i64,
}

impl Plan {
    pub fn new(request: CreatePlanRequest) -> Result<Self, ValidationErrors> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name,
            price: request.price,
            duration_days: request.duration_days,
        })
    }

    /// Normalized per-day cost, used to compare plans of different lengths.
    /// `duration_days` is at least one, enforced at construction.
    pub fn daily_rate(&self) -> Decimal {
        self.price / Decimal::new(self.duration_days, 0)
    }
}
