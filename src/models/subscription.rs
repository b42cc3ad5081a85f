use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::common::RenewalType;
use crate::models::plan::Plan;

/// Lifecycle state derived from a period's dates. Never stored; recomputed
/// on every read so it stays consistent with elapsed time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubscriptionStatus {
    New,
    Active,
    ExpiringSoon,
    Expired,
}

/// One subscription term. History is append-only: a renewal or plan change
/// creates a new period via `renewed_with`, it never rewrites this one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_period_range"))]
pub struct SubscriptionPeriod {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub renewal_type: RenewalType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

fn validate_period_range(period: &SubscriptionPeriod) -> Result<(), ValidationError> {
    if let Some(end_date) = period.end_date {
        if end_date < period.start_date {
            return Err(ValidationError::new("end_before_start"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusSnapshot {
    pub status: SubscriptionStatus,
    pub days_remaining: Option<i64>,
}

impl SubscriptionPeriod {
    pub fn new(plan: &Plan, renewal_type: RenewalType, start_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            plan_id: plan.id,
            renewal_type,
            start_date,
            end_date: Some(start_date + Duration::days(plan.duration_days)),
            created_at: Utc::now(),
        }
    }

    /// Successor term created on renewal or plan change. Starts when the
    /// current term ends, or at `now` if the term has already lapsed. The
    /// current period is left untouched; callers append the returned record
    /// to the history.
    pub fn renewed_with(
        &self,
        plan: &Plan,
        renewal_type: RenewalType,
        now: DateTime<Utc>,
    ) -> Self {
        let start_date = match self.end_date {
            Some(end_date) if end_date > now => end_date,
            _ => now,
        };
        SubscriptionPeriod::new(plan, renewal_type, start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn plan(price: i64, duration_days: i64) -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: "Monthly".to_string(),
            price: Decimal::new(price, 0),
            duration_days,
        }
    }

    #[test]
    fn test_period_end_computed_from_plan() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let period = SubscriptionPeriod::new(&plan(1200, 30), RenewalType::New, start);

        assert_eq!(period.end_date, Some(start + Duration::days(30)));
        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let mut period = SubscriptionPeriod::new(&plan(1200, 30), RenewalType::New, start);
        period.end_date = Some(start - Duration::days(1));

        assert!(period.validate().is_err());
    }

    #[test]
    fn test_single_day_period_accepted() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let mut period = SubscriptionPeriod::new(&plan(1200, 30), RenewalType::New, start);
        period.end_date = Some(start);

        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_renewal_starts_when_current_term_ends() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let now = start + Duration::days(20);
        let current = SubscriptionPeriod::new(&plan(1200, 30), RenewalType::New, start);

        let next = current.renewed_with(&plan(1200, 30), RenewalType::Renewal, now);
        assert_eq!(next.start_date, current.end_date.unwrap());
        assert_eq!(next.renewal_type, RenewalType::Renewal);
    }

    #[test]
    fn test_renewal_of_lapsed_term_starts_now() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let now = start + Duration::days(45);
        let current = SubscriptionPeriod::new(&plan(1200, 30), RenewalType::New, start);

        let next = current.renewed_with(&plan(1200, 30), RenewalType::Renewal, now);
        assert_eq!(next.start_date, now);
    }
}
