use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::plan::Plan;

/// Quote for changing plans mid-term, shown to the operator before the
/// change is submitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanChangeQuote {
    pub days_remaining: i64,
    pub current_plan_price: Decimal,
    pub new_plan_price: Decimal,
    /// Unsigned magnitude in whole currency units; `is_upgrade` carries the
    /// direction. Hosts render it prefixed with `+` or `-`.
    pub difference: Decimal,
    pub is_upgrade: bool,
}

/// Daily-rate proration for a mid-term plan change.
///
/// Returns `None` when there is no prior paid plan or nothing remains of
/// the current term; the host treats those cases as a fresh purchase. Plans
/// are guaranteed a positive `duration_days` at construction, so the daily
/// rates are always defined.
pub fn compute_proration(
    current_plan: Option<&Plan>,
    new_plan: &Plan,
    days_remaining: i64,
) -> Option<PlanChangeQuote> {
    let current_plan = current_plan?;
    if days_remaining <= 0 {
        return None;
    }

    let current_daily_rate = current_plan.daily_rate();
    let new_daily_rate = new_plan.daily_rate();

    let difference = ((new_daily_rate - current_daily_rate) * Decimal::new(days_remaining, 0))
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Some(PlanChangeQuote {
        days_remaining,
        current_plan_price: current_plan.price,
        new_plan_price: new_plan.price,
        difference,
        is_upgrade: new_daily_rate > current_daily_rate,
    })
}
