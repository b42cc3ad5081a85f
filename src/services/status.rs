use chrono::{DateTime, Utc};

use crate::models::common::SubscriptionKind;
use crate::models::subscription::{StatusSnapshot, SubscriptionPeriod, SubscriptionStatus};

/// Default window for flagging an upcoming expiry, in days.
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 7;

/// Derives the lifecycle state of the given period at `now`.
///
/// Comparisons are date-only, so a period ending later today reports zero
/// days remaining rather than going negative partway through the day, and
/// still counts as expiring soon. A period that has already lapsed reports
/// `Some(0)`, not the elapsed count. Callers resolving a whole table should
/// pass a single `now` snapshot so rows stay consistent within one render.
pub fn resolve_status(
    period: Option<&SubscriptionPeriod>,
    now: DateTime<Utc>,
    expiring_soon_days: i64,
) -> StatusSnapshot {
    let end_date = match period.and_then(|p| p.end_date) {
        Some(end_date) => end_date,
        None => {
            return StatusSnapshot {
                status: SubscriptionStatus::New,
                days_remaining: None,
            }
        }
    };

    let days_remaining = (end_date.date_naive() - now.date_naive()).num_days();

    if days_remaining < 0 {
        return StatusSnapshot {
            status: SubscriptionStatus::Expired,
            days_remaining: Some(0),
        };
    }

    let status = if days_remaining <= expiring_soon_days {
        SubscriptionStatus::ExpiringSoon
    } else {
        SubscriptionStatus::Active
    };

    StatusSnapshot {
        status,
        days_remaining: Some(days_remaining),
    }
}

/// Display-only tenure label; not the accounting `RenewalType`.
pub fn classify_subscription(has_prior_period: bool) -> SubscriptionKind {
    if has_prior_period {
        SubscriptionKind::Renewed
    } else {
        SubscriptionKind::New
    }
}

/// Most recent term in an append-only history.
pub fn latest_period(periods: &[SubscriptionPeriod]) -> Option<&SubscriptionPeriod> {
    periods.iter().max_by_key(|period| period.start_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    use crate::models::common::RenewalType;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn period_ending(end_date: Option<DateTime<Utc>>) -> SubscriptionPeriod {
        SubscriptionPeriod {
            id: Uuid::new_v4(),
            plan_id: Uuid::new_v4(),
            renewal_type: RenewalType::New,
            start_date: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
            end_date,
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_no_period_is_new() {
        let snapshot = resolve_status(None, fixed_now(), DEFAULT_EXPIRING_SOON_DAYS);
        assert_eq!(snapshot.status, SubscriptionStatus::New);
        assert_eq!(snapshot.days_remaining, None);
    }

    #[test]
    fn test_open_ended_period_is_new() {
        let period = period_ending(None);
        let snapshot = resolve_status(Some(&period), fixed_now(), DEFAULT_EXPIRING_SOON_DAYS);
        assert_eq!(snapshot.status, SubscriptionStatus::New);
        assert_eq!(snapshot.days_remaining, None);
    }

    #[test]
    fn test_ending_today_is_expiring_soon_not_expired() {
        let period = period_ending(Some(fixed_now()));
        let snapshot = resolve_status(Some(&period), fixed_now(), DEFAULT_EXPIRING_SOON_DAYS);
        assert_eq!(snapshot.status, SubscriptionStatus::ExpiringSoon);
        assert_eq!(snapshot.days_remaining, Some(0));
    }

    #[test]
    fn test_ending_earlier_today_still_counts_as_today() {
        // 00:30 end observed at 23:00 the same day: date-only comparison
        // keeps it out of Expired.
        let end = Utc.with_ymd_and_hms(2026, 3, 10, 0, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 23, 0, 0).unwrap();
        let period = period_ending(Some(end));

        let snapshot = resolve_status(Some(&period), now, DEFAULT_EXPIRING_SOON_DAYS);
        assert_eq!(snapshot.status, SubscriptionStatus::ExpiringSoon);
        assert_eq!(snapshot.days_remaining, Some(0));
    }

    #[test]
    fn test_threshold_boundary() {
        let at_threshold = period_ending(Some(fixed_now() + Duration::days(7)));
        let snapshot = resolve_status(Some(&at_threshold), fixed_now(), 7);
        assert_eq!(snapshot.status, SubscriptionStatus::ExpiringSoon);
        assert_eq!(snapshot.days_remaining, Some(7));

        let past_threshold = period_ending(Some(fixed_now() + Duration::days(8)));
        let snapshot = resolve_status(Some(&past_threshold), fixed_now(), 7);
        assert_eq!(snapshot.status, SubscriptionStatus::Active);
        assert_eq!(snapshot.days_remaining, Some(8));
    }

    #[test]
    fn test_day_old_expiry_is_expired() {
        let period = period_ending(Some(fixed_now() - Duration::days(1)));
        let snapshot = resolve_status(Some(&period), fixed_now(), DEFAULT_EXPIRING_SOON_DAYS);
        assert_eq!(snapshot.status, SubscriptionStatus::Expired);
        assert_eq!(snapshot.days_remaining, Some(0));
    }

    #[test]
    fn test_classify_subscription() {
        assert_eq!(classify_subscription(false), SubscriptionKind::New);
        assert_eq!(classify_subscription(true), SubscriptionKind::Renewed);
    }

    #[test]
    fn test_latest_period_from_unordered_history() {
        let oldest = period_ending(Some(fixed_now() - Duration::days(60)));
        let mut middle = period_ending(Some(fixed_now() - Duration::days(30)));
        middle.start_date = oldest.start_date + Duration::days(30);
        let mut newest = period_ending(Some(fixed_now() + Duration::days(10)));
        newest.start_date = oldest.start_date + Duration::days(60);

        let history = vec![middle, newest.clone(), oldest];
        assert_eq!(latest_period(&history).unwrap().id, newest.id);
        assert!(latest_period(&[]).is_none());
    }
}
