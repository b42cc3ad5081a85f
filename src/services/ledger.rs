use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::OverpaymentError;
use crate::models::common::FeeTrack;
use crate::models::payment::{FeeTotal, PaymentRecord};

/// Paid/pending rollup for one track, for summary cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackBalance {
    pub track: FeeTrack,
    pub final_fees: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
}

/// Combined rollup across both tracks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LedgerSummary {
    pub total_fees: Decimal,
    pub total_paid: Decimal,
    pub total_pending: Decimal,
}

pub fn sum_by_track(payments: &[PaymentRecord], track: FeeTrack) -> Decimal {
    payments
        .iter()
        .filter(|payment| payment.effective_track() == track)
        .map(|payment| payment.amount)
        .sum()
}

/// Entries for the same track accumulate; a track with no entry owes
/// nothing.
pub fn final_fees_for_track(fee_totals: &[FeeTotal], track: FeeTrack) -> Decimal {
    fee_totals
        .iter()
        .filter(|fee| fee.track == track)
        .map(|fee| fee.final_fees)
        .sum()
}

/// Signed: negative means the track is overpaid. Clamping for display is
/// the host's call.
pub fn pending_for_track(
    fee_totals: &[FeeTotal],
    payments: &[PaymentRecord],
    track: FeeTrack,
) -> Decimal {
    final_fees_for_track(fee_totals, track) - sum_by_track(payments, track)
}

/// Guard for payment entry and edits: the candidate amount must fit within
/// the track's remaining balance. When editing an existing payment, pass its
/// id as `excluding_payment_id` so its prior amount is not counted against
/// the new one.
pub fn validate_payment(
    candidate_amount: Decimal,
    track: FeeTrack,
    fee_totals: &[FeeTotal],
    existing_payments: &[PaymentRecord],
    excluding_payment_id: Option<Uuid>,
) -> Result<(), OverpaymentError> {
    let already_paid: Decimal = existing_payments
        .iter()
        .filter(|payment| Some(payment.id) != excluding_payment_id)
        .filter(|payment| payment.effective_track() == track)
        .map(|payment| payment.amount)
        .sum();

    let remaining_balance = final_fees_for_track(fee_totals, track) - already_paid;
    if candidate_amount > remaining_balance {
        warn!(
            "rejecting payment of {} on {} track, only {} remaining",
            candidate_amount, track, remaining_balance
        );
        return Err(OverpaymentError {
            track,
            attempted: candidate_amount,
            remaining_balance,
        });
    }

    Ok(())
}

pub fn track_balance(
    fee_totals: &[FeeTotal],
    payments: &[PaymentRecord],
    track: FeeTrack,
) -> TrackBalance {
    let final_fees = final_fees_for_track(fee_totals, track);
    let paid = sum_by_track(payments, track);
    TrackBalance {
        track,
        final_fees,
        paid,
        pending: final_fees - paid,
    }
}

pub fn total_across_tracks(fee_totals: &[FeeTotal], payments: &[PaymentRecord]) -> LedgerSummary {
    let total_fees: Decimal = fee_totals.iter().map(|fee| fee.final_fees).sum();
    let total_paid: Decimal = payments.iter().map(|payment| payment.amount).sum();
    LedgerSummary {
        total_fees,
        total_paid,
        total_pending: total_fees - total_paid,
    }
}
