use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::common::FeeTrack;

/// A candidate payment would push a track's paid total past its final fees.
/// Carries everything the host needs to render a field-level message; it is
/// passed through to the UI layer unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("payment of {attempted} exceeds the remaining {track} balance of {remaining_balance}")]
pub struct OverpaymentError {
    pub track: FeeTrack,
    pub attempted: Decimal,
    pub remaining_balance: Decimal,
}
