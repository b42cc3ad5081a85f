//! Status and ledger derivations for a gym-management console: subscription
//! lifecycle status, plan-change proration, and per-track payment balances.
//! Everything here is pure synchronous computation over records the host
//! application has already fetched; persistence and transport stay host-side.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::BillingConfig;
pub use error::OverpaymentError;
