#![doc(test(attr(deny(warnings))))]

//! Cashbook Core keeps the daily books of a small food business: expense and
//! sales entry logs, a staff attendance register, and a running cash ledger
//! with chained opening/closing balances.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashbook Core tracing initialized.");
    });
}
