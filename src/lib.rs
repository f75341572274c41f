#![doc(test(attr(deny(warnings))))]

//! Farm Core bundles a session-scoped income/expense ledger, a notebook, and
//! static weather and crop-advice tables behind a small terminal front end.

pub mod advisory;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod notebook;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Farm Core tracing initialized.");
    });
}
