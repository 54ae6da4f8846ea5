#![doc(test(attr(deny(warnings))))]

//! Tracker Core is the ledger, budgeting, and gamification engine behind a
//! local-first personal finance tracker: it turns an append-only
//! transaction log into streaks, badges, points, avatar unlocks, and
//! budget-consumption views.

pub mod advisor;
pub mod errors;
pub mod gamification;
pub mod ledger;
pub mod manager;
pub mod profile;
pub mod reports;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
