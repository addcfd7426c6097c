use chrono::{DateTime, TimeZone, Utc};

use mandi_common::price::PriceBook;

pub mod harness;

/// Fixed wall-clock origin for every scenario: 26 Jan 2024, 09:10 UTC.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 26, 9, 10, 0).unwrap()
}

/// The bundled fixture; panics if it does not validate.
pub fn price_book() -> PriceBook {
    PriceBook::load().unwrap_or_else(|e| panic!("bundled fixture failed to load: {e}"))
}

/// Route `tracing` output to the test writer. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("mandi_common=debug")
        .try_init();
}
