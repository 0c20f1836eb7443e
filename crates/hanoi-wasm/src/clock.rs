//! Wall clock for the browser

use hanoi_core::{Clock, Timestamp};

/// Reads `Date.now()`; `std::time` is unavailable on `wasm32-unknown-unknown`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> Timestamp {
        js_sys::Date::now() as Timestamp
    }
}
