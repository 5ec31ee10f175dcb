//! Millisecond clock for remember-me expiry.
//!
//! `std::time` is unavailable on `wasm32-unknown-unknown`, so browser builds
//! read `Date.now()`; native builds defer to the system clock.

use survey_session::Clock;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "csr"))]
        {
            survey_session::SystemClock.now_ms()
        }
    }
}
