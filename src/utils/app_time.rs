// src/utils/app_time.rs
//
// std::time::Instant panics on wasm32-unknown-unknown, so the browser build
// swaps in web_time's drop-in replacement.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Time left until `deadline`, or `None` once it has passed.
pub fn remaining(deadline: AppInstant, now: AppInstant) -> Option<Duration> {
    deadline
        .checked_duration_since(now)
        .filter(|left| !left.is_zero())
}
