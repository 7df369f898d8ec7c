//! Clock used for every stored timestamp.
//!
//! With the `mock-time` feature the clock stands still until a test moves it,
//! which makes `created_at`/`updated_at` assertions deterministic.

use jiff::Timestamp;
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct TimeSource {
    #[cfg(feature = "mock-time")]
    frozen: Arc<Mutex<Timestamp>>,
}

#[cfg(not(feature = "mock-time"))]
impl TimeSource {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(feature = "mock-time")]
impl TimeSource {
    pub fn new(start: Timestamp) -> Self {
        Self {
            frozen: Arc::new(Mutex::new(start)),
        }
    }

    fn clock(&self) -> std::sync::MutexGuard<'_, Timestamp> {
        // a poisoned lock still holds a valid timestamp
        self.frozen.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn now(&self) -> Timestamp {
        *self.clock()
    }

    pub fn advance(&self, span: jiff::Span) {
        let mut clock = self.clock();
        *clock = *clock + span;
    }

    pub fn set(&self, time: Timestamp) {
        *self.clock() = time;
    }
}
