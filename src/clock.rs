//! Time source for issuing and validating tokens
//!
//! Signing stamps `iat`/`exp` and verification compares against "now". Both
//! read the time through a [`Clock`] so that the core stays deterministic under
//! test.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time in whole seconds
pub trait Clock {
    /// Current Unix timestamp in seconds
    fn now(&self) -> i64;
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Clock frozen at a given Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now(&self) -> i64 {
        self()
    }
}
