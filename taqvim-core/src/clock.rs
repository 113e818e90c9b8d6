//! Injected time source.
//!
//! The engine never reads system time directly; hosts pass a `Clock` so that
//! "today" and draft defaults stay deterministic under test.

use chrono::{Local, NaiveDateTime};

/// Supplies the current moment as an already-normalized local timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time from the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed moment, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
