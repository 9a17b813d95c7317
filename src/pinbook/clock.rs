use chrono::{DateTime, Duration, SubsecRound, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of timestamps for `createdAt` / `updatedAt`.
///
/// Timestamps are persisted with millisecond precision, so implementations
/// should return millisecond values to keep a reload equal to what is in memory.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall clock, truncated to milliseconds and never running backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Cell<Option<DateTime<Utc>>>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now().trunc_subsecs(3);
        let now = match self.last.get() {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last.set(Some(now));
        now
    }
}

/// A clock that only moves when told to. Used by tests.
#[derive(Debug)]
pub struct ManualClock {
    current: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(start.trunc_subsecs(3)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.current.set(at.trunc_subsecs(3));
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}
