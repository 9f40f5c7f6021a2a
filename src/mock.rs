//! Mock time types shared by the unit tests.

use crate::time::{SteadyClock, TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct TestDuration(pub(crate) u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);
    const TICKS_PER_SECOND: u64 = 1_000;

    fn ticks(&self) -> u64 {
        self.0
    }

    fn from_ticks(ticks: u64) -> Self {
        TestDuration(ticks)
    }
}

/// Millisecond instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct TestInstant(pub(crate) u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

/// Clock that only moves when told to.
pub(crate) struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub(crate) fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    pub(crate) fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource for MockTimeSource {
    type Instant = TestInstant;

    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

impl SteadyClock for MockTimeSource {}
