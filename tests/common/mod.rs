//! Shared test infrastructure for steady-timers integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::time::Duration;
use std::sync::atomic::{AtomicU64, Ordering};

use steady_timers::{SteadyClock, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

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

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement.
///
/// Backed by an atomic so the same clock can drive timers shared across threads.
pub struct MockTimeSource {
    current_time: AtomicU64,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: AtomicU64::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        self.current_time.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeSource for MockTimeSource {
    type Instant = TestInstant;

    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.load(Ordering::SeqCst))
    }
}

impl SteadyClock for MockTimeSource {}

/// Clock that moves forward one millisecond on every read.
///
/// Any two reads return different instants, so a result that depends on
/// reading the clock more than once shows up as a mismatch.
pub struct TickingClock {
    current_time: AtomicU64,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            current_time: AtomicU64::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> u64 {
        self.current_time.load(Ordering::SeqCst)
    }
}

impl TimeSource for TickingClock {
    type Instant = TestInstant;

    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.fetch_add(1, Ordering::SeqCst))
    }
}

impl SteadyClock for TickingClock {}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Allowed scheduling slack when sleeping on the real clock
pub const TOLERANCE: Duration = Duration::from_millis(75);

/// Assert `actual` lies within `[expected, expected + TOLERANCE]`.
///
/// `thread::sleep` never returns early, so readings are only ever late.
pub fn assert_near(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual <= expected + TOLERANCE,
        "expected {:?} within {:?} of {:?}",
        actual,
        TOLERANCE,
        expected
    );
}
