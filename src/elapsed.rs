//! Always-running elapsed timer.
//!
//! Provides [`ElapsedTimer`], which reports the time passed since it was created
//! or last restarted. It cannot be stopped; see
//! [`StopwatchTimer`](crate::stopwatch::StopwatchTimer) for start/stop control.

use core::cmp::Ordering;

use crate::sync::GuardedCell;
use crate::time::{ClockDuration, ClockInstant, SteadyClock, TimeInstant};
use crate::units::FromTimeDuration;

/// Measures time since construction or the last [`restart`](Self::restart).
///
/// All methods take `&self`; the start reference is stored behind a guard so
/// a timer shared between threads never reports a torn instant.
///
/// Comparing two timers reads the clock once and evaluates both timers at that
/// instant, so a timer created after another always compares less while both
/// are running.
///
/// # Type Parameters
/// * `C` - Steady clock the timer reads
pub struct ElapsedTimer<C: SteadyClock> {
    clock: C,
    start_reference: GuardedCell<ClockInstant<C>>,
}

impl<C: SteadyClock> ElapsedTimer<C> {
    /// Creates a timer whose time zero is the clock's current reading.
    pub fn new(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            start_reference: GuardedCell::new(now),
        }
    }

    /// Always `true`.
    #[inline]
    pub const fn is_running(&self) -> bool {
        true
    }

    /// Moves time zero to the clock's current reading.
    pub fn restart(&self) {
        self.start_reference.set(self.clock.now());
    }

    /// Returns the time elapsed since time zero, in the clock's native unit.
    pub fn value(&self) -> ClockDuration<C> {
        self.value_at(self.clock.now())
    }

    /// Returns the elapsed time converted into `T`.
    ///
    /// ```
    /// use steady_timers::{ElapsedTimer, Millis, StdClock};
    ///
    /// let timer = ElapsedTimer::new(StdClock);
    /// let millis: Millis = timer.value_as();
    /// let seconds: f64 = timer.value_as();
    /// assert!(millis.0 < 60_000);
    /// assert!(seconds < 60.0);
    /// ```
    pub fn value_as<T: FromTimeDuration>(&self) -> T {
        T::from_duration(self.value())
    }

    /// Returns the elapsed time as of `now`.
    ///
    /// Yields zero if `now` precedes the start reference.
    pub fn value_at(&self, now: ClockInstant<C>) -> ClockDuration<C> {
        now.duration_since(self.start_reference.get())
    }

    /// Returns the instant currently treated as time zero.
    pub fn start_reference(&self) -> ClockInstant<C> {
        self.start_reference.get()
    }

    /// Copies `source`'s start reference into this timer.
    pub fn assign_from(&self, source: &Self) {
        let start = source.start_reference.get();
        self.start_reference.set(start);
    }

    /// Returns the clock driving this timer.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: SteadyClock + Default> Default for ElapsedTimer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: SteadyClock + Clone> Clone for ElapsedTimer<C> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            start_reference: GuardedCell::new(self.start_reference.get()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clock.clone_from(&source.clock);
        self.assign_from(source);
    }
}

impl<C: SteadyClock> PartialEq for ElapsedTimer<C> {
    fn eq(&self, other: &Self) -> bool {
        let now = self.clock.now();
        self.value_at(now) == other.value_at(now)
    }
}

impl<C: SteadyClock> PartialOrd for ElapsedTimer<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let now = self.clock.now();
        self.value_at(now).partial_cmp(&other.value_at(now))
    }
}

impl<C> core::fmt::Debug for ElapsedTimer<C>
where
    C: SteadyClock,
    ClockDuration<C>: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElapsedTimer")
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockTimeSource, TestDuration, TestInstant};
    extern crate std;
    use std::format;

    #[test]
    fn value_tracks_clock_since_construction() {
        let clock = MockTimeSource::new();
        clock.advance(100);
        let timer = ElapsedTimer::new(&clock);
        assert!(timer.is_running());
        assert_eq!(timer.value(), TestDuration(0));

        clock.advance(250);
        assert_eq!(timer.value(), TestDuration(250));
        assert_eq!(timer.start_reference(), TestInstant(100));
    }

    #[test]
    fn restart_moves_time_zero() {
        let clock = MockTimeSource::new();
        let timer = ElapsedTimer::new(&clock);
        clock.advance(500);
        timer.restart();
        assert_eq!(timer.value(), TestDuration(0));

        clock.advance(40);
        assert_eq!(timer.value(), TestDuration(40));
    }

    #[test]
    fn value_at_earlier_instant_saturates_to_zero() {
        let clock = MockTimeSource::new();
        clock.advance(10);
        let timer = ElapsedTimer::new(&clock);
        assert_eq!(timer.value_at(TestInstant(3)), TestDuration(0));
        assert_eq!(timer.value_at(TestInstant(25)), TestDuration(15));
    }

    #[test]
    fn value_as_converts_from_clock_ticks() {
        let clock = MockTimeSource::new();
        let timer = ElapsedTimer::new(&clock);
        clock.advance(1_750);
        let seconds: f64 = timer.value_as();
        assert_eq!(seconds, 1.75);
        assert_eq!(timer.value_as::<crate::units::Seconds>().0, 1);
        assert_eq!(
            timer.value_as::<core::time::Duration>(),
            core::time::Duration::from_millis(1_750)
        );
    }

    #[test]
    fn comparison_evaluates_both_timers_at_one_instant() {
        let clock = MockTimeSource::new();
        let older = ElapsedTimer::new(&clock);
        clock.advance(5);
        let newer = ElapsedTimer::new(&clock);

        assert!(older > newer);
        assert!(newer < older);
        assert!(older >= newer);
        assert!(older != newer);

        newer.assign_from(&older);
        assert!(older == newer);
        assert!(older <= newer);
    }

    #[test]
    fn clone_is_independent_of_source() {
        let clock = MockTimeSource::new();
        let timer = ElapsedTimer::new(&clock);
        clock.advance(30);
        let copy = timer.clone();
        timer.restart();
        clock.advance(20);

        assert_eq!(timer.value(), TestDuration(20));
        assert_eq!(copy.value(), TestDuration(50));
    }

    #[test]
    fn clone_from_takes_source_start_reference() {
        let clock = MockTimeSource::new();
        let source = ElapsedTimer::new(&clock);
        clock.advance(70);
        let mut target = ElapsedTimer::new(&clock);
        target.clone_from(&source);
        assert_eq!(target.value(), TestDuration(70));
    }

    #[test]
    fn debug_output_shows_current_value() {
        let clock = MockTimeSource::new();
        let timer = ElapsedTimer::new(&clock);
        clock.advance(12);
        assert_eq!(
            format!("{:?}", timer),
            "ElapsedTimer { value: TestDuration(12), .. }"
        );
    }
}
